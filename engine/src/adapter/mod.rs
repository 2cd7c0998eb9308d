//! Theme renderers and the registry that holds them.
//!
//! Each [`Adapter`] turns a finalized [`PaletteModel`] into the bytes of one
//! application's native theme file. Adapters are looked up by name through
//! an [`AdapterRegistry`]; the process-wide instance returned by
//! [`registry`] holds every built-in adapter and never changes after it is
//! first read.

pub mod bat;
pub mod delta;
pub mod eza;
pub mod fzf;
pub mod ghostty;
pub mod template;

use crate::error::{ThemerError, ThemerResult};
use crate::palette::PaletteModel;
use once_cell::sync::Lazy;

/// A renderer for one application's theme format.
pub trait Adapter: Send + Sync {
    /// Unique identifier, also the key for per-adapter overrides
    fn name(&self) -> &'static str;

    /// Subdirectory of the output directory the file is written to
    fn dir_name(&self) -> &'static str;

    /// Output file name for the given theme
    fn file_name(&self, theme_name: &str) -> String;

    /// Render the theme file. Output must be byte-identical for equal input.
    fn generate(&self, model: &PaletteModel) -> ThemerResult<Vec<u8>>;
}

/// Ordered collection of adapters with unique names.
#[derive(Default)]
pub struct AdapterRegistry {
    adapters: Vec<Box<dyn Adapter>>,
}

impl AdapterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding ghostty, bat, delta, fzf and eza, in that order.
    pub fn with_builtin_adapters() -> ThemerResult<Self> {
        let mut registry = Self::new();
        registry.register(Box::new(ghostty::GhosttyAdapter))?;
        registry.register(Box::new(bat::BatAdapter))?;
        registry.register(Box::new(delta::DeltaAdapter))?;
        registry.register(Box::new(fzf::FzfAdapter))?;
        registry.register(Box::new(eza::EzaAdapter))?;
        Ok(registry)
    }

    /// Append an adapter. A second adapter with the same name is rejected.
    pub fn register(&mut self, adapter: Box<dyn Adapter>) -> ThemerResult<()> {
        if self.get(adapter.name()).is_some() {
            return Err(ThemerError::Programmer(format!(
                "adapter \"{}\" registered twice",
                adapter.name()
            )));
        }
        log::trace!("Registered adapter {}", adapter.name());
        self.adapters.push(adapter);
        Ok(())
    }

    /// Every adapter in registration order.
    pub fn all(&self) -> impl Iterator<Item = &dyn Adapter> {
        self.adapters.iter().map(|adapter| &**adapter)
    }

    pub fn get(&self, name: &str) -> Option<&dyn Adapter> {
        self.all().find(|adapter| adapter.name() == name)
    }

    /// Adapters whose names appear in `names`, in registration order.
    /// An empty slice selects every adapter; unknown names match nothing.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Vec<&dyn Adapter> {
        if names.is_empty() {
            return self.all().collect();
        }
        self.all()
            .filter(|adapter| names.iter().any(|name| name.as_ref() == adapter.name()))
            .collect()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.all().map(|adapter| adapter.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

static REGISTRY: Lazy<AdapterRegistry> =
    Lazy::new(|| match AdapterRegistry::with_builtin_adapters() {
        Ok(registry) => registry,
        Err(e) => {
            log::error!("Failed to register built-in adapters: {e}");
            AdapterRegistry::new()
        }
    });

/// The process-wide registry of built-in adapters.
pub fn registry() -> &'static AdapterRegistry {
    &REGISTRY
}
