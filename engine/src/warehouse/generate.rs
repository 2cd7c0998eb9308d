use crate::adapter::Adapter;
use crate::error::{ThemerError, ThemerResult};
use crate::fsutil::{self, FILE_MODE};
use crate::palette::PaletteModel;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// One file written by [`generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub adapter: &'static str,
    pub path: PathBuf,
}

/// `./<theme name>-theme`
pub fn default_output_dir(model: &PaletteModel) -> PathBuf {
    PathBuf::from(format!("./{}-theme", model.theme.name))
}

fn render(adapter: &dyn Adapter, model: &PaletteModel) -> ThemerResult<Vec<u8>> {
    let model = match model.for_adapter(adapter.name()) {
        Some(synthesized) => {
            log::debug!("Using palette override for {}", adapter.name());
            Cow::Owned(synthesized?)
        }
        None => Cow::Borrowed(model),
    };
    adapter.generate(&model)
}

/// Render `model` with each adapter and write `<output>/<dir>/<file>`.
///
/// Adapters run in the order given. The first failure stops generation and
/// is returned wrapped with the adapter's name; files already written stay.
pub fn generate(
    model: &PaletteModel,
    adapters: &[&dyn Adapter],
    output_dir: &Path,
) -> ThemerResult<Vec<GeneratedFile>> {
    let mut written = Vec::with_capacity(adapters.len());

    for adapter in adapters {
        let wrap = |e: ThemerError| ThemerError::Adapter {
            adapter: adapter.name().to_string(),
            source: Box::new(e),
        };

        let content = render(*adapter, model).map_err(wrap)?;

        let dir = output_dir.join(adapter.dir_name());
        fsutil::create_dir_all(&dir).map_err(wrap)?;

        let path = dir.join(adapter.file_name(&model.theme.name));
        fsutil::write_file(&path, &content, FILE_MODE).map_err(wrap)?;

        log::debug!("{} wrote {} bytes to {}", adapter.name(), content.len(), path.display());
        written.push(GeneratedFile {
            adapter: adapter.name(),
            path,
        });
    }

    log::info!(
        "Generated {} file(s) for '{}' in {}",
        written.len(),
        model.theme.name,
        output_dir.display()
    );
    Ok(written)
}
