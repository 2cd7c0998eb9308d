//! # Themer Engine
//!
//! Core library for the-themer: one palette in, themed configs out.
//! This library parses and validates palettes, renders them into each
//! application's native theme format, keeps a warehouse of generated themes
//! and deploys and activates them across applications.
//!
//! ## Modules
//!
//! - [`palette`] - Palette document parsing, default derivation and validation
//! - [`adapter`] - Per-application renderers and the adapter registry
//! - [`warehouse`] - Theme lookup, listing and generation into a directory
//! - [`activator`] - Install and switch strategies plus persisted theme state
//! - [`error`] - Error types shared by every module
//! - [`validation`] - The validator trait

pub mod activator;
pub mod adapter;
pub mod error;
mod fsutil;
pub mod palette;
pub mod validation;
pub mod warehouse;

pub use error::{ThemerError, ThemerResult, ValidationErrors};
pub use palette::PaletteModel;
