// file: src/mirror/mod.rs
// description: mirror metadata module exports
// reference: internal module structure

pub mod settings;

pub use settings::{MirrorSettings, settings_for_all};
