pub mod config;
pub mod core;
pub mod format;
pub mod fs;
pub mod runner;
pub mod utils;

// Re-export key items for convenience
pub use crate::config::ImglsConfig;
pub use crate::core::{ExtractError, ImageRecord};
pub use crate::runner::{run, run_with};
pub use crate::utils::image::{DecoderRegistry, HeaderDecoder};
