//! Core module for imgls
//!
//! Path collection, header extraction and the record type they produce.

pub mod extractor;
pub mod scanner;
mod types;

pub use extractor::{extract_metadata, read_image_meta};
pub use scanner::collect_paths;
pub use types::*;
