//! Utility modules for imgls

pub mod image;
pub mod size;
