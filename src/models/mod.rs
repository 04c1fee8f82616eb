// Re-export all model types for ease of use

pub mod category;
pub mod request;

pub use category::{CategoryFamily, FileCategory};
pub use request::*;
