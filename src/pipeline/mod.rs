pub mod classify;
pub mod diff;
pub mod messages;
pub mod processor;
pub mod receipt;
pub mod signals;
pub mod structuring;

pub use processor::{analyze, diff, DocumentAnalyzer};
