pub mod diff;
pub mod enums;
pub mod field;
pub mod receipt;
pub mod signal;

pub use diff::*;
pub use enums::*;
pub use field::*;
pub use receipt::*;
pub use signal::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}
