pub mod error;

pub use error::{GitUtilError, Result};
