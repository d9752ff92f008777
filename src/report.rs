//! Building, serialising, and reading back run reports.

pub mod build;
pub mod doc;
pub mod err;
pub mod input;

pub use doc::{deserialize, serialize, Document};
pub use err::{Error, LoadError, Result};
pub use input::Input;
