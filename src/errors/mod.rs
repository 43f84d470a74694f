pub mod types;
pub use types::{BrowseError, ErrorKind};
