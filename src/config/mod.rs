pub mod bindings;
pub mod validation;
pub use bindings::KeyBindings;
pub use validation::{ConfigValidator, ValidationResult, ValidationError};
