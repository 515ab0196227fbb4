pub mod requests;
pub mod validation;

pub use requests::*;
pub use validation::{RequestError, Validate, ValidationErrors, Violation, Violations, validate_value};
