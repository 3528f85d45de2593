//! Validated request shapes and the response shape.

mod user;
pub mod validation;

pub use user::{UserCreate, UserResponse, UserUpdate};
pub use validation::{Validate, ValidationRule};
