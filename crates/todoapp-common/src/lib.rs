//! Shared utilities for the todoapp crates
//!
//! Domain-agnostic building blocks used by the domain core and by the
//! integration tests: tracing subscriber setup and reusable string validators.

pub mod logging;
pub mod validation;

pub use logging::{format_error, LogLevel, LogOptions, LoggingError};
pub use validation::{
    char_len, CharLengthValidator, NonBlankValidator, ValidationError, Validator,
};
