use crate::{ErrorLocation, ValidationErrors};

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {errors} {location}")]
    Validation {
        errors: ValidationErrors,
        location: ErrorLocation,
    },

    #[error("Invalid point reason: {value} {location}")]
    InvalidPointReason {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
