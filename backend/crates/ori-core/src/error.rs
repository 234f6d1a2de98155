use crate::FieldErrors;

use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid user type: {value} {location}")]
    InvalidUserType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid session status: {value} {location}")]
    InvalidSessionStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Form has {} invalid field(s): {errors} {location}", .errors.len())]
    InvalidForm {
        errors: FieldErrors,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
