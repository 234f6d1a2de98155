//! Translation of identity toolkit REST error messages to provider codes.
//!
//! The REST API reports failures as `{"error": {"message": "EMAIL_EXISTS"}}`,
//! sometimes with a detail suffix (`"WEAK_PASSWORD : Password should be at
//! least 6 characters"`). Only the part before the first `" : "` is matched.

use crate::codes;

/// REST message -> provider code.
const REST_CODE_TABLE: &[(&str, &str)] = &[
    ("EMAIL_EXISTS", codes::EMAIL_ALREADY_IN_USE),
    ("EMAIL_NOT_FOUND", codes::USER_NOT_FOUND),
    ("USER_NOT_FOUND", codes::USER_NOT_FOUND),
    ("INVALID_PASSWORD", codes::WRONG_PASSWORD),
    ("INVALID_LOGIN_CREDENTIALS", codes::INVALID_CREDENTIAL),
    ("INVALID_IDP_RESPONSE", codes::INVALID_CREDENTIAL),
    ("USER_DISABLED", codes::USER_DISABLED),
    ("TOO_MANY_ATTEMPTS_TRY_LATER", codes::TOO_MANY_REQUESTS),
    ("WEAK_PASSWORD", codes::WEAK_PASSWORD),
    ("INVALID_EMAIL", codes::INVALID_EMAIL),
    ("MISSING_PASSWORD", codes::MISSING_PASSWORD),
    ("OPERATION_NOT_ALLOWED", codes::OPERATION_NOT_ALLOWED),
    ("PASSWORD_LOGIN_DISABLED", codes::OPERATION_NOT_ALLOWED),
    ("CONFIGURATION_NOT_FOUND", codes::CONFIGURATION_NOT_FOUND),
    ("API_KEY_INVALID", codes::INVALID_API_KEY),
    ("INVALID_API_KEY", codes::INVALID_API_KEY),
    ("TOKEN_EXPIRED", codes::USER_TOKEN_EXPIRED),
    ("INVALID_ID_TOKEN", codes::INVALID_USER_TOKEN),
    ("USER_MISMATCH", codes::INVALID_USER_TOKEN),
];

pub fn code_for_rest_message(message: &str) -> &'static str {
    let head = message
        .split(" : ")
        .next()
        .unwrap_or_default()
        .trim();

    if head.starts_with("API key not valid") {
        return codes::INVALID_API_KEY;
    }

    REST_CODE_TABLE
        .iter()
        .find(|(rest, _)| *rest == head)
        .map(|(_, code)| *code)
        .unwrap_or(codes::INTERNAL_ERROR)
}
