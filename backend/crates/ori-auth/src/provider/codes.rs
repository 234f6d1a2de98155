//! Provider error codes produced by the bundled identity providers.

pub const EMAIL_ALREADY_IN_USE: &str = "auth/email-already-in-use";
pub const WRONG_PASSWORD: &str = "auth/wrong-password";
pub const USER_NOT_FOUND: &str = "auth/user-not-found";
pub const INVALID_CREDENTIAL: &str = "auth/invalid-credential";
pub const INVALID_LOGIN_CREDENTIALS: &str = "auth/invalid-login-credentials";
pub const WEAK_PASSWORD: &str = "auth/weak-password";
pub const INVALID_EMAIL: &str = "auth/invalid-email";
pub const MISSING_PASSWORD: &str = "auth/missing-password";
pub const USER_DISABLED: &str = "auth/user-disabled";
pub const TOO_MANY_REQUESTS: &str = "auth/too-many-requests";
pub const POPUP_CLOSED_BY_USER: &str = "auth/popup-closed-by-user";
pub const ACCOUNT_EXISTS_WITH_DIFFERENT_CREDENTIAL: &str =
    "auth/account-exists-with-different-credential";
pub const OPERATION_NOT_ALLOWED: &str = "auth/operation-not-allowed";
pub const CONFIGURATION_NOT_FOUND: &str = "auth/configuration-not-found";
pub const INVALID_API_KEY: &str = "auth/invalid-api-key";
pub const NETWORK_REQUEST_FAILED: &str = "auth/network-request-failed";
pub const TIMEOUT: &str = "auth/timeout";
pub const USER_TOKEN_EXPIRED: &str = "auth/user-token-expired";
pub const INVALID_USER_TOKEN: &str = "auth/invalid-user-token";
pub const NO_CURRENT_USER: &str = "auth/no-current-user";
pub const INTERNAL_ERROR: &str = "auth/internal-error";
