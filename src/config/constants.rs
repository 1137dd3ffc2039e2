//! Application-wide constants
//!
//! Centralized location for magic values shared by the forms, the API
//! client and the tests.

use once_cell::sync::Lazy;
use regex::Regex;

// =============================================================================
// Validation messages
// =============================================================================

/// Shown when a required field is empty or unchecked
pub const DEFAULT_REQUIRED_MSG: &str = "This field is required";

/// Shown when a field exceeds its maximum length
pub const DEFAULT_MAX_LENGTH_MSG: &str = "Too many symbols";

/// Shown when a field is below its minimum length
pub const DEFAULT_MIN_LENGTH_MSG: &str = "Too few symbols";

/// Shown when the email does not match [`EMAIL_REGEX`]
pub const EMAIL_PATTERN_MSG: &str = "Invalid email format";

/// Shown when the phone does not match [`PHONE_REGEX`]
pub const PHONE_PATTERN_MSG: &str = "Invalid phone number";

/// Shown when the password fails the letters-and-digits policy
pub const PASSWORD_PATTERN_MSG: &str =
    "Password must be at least 8 characters with letters and digits";

/// Banner fallback for failures that are not field-specific
pub const GENERIC_ERROR_MSG: &str = "Something went wrong. Please try again.";

// =============================================================================
// Validation limits
// =============================================================================

/// Maximum length applied to every free-text field
pub const MAX_FIELD_LENGTH: usize = 20;

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

// =============================================================================
// Validation patterns
// =============================================================================

/// Masked RU phone format: `+7 (912) 345-67-89`
pub static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+7 \(\d{3}\) \d{3}-\d{2}-\d{2}$").expect("valid phone regex"));

/// Pragmatic email shape: something@something.tld, no whitespace
pub static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

// The password policy (>= 8 alphanumeric chars, at least one letter and one
// digit) originates from a lookahead regex; the `regex` crate has no
// lookahead, so it lives as a predicate in `forms::rules::password_ok`.

// =============================================================================
// Field names (wire and local form state share these)
// =============================================================================

pub const FIELD_FIRST_NAME: &str = "first_name";
pub const FIELD_LAST_NAME: &str = "last_name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PHONE: &str = "phone";
pub const FIELD_PASSWORD: &str = "password";
pub const FIELD_REPEAT_PASSWORD: &str = "repeat_password";
pub const FIELD_ACCEPT_PRIVACY_POLICY: &str = "accept_privacy_policy";
pub const FIELD_REMEMBER: &str = "remember";

// =============================================================================
// User roles
// =============================================================================

/// Default role assigned to new users
pub const ROLE_USER: &str = "user";

/// Administrator role with elevated privileges
pub const ROLE_ADMIN: &str = "admin";

// =============================================================================
// Routes
// =============================================================================

/// Sign-in screen; unauthenticated visitors are redirected here
pub const SIGN_IN_ROUTE: &str = "/sign-in";

/// Authenticated landing route behind the auth guard
pub const LANDING_ROUTE: &str = "/";

// =============================================================================
// API endpoints
// =============================================================================

/// Registration endpoint path
pub const SIGNUP_PATH: &str = "/auth/signup";

/// Login endpoint path
pub const LOGIN_PATH: &str = "/auth/login";

/// Authenticated profile endpoint path
pub const PROFILE_PATH: &str = "/profile";

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

// =============================================================================
// Session storage
// =============================================================================

/// Fixed key under which the session token is persisted
pub const TOKEN_STORAGE_KEY: &str = "smarthome.session-token";

// =============================================================================
// Client configuration defaults
// =============================================================================

/// Default API base URL (development backend)
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Default per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
