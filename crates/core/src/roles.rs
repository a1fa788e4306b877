//! Well-known role name constants.
//!
//! These are the values carried in the `role` claim of access tokens.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_COMPANY: &str = "company";
pub const ROLE_DEVELOPER: &str = "developer";
