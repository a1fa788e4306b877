//! Access-token validation.
//!
//! Accounts and sign-in live in the identity provider; this service only
//! verifies the tokens it issues.
//!
//! - [`jwt`] -- JWT access-token validation (and generation for tooling/tests).

pub mod jwt;
