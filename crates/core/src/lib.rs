//! Domain types and pure logic for the devmatch marketplace.
//!
//! Nothing in this crate performs I/O. The database and HTTP layers feed
//! already-loaded data into the functions here.

pub mod error;
pub mod matching;
pub mod roles;
pub mod skills;
pub mod types;
