//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Join-row structs feeding the match scorer, where relevant

pub mod company;
pub mod developer;
pub mod matching;
pub mod project;
pub mod skill;
