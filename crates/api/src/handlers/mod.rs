pub mod matches;
pub mod projects;
pub mod skills;
