pub mod description;
pub mod resume;
pub mod user;
