pub mod resume;
pub mod section;
pub mod style;
pub mod user;
