// Document model: building a section list from a template and the pure
// operations that produce a new list from an old one.

pub mod builder;
pub mod operations;
pub mod skills;

pub use builder::build_document;
pub use operations::{
    add_section, delete_section, reorder_sections, update_section_content, update_section_title,
};
pub use skills::{add_skills, remove_skill};
