//! Section Model operations.
//!
//! Every operation takes the current sequence and returns a new one. Unknown
//! ids are no-ops, never errors, so a stale editor reference cannot break
//! the document.

use std::collections::HashSet;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::models::section::{ContentPatch, Section, SectionContent, SectionType};

/// Fresh section id. Random v4 UUIDs never collide with the positional ids
/// handed out by the document builder.
pub fn new_section_id() -> String {
    Uuid::new_v4().to_string()
}

/// Appends an empty section of `section_type` at the end of the sequence.
pub fn add_section(sections: &[Section], section_type: SectionType) -> Vec<Section> {
    let order = sections
        .iter()
        .map(|s| s.order)
        .max()
        .map_or(0, |max| max + 1);

    let mut next = sections.to_vec();
    next.push(Section::new(
        new_section_id(),
        order,
        SectionContent::empty(section_type),
    ));
    next
}

/// Removes the section with `id`, keeping the others in their relative order.
pub fn delete_section(sections: &[Section], id: &str) -> Vec<Section> {
    sections.iter().filter(|s| s.id != id).cloned().collect()
}

/// Replaces the sequence with `new_sequence`, re-ranking `order` by position.
///
/// Keeping the same set of ids is the caller's job; a mismatch is logged and
/// the new sequence is still taken as given.
pub fn reorder_sections(sections: &[Section], new_sequence: Vec<Section>) -> Vec<Section> {
    if !same_ids(sections, &new_sequence) {
        warn!(
            before = sections.len(),
            after = new_sequence.len(),
            "Reorder changed section membership"
        );
    }

    new_sequence
        .into_iter()
        .enumerate()
        .map(|(i, mut section)| {
            section.order = i as i32;
            section
        })
        .collect()
}

/// Shallow-merges `patch` into the content of the section with `id`.
///
/// A patch for a different section kind leaves the section untouched.
pub fn update_section_content(
    sections: &[Section],
    id: &str,
    patch: &ContentPatch,
) -> Vec<Section> {
    sections
        .iter()
        .map(|s| {
            if s.id != id {
                return s.clone();
            }
            let mut updated = s.clone();
            if !updated.content.merge(patch) {
                debug!(
                    section_id = id,
                    section_type = updated.section_type().as_str(),
                    "Ignoring patch for a different section type"
                );
            }
            updated
        })
        .collect()
}

pub fn update_section_title(sections: &[Section], id: &str, title: &str) -> Vec<Section> {
    sections
        .iter()
        .map(|s| {
            let mut s = s.clone();
            if s.id == id {
                s.title = title.to_string();
            }
            s
        })
        .collect()
}

/// True when `b` holds exactly the ids of `a`, each once, in any order.
/// Assumes the ids in `a` are unique.
pub fn same_ids(a: &[Section], b: &[Section]) -> bool {
    let left: HashSet<&str> = a.iter().map(|s| s.id.as_str()).collect();
    let right: HashSet<&str> = b.iter().map(|s| s.id.as_str()).collect();
    a.len() == b.len() && left == right
}
