//! Skills editing: turning free-form input into skill tokens.

use crate::document::operations::update_section_content;
use crate::models::section::{
    normalize_skills, ContentPatch, Section, SectionContent, SkillsPatch,
};

/// Splits comma- or newline-delimited input into trimmed, non-blank,
/// distinct skills.
pub fn split_skill_input(input: &str) -> Vec<String> {
    normalize_skills(
        input
            .split(|c: char| c == ',' || c == '\n')
            .map(str::to_string),
    )
}

/// Appends the skills in `input` to the skills section `id`.
///
/// Exact (case-sensitive) duplicates of existing skills, or of an earlier
/// entry in the same input, are dropped. The pending input is cleared only
/// when at least one skill was added. Non-skills sections and unknown ids
/// are left untouched.
pub fn add_skills(sections: &[Section], id: &str, input: &str) -> Vec<Section> {
    let Some(current) = skills_of(sections, id) else {
        return sections.to_vec();
    };

    let before = current.len();
    let skills = normalize_skills(current.iter().cloned().chain(split_skill_input(input)));

    if skills.len() == before {
        return sections.to_vec();
    }

    let patch = ContentPatch::Skills(SkillsPatch {
        skills: Some(skills),
        current_input: Some(String::new()),
    });
    update_section_content(sections, id, &patch)
}

/// Removes the skill at `index`. Out-of-range indices are ignored.
pub fn remove_skill(sections: &[Section], id: &str, index: usize) -> Vec<Section> {
    let Some(current) = skills_of(sections, id) else {
        return sections.to_vec();
    };
    if index >= current.len() {
        return sections.to_vec();
    }

    let mut skills = current.to_vec();
    skills.remove(index);
    let patch = ContentPatch::Skills(SkillsPatch {
        skills: Some(skills),
        current_input: None,
    });
    update_section_content(sections, id, &patch)
}

fn skills_of<'a>(sections: &'a [Section], id: &str) -> Option<&'a [String]> {
    sections.iter().find(|s| s.id == id).and_then(|s| match &s.content {
        SectionContent::Skills(c) => Some(c.skills.as_slice()),
        _ => None,
    })
}
