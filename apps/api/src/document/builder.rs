//! Document Builder — turns a template's preview content into a fresh section list.

use crate::models::section::{
    EducationContent, ExperienceContent, PersonalContent, Section, SectionContent,
    SkillsContent, SummaryContent,
};
use crate::templates::Template;

/// Placeholder summary used when a template ships without one.
pub const DEFAULT_SUMMARY: &str =
    "Experienced professional with a proven track record of delivering results.";

const CONTACT_DELIMITER: &str = " | ";

const ORDER_PERSONAL: i32 = 0;
const ORDER_SUMMARY: i32 = 1;
const ORDER_EXPERIENCE: i32 = 2;
const ORDER_EDUCATION: i32 = 3;
const ORDER_SKILLS: i32 = 4;

/// Builds the initial document for `template`.
///
/// Emits one personal, one summary, one experience per preview entry, one
/// education per preview entry and a single skills section, then stable-sorts
/// by `order`. Ids are positional (`"0"`, `"1"`, ...) so identical templates
/// always produce identical documents.
pub fn build_document(template: &Template) -> Vec<Section> {
    let preview = &template.preview;
    let (email, phone, location) = parse_contact(preview.contact);

    let mut contents: Vec<(i32, SectionContent)> = Vec::with_capacity(
        3 + preview.experience.len() + preview.education.len(),
    );

    contents.push((
        ORDER_PERSONAL,
        SectionContent::Personal(PersonalContent {
            name: Some(preview.name.to_string()),
            email,
            phone,
            location,
        }),
    ));

    contents.push((
        ORDER_SUMMARY,
        SectionContent::Summary(SummaryContent {
            summary: Some(preview.summary.unwrap_or(DEFAULT_SUMMARY).to_string()),
        }),
    ));

    for exp in preview.experience {
        contents.push((
            ORDER_EXPERIENCE,
            SectionContent::Experience(ExperienceContent {
                company: Some(exp.company.to_string()),
                position: Some(exp.title.to_string()),
                duration: Some(exp.duration.to_string()),
                description: Some(exp.description.to_string()),
            }),
        ));
    }

    for edu in preview.education {
        contents.push((
            ORDER_EDUCATION,
            SectionContent::Education(EducationContent {
                school: Some(edu.school.to_string()),
                degree: Some(edu.degree.to_string()),
                year: Some(edu.year.to_string()),
            }),
        ));
    }

    contents.push((
        ORDER_SKILLS,
        SectionContent::Skills(SkillsContent {
            skills: preview.skills.iter().map(|s| s.to_string()).collect(),
            current_input: None,
        }),
    ));

    // Vec::sort_by_key is stable: ties keep emission order.
    contents.sort_by_key(|(order, _)| *order);

    contents
        .into_iter()
        .enumerate()
        .map(|(i, (order, content))| Section::new(i.to_string(), order, content))
        .collect()
}

/// Splits a preview contact line into `(email, phone, location)` by position.
///
/// Missing trailing parts stay `None`; parts beyond the third are dropped.
/// Fields are assigned purely by position, so a contact line in a different
/// order is misassigned rather than rejected.
pub fn parse_contact(contact: &str) -> (Option<String>, Option<String>, Option<String>) {
    let mut parts = contact.split(CONTACT_DELIMITER).map(str::to_string);
    (parts.next(), parts.next(), parts.next())
}
