//! Section model — the typed, ordered building blocks of a résumé document.
//!
//! Each `Section` carries exactly one `SectionContent` variant, so the
//! type/content pairing cannot drift. Edits arrive as `ContentPatch` values
//! (one per variant, every field optional) and are shallow-merged in place.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Section kinds
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionType {
    Personal,
    Summary,
    Experience,
    Education,
    Skills,
}

impl SectionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Personal => "personal",
            SectionType::Summary => "summary",
            SectionType::Experience => "experience",
            SectionType::Education => "education",
            SectionType::Skills => "skills",
        }
    }

    /// Default display title: the type name with its first letter capitalized.
    pub fn default_title(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Content records
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillsContent {
    #[serde(default)]
    pub skills: Vec<String>,
    /// In-progress entry text; not rendered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_input: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SectionContent {
    Personal(PersonalContent),
    Summary(SummaryContent),
    Experience(ExperienceContent),
    Education(EducationContent),
    Skills(SkillsContent),
}

impl SectionContent {
    /// Empty content for a freshly added section of the given type.
    pub fn empty(section_type: SectionType) -> Self {
        match section_type {
            SectionType::Personal => SectionContent::Personal(PersonalContent::default()),
            SectionType::Summary => SectionContent::Summary(SummaryContent::default()),
            SectionType::Experience => SectionContent::Experience(ExperienceContent::default()),
            SectionType::Education => SectionContent::Education(EducationContent::default()),
            SectionType::Skills => SectionContent::Skills(SkillsContent::default()),
        }
    }

    pub fn section_type(&self) -> SectionType {
        match self {
            SectionContent::Personal(_) => SectionType::Personal,
            SectionContent::Summary(_) => SectionType::Summary,
            SectionContent::Experience(_) => SectionType::Experience,
            SectionContent::Education(_) => SectionType::Education,
            SectionContent::Skills(_) => SectionType::Skills,
        }
    }

    /// Shallow-merges `patch` into this content. Returns `false` (and leaves
    /// the content untouched) when the patch targets a different section kind.
    pub fn merge(&mut self, patch: &ContentPatch) -> bool {
        match (self, patch) {
            (SectionContent::Personal(c), ContentPatch::Personal(p)) => {
                merge_field(&mut c.name, &p.name);
                merge_field(&mut c.email, &p.email);
                merge_field(&mut c.phone, &p.phone);
                merge_field(&mut c.location, &p.location);
                true
            }
            (SectionContent::Summary(c), ContentPatch::Summary(p)) => {
                merge_field(&mut c.summary, &p.summary);
                true
            }
            (SectionContent::Experience(c), ContentPatch::Experience(p)) => {
                merge_field(&mut c.company, &p.company);
                merge_field(&mut c.position, &p.position);
                merge_field(&mut c.duration, &p.duration);
                merge_field(&mut c.description, &p.description);
                true
            }
            (SectionContent::Education(c), ContentPatch::Education(p)) => {
                merge_field(&mut c.school, &p.school);
                merge_field(&mut c.degree, &p.degree);
                merge_field(&mut c.year, &p.year);
                true
            }
            (SectionContent::Skills(c), ContentPatch::Skills(p)) => {
                if let Some(skills) = &p.skills {
                    c.skills = normalize_skills(skills.iter().cloned());
                }
                merge_field(&mut c.current_input, &p.current_input);
                true
            }
            _ => false,
        }
    }
}

/// Trims each skill, drops blanks and drops exact (case-sensitive)
/// duplicates, keeping the first occurrence.
pub fn normalize_skills(skills: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for skill in skills {
        let skill = skill.trim();
        if !skill.is_empty() && !out.iter().any(|s| s == skill) {
            out.push(skill.to_string());
        }
    }
    out
}

fn merge_field(target: &mut Option<String>, value: &Option<String>) {
    if let Some(v) = value {
        *target = Some(v.clone());
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Section
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub order: i32,
    pub content: SectionContent,
}

impl Section {
    pub fn new(id: impl Into<String>, order: i32, content: SectionContent) -> Self {
        Self {
            id: id.into(),
            title: content.section_type().default_title(),
            order,
            content,
        }
    }

    pub fn section_type(&self) -> SectionType {
        self.content.section_type()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Patches
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryPatch {
    #[serde(default)]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperiencePatch {
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationPatch {
    #[serde(default)]
    pub school: Option<String>,
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillsPatch {
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub current_input: Option<String>,
}

/// A partial update for one section kind. Fields left as `None` are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPatch {
    Personal(PersonalPatch),
    Summary(SummaryPatch),
    Experience(ExperiencePatch),
    Education(EducationPatch),
    Skills(SkillsPatch),
}
