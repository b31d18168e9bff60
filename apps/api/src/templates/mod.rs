//! Template Registry — a fixed, declarative catalog of résumé templates.
//!
//! Templates are pure data: opaque layout tokens per region, a table of
//! render overrides, and preview content used to seed new documents.
//! Lookups never fail; unknown or missing ids resolve to the default.

pub mod catalog;
pub mod handlers;

use serde::Serialize;
use tracing::debug;

pub const DEFAULT_TEMPLATE_ID: &str = "professional";

// ────────────────────────────────────────────────────────────────────────────
// Template data
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub layout: TemplateLayout,
    pub overrides: StyleOverrides,
    pub preview: TemplatePreview,
}

/// Opaque style tokens per region. Carried through to the render tree untouched.
#[derive(Debug, Serialize)]
pub struct TemplateLayout {
    pub header: HeaderLayout,
    pub sections: SectionsLayout,
    pub skills: SkillsLayout,
}

#[derive(Debug, Serialize)]
pub struct HeaderLayout {
    pub style: &'static str,
    pub name_style: &'static str,
    pub contact_style: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SectionsLayout {
    pub style: &'static str,
    pub title_style: &'static str,
    pub content_style: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SkillsLayout {
    pub style: &'static str,
    pub item_style: &'static str,
}

/// Template-specific adjustments applied over the base colour scheme.
#[derive(Debug, Serialize)]
pub struct StyleOverrides {
    /// Header uses the primary colour as background and the page background as text.
    pub invert_header: bool,
    /// Opacity applied to the header contact line, if any.
    pub contact_opacity: Option<f32>,
    pub uppercase_labels: bool,
    /// Skill tokens get a secondary-colour background when set.
    pub tint_skills: bool,
    pub labels: SectionLabels,
}

#[derive(Debug, Serialize)]
pub struct SectionLabels {
    pub summary: &'static str,
    pub experience: &'static str,
    pub education: &'static str,
    pub skills: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TemplatePreview {
    pub name: &'static str,
    /// `"email | phone | location"`.
    pub contact: &'static str,
    pub summary: Option<&'static str>,
    pub experience: &'static [PreviewExperience],
    pub education: &'static [PreviewEducation],
    pub skills: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct PreviewExperience {
    pub title: &'static str,
    pub company: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PreviewEducation {
    pub degree: &'static str,
    pub school: &'static str,
    pub year: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Registry
// ────────────────────────────────────────────────────────────────────────────

/// All registered templates, in catalog order.
pub fn list_templates() -> &'static [Template] {
    &catalog::TEMPLATES
}

/// Looks up a template by id, falling back to the default template.
pub fn get_template(id: Option<&str>) -> &'static Template {
    let found = id.and_then(|id| catalog::TEMPLATES.iter().find(|t| t.id == id));
    match found {
        Some(template) => template,
        None => {
            debug!(requested = ?id, "Unknown template id, using {DEFAULT_TEMPLATE_ID}");
            default_template()
        }
    }
}

pub fn default_template() -> &'static Template {
    catalog::TEMPLATES
        .iter()
        .find(|t| t.id == DEFAULT_TEMPLATE_ID)
        .unwrap_or(&catalog::TEMPLATES[0])
}
