//! Render Engine — a pure, deterministic mapping from a document and its
//! style configuration to a render tree.
//!
//! Shared rendering logic never branches on a template id; everything
//! template-specific comes from the template's `StyleOverrides` row.

use crate::models::section::{
    EducationContent, ExperienceContent, PersonalContent, Section, SectionContent,
    SkillsContent, SummaryContent,
};
use crate::models::style::{ColorScheme, FontSettings};
use crate::render::tree::{InlineStyle, NodeTag, RenderNode, RenderTree, ROOT_MARKER};
use crate::templates::{get_template, Template};

/// Rendered when the document has no name.
pub const NAME_PLACEHOLDER: &str = "Your Name";

const CONTACT_SEPARATOR: &str = " | ";

/// Renders `sections` with the template `template_id` (unknown ids fall back
/// to the default template). Calling this twice with the same inputs yields
/// equal trees.
pub fn render(
    sections: &[Section],
    template_id: &str,
    colors: &ColorScheme,
    fonts: &FontSettings,
) -> RenderTree {
    let template = get_template(Some(template_id));
    let ctx = RenderContext {
        template,
        colors,
        fonts,
    };
    let parts = Partitioned::from_sections(sections);

    let mut root = RenderNode::new(NodeTag::Document)
        .class("resume")
        .attr(ROOT_MARKER, "true")
        .attr("data-template", template.id)
        .style(InlineStyle {
            background: Some(colors.background.clone()),
            font_family: Some(fonts.family.clone()),
            ..Default::default()
        })
        .child(ctx.header(parts.personal));

    if let Some(block) = parts.summary.and_then(|s| ctx.summary_block(s)) {
        root = root.child(block);
    }
    if !parts.experience.is_empty() {
        root = root.child(ctx.experience_block(&parts.experience));
    }
    if !parts.education.is_empty() {
        root = root.child(ctx.education_block(&parts.education));
    }
    if let Some(block) = parts.skills.and_then(|(id, s)| ctx.skills_block(id, s)) {
        root = root.child(block);
    }

    RenderTree {
        template_id: template.id.to_string(),
        root,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Partitioning
// ────────────────────────────────────────────────────────────────────────────

/// Sections grouped by kind. Personal, summary and skills keep the first
/// match; experience and education keep every match in sequence order.
struct Partitioned<'a> {
    personal: Option<&'a PersonalContent>,
    summary: Option<&'a SummaryContent>,
    experience: Vec<(&'a str, &'a ExperienceContent)>,
    education: Vec<(&'a str, &'a EducationContent)>,
    skills: Option<(&'a str, &'a SkillsContent)>,
}

impl<'a> Partitioned<'a> {
    fn from_sections(sections: &'a [Section]) -> Self {
        let mut parts = Partitioned {
            personal: None,
            summary: None,
            experience: Vec::new(),
            education: Vec::new(),
            skills: None,
        };

        for section in sections {
            let id = section.id.as_str();
            match &section.content {
                SectionContent::Personal(c) => {
                    parts.personal.get_or_insert(c);
                }
                SectionContent::Summary(c) => {
                    parts.summary.get_or_insert(c);
                }
                SectionContent::Experience(c) => parts.experience.push((id, c)),
                SectionContent::Education(c) => parts.education.push((id, c)),
                SectionContent::Skills(c) => {
                    parts.skills.get_or_insert((id, c));
                }
            }
        }
        parts
    }
}

/// Returns the field when it holds visible text.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

// ────────────────────────────────────────────────────────────────────────────
// Block rendering
// ────────────────────────────────────────────────────────────────────────────

struct RenderContext<'a> {
    template: &'static Template,
    colors: &'a ColorScheme,
    fonts: &'a FontSettings,
}

impl RenderContext<'_> {
    fn header(&self, personal: Option<&PersonalContent>) -> RenderNode {
        let layout = &self.template.layout.header;
        let overrides = &self.template.overrides;

        let (background, name_color, contact_color) = if overrides.invert_header {
            (
                Some(self.colors.primary.clone()),
                &self.colors.background,
                &self.colors.background,
            )
        } else {
            (None, &self.colors.primary, &self.colors.secondary)
        };

        let name = personal
            .and_then(|p| present(&p.name))
            .unwrap_or(NAME_PLACEHOLDER);

        let mut header = RenderNode::new(NodeTag::Header)
            .class(layout.style)
            .style(InlineStyle {
                background,
                ..Default::default()
            })
            .child(
                RenderNode::new(NodeTag::Name)
                    .class(layout.name_style)
                    .style(InlineStyle::text(name_color, self.fonts.name_size.px()))
                    .text(name),
            );

        let contact = personal.map(contact_line).unwrap_or_default();
        if !contact.is_empty() {
            header = header.child(
                RenderNode::new(NodeTag::Contact)
                    .class(layout.contact_style)
                    .style(InlineStyle {
                        opacity: overrides.contact_opacity,
                        ..InlineStyle::text(contact_color, self.fonts.body_size.px())
                    })
                    .text(contact),
            );
        }
        header
    }

    fn summary_block(&self, summary: &SummaryContent) -> Option<RenderNode> {
        let body = present(&summary.summary)?;
        Some(
            self.section("summary", self.template.overrides.labels.summary)
                .child(
                    RenderNode::new(NodeTag::Body)
                        .class(self.template.layout.sections.content_style)
                        .style(self.body_style(&self.colors.primary))
                        .text(body),
                ),
        )
    }

    fn experience_block(&self, entries: &[(&str, &ExperienceContent)]) -> RenderNode {
        let items = entries.iter().map(|(id, exp)| {
            self.entry(
                id,
                [
                    (NodeTag::EntryTitle, &exp.company, &self.colors.primary),
                    (NodeTag::EntrySubtitle, &exp.position, &self.colors.secondary),
                    (NodeTag::Meta, &exp.duration, &self.colors.secondary),
                    (NodeTag::Body, &exp.description, &self.colors.primary),
                ],
            )
        });

        self.section("experience", self.template.overrides.labels.experience)
            .child(self.group(items))
    }

    fn education_block(&self, entries: &[(&str, &EducationContent)]) -> RenderNode {
        let items = entries.iter().map(|(id, edu)| {
            self.entry(
                id,
                [
                    (NodeTag::EntryTitle, &edu.school, &self.colors.primary),
                    (NodeTag::EntrySubtitle, &edu.degree, &self.colors.secondary),
                    (NodeTag::Meta, &edu.year, &self.colors.secondary),
                ],
            )
        });

        self.section("education", self.template.overrides.labels.education)
            .child(self.group(items))
    }

    fn skills_block(&self, id: &str, skills: &SkillsContent) -> Option<RenderNode> {
        if skills.skills.is_empty() {
            return None;
        }
        let layout = &self.template.layout.skills;

        let token_style = if self.template.overrides.tint_skills {
            InlineStyle {
                background: Some(self.colors.secondary.clone()),
                ..self.body_style(&self.colors.background)
            }
        } else {
            self.body_style(&self.colors.secondary)
        };

        let tokens = skills.skills.iter().map(|skill| {
            RenderNode::new(NodeTag::Skill)
                .class(layout.item_style)
                .style(token_style.clone())
                .text(skill.as_str())
        });

        Some(
            self.section("skills", self.template.overrides.labels.skills)
                .child(
                    RenderNode::new(NodeTag::SkillList)
                        .class(layout.style)
                        .attr("data-section-id", id)
                        .children(tokens),
                ),
        )
    }

    // ── helpers ─────────────────────────────────────────────────────────────

    /// Section wrapper with its (possibly upper-cased) label.
    fn section(&self, kind: &str, label: &str) -> RenderNode {
        let layout = &self.template.layout.sections;
        let label = if self.template.overrides.uppercase_labels {
            label.to_uppercase()
        } else {
            label.to_string()
        };

        RenderNode::new(NodeTag::Section)
            .class(layout.style)
            .attr("data-section", kind)
            .child(
                RenderNode::new(NodeTag::SectionTitle)
                    .class(layout.title_style)
                    .style(InlineStyle::text(
                        &self.colors.primary,
                        self.fonts.section_size.px(),
                    ))
                    .text(label),
            )
    }

    fn group(&self, items: impl IntoIterator<Item = RenderNode>) -> RenderNode {
        RenderNode::new(NodeTag::Group)
            .class(self.template.layout.sections.content_style)
            .children(items)
    }

    /// One experience/education entry; absent fields produce no node.
    fn entry<const N: usize>(
        &self,
        id: &str,
        fields: [(NodeTag, &Option<String>, &String); N],
    ) -> RenderNode {
        let children = fields.into_iter().filter_map(|(tag, value, color)| {
            present(value).map(|text| {
                RenderNode::new(tag)
                    .style(self.body_style(color))
                    .text(text)
            })
        });

        RenderNode::new(NodeTag::Entry)
            .attr("data-section-id", id)
            .children(children)
    }

    fn body_style(&self, color: &str) -> InlineStyle {
        InlineStyle::text(color, self.fonts.body_size.px())
    }
}

/// Non-empty contact fields joined with `" | "`; empty when none are set.
fn contact_line(personal: &PersonalContent) -> String {
    [&personal.email, &personal.phone, &personal.location]
        .into_iter()
        .filter_map(present)
        .collect::<Vec<_>>()
        .join(CONTACT_SEPARATOR)
}
