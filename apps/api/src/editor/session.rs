//! Editor session — the explicit, immutable state of one editing session.
//!
//! Every transition goes through [`EditorSession::apply`], which returns the
//! next session and leaves the current one untouched. Colour validation and
//! reorder membership can fail; a failed command yields an error and no new
//! session.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::document::{
    add_section, add_skills, build_document, delete_section, remove_skill, reorder_sections,
    update_section_content, update_section_title,
};
use crate::document::operations::same_ids;
use crate::editor::command::EditorCommand;
use crate::models::section::Section;
use crate::models::style::{ColorScheme, FontSettings, StyleError};
use crate::render::{render, RenderTree};
use crate::templates::get_template;

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error(transparent)]
    Style(#[from] StyleError),

    #[error("reorder must list every existing section id exactly once")]
    ReorderMembership,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditorSession {
    pub id: Uuid,
    /// Always a registered template id; unknown requests are resolved on entry.
    pub template_id: String,
    pub sections: Vec<Section>,
    pub color_scheme: ColorScheme,
    pub font_settings: FontSettings,
}

/// A session together with the tree rendered from that exact state.
#[derive(Debug, Serialize)]
pub struct SessionView {
    #[serde(flatten)]
    pub session: EditorSession,
    pub render: RenderTree,
}

impl EditorSession {
    /// Starts a session seeded from `template_id` (default template when
    /// absent or unknown) with the default style configuration.
    pub fn new(template_id: Option<&str>) -> Self {
        let template = get_template(template_id);
        Self {
            id: Uuid::new_v4(),
            template_id: template.id.to_string(),
            sections: build_document(template),
            color_scheme: ColorScheme::default(),
            font_settings: FontSettings::default(),
        }
    }

    pub fn apply(&self, command: EditorCommand) -> Result<EditorSession, CommandError> {
        debug!(session_id = %self.id, command = command.name(), "Applying editor command");

        let mut next = self.clone();
        match command {
            EditorCommand::AddSection { section_type } => {
                next.sections = add_section(&self.sections, section_type);
            }
            EditorCommand::DeleteSection { id } => {
                next.sections = delete_section(&self.sections, &id);
            }
            EditorCommand::ReorderSections { sections } => {
                let ordered = self.resolve_order(&sections)?;
                next.sections = reorder_sections(&self.sections, ordered);
            }
            EditorCommand::UpdateSectionContent { id, patch } => {
                next.sections = update_section_content(&self.sections, &id, &patch);
            }
            EditorCommand::UpdateSectionTitle { id, title } => {
                next.sections = update_section_title(&self.sections, &id, &title);
            }
            EditorCommand::AddSkills { id, input } => {
                next.sections = add_skills(&self.sections, &id, &input);
            }
            EditorCommand::RemoveSkill { id, index } => {
                next.sections = remove_skill(&self.sections, &id, index);
            }
            EditorCommand::SwitchTemplate { template_id } => {
                // Unsaved section edits are discarded; style settings carry over.
                let template = get_template(Some(template_id.as_str()));
                next.template_id = template.id.to_string();
                next.sections = build_document(template);
            }
            EditorCommand::SetColorScheme { color_scheme } => {
                color_scheme.validate()?;
                next.color_scheme = color_scheme;
            }
            EditorCommand::SetFontSettings { font_settings } => {
                next.font_settings = font_settings;
            }
        }
        Ok(next)
    }

    /// Maps a client-supplied sequence back onto the stored sections, so a
    /// reorder can change positions but never ids or content.
    fn resolve_order(&self, requested: &[Section]) -> Result<Vec<Section>, CommandError> {
        if !same_ids(&self.sections, requested) {
            return Err(CommandError::ReorderMembership);
        }
        Ok(requested
            .iter()
            .filter_map(|r| self.sections.iter().find(|s| s.id == r.id).cloned())
            .collect())
    }

    pub fn render(&self) -> RenderTree {
        render(
            &self.sections,
            &self.template_id,
            &self.color_scheme,
            &self.font_settings,
        )
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            session: self.clone(),
            render: self.render(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::section::{
        ContentPatch, PersonalPatch, SectionContent, SectionType,
    };
    use crate::render::NodeTag;

    fn count(session: &EditorSession, ty: SectionType) -> usize {
        session
            .sections
            .iter()
            .filter(|s| s.section_type() == ty)
            .count()
    }

    fn skills(session: &EditorSession) -> Vec<String> {
        session
            .sections
            .iter()
            .find_map(|s| match &s.content {
                SectionContent::Skills(c) => Some(c.skills.clone()),
                _ => None,
            })
            .unwrap_or_default()
    }

    fn skills_id(session: &EditorSession) -> String {
        session
            .sections
            .iter()
            .find(|s| s.section_type() == SectionType::Skills)
            .map(|s| s.id.clone())
            .unwrap()
    }

    #[test]
    fn test_new_session_resolves_unknown_template() {
        let session = EditorSession::new(Some("nope"));
        assert_eq!(session.template_id, "professional");
        assert_eq!(session.sections.len(), 5);
    }

    #[test]
    fn test_template_switch_replaces_sections_and_keeps_style() {
        let session = EditorSession::new(Some("professional"));
        let fonts = FontSettings {
            family: "'Georgia', serif".to_string(),
            ..Default::default()
        };
        let session = session
            .apply(EditorCommand::SetFontSettings {
                font_settings: fonts.clone(),
            })
            .unwrap()
            .apply(EditorCommand::UpdateSectionContent {
                id: "0".to_string(),
                patch: ContentPatch::Personal(PersonalPatch {
                    name: Some("Edited".to_string()),
                    ..Default::default()
                }),
            })
            .unwrap();

        let switched = session
            .apply(EditorCommand::SwitchTemplate {
                template_id: "modern".to_string(),
            })
            .unwrap();

        assert_eq!(switched.template_id, "modern");
        assert_eq!(count(&switched, SectionType::Experience), 1);
        assert_eq!(count(&switched, SectionType::Education), 1);
        assert_eq!(skills(&switched).len(), 5);
        assert_eq!(switched.sections, build_document(get_template(Some("modern"))));
        assert_eq!(switched.font_settings, fonts);
        assert_eq!(switched.render().title(), Some("Sarah Chen"));
    }

    #[test]
    fn test_invalid_color_leaves_session_untouched() {
        let session = EditorSession::new(None);
        let result = session.apply(EditorCommand::SetColorScheme {
            color_scheme: ColorScheme {
                primary: "red".to_string(),
                ..Default::default()
            },
        });
        assert!(matches!(
            result,
            Err(CommandError::Style(StyleError::InvalidColor { field: "primary", .. }))
        ));
        assert_eq!(session.color_scheme, ColorScheme::default());
    }

    #[test]
    fn test_color_scheme_flows_into_render() {
        let session = EditorSession::new(None)
            .apply(EditorCommand::SetColorScheme {
                color_scheme: ColorScheme {
                    primary: "#123456".to_string(),
                    ..Default::default()
                },
            })
            .unwrap();
        let tree = session.render();
        let name = &tree.root.find_all(NodeTag::Name)[0];
        assert_eq!(name.style.color.as_deref(), Some("#123456"));
    }

    #[test]
    fn test_duplicate_skill_leaves_list_unchanged() {
        let session = EditorSession::new(None);
        let id = skills_id(&session);
        let existing = skills(&session)[0].clone();

        let next = session
            .apply(EditorCommand::AddSkills {
                id: id.clone(),
                input: existing,
            })
            .unwrap();
        assert_eq!(skills(&next).len(), skills(&session).len());

        let next = next
            .apply(EditorCommand::AddSkills {
                id,
                input: "Zig".to_string(),
            })
            .unwrap();
        assert_eq!(skills(&next).last().map(String::as_str), Some("Zig"));
    }

    #[test]
    fn test_remove_skill_out_of_range_is_noop() {
        let session = EditorSession::new(None);
        let id = skills_id(&session);
        let next = session
            .apply(EditorCommand::RemoveSkill { id, index: 99 })
            .unwrap();
        assert_eq!(next, session);
    }

    #[test]
    fn test_stale_id_commands_are_noops() {
        let session = EditorSession::new(None);
        let next = session
            .apply(EditorCommand::UpdateSectionTitle {
                id: "gone".to_string(),
                title: "X".to_string(),
            })
            .unwrap()
            .apply(EditorCommand::DeleteSection {
                id: "gone".to_string(),
            })
            .unwrap();
        assert_eq!(next.sections, session.sections);
    }

    #[test]
    fn test_add_then_delete_section() {
        let session = EditorSession::new(None)
            .apply(EditorCommand::AddSection {
                section_type: SectionType::Education,
            })
            .unwrap();
        let added = session.sections.last().cloned().unwrap();
        assert_eq!(added.title, "Education");

        let next = session
            .apply(EditorCommand::DeleteSection { id: added.id })
            .unwrap();
        assert_eq!(next.sections.len(), 5);
    }

    fn ids(session: &EditorSession) -> Vec<&str> {
        session.sections.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_reorder_with_duplicate_id_rejected() {
        let session = EditorSession::new(Some("professional"));
        let mut sequence = session.sections.clone();
        sequence.push(sequence[0].clone());

        let result = session.apply(EditorCommand::ReorderSections { sections: sequence });
        assert_eq!(result, Err(CommandError::ReorderMembership));
        assert_eq!(ids(&session), vec!["0", "1", "2", "3", "4"]);
    }

    #[test]
    fn test_reorder_with_missing_id_rejected() {
        let session = EditorSession::new(None);
        let sequence = session.sections[1..].to_vec();
        assert_eq!(
            session.apply(EditorCommand::ReorderSections { sections: sequence }),
            Err(CommandError::ReorderMembership)
        );
    }

    #[test]
    fn test_reorder_keeps_stored_content() {
        let session = EditorSession::new(None);
        let mut sequence = session.sections.clone();
        sequence.reverse();
        sequence[4].title = "Smuggled".to_string();

        let next = session
            .apply(EditorCommand::ReorderSections { sections: sequence })
            .unwrap();
        assert_eq!(ids(&next), vec!["4", "3", "2", "1", "0"]);
        assert_eq!(next.sections[4].title, "Personal");
        assert_eq!(next.sections[0].order, 0);
    }

    #[test]
    fn test_view_renders_same_snapshot() {
        let session = EditorSession::new(Some("minimal"));
        let view = session.view();
        assert_eq!(view.render, session.render());
        assert_eq!(view.render.template_id, "minimal");

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["template_id"], "minimal");
        assert!(json["render"]["root"].is_object());
    }
}
