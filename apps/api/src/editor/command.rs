use serde::{Deserialize, Serialize};

use crate::models::section::{ContentPatch, Section, SectionType};
use crate::models::style::{ColorScheme, FontSettings};

/// One editor transition. Sent as JSON with a `command` tag, e.g.
/// `{"command": "add_skills", "id": "4", "input": "Rust, SQL"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum EditorCommand {
    AddSection {
        section_type: SectionType,
    },
    DeleteSection {
        id: String,
    },
    /// Full new sequence, typically from a drag-and-drop reorder.
    ReorderSections {
        sections: Vec<Section>,
    },
    UpdateSectionContent {
        id: String,
        patch: ContentPatch,
    },
    UpdateSectionTitle {
        id: String,
        title: String,
    },
    AddSkills {
        id: String,
        input: String,
    },
    RemoveSkill {
        id: String,
        index: usize,
    },
    SwitchTemplate {
        template_id: String,
    },
    SetColorScheme {
        color_scheme: ColorScheme,
    },
    SetFontSettings {
        font_settings: FontSettings,
    },
}

impl EditorCommand {
    pub fn name(&self) -> &'static str {
        match self {
            EditorCommand::AddSection { .. } => "add_section",
            EditorCommand::DeleteSection { .. } => "delete_section",
            EditorCommand::ReorderSections { .. } => "reorder_sections",
            EditorCommand::UpdateSectionContent { .. } => "update_section_content",
            EditorCommand::UpdateSectionTitle { .. } => "update_section_title",
            EditorCommand::AddSkills { .. } => "add_skills",
            EditorCommand::RemoveSkill { .. } => "remove_skill",
            EditorCommand::SwitchTemplate { .. } => "switch_template",
            EditorCommand::SetColorScheme { .. } => "set_color_scheme",
            EditorCommand::SetFontSettings { .. } => "set_font_settings",
        }
    }
}
