//! Render tree — the fully styled output of the render engine.
//!
//! Nodes carry the template's opaque class tokens, resolved inline styles and
//! text. The tree is plain data: comparing two trees with `==` is how
//! idempotent rendering is checked.

use std::collections::BTreeMap;

use serde::Serialize;

/// Attribute placed on the root node so exporters can locate the résumé.
pub const ROOT_MARKER: &str = "data-resume-root";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeTag {
    Document,
    Header,
    Name,
    Contact,
    Section,
    SectionTitle,
    Group,
    Entry,
    EntryTitle,
    EntrySubtitle,
    Meta,
    Body,
    SkillList,
    Skill,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InlineStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size_px: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
}

impl InlineStyle {
    pub fn text(color: &str, font_size_px: u16) -> Self {
        Self {
            color: Some(color.to_string()),
            font_size_px: Some(font_size_px),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == InlineStyle::default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderNode {
    pub tag: NodeTag,
    /// Template style tokens, space separated.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub class: String,
    #[serde(skip_serializing_if = "InlineStyle::is_empty")]
    pub style: InlineStyle,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RenderNode>,
}

impl RenderNode {
    pub fn new(tag: NodeTag) -> Self {
        Self {
            tag,
            class: String::new(),
            style: InlineStyle::default(),
            attributes: BTreeMap::new(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn class(mut self, tokens: &str) -> Self {
        self.class = tokens.to_string();
        self
    }

    pub fn style(mut self, style: InlineStyle) -> Self {
        self.style = style;
        self
    }

    pub fn attr(mut self, key: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: RenderNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = RenderNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Depth-first search, including `self`.
    pub fn find(&self, pred: &dyn Fn(&RenderNode) -> bool) -> Option<&RenderNode> {
        if pred(self) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(pred))
    }

    /// All nodes with `tag`, in document order.
    pub fn find_all(&self, tag: NodeTag) -> Vec<&RenderNode> {
        let mut found = Vec::new();
        self.collect(tag, &mut found);
        found
    }

    fn collect<'a>(&'a self, tag: NodeTag, found: &mut Vec<&'a RenderNode>) {
        if self.tag == tag {
            found.push(self);
        }
        for child in &self.children {
            child.collect(tag, found);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderTree {
    pub template_id: String,
    pub root: RenderNode,
}

impl RenderTree {
    /// The node carrying [`ROOT_MARKER`], if the tree has one.
    pub fn marked_root(&self) -> Option<&RenderNode> {
        self.root
            .find(&|n: &RenderNode| n.attributes.contains_key(ROOT_MARKER))
    }

    /// Rendered name from the header, used as a document title.
    pub fn title(&self) -> Option<&str> {
        self.root
            .find(&|n: &RenderNode| n.tag == NodeTag::Name)
            .and_then(|n| n.text.as_deref())
    }
}
