//! Serializers for render trees: HTML markup and flattened plain text.

use std::fmt::Write;

use crate::render::tree::{InlineStyle, NodeTag, RenderNode, RenderTree};

fn element_name(tag: NodeTag) -> &'static str {
    match tag {
        NodeTag::Document => "div",
        NodeTag::Header => "header",
        NodeTag::Name => "h1",
        NodeTag::Contact => "p",
        NodeTag::Section => "section",
        NodeTag::SectionTitle => "h2",
        NodeTag::Group => "div",
        NodeTag::Entry => "article",
        NodeTag::EntryTitle => "h3",
        NodeTag::EntrySubtitle => "h4",
        NodeTag::Meta => "p",
        NodeTag::Body => "p",
        NodeTag::SkillList => "div",
        NodeTag::Skill => "span",
    }
}

/// Serializes `node` and its descendants as an HTML fragment.
pub fn to_html(node: &RenderNode) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

fn write_node(out: &mut String, node: &RenderNode) {
    let name = element_name(node.tag);
    out.push('<');
    out.push_str(name);

    if !node.class.is_empty() {
        push_attr(out, "class", &node.class);
    }
    let css = css(&node.style);
    if !css.is_empty() {
        push_attr(out, "style", &css);
    }
    for (key, value) in &node.attributes {
        push_attr(out, key, value);
    }
    out.push('>');

    if let Some(text) = &node.text {
        out.push_str(&escape_text(text));
    }
    for child in &node.children {
        write_node(out, child);
    }

    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

fn push_attr(out: &mut String, key: &str, value: &str) {
    // Infallible for String.
    let _ = write!(out, " {}=\"{}\"", key, escape_attr(value));
}

/// Inline CSS declarations for a resolved style, in a fixed property order.
pub fn css(style: &InlineStyle) -> String {
    let mut decls = Vec::new();
    if let Some(color) = &style.color {
        decls.push(format!("color: {color}"));
    }
    if let Some(background) = &style.background {
        decls.push(format!("background-color: {background}"));
    }
    if let Some(px) = style.font_size_px {
        decls.push(format!("font-size: {px}px"));
    }
    if let Some(family) = &style.font_family {
        decls.push(format!("font-family: {family}"));
    }
    if let Some(opacity) = style.opacity {
        decls.push(format!("opacity: {opacity}"));
    }
    decls.join("; ")
}

pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Flattens the tree to text: one line per text node, with a blank line
/// before each section title. Skills are joined on a single line.
pub fn to_plain_text(tree: &RenderTree) -> String {
    let mut lines: Vec<String> = Vec::new();
    collect_text(&tree.root, &mut lines);
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn collect_text(node: &RenderNode, lines: &mut Vec<String>) {
    match node.tag {
        NodeTag::SkillList => {
            let skills: Vec<&str> = node
                .children
                .iter()
                .filter_map(|c| c.text.as_deref())
                .collect();
            if !skills.is_empty() {
                lines.push(skills.join(", "));
            }
            return;
        }
        NodeTag::SectionTitle => lines.push(String::new()),
        _ => {}
    }
    if let Some(text) = &node.text {
        lines.push(text.clone());
    }
    for child in &node.children {
        collect_text(child, lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tree::ROOT_MARKER;

    #[test]
    fn test_text_is_escaped() {
        let html = to_html(&RenderNode::new(NodeTag::Body).text("R&D <lead>"));
        assert_eq!(html, "<p>R&amp;D &lt;lead&gt;</p>");
    }

    #[test]
    fn test_attributes_and_style_serialized() {
        let node = RenderNode::new(NodeTag::Document)
            .class("resume")
            .attr(ROOT_MARKER, "true")
            .style(InlineStyle {
                font_family: Some("'Georgia', serif".to_string()),
                ..Default::default()
            });
        assert_eq!(
            to_html(&node),
            "<div class=\"resume\" style=\"font-family: &#39;Georgia&#39;, serif\" data-resume-root=\"true\"></div>"
        );
    }

    #[test]
    fn test_css_property_order() {
        let style = InlineStyle {
            opacity: Some(0.8),
            ..InlineStyle::text("#fff", 16)
        };
        assert_eq!(css(&style), "color: #fff; font-size: 16px; opacity: 0.8");
    }

    #[test]
    fn test_plain_text_layout() {
        let tree = RenderTree {
            template_id: "professional".to_string(),
            root: RenderNode::new(NodeTag::Document)
                .child(
                    RenderNode::new(NodeTag::Header)
                        .child(RenderNode::new(NodeTag::Name).text("Ada"))
                        .child(RenderNode::new(NodeTag::Contact).text("a@x.com")),
                )
                .child(
                    RenderNode::new(NodeTag::Section)
                        .child(RenderNode::new(NodeTag::SectionTitle).text("Skills"))
                        .child(
                            RenderNode::new(NodeTag::SkillList)
                                .child(RenderNode::new(NodeTag::Skill).text("Rust"))
                                .child(RenderNode::new(NodeTag::Skill).text("SQL")),
                        ),
                ),
        };
        assert_eq!(to_plain_text(&tree), "Ada\na@x.com\n\nSkills\nRust, SQL\n");
    }
}
