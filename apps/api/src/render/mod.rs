// Render Engine: (sections, template, colours, fonts) -> styled node tree,
// plus serializers that consume a finished tree.

pub mod engine;
pub mod html;
pub mod tree;

pub use engine::render;
pub use tree::{NodeTag, RenderNode, RenderTree, ROOT_MARKER};
