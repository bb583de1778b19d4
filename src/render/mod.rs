//! Rendering module for turning read files and documents into text and JSON.

mod json;
mod options;
mod text;
pub mod visitor;

pub use json::{to_json, to_structure_json, JsonFormat};
pub use options::{PageSelection, RenderOptions};
pub use text::{to_page_list, to_text, to_text_with_visitor};
pub use visitor::{CompositeVisitor, DefaultVisitor, DocumentVisitor, VisitorAction};
