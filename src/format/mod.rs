//! Rendering a graph as text or JSON.

pub mod json;
pub mod text;

pub use json::{GraphSnapshot, JsonWriter, NodeSnapshot};
pub use text::TextWriter;
