pub mod render;
pub mod selector;
pub mod serializer;
pub mod types;

pub use render::{escape_html, Renderer};
pub use selector::{select_branch, TRACKED_FIELDS};
pub use serializer::{serialize_response, write_response};
pub use types::{Branch, RenderedResponse, Submission, CONTENT_TYPE_HTML};
