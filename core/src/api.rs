pub use crate::config::{FieldDefaults, HandlerConfig, CONFIG_PATH_VAR};
pub use crate::context::{Environment, MetadataKey, ProcessEnv, RequestContext, NOT_SET};
pub use crate::errors::FormEchoError;
pub use crate::handler::{Handler, Variant};
pub use crate::request::{parse_form_body, parse_query_string, read_body, FormFields};
pub use crate::response::{
    escape_html, select_branch, serialize_response, write_response, Branch, RenderedResponse,
};
