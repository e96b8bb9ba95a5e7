use crate::config::FieldDefaults;
use crate::request::FormFields;

pub const CONTENT_TYPE_HTML: &str = "text/html";

/// The two mutually exclusive response modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// Acknowledge the submitted form and echo its fields.
    Submission,
    /// List the request metadata.
    Diagnostic,
}

/// The three tracked field values, resolved against their defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Submission {
    /// First non-empty value of each field; blank or absent fields take the
    /// default.
    pub fn from_fields(fields: &FormFields, defaults: &FieldDefaults) -> Self {
        Self {
            name: fields.get_non_blank("name", &defaults.name).to_string(),
            email: fields.get_non_blank("email", &defaults.email).to_string(),
            message: fields.get_non_blank("message", &defaults.message).to_string(),
        }
    }
}

/// **RENDERED RESPONSE**
///
/// Header lines plus the document body. Built once by the renderer and
/// written once; there are no mutators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedResponse {
    headers: Vec<(String, String)>,
    body: String,
}

impl RenderedResponse {
    /// A `text/html` document with no other headers.
    pub fn html(body: impl Into<String>) -> Self {
        Self {
            headers: vec![("Content-Type".to_string(), CONTENT_TYPE_HTML.to_string())],
            body: body.into(),
        }
    }

    /// A CGI `Status: 500` response. `message` is inserted as-is, so callers
    /// must pass markup-safe text.
    pub fn internal_error(message: &str) -> Self {
        Self {
            headers: vec![
                ("Status".to_string(), "500 Internal Server Error".to_string()),
                ("Content-Type".to_string(), CONTENT_TYPE_HTML.to_string()),
            ],
            body: format!("<h1>Internal Server Error</h1>\n<p>{}</p>\n", message),
        }
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}
