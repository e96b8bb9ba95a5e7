use super::source::Environment;
use serde::Serialize;
use std::fmt;

/// Shown in diagnostic output for metadata the gateway did not supply.
pub const NOT_SET: &str = "<not set>";

/// The fixed set of request metadata keys, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataKey {
    RequestMethod,
    RequestUri,
    QueryString,
    ContentType,
    ContentLength,
    ServerProtocol,
    ServerName,
    ServerPort,
}

impl MetadataKey {
    pub const ALL: [MetadataKey; 8] = [
        MetadataKey::RequestMethod,
        MetadataKey::RequestUri,
        MetadataKey::QueryString,
        MetadataKey::ContentType,
        MetadataKey::ContentLength,
        MetadataKey::ServerProtocol,
        MetadataKey::ServerName,
        MetadataKey::ServerPort,
    ];

    /// The CGI environment variable name.
    pub fn as_str(self) -> &'static str {
        match self {
            MetadataKey::RequestMethod => "REQUEST_METHOD",
            MetadataKey::RequestUri => "REQUEST_URI",
            MetadataKey::QueryString => "QUERY_STRING",
            MetadataKey::ContentType => "CONTENT_TYPE",
            MetadataKey::ContentLength => "CONTENT_LENGTH",
            MetadataKey::ServerProtocol => "SERVER_PROTOCOL",
            MetadataKey::ServerName => "SERVER_NAME",
            MetadataKey::ServerPort => "SERVER_PORT",
        }
    }
}

impl fmt::Display for MetadataKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// **REQUEST CONTEXT**
///
/// Immutable snapshot of the request metadata, captured once per invocation.
/// Absent values stay `None`; the `<not set>` sentinel only appears through
/// [`RequestContext::display`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequestContext {
    pub method: Option<String>,
    pub uri: Option<String>,
    pub query_string: Option<String>,
    pub content_type: Option<String>,
    pub content_length: Option<String>,
    pub protocol: Option<String>,
    pub server_name: Option<String>,
    pub server_port: Option<String>,
}

impl RequestContext {
    /// Reads every [`MetadataKey`] from `env`.
    pub fn capture<E: Environment + ?Sized>(env: &E) -> Self {
        let context = Self {
            method: env.var(MetadataKey::RequestMethod.as_str()),
            uri: env.var(MetadataKey::RequestUri.as_str()),
            query_string: env.var(MetadataKey::QueryString.as_str()),
            content_type: env.var(MetadataKey::ContentType.as_str()),
            content_length: env.var(MetadataKey::ContentLength.as_str()),
            protocol: env.var(MetadataKey::ServerProtocol.as_str()),
            server_name: env.var(MetadataKey::ServerName.as_str()),
            server_port: env.var(MetadataKey::ServerPort.as_str()),
        };
        log::debug!(
            "Captured request context: {}",
            serde_json::to_string(&context).unwrap_or_default()
        );
        context
    }

    pub fn get(&self, key: MetadataKey) -> Option<&str> {
        let value = match key {
            MetadataKey::RequestMethod => &self.method,
            MetadataKey::RequestUri => &self.uri,
            MetadataKey::QueryString => &self.query_string,
            MetadataKey::ContentType => &self.content_type,
            MetadataKey::ContentLength => &self.content_length,
            MetadataKey::ServerProtocol => &self.protocol,
            MetadataKey::ServerName => &self.server_name,
            MetadataKey::ServerPort => &self.server_port,
        };
        value.as_deref()
    }

    /// The value for `key`, or [`NOT_SET`].
    pub fn display(&self, key: MetadataKey) -> &str {
        self.get(key).unwrap_or(NOT_SET)
    }

    /// Case-sensitive, as the gateway passes the request line's method verbatim.
    pub fn is_post(&self) -> bool {
        self.method.as_deref() == Some("POST")
    }

    /// `(key, value-or-sentinel)` pairs in display order.
    pub fn entries(&self) -> impl Iterator<Item = (MetadataKey, &str)> + '_ {
        MetadataKey::ALL
            .into_iter()
            .map(move |key| (key, self.display(key)))
    }
}
