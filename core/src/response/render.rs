use crate::config::HandlerConfig;
use crate::context::{MetadataKey, RequestContext};
use crate::response::types::{RenderedResponse, Submission};
use std::borrow::Cow;

const UNKNOWN: &str = "Unknown";

/// Replaces `& < > " '` with character references.
pub fn escape_html(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 16);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Fills the page templates. Rendering cannot fail.
#[derive(Debug, Clone)]
pub struct Renderer {
    escape: bool,
    stylesheet: String,
}

impl Renderer {
    pub fn new(config: &HandlerConfig) -> Self {
        Self {
            escape: config.escape_html,
            stylesheet: config.stylesheet.clone(),
        }
    }

    /// Contact form result: the submission when there is one, otherwise the
    /// request metadata.
    pub fn render_contact(
        &self,
        context: &RequestContext,
        submission: Option<&Submission>,
    ) -> RenderedResponse {
        let mut html = self.card_open("CGI Response", "CGI Response");
        match submission {
            Some(submission) => html.push_str(&self.submission_block(submission)),
            None => {
                html.push_str(DIAGNOSTIC_INTRO);
                html.push_str(&self.metadata_list(context));
            }
        }
        html.push_str(CARD_CLOSE);
        RenderedResponse::html(html)
    }

    /// Request metadata only.
    pub fn render_env_info(&self, context: &RequestContext) -> RenderedResponse {
        let mut html = self.card_open("CGI Environment Info", "CGI Environment Variables");
        html.push_str(DIAGNOSTIC_INTRO);
        html.push_str(&self.metadata_list(context));
        html.push_str(CARD_CLOSE);
        RenderedResponse::html(html)
    }

    /// Server info next to the (defaulted) form fields.
    pub fn render_form_echo(
        &self,
        context: &RequestContext,
        submission: &Submission,
    ) -> RenderedResponse {
        let method = context.get(MetadataKey::RequestMethod).unwrap_or(UNKNOWN);
        let protocol = context.get(MetadataKey::ServerProtocol).unwrap_or(UNKNOWN);

        let html = format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>CGI Response - WebServ</title>
    <link rel="stylesheet" href="{stylesheet}">
</head>
<body>
    <header>
        <div class="container">
            <nav>
                <a href="/" class="logo">WebServ</a>
                <div class="nav-links">
                    <a href="/">Home</a>
                    <a href="/services.html">Services</a>
                    <a href="/contact.html">Contact</a>
                </div>
            </nav>
        </div>
    </header>

    <main>
        <div class="container">
            <div class="card" style="max-width: 800px; margin: 0 auto;">
                <div style="text-align: center; margin-bottom: 2rem;">
                    <h1>CGI Response Received</h1>
                    <p style="color: var(--success);">Script executed successfully!</p>
                </div>

                <div class="grid grid-2">
                    <div>
                        <h3>Server Info</h3>
                        <ul style="color: var(--text-muted);">
                            <li><strong>Method:</strong> {method}</li>
                            <li><strong>Protocol:</strong> {protocol}</li>
                            <li><strong>Runtime:</strong> Rust</li>
                        </ul>
                    </div>
                    <div>
                        <h3>Form Data</h3>
                        <ul style="color: var(--text-muted);">
                            <li><strong>Name:</strong> {name}</li>
                            <li><strong>Email:</strong> {email}</li>
                            <li><strong>Message:</strong> {message}</li>
                        </ul>
                    </div>
                </div>

                <div class="mt-4 text-center">
                    <a href="/contact.html" class="btn btn-primary">Send Another</a>
                    <a href="/" class="btn btn-outline">Back Home</a>
                </div>
            </div>
        </div>
    </main>
</body>
</html>
"#,
            stylesheet = escape_html(&self.stylesheet),
            method = self.value(method),
            protocol = self.value(protocol),
            name = self.value(&submission.name),
            email = self.value(&submission.email),
            message = self.value(&submission.message),
        );
        RenderedResponse::html(html)
    }

    /// Request-supplied text, escaped unless escaping is switched off.
    fn value<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        if self.escape {
            escape_html(raw)
        } else {
            Cow::Borrowed(raw)
        }
    }

    fn card_open(&self, title: &str, heading: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <link rel="stylesheet" href="{stylesheet}">
</head>
<body>
    <div class="container">
        <div class="card" style="margin-top: 2rem;">
            <h1>{heading}</h1>
"#,
            title = title,
            heading = heading,
            stylesheet = escape_html(&self.stylesheet),
        )
    }

    fn submission_block(&self, submission: &Submission) -> String {
        format!(
            r#"            <div style="background-color: #d4edda; color: #155724; padding: 1rem; border-radius: 0.25rem; margin-bottom: 1rem;">
                <strong>Success!</strong> Form submitted successfully.
            </div>
            <h3>Received Data:</h3>
            <ul>
                <li><strong>Name:</strong> {}</li>
                <li><strong>Email:</strong> {}</li>
                <li><strong>Message:</strong> {}</li>
            </ul>
"#,
            self.value(&submission.name),
            self.value(&submission.email),
            self.value(&submission.message),
        )
    }

    fn metadata_list(&self, context: &RequestContext) -> String {
        let mut list = String::from("            <ul>\n");
        for (key, value) in context.entries() {
            list.push_str(&format!(
                "                <li><strong>{}:</strong> {}</li>\n",
                key,
                self.value(value)
            ));
        }
        list.push_str("            </ul>\n");
        list
    }
}

const DIAGNOSTIC_INTRO: &str =
    "            <p>This script prints selected CGI-related environment variables.</p>\n";

const CARD_CLOSE: &str = r#"            <div class="mt-4">
                <a href="/services.html" class="btn btn-outline">Back to Services</a>
            </div>
        </div>
    </div>
</body>
</html>
"#;
