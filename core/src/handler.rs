//! # REQUEST PIPELINE
//!
//! One invocation per request, strictly sequential:
//! environment snapshot → body read → decode → select → render.
//! The only error that escapes is an I/O failure on the input stream.

use crate::config::{FieldDefaults, HandlerConfig};
use crate::context::{Environment, MetadataKey, RequestContext};
use crate::errors::FormEchoError;
use crate::request::{parse_form_body, parse_query_string, BodyReader, FormFields};
use crate::response::{select_branch, Branch, RenderedResponse, Renderer, Submission};
use std::fmt;
use std::io::Read;

/// Which page a handler produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Echo a submitted contact form, or list request metadata when nothing
    /// was submitted. The body is read for POST requests only.
    ContactForm,
    /// Always list request metadata. The body is drained and discarded.
    EnvInfo,
    /// Always echo the form fields (from the body on POST, plus the query
    /// string), filling gaps with placeholder text.
    FormEcho,
}

impl Variant {
    /// Field defaults used when the configuration does not override them.
    pub fn field_defaults(self) -> FieldDefaults {
        match self {
            Variant::ContactForm | Variant::EnvInfo => FieldDefaults::blank(),
            Variant::FormEcho => FieldDefaults::new("Guest", "Not provided", "No message"),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::ContactForm => "contact",
            Variant::EnvInfo => "env-info",
            Variant::FormEcho => "form-echo",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone)]
pub struct Handler {
    variant: Variant,
    body_reader: BodyReader,
    renderer: Renderer,
    defaults: FieldDefaults,
}

impl Handler {
    pub fn new(variant: Variant, config: &HandlerConfig) -> Self {
        Self {
            variant,
            body_reader: BodyReader::new(config.max_body_size),
            renderer: Renderer::new(config),
            defaults: config
                .field_defaults
                .clone()
                .unwrap_or_else(|| variant.field_defaults()),
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Runs the pipeline for one request.
    ///
    /// `input` is consumed for at most `CONTENT_LENGTH` bytes and must not be
    /// read again afterwards.
    pub fn handle<E, R>(&self, env: &E, input: R) -> Result<RenderedResponse, FormEchoError>
    where
        E: Environment + ?Sized,
        R: Read,
    {
        let context = RequestContext::capture(env);

        let response = match self.variant {
            Variant::ContactForm => {
                let fields = if context.is_post() {
                    parse_form_body(&self.body_reader.read(&context, input)?)
                } else {
                    FormFields::new()
                };

                let branch = select_branch(&fields);
                log::debug!("{}: selected {:?} branch", self.variant, branch);
                match branch {
                    Branch::Submission => {
                        let submission = Submission::from_fields(&fields, &self.defaults);
                        self.renderer.render_contact(&context, Some(&submission))
                    }
                    Branch::Diagnostic => self.renderer.render_contact(&context, None),
                }
            }
            Variant::EnvInfo => {
                let body = self.body_reader.read(&context, input)?;
                log::debug!("{}: discarded {} body bytes", self.variant, body.len());
                self.renderer.render_env_info(&context)
            }
            Variant::FormEcho => {
                let fields = self.form_echo_fields(&context, input)?;
                let submission = Submission::from_fields(&fields, &self.defaults);
                self.renderer.render_form_echo(&context, &submission)
            }
        };

        Ok(response)
    }

    /// Body fields first on POST, then the query string.
    fn form_echo_fields<R: Read>(
        &self,
        context: &RequestContext,
        input: R,
    ) -> Result<FormFields, FormEchoError> {
        let query = parse_query_string(context.get(MetadataKey::QueryString).unwrap_or(""));
        if !context.is_post() {
            return Ok(query);
        }

        let mut fields = parse_form_body(&self.body_reader.read(context, input)?);
        fields.append(query);
        Ok(fields)
    }
}
