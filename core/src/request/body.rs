use crate::context::RequestContext;
use crate::errors::FormEchoError;
use crate::validation::{error_codes, ContentLengthValidator, Validator};
use std::io::{self, Read};

/// Reads the request body, bounded by the declared content length.
#[derive(Debug, Clone, Default)]
pub struct BodyReader {
    validator: ContentLengthValidator,
}

impl BodyReader {
    /// `None` reads whatever length the request declares.
    pub fn new(max_body_size: Option<u64>) -> Self {
        Self {
            validator: max_body_size
                .map_or_else(ContentLengthValidator::unlimited, ContentLengthValidator::new),
        }
    }

    /// Number of bytes the reader will consume for this request.
    ///
    /// Never fails: a missing or malformed `CONTENT_LENGTH` counts as zero, and
    /// so does a length above the configured limit. A body is either read in
    /// full or not at all.
    pub fn effective_length(&self, context: &RequestContext) -> u64 {
        let raw = match context.content_length.as_deref() {
            Some(raw) => raw,
            None => return 0,
        };

        match self.validator.validate(raw.to_string()) {
            Ok(length) => length,
            Err(FormEchoError::Validation { code, message }) if code == error_codes::BODY_TOO_LARGE => {
                log::warn!("{}; ignoring the request body", message);
                0
            }
            Err(err) => {
                log::debug!("Treating content length as 0: {}", err);
                0
            }
        }
    }

    /// Reads exactly [`effective_length`](Self::effective_length) bytes, or
    /// fewer if the stream ends first. Nothing is read when the length is 0.
    pub fn read<R: Read>(&self, context: &RequestContext, input: R) -> io::Result<Vec<u8>> {
        read_body(input, self.effective_length(context))
    }
}

/// Reads up to `length` bytes from `input`.
///
/// Blocks until `length` bytes arrived or the stream is exhausted; a short
/// stream is returned as-is. Never reads past `length`.
pub fn read_body<R: Read>(input: R, length: u64) -> io::Result<Vec<u8>> {
    if length == 0 {
        return Ok(Vec::new());
    }

    // Cap the preallocation; the declared length is client-controlled.
    let capacity = usize::try_from(length).unwrap_or(usize::MAX).min(64 * 1024);
    let mut buffer = Vec::with_capacity(capacity);
    input.take(length).read_to_end(&mut buffer)?;

    if (buffer.len() as u64) < length {
        log::debug!(
            "Request body ended after {} of {} declared bytes",
            buffer.len(),
            length
        );
    }
    Ok(buffer)
}
