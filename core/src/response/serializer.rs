use crate::response::types::RenderedResponse;
use std::io::{self, Write};

const CRLF: &[u8] = b"\r\n";

/// Header lines terminated by CR LF, a blank CR LF line, then the body.
///
/// The blank line is what the gateway uses to find the end of the headers;
/// a response without it is not a valid CGI response.
pub fn serialize_response(response: &RenderedResponse) -> Vec<u8> {
    let mut buf = Vec::with_capacity(response.body().len() + 64);
    for (name, value) in response.headers() {
        buf.extend_from_slice(name.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(value.as_bytes());
        buf.extend_from_slice(CRLF);
    }
    buf.extend_from_slice(CRLF);
    buf.extend_from_slice(response.body().as_bytes());
    buf
}

/// Writes the serialized response in one call and flushes.
pub fn write_response<W: Write>(response: &RenderedResponse, mut output: W) -> io::Result<()> {
    output.write_all(&serialize_response(response))?;
    output.flush()
}
