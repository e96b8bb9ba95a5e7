//! Contact form handler: echoes a submitted form or lists the request metadata.

use formecho::api::Variant;
use std::process::ExitCode;

fn main() -> ExitCode {
    formecho_cgi::run(Variant::ContactForm)
}
