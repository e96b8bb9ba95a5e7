//! Echoes form fields from the body and query string, with placeholder defaults.

use formecho::api::Variant;
use std::process::ExitCode;

fn main() -> ExitCode {
    formecho_cgi::run(Variant::FormEcho)
}
