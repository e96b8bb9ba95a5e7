//! Lists the CGI request metadata.

use formecho::api::Variant;
use std::process::ExitCode;

fn main() -> ExitCode {
    formecho_cgi::run(Variant::EnvInfo)
}
