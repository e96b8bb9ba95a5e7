//! Process surface for the form echo handlers.
//!
//! Each binary in this crate is one CGI program: the gateway sets the request
//! metadata as environment variables, pipes the body to stdin and relays
//! whatever is written to stdout. Logs go to stderr.

use formecho::api::{
    write_response, Environment, FormEchoError, Handler, HandlerConfig, ProcessEnv,
    RenderedResponse, Variant,
};
use std::io::{self, Read, Write};
use std::process::ExitCode;

/// Environment variable holding the `env_logger` filter.
pub const LOG_FILTER_VAR: &str = "FORMECHO_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";

/// Body text of the `500` page. Error details only go to the log.
pub const INTERNAL_ERROR_MESSAGE: &str = "The request could not be processed.";

/// Initializes `env_logger` on stderr. Safe to call more than once.
pub fn init_logging() {
    let env = env_logger::Env::default().filter_or(LOG_FILTER_VAR, DEFAULT_LOG_FILTER);
    let _ = env_logger::Builder::from_env(env)
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .try_init();
}

/// Loads the configuration, substituting the defaults when it cannot be read.
pub fn load_config<E: Environment + ?Sized>(env: &E) -> HandlerConfig {
    HandlerConfig::load(env).unwrap_or_else(|err| {
        log::warn!("Using default configuration: {}", err);
        HandlerConfig::default()
    })
}

/// Entry point shared by all binaries.
pub fn run(variant: Variant) -> ExitCode {
    init_logging();

    let env = ProcessEnv;
    let config = load_config(&env);
    let stdin = io::stdin();
    let stdout = io::stdout();

    match serve(variant, &config, &env, stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{} failed: {}", variant, err);
            ExitCode::FAILURE
        }
    }
}

/// Handles one request from `input` and writes the response to `output`.
///
/// If the handler fails, a `500` response carrying
/// [`INTERNAL_ERROR_MESSAGE`] is written before the error is returned, so the
/// gateway always receives a well-formed reply.
pub fn serve<E, R, W>(
    variant: Variant,
    config: &HandlerConfig,
    env: &E,
    input: R,
    mut output: W,
) -> Result<(), FormEchoError>
where
    E: Environment + ?Sized,
    R: Read,
    W: Write,
{
    let handler = Handler::new(variant, config);
    match handler.handle(env, input) {
        Ok(response) => {
            write_response(&response, &mut output)?;
            Ok(())
        }
        Err(err) => {
            log::error!("{} could not handle the request: {}", variant, err);
            let response = RenderedResponse::internal_error(INTERNAL_ERROR_MESSAGE);
            if let Err(write_err) = write_response(&response, &mut output) {
                log::error!("Could not write error response: {}", write_err);
            }
            Err(err)
        }
    }
}
