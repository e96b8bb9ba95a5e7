//! # FORMECHO CORE LIBRARY
//!
//! **CGI FORM ECHO AND REQUEST DIAGNOSTICS**
//!
//! Reads the request metadata a CGI gateway passes through the environment,
//! reads and decodes a URL-encoded body, and renders either the submitted
//! fields or the metadata as an HTML document.
//!
//! **GUARANTEE**: Every invocation produces a complete response unless the
//! input stream itself fails. Malformed metadata and form data are
//! normalized to defaults, never reported as errors.

pub mod api;
pub mod config;
pub mod context;
pub mod errors;
pub mod handler;
pub mod request;
pub mod response;
pub mod validation;
