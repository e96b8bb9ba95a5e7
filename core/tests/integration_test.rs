use formecho::api::*;
use std::collections::HashMap;

const CONTACT_BODY: &[u8] = b"name=Bob&email=bob%40x.com&message=Hello";

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn run(variant: Variant, vars: &HashMap<String, String>, body: &[u8]) -> String {
    let handler = Handler::new(variant, &HandlerConfig::default());
    let response = handler.handle(vars, body).unwrap();
    String::from_utf8(serialize_response(&response)).unwrap()
}

#[test]
fn test_contact_post_submission() {
    let vars = env(&[
        ("REQUEST_METHOD", "POST"),
        ("CONTENT_TYPE", "application/x-www-form-urlencoded"),
        ("CONTENT_LENGTH", CONTACT_BODY.len().to_string().as_str()),
    ]);
    let output = run(Variant::ContactForm, &vars, CONTACT_BODY);

    assert!(output.starts_with("Content-Type: text/html\r\n\r\n<!DOCTYPE html>"));
    assert!(output.contains("<li><strong>Name:</strong> Bob</li>"));
    assert!(output.contains("<li><strong>Email:</strong> bob@x.com</li>"));
    assert!(output.contains("<li><strong>Message:</strong> Hello</li>"));
}

#[test]
fn test_contact_post_declared_length_is_exact() {
    // The body above is 40 bytes; one byte less cuts the message short.
    let vars = env(&[("REQUEST_METHOD", "POST"), ("CONTENT_LENGTH", "39")]);
    let output = run(Variant::ContactForm, &vars, CONTACT_BODY);

    assert!(output.contains("<li><strong>Name:</strong> Bob</li>"));
    assert!(output.contains("<li><strong>Message:</strong> Hell</li>"));
}

#[test]
fn test_contact_get_diagnostic() {
    let vars = env(&[
        ("REQUEST_METHOD", "GET"),
        ("SERVER_PROTOCOL", "HTTP/1.1"),
        ("REQUEST_URI", "/cgi-bin/contact"),
    ]);
    let output = run(Variant::ContactForm, &vars, b"");

    assert!(output.contains("<li><strong>REQUEST_METHOD:</strong> GET</li>"));
    assert!(output.contains("<li><strong>REQUEST_URI:</strong> /cgi-bin/contact</li>"));
    assert!(output.contains("<li><strong>CONTENT_LENGTH:</strong> &lt;not set&gt;</li>"));
    assert!(output.contains("<li><strong>SERVER_PORT:</strong> &lt;not set&gt;</li>"));
    assert!(!output.contains("Received Data"));
}

#[test]
fn test_contact_post_blank_fields_fall_back_to_diagnostic() {
    let body = b"name=&email=&message=";
    let vars = env(&[
        ("REQUEST_METHOD", "POST"),
        ("CONTENT_LENGTH", body.len().to_string().as_str()),
    ]);
    let output = run(Variant::ContactForm, &vars, body);

    assert!(output.contains("<li><strong>REQUEST_METHOD:</strong> POST</li>"));
    assert!(!output.contains("Success!"));
}

#[test]
fn test_contact_post_blank_then_filled_field() {
    let body = b"name=&name=Bob";
    let vars = env(&[
        ("REQUEST_METHOD", "POST"),
        ("CONTENT_LENGTH", body.len().to_string().as_str()),
    ]);
    let output = run(Variant::ContactForm, &vars, body);

    assert!(output.contains("Success!"));
    assert!(output.contains("<li><strong>Name:</strong> Bob</li>"));
}

#[test]
fn test_contact_post_over_configured_limit_is_not_echoed() {
    let config = HandlerConfig::from_json(r#"{"max_body_size": 16}"#).unwrap();
    let handler = Handler::new(Variant::ContactForm, &config);
    let vars = env(&[
        ("REQUEST_METHOD", "POST"),
        ("CONTENT_LENGTH", CONTACT_BODY.len().to_string().as_str()),
    ]);

    let response = handler.handle(&vars, CONTACT_BODY).unwrap();
    assert!(!response.body().contains("Success!"));
    assert!(!response.body().contains("Bob"));
    assert!(response.body().contains("<li><strong>CONTENT_LENGTH:</strong> 40</li>"));
}

#[test]
fn test_contact_post_malformed_length_reads_nothing() {
    let vars = env(&[("REQUEST_METHOD", "POST"), ("CONTENT_LENGTH", "forty")]);
    let output = run(Variant::ContactForm, &vars, CONTACT_BODY);

    assert!(output.contains("<li><strong>CONTENT_LENGTH:</strong> forty</li>"));
    assert!(!output.contains("Received Data"));
}

#[test]
fn test_contact_post_short_stream() {
    let vars = env(&[("REQUEST_METHOD", "POST"), ("CONTENT_LENGTH", "4096")]);
    let output = run(Variant::ContactForm, &vars, b"message=partial");

    assert!(output.contains("<li><strong>Message:</strong> partial</li>"));
    assert!(output.contains("<li><strong>Name:</strong> </li>"));
}

#[test]
fn test_env_info_page() {
    let vars = env(&[
        ("REQUEST_METHOD", "GET"),
        ("QUERY_STRING", "a=<b>"),
        ("SERVER_NAME", "localhost"),
        ("SERVER_PORT", "8080"),
    ]);
    let output = run(Variant::EnvInfo, &vars, b"");

    assert!(output.contains("<h1>CGI Environment Variables</h1>"));
    assert!(output.contains("<li><strong>QUERY_STRING:</strong> a=&lt;b&gt;</li>"));
    assert!(output.contains("<li><strong>SERVER_PORT:</strong> 8080</li>"));
}

#[test]
fn test_form_echo_defaults() {
    let vars = env(&[("REQUEST_METHOD", "GET"), ("SERVER_PROTOCOL", "HTTP/1.0")]);
    let output = run(Variant::FormEcho, &vars, b"");

    assert!(output.contains("<li><strong>Protocol:</strong> HTTP/1.0</li>"));
    assert!(output.contains("<li><strong>Name:</strong> Guest</li>"));
    assert!(output.contains("<li><strong>Email:</strong> Not provided</li>"));
    assert!(output.contains("<li><strong>Message:</strong> No message</li>"));
}

#[test]
fn test_unescaped_mode_preserves_markup() {
    let config = HandlerConfig::from_json(r#"{"escape_html": false}"#).unwrap();
    let handler = Handler::new(Variant::ContactForm, &config);
    let body = b"name=%3Ci%3EBob%3C%2Fi%3E";
    let vars = env(&[
        ("REQUEST_METHOD", "POST"),
        ("CONTENT_LENGTH", body.len().to_string().as_str()),
    ]);

    let response = handler.handle(&vars, &body[..]).unwrap();
    assert!(response.body().contains("<li><strong>Name:</strong> <i>Bob</i></li>"));
}
