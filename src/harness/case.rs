use serde_json::{Value, json};

use crate::error::HarnessError;
use crate::http::client::endpoint_url;
use crate::http::method::HttpMethod;
use crate::http::request::RequestInput;
use crate::testing::Assertion;

pub const HEALTH_PATH: &str = "/";
pub const GENERATE_PDF_PATH: &str = "/api/generate-pdf";

/// PDF files start with this marker.
pub const PDF_MAGIC: &str = "%PDF";

/// One request against the service together with what it must satisfy.
#[derive(Debug, Clone)]
pub struct TestCase {
    pub name: String,
    pub method: HttpMethod,
    pub path: &'static str,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
    pub expected_status: u16,
    pub assertions: Vec<Assertion>,
}

impl TestCase {
    pub fn new(
        name: impl Into<String>,
        method: HttpMethod,
        path: &'static str,
        expected_status: u16,
    ) -> Self {
        Self {
            name: name.into(),
            method,
            path,
            headers: Vec::new(),
            body: None,
            expected_status,
            assertions: vec![Assertion::status(expected_status)],
        }
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    pub fn json_body(self, body: Value) -> Self {
        let mut case = self.header("Content-Type", "application/json");
        case.body = Some(body);
        case
    }

    pub fn assert(mut self, assertion: Assertion) -> Self {
        self.assertions.push(assertion);
        self
    }

    pub fn health() -> Self {
        Self::new("health check endpoint", HttpMethod::Get, HEALTH_PATH, 200)
    }

    pub fn generate_pdf(html_table: &str) -> Self {
        Self::new("PDF generation endpoint", HttpMethod::Post, GENERATE_PDF_PATH, 200)
            .json_body(json!({ "htmlTable": html_table }))
            .assert(Assertion::body_not_empty())
            .assert(Assertion::body_starts_with(PDF_MAGIC))
    }

    pub fn missing_html_table() -> Self {
        Self::new("missing htmlTable field", HttpMethod::Post, GENERATE_PDF_PATH, 400)
            .json_body(json!({}))
    }

    pub fn empty_html_table() -> Self {
        Self::new("empty htmlTable", HttpMethod::Post, GENERATE_PDF_PATH, 400)
            .json_body(json!({ "htmlTable": "" }))
    }

    pub fn to_request(&self, base_url: &str) -> Result<RequestInput, HarnessError> {
        let url = endpoint_url(base_url, self.path)?;
        let body = self.body.as_ref().map(serde_json::to_vec).transpose()?;

        Ok(RequestInput {
            method: self.method,
            url: url.to_string(),
            headers: self.headers.clone(),
            body,
        })
    }
}
