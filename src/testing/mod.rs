//! # Assertions & Results
//!
//! Assertions evaluated against an [`HttpResponse`], the per-check result the
//! harness produces, and the summary report for a whole run.

use serde::Serialize;

use crate::http::response::HttpResponse;

pub const EXIT_CHECKS_PASSED: u8 = 0;
pub const EXIT_CHECKS_FAILED: u8 = 1;

/// Number of body bytes rendered into an assertion's `actual` value.
const BODY_PREVIEW_BYTES: usize = 64;

/// Target of an assertion within the HTTP response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssertionTarget {
    StatusCode,
    /// Raw body bytes.
    Body,
    BodySize,
}

/// Comparison operator for an assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssertionOperator {
    Equals,
    StartsWith,
    GreaterThan,
}

/// A single assertion that can be evaluated against a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assertion {
    pub target: AssertionTarget,
    pub operator: AssertionOperator,
    pub expected: String,
}

/// Result of evaluating an assertion.
#[derive(Debug, Clone, Serialize)]
pub struct AssertionResult {
    pub assertion: Assertion,
    pub passed: bool,
    /// Observed value; for [`AssertionTarget::Body`] only the start of the body.
    pub actual: String,
    pub message: String,
}

impl Assertion {
    pub fn new(
        target: AssertionTarget,
        operator: AssertionOperator,
        expected: impl Into<String>,
    ) -> Self {
        Self {
            target,
            operator,
            expected: expected.into(),
        }
    }

    pub fn status(code: u16) -> Self {
        Self::new(AssertionTarget::StatusCode, AssertionOperator::Equals, code.to_string())
    }

    pub fn body_starts_with(prefix: impl Into<String>) -> Self {
        Self::new(AssertionTarget::Body, AssertionOperator::StartsWith, prefix)
    }

    pub fn body_not_empty() -> Self {
        Self::new(AssertionTarget::BodySize, AssertionOperator::GreaterThan, "0")
    }

    pub fn evaluate(&self, response: &HttpResponse) -> AssertionResult {
        let actual = match self.target {
            AssertionTarget::StatusCode => response.status.to_string(),
            AssertionTarget::Body => body_preview(&response.body),
            AssertionTarget::BodySize => response.size_bytes().to_string(),
        };

        let expected = self.expected.as_str();
        let passed = match (self.target, self.operator) {
            (AssertionTarget::Body, AssertionOperator::Equals) => {
                response.body == expected.as_bytes()
            }
            (AssertionTarget::Body, AssertionOperator::StartsWith) => {
                response.body.starts_with(expected.as_bytes())
            }
            (_, AssertionOperator::Equals) => actual == expected,
            (_, AssertionOperator::StartsWith) => actual.starts_with(expected),
            (_, AssertionOperator::GreaterThan) => {
                match (actual.parse::<f64>(), expected.parse::<f64>()) {
                    (Ok(a), Ok(e)) => a > e,
                    _ => false,
                }
            }
        };

        let message = if passed {
            String::new()
        } else {
            self.describe_failure(&actual)
        };

        AssertionResult {
            assertion: self.clone(),
            passed,
            actual,
            message,
        }
    }

    fn describe_failure(&self, actual: &str) -> String {
        match (self.target, self.operator) {
            (AssertionTarget::StatusCode, AssertionOperator::Equals) => {
                format!("Expected {}, got {actual}", self.expected)
            }
            (AssertionTarget::BodySize, AssertionOperator::GreaterThan) => {
                format!("Expected body larger than {} bytes, got {actual}", self.expected)
            }
            (AssertionTarget::Body, AssertionOperator::StartsWith) => {
                format!("Expected body to start with `{}`, got `{actual}`", self.expected)
            }
            (target, operator) => {
                format!("{target:?} {operator:?} `{}` failed, actual `{actual}`", self.expected)
            }
        }
    }
}

/// Lossy text of the first few body bytes, marked with `…` when cut.
fn body_preview(body: &[u8]) -> String {
    let end = body.len().min(BODY_PREVIEW_BYTES);
    let mut preview = String::from_utf8_lossy(&body[..end]).into_owned();
    if body.len() > end {
        preview.push('…');
    }
    preview
}

/// Outcome of one harness check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Rendered response body, omitted for binary payloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub assertions: Vec<AssertionResult>,
    pub duration_ms: u128,
}

impl CheckResult {
    /// A check that never got a response to assert against.
    pub fn failed(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: false,
            message: message.into(),
            status: None,
            body: None,
            assertions: Vec::new(),
            duration_ms: 0,
        }
    }

    /// A check decided by its assertions against `response`.
    pub fn from_response(
        name: impl Into<String>,
        response: &HttpResponse,
        assertions: Vec<AssertionResult>,
    ) -> Self {
        let passed = assertions.iter().all(|result| result.passed);
        let message = assertions
            .iter()
            .find(|result| !result.passed)
            .map(|result| result.message.clone())
            .unwrap_or_default();

        Self {
            name: name.into(),
            passed,
            message,
            status: Some(response.status),
            body: None,
            assertions,
            duration_ms: response.duration_ms,
        }
    }

    pub fn failed_assertions(&self) -> impl Iterator<Item = &AssertionResult> {
        self.assertions.iter().filter(|result| !result.passed)
    }
}

/// Summary report for a harness run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub base_url: String,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub duration_ms: u128,
    pub results: Vec<CheckResult>,
}

impl RunReport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn push(&mut self, result: CheckResult) {
        self.total += 1;
        if result.passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
        self.results.push(result);
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Process exit status for this run.
    pub fn exit_code(&self) -> u8 {
        if self.all_passed() {
            EXIT_CHECKS_PASSED
        } else {
            EXIT_CHECKS_FAILED
        }
    }
}
