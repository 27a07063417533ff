//! # Harness
//!
//! Runs the contract checks against the PDF service one after another. Each
//! check catches its own failures and reports them as a failed
//! [`CheckResult`], so a dead service still yields a result for every check.

pub mod case;

use std::path::Path;
use std::time::Instant;

use reqwest::Client;

use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::http::client::{build_client, send_request};
use crate::http::response::HttpResponse;
use crate::testing::{AssertionResult, CheckResult, RunReport};

pub use case::TestCase;

pub struct Harness {
    client: Client,
    config: HarnessConfig,
}

impl Harness {
    pub fn new(config: HarnessConfig) -> Result<Self, HarnessError> {
        let client = build_client(config.timeout)?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Sends `case` and evaluates its assertions.
    pub async fn execute(
        &self,
        case: &TestCase,
    ) -> Result<(HttpResponse, Vec<AssertionResult>), HarnessError> {
        let request = case.to_request(&self.config.base_url)?;
        let response = send_request(&self.client, request).await?;
        let results = case
            .assertions
            .iter()
            .map(|assertion| assertion.evaluate(&response))
            .collect();
        Ok((response, results))
    }

    pub async fn check_health(&self) -> CheckResult {
        let case = TestCase::health();
        match self.execute(&case).await {
            Ok((response, assertions)) => {
                let mut result = CheckResult::from_response(&case.name, &response, assertions);
                result.body = Some(response.render_body());
                if result.passed {
                    result.message = "Service is healthy".to_string();
                }
                result
            }
            Err(err) => CheckResult::failed(&case.name, err.chain_message()),
        }
    }

    /// Posts `html_input` and, on a 200, writes the returned bytes to `output_path`.
    pub async fn generate_pdf(&self, html_input: &str, output_path: &Path) -> CheckResult {
        let case = TestCase::generate_pdf(html_input);
        let (response, assertions) = match self.execute(&case).await {
            Ok(outcome) => outcome,
            Err(err) => return CheckResult::failed(&case.name, err.chain_message()),
        };

        let mut result = CheckResult::from_response(&case.name, &response, assertions);
        if response.status != case.expected_status {
            result.message = format!("Error: {}", response.render_body());
            result.body = Some(response.render_body());
            return result;
        }

        if let Err(source) = tokio::fs::write(output_path, &response.body).await {
            let err = HarnessError::io("write", output_path, source);
            result.passed = false;
            result.message = err.chain_message();
            return result;
        }

        tracing::debug!(
            path = %output_path.display(),
            size_bytes = response.size_bytes(),
            "saved pdf"
        );
        if result.passed {
            result.message = format!(
                "PDF generated successfully! Saved as '{}'. File size: {} bytes",
                output_path.display(),
                response.size_bytes()
            );
        } else {
            result.message = format!(
                "{} (response saved as '{}', {} bytes)",
                result.message,
                output_path.display(),
                response.size_bytes()
            );
        }
        result
    }

    /// Sends the two malformed generation requests. Each one is its own result.
    pub async fn check_error_cases(&self) -> Vec<CheckResult> {
        let mut results = Vec::with_capacity(2);
        for case in [TestCase::missing_html_table(), TestCase::empty_html_table()] {
            results.push(self.check_rejected(&case).await);
        }
        results
    }

    async fn check_rejected(&self, case: &TestCase) -> CheckResult {
        match self.execute(case).await {
            Ok((response, assertions)) => {
                let mut result = CheckResult::from_response(&case.name, &response, assertions);
                let body = response.render_body();
                if result.passed {
                    result.message = format!("Correctly returned {}: {body}", response.status);
                }
                result.body = Some(body);
                result
            }
            Err(err) => CheckResult::failed(&case.name, err.chain_message()),
        }
    }

    /// Runs every check in order, handing each result to `on_result` as soon
    /// as it is available.
    pub async fn run<F>(&self, mut on_result: F) -> RunReport
    where
        F: FnMut(&CheckResult),
    {
        let started = Instant::now();
        let mut report = RunReport::new(&self.config.base_url);

        let mut record = |result: CheckResult, report: &mut RunReport| {
            if !result.passed {
                tracing::info!(check = %result.name, message = %result.message, "check failed");
            }
            on_result(&result);
            report.push(result);
        };

        record(self.check_health().await, &mut report);
        record(
            self.generate_pdf(&self.config.html_table, &self.config.output_path)
                .await,
            &mut report,
        );
        for result in self.check_error_cases().await {
            record(result, &mut report);
        }

        report.duration_ms = started.elapsed().as_millis();
        tracing::info!(
            total = report.total,
            passed = report.passed,
            failed = report.failed,
            "run finished"
        );
        report
    }
}
