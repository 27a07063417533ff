use std::path::PathBuf;
use std::time::Duration;

use crate::sample::SAMPLE_HTML_TABLE;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_OUTPUT_PATH: &str = "test_report.pdf";

/// Everything a [`crate::Harness`] needs for one run.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub base_url: String,
    pub output_path: PathBuf,
    pub html_table: String,
    /// `None` leaves the HTTP client's default in place.
    pub timeout: Option<Duration>,
}

impl HarnessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            ..Default::default()
        }
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_html_table(mut self, html: impl Into<String>) -> Self {
        self.html_table = html.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout.filter(|t| !t.is_zero());
        self
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            html_table: SAMPLE_HTML_TABLE.to_string(),
            timeout: None,
        }
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
