use serde_json::Value;

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub duration_ms: u128,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn size_bytes(&self) -> usize {
        self.body.len()
    }

    /// Decodes the body as JSON, `None` when it is not valid JSON.
    pub fn json(&self) -> Option<Value> {
        serde_json::from_slice(&self.body).ok()
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Compact JSON when the body decodes, lossy text otherwise.
    pub fn render_body(&self) -> String {
        match self.json() {
            Some(value) => value.to_string(),
            None => self.text(),
        }
    }
}
