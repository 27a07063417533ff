use super::method::HttpMethod;

/// A fully resolved request, ready for [`super::client::send_request`].
#[derive(Debug, Clone)]
pub struct RequestInput {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}
