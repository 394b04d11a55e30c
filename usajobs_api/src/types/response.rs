use reqwest::header::HeaderMap;
use reqwest::StatusCode;

/// A decoded response together with the HTTP metadata it arrived with.
///
/// A non-success status is not an error at this layer: the API sends JSON
/// error bodies on failure, and those are decoded like any other payload.
/// Callers should check [`ApiResponse::is_success`] before trusting `data`.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub status: StatusCode,
    pub status_text: String,
    pub headers: HeaderMap,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Status line as `"404 Not Found"`.
    pub fn status_line(&self) -> String {
        format!("{} {}", self.status.as_u16(), self.status_text)
            .trim_end()
            .to_string()
    }
}
