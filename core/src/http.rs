//! HTTP request/response types exchanged with the transport.
//!
//! # Design
//! The dispatch engine never talks to the network directly. It builds an
//! `HttpRequest` per hook and hands it to a `Transport`, which returns an
//! `HttpResponse` describing what the server said. Keeping these as plain
//! data lets tests swap in a fake transport that counts calls or injects
//! failures without opening a socket.

use url::Url;

use crate::verb::Verb;

/// An HTTP request described as plain data.
///
/// Built by `Hook::request`. Hooks never attach headers or a body to the
/// wire request, but the fields exist so transports stay general.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Verb,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// What the server answered, as far as the dispatch engine cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// The URL that finally answered, after any redirects.
    pub final_url: String,
    pub status: u16,
    /// Reason phrase for `status`, e.g. `Not Found`.
    pub status_text: String,
}

/// Reason phrase for a status code, falling back to the bare number for
/// codes without a registered phrase.
pub fn status_text(status: u16) -> String {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .map(str::to_string)
        .unwrap_or_else(|| status.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_text_uses_reason_phrase() {
        assert_eq!(status_text(200), "OK");
        assert_eq!(status_text(404), "Not Found");
        assert_eq!(status_text(500), "Internal Server Error");
    }

    #[test]
    fn status_text_falls_back_to_code() {
        assert_eq!(status_text(599), "599");
        assert_eq!(status_text(1000), "1000");
    }
}
