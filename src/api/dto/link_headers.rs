//! Fixed set of headers emitted by the shorten and redirect endpoints.

use axum::http::{HeaderMap, HeaderName, HeaderValue, header};
use axum::response::{IntoResponseParts, ResponseParts};
use serde_json::json;

use crate::error::AppError;

/// Optional `Location` and `Link` headers.
///
/// Fields left as `None` are not sent.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LinkHeaders {
    pub location: Option<String>,
    pub link: Option<String>,
}

impl LinkHeaders {
    /// Headers for a shortened link: where it redirects from, and where its
    /// statistics live.
    pub fn shortened(short_url: &str, stats_url: &str) -> Self {
        Self {
            location: Some(short_url.to_string()),
            link: Some(format!("<{}>; rel=\"stats\"", stats_url)),
        }
    }

    /// Headers for a redirect to `destination`.
    ///
    /// ASCII control characters other than tab are not allowed in header
    /// values and are percent-encoded.
    pub fn redirect(destination: &str) -> Self {
        Self {
            location: Some(escape_controls(destination)),
            link: None,
        }
    }

    /// Builds the header map.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if a value is not a valid header value.
    pub fn into_header_map(self) -> Result<HeaderMap, AppError> {
        let mut headers = HeaderMap::new();

        for (name, value) in [(header::LOCATION, self.location), (header::LINK, self.link)] {
            if let Some(value) = value {
                headers.insert(name.clone(), to_header_value(&name, value)?);
            }
        }

        Ok(headers)
    }
}

fn escape_controls(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for c in value.chars() {
        if c.is_ascii_control() && c != '\t' {
            escaped.push_str(&format!("%{:02X}", c as u8));
        } else {
            escaped.push(c);
        }
    }

    escaped
}

fn to_header_value(name: &HeaderName, value: String) -> Result<HeaderValue, AppError> {
    HeaderValue::try_from(value).map_err(|e| {
        AppError::internal(
            "Invalid response header value",
            json!({ "header": name.as_str(), "reason": e.to_string() }),
        )
    })
}

impl IntoResponseParts for LinkHeaders {
    type Error = AppError;

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        res.headers_mut().extend(self.into_header_map()?);
        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortened_headers() {
        let headers = LinkHeaders::shortened(
            "http://localhost:8888/r/abc",
            "http://localhost:8888/api/stats/abc",
        )
        .into_header_map()
        .unwrap();

        assert_eq!(headers[header::LOCATION], "http://localhost:8888/r/abc");
        assert_eq!(
            headers[header::LINK],
            "<http://localhost:8888/api/stats/abc>; rel=\"stats\""
        );
    }

    #[test]
    fn test_redirect_headers_omit_link() {
        let headers = LinkHeaders::redirect("https://example.com/a")
            .into_header_map()
            .unwrap();

        assert_eq!(headers[header::LOCATION], "https://example.com/a");
        assert!(headers.get(header::LINK).is_none());
    }

    #[test]
    fn test_empty_headers() {
        assert!(LinkHeaders::default().into_header_map().unwrap().is_empty());
    }

    #[test]
    fn test_redirect_escapes_control_characters() {
        let headers = LinkHeaders::redirect(" https://example.com/a\r\n")
            .into_header_map()
            .unwrap();

        assert_eq!(headers[header::LOCATION], " https://example.com/a%0D%0A");
    }

    #[test]
    fn test_invalid_header_value() {
        let result = LinkHeaders {
            location: None,
            link: Some("<https://example.com/\n>".to_string()),
        }
        .into_header_map();

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }
}
