//! Response decoding for the directory API.
//!
//! A response is accepted only with a 2xx status and a body that decodes into
//! the expected JSON array. Anything else becomes a [`UserdeckError`] whose
//! message is shown to the user.

use crate::domain::error::{Result, UserdeckError};
use serde::de::DeserializeOwned;

/// Decodes a JSON response body after checking the status code.
///
/// # Errors
///
/// - [`UserdeckError::Http`] for non-2xx statuses
/// - [`UserdeckError::Decode`] when the body is not valid JSON of type `T`
///
/// # Examples
///
/// ```
/// use userdeck::api::decode_response;
/// use userdeck::domain::Post;
///
/// let body = br#"[{"userId": 1, "id": 1, "title": "t", "body": "b"}]"#;
/// let posts: Vec<Post> = decode_response("posts", 200, body)?;
/// assert_eq!(posts.len(), 1);
/// # Ok::<(), userdeck::UserdeckError>(())
/// ```
pub fn decode_response<T: DeserializeOwned>(resource: &'static str, status: u16, body: &[u8]) -> Result<T> {
    if !(200..300).contains(&status) {
        tracing::debug!(
            resource,
            status,
            body_len = body.len(),
            body = %body_excerpt(body),
            "non-success response"
        );
        return Err(UserdeckError::Http { resource, status });
    }

    serde_json::from_slice(body).map_err(|source| {
        tracing::debug!(resource, error = %source, "response body did not decode");
        UserdeckError::Decode { resource, source }
    })
}

/// Longest body prefix, in bytes, copied into the log for a failed request.
const LOGGED_BODY_BYTES: usize = 256;

/// Lossy UTF-8 prefix of a response body, for log lines.
///
/// The host puts the transport error text in the body when a request never
/// reached the server.
fn body_excerpt(body: &[u8]) -> String {
    let cut = body.len().min(LOGGED_BODY_BYTES);
    let mut excerpt = String::from_utf8_lossy(&body[..cut]).trim_end().to_string();
    if body.len() > cut {
        excerpt.push_str("...");
    }
    excerpt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::User;

    #[test]
    fn rejects_non_success_status_before_decoding() {
        let err = decode_response::<Vec<User>>("users", 404, b"[]").unwrap_err();
        assert!(matches!(err, UserdeckError::Http { resource: "users", status: 404 }));
        assert_eq!(err.to_string(), "Failed to fetch users (HTTP 404)");
    }

    #[test]
    fn reports_decode_failures() {
        let err = decode_response::<Vec<User>>("users", 200, b"<html>oops</html>").unwrap_err();
        assert!(matches!(err, UserdeckError::Decode { resource: "users", .. }));
        assert!(err.to_string().starts_with("Failed to read users"));
    }

    #[test]
    fn accepts_empty_array() {
        let users: Vec<User> = decode_response("users", 200, b"[]").unwrap();
        assert!(users.is_empty());
    }

    #[test]
    fn body_excerpt_keeps_short_bodies_whole() {
        assert_eq!(body_excerpt(b"connection refused\n"), "connection refused");
        assert_eq!(body_excerpt(b""), "");
    }

    #[test]
    fn body_excerpt_truncates_long_bodies() {
        let body = vec![b'x'; LOGGED_BODY_BYTES + 10];
        let excerpt = body_excerpt(&body);
        assert_eq!(excerpt.len(), LOGGED_BODY_BYTES + 3);
        assert!(excerpt.ends_with("..."));
    }

    #[test]
    fn body_excerpt_tolerates_a_split_utf8_sequence() {
        let mut body = vec![b'a'; LOGGED_BODY_BYTES - 1];
        body.extend_from_slice("é tail".as_bytes());
        let excerpt = body_excerpt(&body);
        assert!(excerpt.starts_with("aaa"));
        assert!(excerpt.ends_with("..."));
    }
}
