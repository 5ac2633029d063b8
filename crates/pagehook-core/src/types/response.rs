//! Early responses that end a request before rendering.

use http::{Response, StatusCode, header};

use crate::error::AppError;

/// An HTTP redirect decided by a hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    /// Response status.
    pub status: StatusCode,
    /// Value of the `Location` header.
    pub location: String,
}

impl Redirect {
    /// A `301 Moved Permanently` to the site-relative path `target`.
    ///
    /// The location is always `/` followed by `target` verbatim.
    pub fn moved_permanently(target: &str) -> Self {
        Self {
            status: StatusCode::MOVED_PERMANENTLY,
            location: format!("/{target}"),
        }
    }

    /// Builds the bodiless HTTP response.
    pub fn to_response(&self) -> Result<Response<()>, AppError> {
        Response::builder()
            .status(self.status)
            .header(header::LOCATION, &self.location)
            .body(())
            .map_err(|e| AppError::internal(format!("Invalid redirect response: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moved_permanently() {
        let redirect = Redirect::moved_permanently("new/a");
        assert_eq!(redirect.status, StatusCode::MOVED_PERMANENTLY);
        assert_eq!(redirect.location, "/new/a");

        let response = redirect.to_response().expect("valid response");
        assert_eq!(response.status(), 301);
        assert_eq!(response.headers()[header::LOCATION], "/new/a");
    }
}
