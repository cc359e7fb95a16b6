//! Response envelopes and error normalization for the Merdeka backend API.
//!
//! Every endpoint wraps its payload in one of two envelopes. Error responses
//! come in more than one shape, so the frontend funnels all of them through
//! [`normalize_error_body`] before anything reaches the user.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Standard single-object envelope: `{ data, message, status }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResult<T> {
    pub data: T,
    pub message: String,
    pub status: i32,
}

/// List envelope with server-side pagination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedApiResult<T> {
    pub data: Vec<T>,
    pub message: String,
    pub status: i32,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
    pub current_page: u64,
    pub total_page: u64,
}

impl Pagination {
    pub fn total_pages(&self) -> u64 {
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(self.limit)
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }
}

/// Query-string parameters accepted by every paginated listing endpoint.
#[derive(Debug, Clone, Default)]
pub struct PaginatedFilters {
    pub limit: Option<u64>,
    pub page: Option<u64>,
    pub search: Option<String>,
    pub populate: Option<String>,
    pub sort: Option<String>,
}

impl PaginatedFilters {
    /// Serialize to a query string, skipping absent fields.
    ///
    /// Values are percent-encoded; the caller appends the result after `?`.
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(populate) = &self.populate {
            pairs.push(("populate", populate.clone()));
        }
        if let Some(sort) = &self.sort {
            pairs.push(("sort", sort.clone()));
        }
        pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Fallback text when the server's error body is unusable.
pub const GENERIC_API_ERROR: &str = "An error occurred while contacting the server";

/// Reduce an error response body to one display string.
///
/// Known shapes, tried in order:
/// - `{ "error": { "message": "..." } }` where `message` may itself be a
///   nested `{ "message": "..." }` object;
/// - `{ "data": { "details": ["...", ...] } }`, joined with `"; "`.
///
/// Anything else falls back to [`GENERIC_API_ERROR`] suffixed with the HTTP
/// status code.
pub fn normalize_error_body(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(message) = value.pointer("/error/message") {
            match message {
                Value::String(s) if !s.is_empty() => return s.clone(),
                Value::Object(obj) => {
                    if let Some(Value::String(s)) = obj.get("message") {
                        if !s.is_empty() {
                            return s.clone();
                        }
                    }
                }
                _ => {}
            }
        }
        if let Some(Value::Array(details)) = value.pointer("/data/details") {
            let joined = details
                .iter()
                .filter_map(|d| match d {
                    Value::String(s) => Some(s.clone()),
                    Value::Object(obj) => obj
                        .get("message")
                        .and_then(|m| m.as_str())
                        .map(|s| s.to_string()),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join("; ");
            if !joined.is_empty() {
                return joined;
            }
        }
    }
    format!("{} (HTTP {})", GENERIC_API_ERROR, status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_error_message() {
        let body = r#"{"error":{"message":"Email sudah terdaftar"}}"#;
        assert_eq!(normalize_error_body(409, body), "Email sudah terdaftar");
    }

    #[test]
    fn test_normalize_nested_error_message() {
        let body = r#"{"error":{"message":{"message":"Token expired"}}}"#;
        assert_eq!(normalize_error_body(401, body), "Token expired");
    }

    #[test]
    fn test_normalize_validation_details() {
        let body = r#"{"data":{"details":["name wajib diisi","age minimal 18"]}}"#;
        assert_eq!(
            normalize_error_body(422, body),
            "name wajib diisi; age minimal 18"
        );
    }

    #[test]
    fn test_normalize_garbage_body() {
        assert_eq!(
            normalize_error_body(502, "<html>Bad Gateway</html>"),
            format!("{} (HTTP 502)", GENERIC_API_ERROR)
        );
        assert_eq!(
            normalize_error_body(500, "{}"),
            format!("{} (HTTP 500)", GENERIC_API_ERROR)
        );
    }

    #[test]
    fn test_query_string_skips_absent_fields() {
        let filters = PaginatedFilters {
            limit: Some(10),
            page: Some(2),
            search: None,
            populate: None,
            sort: None,
        };
        assert_eq!(filters.to_query_string(), "limit=10&page=2");
    }

    #[test]
    fn test_query_string_encodes_search() {
        let filters = PaginatedFilters {
            limit: Some(20),
            page: Some(1),
            search: Some("name:%budi%".to_string()),
            ..Default::default()
        };
        assert_eq!(
            filters.to_query_string(),
            "limit=20&page=1&search=name%3A%25budi%25"
        );
    }

    #[test]
    fn test_pagination_bounds() {
        let p = Pagination {
            total: 45,
            limit: 20,
            offset: 0,
            current_page: 2,
            total_page: 3,
        };
        assert_eq!(p.total_pages(), 3);
        assert!(p.has_next());
        assert!(p.has_prev());

        let last = Pagination {
            current_page: 3,
            ..p.clone()
        };
        assert!(!last.has_next());
    }
}
