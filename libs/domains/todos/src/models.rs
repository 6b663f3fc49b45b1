use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// A title must be strictly longer than this many characters after trimming.
pub const TITLE_MIN_CHARS: usize = 10;

/// Default page number when the client sends none (or garbage).
pub const DEFAULT_PAGE: u64 = 1;
/// Default page size when the client sends none (or garbage).
pub const DEFAULT_LIMIT: u64 = 10;
/// Largest page size the listing endpoint will serve.
pub const MAX_LIMIT: u64 = 100;

/// Todo entity.
///
/// Wire format is camelCase to match the consumed JSON contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Unique identifier (UUIDv7, time-ordered)
    pub id: Uuid,
    /// Task title; trimmed length is strictly greater than 10 at creation
    pub title: String,
    /// Whether the task is completed
    pub done: bool,
    /// Optional deadline; absent means "no deadline"
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
    /// Partition key; `None` means the shared public partition
    #[serde(default)]
    pub email: Option<String>,
    /// Creation timestamp; listing sort key (descending)
    pub created_at: DateTime<Utc>,
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().chars().count() <= TITLE_MIN_CHARS {
        let mut err = ValidationError::new("title_too_short");
        err.message = Some("Todo must be longer than 10 characters.".into());
        return Err(err);
    }
    Ok(())
}

/// DTO for creating a new todo
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodo {
    #[validate(custom(function = "validate_title"))]
    pub title: String,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Owner partition selector.
///
/// A todo belongs either to the shared public partition (no email) or to
/// exactly one owner. The partition is fixed at creation, and a listing never
/// mixes partitions. Listing and filtering code only ever sees this type, so
/// a credentialed partition model can replace the bare email later without
/// touching them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Partition {
    Public,
    Owner(String),
}

impl Partition {
    /// Build from an optional owner key; empty strings select the public
    /// partition.
    pub fn from_key(key: Option<String>) -> Self {
        match key {
            Some(email) if !email.is_empty() => Partition::Owner(email),
            _ => Partition::Public,
        }
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            Partition::Public => None,
            Partition::Owner(email) => Some(email),
        }
    }
}

/// Validated page request: `page >= 1`, `1 <= limit <= 100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    /// Clamp raw values into range: page below 1 becomes 1, limit is clamped
    /// into `[1, 100]`.
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page: page.max(1) as u64,
            limit: limit.clamp(1, MAX_LIMIT as i64) as u64,
        }
    }

    /// Number of rows skipped before this page. Saturates so an absurdly
    /// large page yields an empty slice instead of wrapping back to page one.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    // Malformed numeric input is treated as missing, not as a 400.
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}

/// Query parameters for the listing endpoint.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListTodosQuery {
    /// Owner email; absent selects the public partition
    pub email: Option<String>,
    /// Page number (default 1)
    #[serde(default, deserialize_with = "lenient_i64")]
    #[param(value_type = Option<i64>, minimum = 1)]
    pub page: Option<i64>,
    /// Items per page (default 10, max 100)
    #[serde(default, deserialize_with = "lenient_i64")]
    #[param(value_type = Option<i64>, minimum = 1, maximum = 100)]
    pub limit: Option<i64>,
}

impl ListTodosQuery {
    pub fn partition(&self) -> Partition {
        Partition::from_key(self.email.clone())
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(
            self.page.unwrap_or(DEFAULT_PAGE as i64),
            self.limit.unwrap_or(DEFAULT_LIMIT as i64),
        )
    }
}

/// Pagination metadata returned alongside every listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
    /// Count of todos in the selected partition
    pub total: u64,
    /// `ceil(total / limit)`; 0 when the partition is empty
    pub total_pages: u64,
}

impl Pagination {
    pub fn compute(request: PageRequest, total: u64) -> Self {
        let total_pages = if total == 0 {
            0
        } else {
            total.div_ceil(request.limit)
        };

        Self {
            page: request.page,
            limit: request.limit,
            total,
            total_pages,
        }
    }
}

/// Response body of the listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TodoListResponse {
    pub todos: Vec<Todo>,
    pub pagination: Pagination,
}

/// Confirmation returned by a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteConfirmation {
    pub message: String,
}

impl DeleteConfirmation {
    pub fn deleted() -> Self {
        Self {
            message: "Todo deleted".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::Uri;
    use validator::Validate;

    fn parse(uri: &str) -> ListTodosQuery {
        let uri: Uri = uri.parse().unwrap();
        Query::<ListTodosQuery>::try_from_uri(&uri).unwrap().0
    }

    #[test]
    fn test_page_request_clamps_page_below_one() {
        assert_eq!(PageRequest::new(0, 10).page, 1);
        assert_eq!(PageRequest::new(-5, 10).page, 1);
    }

    #[test]
    fn test_page_request_clamps_limit_into_range() {
        assert_eq!(PageRequest::new(1, 0).limit, 1);
        assert_eq!(PageRequest::new(1, -3).limit, 1);
        assert_eq!(PageRequest::new(1, 1000).limit, 100);
        assert_eq!(PageRequest::new(1, 100).limit, 100);
    }

    #[test]
    fn test_page_request_offset() {
        assert_eq!(PageRequest::new(1, 10).offset(), 0);
        assert_eq!(PageRequest::new(2, 10).offset(), 10);
        assert_eq!(PageRequest::new(4, 25).offset(), 75);
    }

    #[test]
    fn test_page_request_offset_saturates_on_huge_page() {
        // A page number near i64::MAX must not wrap the offset back into
        // the first rows; a saturated offset lands past every row.
        let page = PageRequest::new(i64::MAX, 100);
        assert_eq!(page.offset(), u64::MAX);

        let page = PageRequest::new((1 << 62) + 1, 100);
        assert_eq!(page.offset(), u64::MAX);
    }

    #[test]
    fn test_query_malformed_numbers_fall_back_to_defaults() {
        let query = parse("/todos?page=abc&limit=zzz");
        let page = query.page_request();
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 10);
    }

    #[test]
    fn test_query_missing_params_use_defaults() {
        let query = parse("/todos");
        assert_eq!(query.page_request(), PageRequest::default());
        assert_eq!(query.partition(), Partition::Public);
    }

    #[test]
    fn test_query_email_selects_owner_partition() {
        let query = parse("/todos?email=user%40example.com&page=2&limit=20");
        assert_eq!(
            query.partition(),
            Partition::Owner("user@example.com".to_string())
        );
        assert_eq!(query.page_request(), PageRequest { page: 2, limit: 20 });
    }

    #[test]
    fn test_partition_from_empty_key_is_public() {
        assert_eq!(Partition::from_key(Some(String::new())), Partition::Public);
        assert_eq!(Partition::from_key(None), Partition::Public);
    }

    #[test]
    fn test_pagination_fifteen_todos_page_two() {
        let pagination = Pagination::compute(PageRequest { page: 2, limit: 10 }, 15);
        assert_eq!(
            pagination,
            Pagination {
                page: 2,
                limit: 10,
                total: 15,
                total_pages: 2
            }
        );
    }

    #[test]
    fn test_pagination_empty_partition_has_zero_pages() {
        let pagination = Pagination::compute(PageRequest::default(), 0);
        assert_eq!(pagination.total_pages, 0);
    }

    #[test]
    fn test_pagination_exact_multiple() {
        let pagination = Pagination::compute(PageRequest { page: 1, limit: 10 }, 30);
        assert_eq!(pagination.total_pages, 3);
    }

    #[test]
    fn test_create_todo_rejects_short_titles() {
        for title in ["", "short", "exactly10!", "   padded10   "] {
            let input = CreateTodo {
                title: title.to_string(),
                deadline: None,
                email: None,
            };
            assert!(input.validate().is_err(), "expected {:?} to fail", title);
        }
    }

    #[test]
    fn test_create_todo_accepts_eleven_chars() {
        let input = CreateTodo {
            title: "elevenchars".to_string(),
            deadline: None,
            email: None,
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_create_todo_accepts_long_title() {
        let input = CreateTodo {
            title: "this is long enough".to_string(),
            deadline: None,
            email: None,
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_todo_wire_format_is_camel_case() {
        let todo = Todo {
            id: Uuid::nil(),
            title: "a reasonable title".to_string(),
            done: false,
            deadline: None,
            email: None,
            created_at: "2026-01-10T12:00:00Z".parse().unwrap(),
        };
        let value = serde_json::to_value(&todo).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("created_at").is_none());
    }
}
