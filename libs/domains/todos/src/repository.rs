use async_trait::async_trait;
use uuid::Uuid;

use crate::error::TodoResult;
use crate::models::{CreateTodo, PageRequest, Partition, Todo};

/// Repository trait for Todo persistence
///
/// Defines the data access interface for todos. Implementations can use
/// different storage backends (PostgreSQL, in-memory for tests, etc.)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Create a new todo
    async fn create(&self, input: CreateTodo) -> TodoResult<Todo>;

    /// List one page of a partition, ordered by created_at descending
    /// (id descending as tiebreaker)
    async fn list(&self, partition: Partition, page: PageRequest) -> TodoResult<Vec<Todo>>;

    /// Count todos in a partition
    async fn count(&self, partition: Partition) -> TodoResult<u64>;

    /// Set the done flag; returns None when no todo has that id
    async fn set_done(&self, id: Uuid, done: bool) -> TodoResult<Option<Todo>>;

    /// Delete a todo; returns false when no todo had that id
    async fn delete(&self, id: Uuid) -> TodoResult<bool>;
}
