use async_trait::async_trait;
use domain_todos::{CreateTodo, Todo, TodoListResponse};
use uuid::Uuid;

use crate::error::ClientResult;

/// Transport trait for the todo API
///
/// The store only talks to this trait. Implementations can use HTTP
/// ([`crate::HttpTodoApi`]) or a mock for tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoApi: Send + Sync {
    /// Fetch one page of a partition
    async fn list(
        &self,
        email: Option<String>,
        page: u64,
        limit: u64,
    ) -> ClientResult<TodoListResponse>;

    /// Create a new todo
    async fn create(&self, input: CreateTodo) -> ClientResult<Todo>;

    /// Set the done flag of a todo
    async fn set_done(&self, id: Uuid, done: bool) -> ClientResult<Todo>;

    /// Delete a todo
    async fn delete(&self, id: Uuid) -> ClientResult<()>;
}
