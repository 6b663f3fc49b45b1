use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{TodoError, TodoResult};
use crate::models::{CreateTodo, PageRequest, Pagination, Partition, Todo, TodoListResponse};
use crate::repository::TodoRepository;

/// Service layer for Todo business logic
#[derive(Clone)]
pub struct TodoService<R: TodoRepository> {
    repository: Arc<R>,
}

impl<R: TodoRepository> TodoService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new todo with validation
    #[instrument(skip(self, input), fields(todo_title = %input.title))]
    pub async fn create_todo(&self, input: CreateTodo) -> TodoResult<Todo> {
        // Validate input
        input
            .validate()
            .map_err(|e| TodoError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// List one page of a partition together with pagination metadata.
    ///
    /// The count and the page are read in two queries; the count drives
    /// `total_pages` so clients can clamp an out-of-range page themselves.
    pub async fn list_todos(
        &self,
        partition: Partition,
        page: PageRequest,
    ) -> TodoResult<TodoListResponse> {
        let total = self.repository.count(partition.clone()).await?;
        let todos = self.repository.list(partition, page).await?;

        Ok(TodoListResponse {
            todos,
            pagination: Pagination::compute(page, total),
        })
    }

    /// Set the done flag of a todo
    #[instrument(skip(self), fields(todo_id = %id))]
    pub async fn set_done(&self, id: Uuid, done: bool) -> TodoResult<Todo> {
        self.repository
            .set_done(id, done)
            .await?
            .ok_or(TodoError::NotFound(id))
    }

    /// Delete a todo
    #[instrument(skip(self), fields(todo_id = %id))]
    pub async fn delete_todo(&self, id: Uuid) -> TodoResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(TodoError::NotFound(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockTodoRepository;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn todo(title: &str) -> Todo {
        Todo {
            id: Uuid::now_v7(),
            title: title.to_string(),
            done: false,
            deadline: None,
            email: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_todo_rejects_short_title() {
        let mut repo = MockTodoRepository::new();
        repo.expect_create().never();

        let service = TodoService::new(repo);
        let result = service
            .create_todo(CreateTodo {
                title: "too short".to_string(),
                deadline: None,
                email: None,
            })
            .await;

        match result {
            Err(TodoError::Validation(msg)) => {
                assert!(msg.contains("Todo must be longer than 10 characters."))
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_todo_passes_valid_input_through() {
        let mut repo = MockTodoRepository::new();
        repo.expect_create()
            .times(1)
            .returning(|input| Ok(todo(&input.title)));

        let service = TodoService::new(repo);
        let created = service
            .create_todo(CreateTodo {
                title: "a perfectly fine title".to_string(),
                deadline: None,
                email: None,
            })
            .await
            .unwrap();

        assert_eq!(created.title, "a perfectly fine title");
        assert!(!created.done);
    }

    #[tokio::test]
    async fn test_list_todos_computes_pagination() {
        let mut repo = MockTodoRepository::new();
        repo.expect_count()
            .with(eq(Partition::Public))
            .times(1)
            .returning(|_| Ok(15));
        repo.expect_list()
            .times(1)
            .returning(|_, _| Ok(vec![todo("eleventh todo here"), todo("twelfth todo here")]));

        let service = TodoService::new(repo);
        let response = service
            .list_todos(Partition::Public, PageRequest { page: 2, limit: 10 })
            .await
            .unwrap();

        assert_eq!(response.todos.len(), 2);
        assert_eq!(response.pagination.page, 2);
        assert_eq!(response.pagination.total, 15);
        assert_eq!(response.pagination.total_pages, 2);
    }

    #[tokio::test]
    async fn test_list_todos_empty_partition_has_zero_pages() {
        let mut repo = MockTodoRepository::new();
        repo.expect_count().times(1).returning(|_| Ok(0));
        repo.expect_list().times(1).returning(|_, _| Ok(vec![]));

        let service = TodoService::new(repo);
        let response = service
            .list_todos(
                Partition::Owner("nobody@example.com".to_string()),
                PageRequest::default(),
            )
            .await
            .unwrap();

        assert!(response.todos.is_empty());
        assert_eq!(response.pagination.total_pages, 0);
    }

    #[tokio::test]
    async fn test_set_done_maps_missing_todo_to_not_found() {
        let id = Uuid::now_v7();
        let mut repo = MockTodoRepository::new();
        repo.expect_set_done()
            .with(eq(id), eq(true))
            .times(1)
            .returning(|_, _| Ok(None));

        let service = TodoService::new(repo);
        let result = service.set_done(id, true).await;

        assert!(matches!(result, Err(TodoError::NotFound(got)) if got == id));
    }

    #[tokio::test]
    async fn test_set_done_round_trip() {
        let id = Uuid::now_v7();
        let mut repo = MockTodoRepository::new();
        repo.expect_set_done()
            .with(eq(id), eq(true))
            .times(1)
            .returning(|id, done| {
                let mut t = todo("a toggled todo title");
                t.id = id;
                t.done = done;
                Ok(Some(t))
            });
        repo.expect_set_done()
            .with(eq(id), eq(false))
            .times(1)
            .returning(|id, done| {
                let mut t = todo("a toggled todo title");
                t.id = id;
                t.done = done;
                Ok(Some(t))
            });

        let service = TodoService::new(repo);
        assert!(service.set_done(id, true).await.unwrap().done);
        assert!(!service.set_done(id, false).await.unwrap().done);
    }

    #[tokio::test]
    async fn test_delete_todo_maps_missing_todo_to_not_found() {
        let id = Uuid::now_v7();
        let mut repo = MockTodoRepository::new();
        repo.expect_delete()
            .with(eq(id))
            .times(1)
            .returning(|_| Ok(false));

        let service = TodoService::new(repo);
        let result = service.delete_todo(id).await;

        assert!(matches!(result, Err(TodoError::NotFound(got)) if got == id));
    }

    #[tokio::test]
    async fn test_delete_todo_succeeds_when_row_removed() {
        let id = Uuid::now_v7();
        let mut repo = MockTodoRepository::new();
        repo.expect_delete()
            .with(eq(id))
            .times(1)
            .returning(|_| Ok(true));

        let service = TodoService::new(repo);
        assert!(service.delete_todo(id).await.is_ok());
    }

    #[tokio::test]
    async fn test_store_errors_propagate() {
        let mut repo = MockTodoRepository::new();
        repo.expect_count()
            .times(1)
            .returning(|_| Err(TodoError::StoreUnavailable("connection reset".to_string())));

        let service = TodoService::new(repo);
        let result = service
            .list_todos(Partition::Public, PageRequest::default())
            .await;

        assert!(matches!(result, Err(TodoError::StoreUnavailable(_))));
    }
}
