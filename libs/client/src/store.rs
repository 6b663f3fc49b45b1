use chrono::{DateTime, Utc};
use domain_todos::{CreateTodo, PageRequest, Pagination, Todo, MAX_LIMIT};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::api::TodoApi;
use crate::error::{ClientError, ClientResult};

/// Result of an optimistic mutation.
///
/// `Committed` carries the server's version of the affected value;
/// `RolledBack` means the local change was undone and carries the cause.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome<T> {
    Committed(T),
    RolledBack(ClientError),
}

impl<T> MutationOutcome<T> {
    pub fn is_committed(&self) -> bool {
        matches!(self, MutationOutcome::Committed(_))
    }
}

/// Tabs a UI can filter the loaded page by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskTab {
    #[default]
    All,
    Completed,
    Overdue,
}

/// Per-tab counts over the loaded page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskCounts {
    pub all: usize,
    pub completed: usize,
    pub overdue: usize,
}

/// A todo is overdue when its deadline has passed and that deadline was not
/// today; tasks due earlier on the current day are still "due today".
pub fn is_overdue(todo: &Todo, now: DateTime<Utc>) -> bool {
    match todo.deadline {
        Some(deadline) => deadline < now && deadline.date_naive() != now.date_naive(),
        None => false,
    }
}

fn first_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|field| field.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}

/// Client-side task store with optimistic mutations.
///
/// Holds one page of one partition. Mutations change the local copy first
/// and roll it back if the API call fails; `refresh` re-reads the current
/// page from the server.
pub struct TaskStore<A: TodoApi> {
    api: A,
    partition_key: Option<String>,
    page: u64,
    limit: u64,
    todos: Vec<Todo>,
    pagination: Pagination,
}

impl<A: TodoApi> TaskStore<A> {
    pub fn new(api: A) -> Self {
        let page = PageRequest::default();
        Self {
            api,
            partition_key: None,
            page: page.page,
            limit: page.limit,
            todos: Vec::new(),
            pagination: Pagination::compute(page, 0),
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn partition_key(&self) -> Option<&str> {
        self.partition_key.as_deref()
    }

    /// Select a page; takes effect on the next `refresh`.
    pub fn set_page(&mut self, page: u64) {
        self.page = page.max(1);
    }

    /// Select a page size; clamped to the server's accepted range.
    pub fn set_limit(&mut self, limit: u64) {
        self.limit = limit.clamp(1, MAX_LIMIT);
        self.page = 1;
    }

    /// Switch partitions; resets to the first page. An empty key selects the
    /// public partition.
    pub fn set_partition_key(&mut self, key: Option<String>) {
        self.partition_key = key.filter(|k| !k.is_empty());
        self.page = 1;
    }

    fn apply(&mut self, response: domain_todos::TodoListResponse) {
        self.todos = response.todos;
        self.pagination = response.pagination;
    }

    /// Re-read the current page from the server.
    ///
    /// When rows disappeared under us the requested page may now be past the
    /// end; the store clamps to the last page and fetches again.
    pub async fn refresh(&mut self) -> ClientResult<()> {
        let response = self
            .api
            .list(self.partition_key.clone(), self.page, self.limit)
            .await?;

        if response.pagination.total_pages > 0 && self.page > response.pagination.total_pages {
            self.page = response.pagination.total_pages;
            let response = self
                .api
                .list(self.partition_key.clone(), self.page, self.limit)
                .await?;
            self.apply(response);
        } else {
            self.apply(response);
        }

        Ok(())
    }

    /// Add a todo to the current partition.
    ///
    /// Validation failures short-circuit before any local change. Otherwise a
    /// placeholder is prepended immediately and replaced by the server's
    /// version on success, or removed on failure.
    pub async fn add(
        &mut self,
        title: &str,
        deadline: Option<DateTime<Utc>>,
    ) -> MutationOutcome<Todo> {
        let input = CreateTodo {
            title: title.to_string(),
            deadline,
            email: self.partition_key.clone(),
        };

        if let Err(errors) = input.validate() {
            return MutationOutcome::RolledBack(ClientError::Validation(first_message(&errors)));
        }

        let placeholder = Todo {
            id: Uuid::new_v4(),
            title: title.trim().to_string(),
            done: false,
            deadline,
            email: self.partition_key.clone(),
            created_at: Utc::now(),
        };
        self.todos.insert(0, placeholder.clone());

        match self.api.create(input).await {
            Ok(created) => {
                if let Some(slot) = self.todos.iter_mut().find(|t| t.id == placeholder.id) {
                    *slot = created.clone();
                }
                MutationOutcome::Committed(created)
            }
            Err(err) => {
                tracing::warn!("create rolled back: {}", err);
                self.todos.retain(|t| t.id != placeholder.id);
                MutationOutcome::RolledBack(err)
            }
        }
    }

    /// Flip the done flag of a loaded todo.
    pub async fn toggle(&mut self, id: Uuid) -> MutationOutcome<Todo> {
        let Some(index) = self.todos.iter().position(|t| t.id == id) else {
            return MutationOutcome::RolledBack(ClientError::NotFound);
        };

        let target = !self.todos[index].done;
        self.todos[index].done = target;

        match self.api.set_done(id, target).await {
            Ok(updated) => {
                self.todos[index] = updated.clone();
                MutationOutcome::Committed(updated)
            }
            Err(err) => {
                tracing::warn!("toggle rolled back: {}", err);
                if let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) {
                    todo.done = !target;
                }
                MutationOutcome::RolledBack(err)
            }
        }
    }

    /// Remove a loaded todo; a failed delete re-inserts it at its old
    /// position (or the end, if the list shrank meanwhile).
    pub async fn delete(&mut self, id: Uuid) -> MutationOutcome<()> {
        let Some(index) = self.todos.iter().position(|t| t.id == id) else {
            return MutationOutcome::RolledBack(ClientError::NotFound);
        };

        let removed = self.todos.remove(index);

        match self.api.delete(id).await {
            Ok(()) => MutationOutcome::Committed(()),
            Err(err) => {
                tracing::warn!("delete rolled back: {}", err);
                let at = index.min(self.todos.len());
                self.todos.insert(at, removed);
                MutationOutcome::RolledBack(err)
            }
        }
    }

    /// The loaded page filtered by a tab, judged at `now`.
    pub fn filtered_at(&self, tab: TaskTab, now: DateTime<Utc>) -> Vec<&Todo> {
        self.todos
            .iter()
            .filter(|todo| match tab {
                TaskTab::All => true,
                TaskTab::Completed => todo.done,
                TaskTab::Overdue => !todo.done && is_overdue(todo, now),
            })
            .collect()
    }

    pub fn filtered(&self, tab: TaskTab) -> Vec<&Todo> {
        self.filtered_at(tab, Utc::now())
    }

    pub fn counts_at(&self, now: DateTime<Utc>) -> TaskCounts {
        TaskCounts {
            all: self.todos.len(),
            completed: self.todos.iter().filter(|t| t.done).count(),
            overdue: self
                .todos
                .iter()
                .filter(|t| !t.done && is_overdue(t, now))
                .count(),
        }
    }
}
