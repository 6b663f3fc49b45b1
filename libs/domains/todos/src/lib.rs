//! Todos Domain
//!
//! Domain implementation for multi-user to-do lists backed by PostgreSQL.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation, pagination
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + PostgreSQL implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! Todos are partitioned by an optional owner email. A missing email selects
//! the shared public partition; partitions are disjoint and never mixed in a
//! single listing.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{TodoError, TodoResult};
pub use handlers::ApiDoc;
pub use models::{
    CreateTodo, DeleteConfirmation, ListTodosQuery, PageRequest, Pagination, Partition, Todo,
    TodoListResponse, DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT, TITLE_MIN_CHARS,
};
pub use postgres::PgTodoRepository;
pub use repository::TodoRepository;
pub use service::TodoService;
