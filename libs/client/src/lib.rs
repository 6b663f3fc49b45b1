//! Todo Client
//!
//! Client-side task store for the todo API. The store keeps a local copy of
//! one page of one partition and applies mutations optimistically: the local
//! state changes first, the API call follows, and a failed call rolls the
//! local change back. Every mutation reports whether it was committed or
//! rolled back, so a UI can surface the failure without losing its state.
//!
//! The HTTP transport lives behind the [`TodoApi`] trait; [`HttpTodoApi`] is
//! the reqwest implementation, and tests swap in a mock.

pub mod api;
pub mod error;
pub mod http;
pub mod settings;
pub mod store;

pub use api::TodoApi;
pub use error::{ClientError, ClientResult};
pub use http::HttpTodoApi;
pub use settings::Settings;
pub use store::{is_overdue, MutationOutcome, TaskCounts, TaskStore, TaskTab};
