use async_trait::async_trait;
use domain_todos::{CreateTodo, Todo, TodoListResponse};
use reqwest::StatusCode;
use serde::Deserialize;
use uuid::Uuid;

use crate::api::TodoApi;
use crate::error::{ClientError, ClientResult};

/// reqwest-backed implementation of [`TodoApi`]
#[derive(Debug, Clone)]
pub struct HttpTodoApi {
    client: reqwest::Client,
    base_url: String,
}

/// Error body shape the server sends; only the message is surfaced.
#[derive(Deserialize)]
struct WireError {
    message: String,
}

fn transport(err: reqwest::Error) -> ClientError {
    ClientError::StoreUnavailable(err.to_string())
}

impl HttpTodoApi {
    /// `base_url` is the server root, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    async fn error_for(response: reqwest::Response) -> ClientError {
        let status = response.status();
        let message = match response.json::<WireError>().await {
            Ok(body) => body.message,
            Err(_) => status.to_string(),
        };

        match status {
            StatusCode::BAD_REQUEST => ClientError::Validation(message),
            StatusCode::NOT_FOUND => ClientError::NotFound,
            _ => ClientError::StoreUnavailable(message),
        }
    }

    async fn expect_json<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> ClientResult<T> {
        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }
        response.json().await.map_err(transport)
    }
}

#[async_trait]
impl TodoApi for HttpTodoApi {
    async fn list(
        &self,
        email: Option<String>,
        page: u64,
        limit: u64,
    ) -> ClientResult<TodoListResponse> {
        let mut request = self
            .client
            .get(self.url("/todos"))
            .query(&[("page", page), ("limit", limit)]);
        if let Some(email) = email {
            request = request.query(&[("email", email)]);
        }

        let response = request.send().await.map_err(transport)?;
        Self::expect_json(response).await
    }

    async fn create(&self, input: CreateTodo) -> ClientResult<Todo> {
        let response = self
            .client
            .post(self.url("/todo"))
            .json(&input)
            .send()
            .await
            .map_err(transport)?;
        Self::expect_json(response).await
    }

    async fn set_done(&self, id: Uuid, done: bool) -> ClientResult<Todo> {
        let action = if done { "done" } else { "undone" };
        let response = self
            .client
            .put(self.url(&format!("/todo/{}/{}", id, action)))
            .send()
            .await
            .map_err(transport)?;
        Self::expect_json(response).await
    }

    async fn delete(&self, id: Uuid) -> ClientResult<()> {
        let response = self
            .client
            .delete(self.url(&format!("/todo/{}", id)))
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }
        Ok(())
    }
}
