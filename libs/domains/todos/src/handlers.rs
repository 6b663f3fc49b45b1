use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
    UuidPath, ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::TodoResult;
use crate::models::{
    CreateTodo, DeleteConfirmation, ListTodosQuery, Pagination, Todo, TodoListResponse,
};
use crate::repository::TodoRepository;
use crate::service::TodoService;

const TAG: &str = "todos";

/// OpenAPI documentation for Todos API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_todos,
        create_todo,
        mark_done,
        mark_undone,
        delete_todo,
    ),
    components(
        schemas(Todo, CreateTodo, TodoListResponse, Pagination, DeleteConfirmation),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Multi-user to-do list endpoints")
    )
)]
pub struct ApiDoc;

/// Create the todo router with all HTTP endpoints
pub fn router<R: TodoRepository + 'static>(service: TodoService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/todos", get(list_todos))
        .route("/todo", post(create_todo))
        .route("/todo/{id}/done", put(mark_done))
        .route("/todo/{id}/undone", put(mark_undone))
        .route("/todo/{id}", delete(delete_todo))
        .with_state(shared_service)
}

/// List one page of a partition
#[utoipa::path(
    get,
    path = "/todos",
    tag = TAG,
    params(ListTodosQuery),
    responses(
        (status = 200, description = "One page of todos with pagination metadata", body = TodoListResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_todos<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    Query(query): Query<ListTodosQuery>,
) -> TodoResult<Json<TodoListResponse>> {
    let response = service
        .list_todos(query.partition(), query.page_request())
        .await?;
    Ok(Json(response))
}

/// Create a new todo
#[utoipa::path(
    post,
    path = "/todo",
    tag = TAG,
    request_body = CreateTodo,
    responses(
        (status = 201, description = "Todo created successfully", body = Todo),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_todo<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateTodo>,
) -> TodoResult<impl IntoResponse> {
    let todo = service.create_todo(input).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// Mark a todo as done
#[utoipa::path(
    put,
    path = "/todo/{id}/done",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Todo ID")
    ),
    responses(
        (status = 200, description = "Todo marked done", body = Todo),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn mark_done<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    UuidPath(id): UuidPath,
) -> TodoResult<Json<Todo>> {
    let todo = service.set_done(id, true).await?;
    Ok(Json(todo))
}

/// Mark a todo as not done
#[utoipa::path(
    put,
    path = "/todo/{id}/undone",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Todo ID")
    ),
    responses(
        (status = 200, description = "Todo marked undone", body = Todo),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn mark_undone<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    UuidPath(id): UuidPath,
) -> TodoResult<Json<Todo>> {
    let todo = service.set_done(id, false).await?;
    Ok(Json(todo))
}

/// Delete a todo
#[utoipa::path(
    delete,
    path = "/todo/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Todo ID")
    ),
    responses(
        (status = 200, description = "Todo deleted", body = DeleteConfirmation),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_todo<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    UuidPath(id): UuidPath,
) -> TodoResult<Json<DeleteConfirmation>> {
    service.delete_todo(id).await?;
    Ok(Json(DeleteConfirmation::deleted()))
}
