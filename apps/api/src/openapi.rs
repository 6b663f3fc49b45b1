use utoipa::OpenApi;

// The macro rejects an empty string literal in `nest(path = ...)`, but an
// expression that evaluates to "" is accepted and nests without a prefix.
const ROOT: &str = "";

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Todo API",
        version = "0.1.0",
        description = "Multi-user to-do lists with partitioned, paginated listings"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = ROOT, api = domain_todos::ApiDoc)
    )
)]
pub struct ApiDoc;
