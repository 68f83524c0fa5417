use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Todo API",
        version = "0.1.0",
        description = "Documentation of Todo API",
        license(name = "MIT", identifier = "MIT")
    ),
    nest(
        (path = "/todos", api = domain_todos::ApiDoc)
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_paths_are_nested() {
        let doc = ApiDoc::openapi();

        assert_eq!(doc.info.title, "Todo API");
        assert!(doc.paths.paths.contains_key("/todos"));
        assert!(doc.paths.paths.contains_key("/todos/{id}"));
    }
}
