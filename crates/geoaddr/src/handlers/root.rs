use axum::{
    http::{StatusCode, Uri},
    response::Redirect,
    Json,
};
use serde_json::{json, Value};

/// Greeting (GET /).
pub async fn hello() -> Json<Value> {
    Json(json!({ "message": "Hello World!" }))
}

/// Redirects a path without its trailing slash to the canonical form,
/// keeping the query string.
pub async fn redirect_with_slash(uri: Uri) -> Redirect {
    let target = match uri.query() {
        Some(query) => format!("{}/?{query}", uri.path()),
        None => format!("{}/", uri.path()),
    };

    Redirect::temporary(&target)
}

/// Unknown path.
pub async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not Found" })))
}

/// Known path, unsupported method.
pub async fn method_not_allowed() -> (StatusCode, Json<Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "detail": "Method Not Allowed" })),
    )
}
