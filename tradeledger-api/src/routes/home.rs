use axum::response::Html;

/// `GET /`
pub async fn home() -> Html<&'static str> {
    Html("<h1>Hello world</h1>")
}
