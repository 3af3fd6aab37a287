use axum::response::Html;

use crate::server::ui;

pub async fn handler_homepage() -> Html<String> {
    Html(ui::render_homepage())
}
