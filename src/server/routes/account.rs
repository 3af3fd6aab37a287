use axum::response::Html;

use crate::server::ui;

pub const PATH_LOGIN: &str = "/login";
pub const PATH_REGISTER: &str = "/register";

// Account pages exist in the navigation but have no backing logic yet.

pub async fn handler_login() -> Html<String> {
    Html(ui::render_placeholder_page("로그인"))
}

pub async fn handler_register() -> Html<String> {
    Html(ui::render_placeholder_page("회원가입"))
}
