use axum::{extract::State, response::Html};

use crate::server::Ctx;

pub const PATH_LISTINGS: &str = "/listings";

/// Feed fragment requested by the homepage once it is shown.
///
/// Always answers with 200: htmx only swaps in successful responses, and the
/// error state is itself a regular rendering of the feed.
pub async fn handler_listings(State(ctx): State<Ctx>) -> Html<String> {
    let mut activation = ctx.feed.start();
    let state = activation.settled().await;

    Html(state.render())
}
