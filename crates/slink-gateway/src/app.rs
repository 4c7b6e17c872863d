use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_submission_handler, delete_url_handler, execution_handler, get_submission_handler,
    health_handler, index_handler, redirect_handler, shorten_handler, update_url_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/", get(index_handler))
            .route("/health", get(health_handler))
            .route("/shorten", post(shorten_handler))
            .route(
                "/submission",
                get(get_submission_handler).post(create_submission_handler),
            )
            .route("/submission/execution", get(execution_handler))
            // `{key}` is a short code for GET and a link id for PUT and DELETE.
            .route(
                "/{key}",
                get(redirect_handler)
                    .put(update_url_handler)
                    .delete(delete_url_handler),
            )
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
