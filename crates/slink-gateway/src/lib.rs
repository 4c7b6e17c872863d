//! HTTP surface of the slink service.
//!
//! [`App::router`] wires the link registry and the submission relay held in
//! [`AppState`] to their routes. Failures are rendered by [`error::AppError`]
//! as `{"error": true, "message": ...}` bodies.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use state::AppState;
