mod health;
mod submission;
mod url;

pub use health::{health_handler, index_handler};
pub use submission::{create_submission_handler, execution_handler, get_submission_handler};
pub use url::{delete_url_handler, redirect_handler, shorten_handler, update_url_handler};
