pub mod app;
pub mod auth;
pub mod errors;
pub mod handlers;
pub mod history;
pub mod models;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use auth::resolve_credential_path;
pub use state::AppState;
pub use storage::{resolve_data_path, RecordStore};
