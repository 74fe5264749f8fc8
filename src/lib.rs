pub mod app;
pub mod classify;
pub mod config;
pub mod errors;
pub mod gemini;
pub mod handlers;
pub mod insight;
pub mod insight_task;
pub mod models;
pub mod repository;
pub mod state;
pub mod storage;
pub mod summary;
pub mod ui;

pub use app::router;
pub use classify::{classify, Category, Context};
pub use config::Config;
pub use repository::ReadingRepository;
pub use state::AppState;
