mod app;
mod commit;

pub use app::{AppConfig, UIConfig};
pub use commit::CommitConfig;
