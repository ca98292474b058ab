//! Core logic for the teletext portfolio viewer.
//! Hosts feed key bursts in and paint the screens that come out.

pub mod clock;
pub mod config;
pub mod input;
pub mod logging;
pub mod model;
pub mod router;
pub mod service;
pub mod ticker;
pub mod view;

pub use config::{ConfigError, ViewerConfig};
pub use input::key::Key;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::content::{ContentModel, OwnerProfile};
pub use router::{Page, PageCode, PageRouter, PAGES};
pub use service::content_store::{ContentError, ContentStore, MergeReport};
pub use service::session::{PortfolioSession, SessionError};
pub use service::transfer::{ImportOutcome, TransferError, TransferResult};
pub use view::plain::{render_page_plain, render_screen_plain};
pub use view::{PageView, RenderError, RenderResult, Screen};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
