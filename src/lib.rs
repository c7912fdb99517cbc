//! Search box with a collapsible JSON result tree
//!
//! [`app::AiSearch`] is the embeddable view. It takes any [`backend::SearchBackend`]
//! (an async closure works) and renders the returned value with
//! [`tree::visible_rows`].

pub mod app;
pub mod backend;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod search;
pub mod tree;
pub mod ui;

pub use app::{AiSearch, Message};
pub use backend::{SearchBackend, SearchFuture};
pub use config::Config;
pub use error::{ConfigError, SearchError};
