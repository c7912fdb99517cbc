//! Search backends
//!
//! The view never knows where results come from: it holds an
//! `Arc<dyn SearchBackend>` and awaits whatever future it hands back.

pub mod api;
pub mod types;

use std::future::Future;
use std::pin::Pin;

use serde_json::Value;

use crate::error::SearchError;

/// Future returned by [`SearchBackend::search`]. Owns everything it needs.
pub type SearchFuture = Pin<Box<dyn Future<Output = Result<Value, SearchError>> + Send + 'static>>;

/// Something that turns a query into a JSON value.
///
/// May be called any number of times, including while an earlier call is
/// still pending.
pub trait SearchBackend: Send + Sync {
    fn search(&self, query: String) -> SearchFuture;
}

/// Plain async closures are backends.
impl<F, Fut> SearchBackend for F
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Value, SearchError>> + Send + 'static,
{
    fn search(&self, query: String) -> SearchFuture {
        Box::pin(self(query))
    }
}
