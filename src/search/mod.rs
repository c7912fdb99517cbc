//! Query handling and the lifecycle of one search

mod query;
mod session;

pub use query::QueryInput;
pub use session::{SearchOutcome, SearchSession, Ticket};
