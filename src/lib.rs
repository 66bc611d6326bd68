//! Terminal dashboard over a fact-check API.
//!
//! - [`models`]: records, ids and the verdict classifier
//! - [`pipeline`]: fact sources, the result store and the aggregator
//! - [`ui`]: expansion state, view composition and terminal rendering

pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod ui;

pub use config::Config;
pub use error::FetchError;
