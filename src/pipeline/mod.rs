pub mod aggregate;
pub mod fetch;
pub mod mock;
pub mod store;
pub mod traits;

pub use aggregate::{aggregate, Stats};
pub use fetch::{FileFactSource, WebFactSource, DEFAULT_SOURCE_URL};
pub use mock::{FailingSource, ScriptedSource, StaticSource};
pub use store::{Completion, FetchStatus, LoadTicket, ResultStore};
pub use traits::FactSource;
