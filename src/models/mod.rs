pub mod common;
pub mod record;
pub mod verdict;

pub use common::RecordId;
pub use record::{FactCheckRecord, ResultSet};
pub use verdict::{classify, Badge, Verdict};
