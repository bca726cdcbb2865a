pub mod counter;

pub use crate::domain::model::{CounterSettings, RunSummary};
pub use crate::domain::ports::LineSink;
pub use crate::utils::error::Result;
