pub mod checker;
pub mod engine;

pub use crate::domain::model::{BatchReport, MatchMode, Pair, Query, QueryReport};
pub use crate::domain::ports::QuerySource;
pub use crate::utils::error::Result;
