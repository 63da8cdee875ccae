use crate::domain::model::Query;
use crate::utils::error::Result;

/// Anything that can hand the engine a list of queries to evaluate.
pub trait QuerySource {
    fn queries(&self) -> Result<Vec<Query>>;

    /// Whether reports should carry the full list of matching pairs.
    fn include_pairs(&self) -> bool {
        false
    }
}
