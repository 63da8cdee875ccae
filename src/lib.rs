pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::{toml_config::TomlConfig, OutputFormat};
pub use core::checker::{check, find_pairs, first_pair, has_pair_summing_to, match_count};
pub use core::engine::PairSumEngine;
pub use domain::model::{BatchReport, MatchMode, Pair, Query, QueryReport};
pub use domain::ports::QuerySource;
pub use utils::error::{PairSumError, Result};
