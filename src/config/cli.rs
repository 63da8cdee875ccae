use crate::config::OutputFormat;
use crate::core::{MatchMode, Query, QuerySource};
use crate::utils::error::Result;
use crate::utils::validation::{parse_sequence, parse_target, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "pairsum")]
#[command(about = "Check whether two distinct elements of a list sum to a target")]
pub struct CliConfig {
    /// Target sum K
    #[arg(allow_hyphen_values = true, allow_negative_numbers = true)]
    pub target: String,

    /// Comma-separated integers, e.g. "10,15,3,7"
    #[arg(allow_hyphen_values = true)]
    pub values: String,

    #[arg(short, long, value_enum, default_value_t = MatchMode::Exists)]
    pub mode: MatchMode,

    /// Also print every matching pair
    #[arg(long)]
    pub pairs: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn query(&self) -> Result<Query> {
        let target = parse_target(&self.target)?;
        let values = parse_sequence(&self.values)?;
        Ok(Query::new("cli", values, target).with_mode(self.mode))
    }
}

impl QuerySource for CliConfig {
    fn queries(&self) -> Result<Vec<Query>> {
        Ok(vec![self.query()?])
    }

    fn include_pairs(&self) -> bool {
        self.pairs
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        self.query().map(|_| ())
    }
}
