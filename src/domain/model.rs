use serde::{Deserialize, Serialize};
use std::fmt;

/// Two distinct positions whose values sum to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    pub first_index: usize,
    pub second_index: usize,
    pub first_value: i64,
    pub second_value: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// Some pair of distinct positions sums to the target.
    #[default]
    Exists,
    /// The number of positions that have a partner is non-zero and even.
    EvenMatchCount,
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::Exists => write!(f, "exists"),
            MatchMode::EvenMatchCount => write!(f, "even-match-count"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub name: String,
    pub values: Vec<i64>,
    pub target: i64,
    pub mode: MatchMode,
    pub expect: Option<bool>,
}

impl Query {
    pub fn new(name: impl Into<String>, values: Vec<i64>, target: i64) -> Self {
        Self {
            name: name.into(),
            values,
            target,
            mode: MatchMode::default(),
            expect: None,
        }
    }

    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_expect(mut self, expect: Option<bool>) -> Self {
        self.expect = expect;
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QueryReport {
    pub name: String,
    pub target: i64,
    pub values: Vec<i64>,
    pub mode: MatchMode,
    pub result: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pairs: Option<Vec<Pair>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<bool>,
}

impl QueryReport {
    pub fn meets_expectation(&self) -> bool {
        self.expected.map_or(true, |expected| expected == self.result)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub queries: Vec<QueryReport>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.queries.len()
    }

    pub fn matched(&self) -> usize {
        self.queries.iter().filter(|q| q.result).count()
    }

    pub fn failed_expectations(&self) -> Vec<&QueryReport> {
        self.queries
            .iter()
            .filter(|q| !q.meets_expectation())
            .collect()
    }

    pub fn all_expectations_met(&self) -> bool {
        self.queries.iter().all(QueryReport::meets_expectation)
    }
}
