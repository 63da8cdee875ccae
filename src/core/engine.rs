use crate::core::checker;
use crate::core::QuerySource;
use crate::domain::model::{BatchReport, Query, QueryReport};
use crate::utils::error::Result;

pub struct PairSumEngine<S: QuerySource> {
    source: S,
}

impl<S: QuerySource> PairSumEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn run(&self) -> Result<BatchReport> {
        let queries = self.source.queries()?;
        let include_pairs = self.source.include_pairs();
        tracing::debug!("Evaluating {} queries", queries.len());

        let reports: Vec<QueryReport> = queries
            .into_iter()
            .map(|query| evaluate(query, include_pairs))
            .collect();

        let report = BatchReport { queries: reports };
        tracing::info!(
            "✅ {} queries evaluated, {} true, {} expectation failures",
            report.total(),
            report.matched(),
            report.failed_expectations().len()
        );

        Ok(report)
    }
}

pub fn evaluate(query: Query, include_pairs: bool) -> QueryReport {
    let result = checker::check(&query.values, query.target, query.mode);
    let pairs = include_pairs.then(|| checker::find_pairs(&query.values, query.target));

    tracing::debug!(
        query = %query.name,
        target = query.target,
        len = query.values.len(),
        mode = %query.mode,
        result,
        "query evaluated"
    );

    if let Some(expected) = query.expect {
        if expected != result {
            tracing::warn!(
                "❌ Query '{}' returned {} but expected {}",
                query.name,
                result,
                expected
            );
        }
    }

    QueryReport {
        name: query.name,
        target: query.target,
        values: query.values,
        mode: query.mode,
        result,
        pairs,
        expected: query.expect,
    }
}
