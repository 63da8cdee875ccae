use crate::config::OutputFormat;
use crate::domain::model::{BatchReport, Pair, QueryReport};
use crate::utils::error::Result;

fn pair_line(pair: &Pair) -> String {
    format!(
        "{},{}: {} + {}",
        pair.first_index, pair.second_index, pair.first_value, pair.second_value
    )
}

/// Renders a single-query report: `true` or `false`, then one line per pair.
pub fn render_query(report: &QueryReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(report)?),
        OutputFormat::Text => {
            let mut lines = vec![report.result.to_string()];
            if let Some(pairs) = &report.pairs {
                lines.extend(pairs.iter().map(pair_line));
            }
            Ok(lines.join("\n"))
        }
    }
}

/// Renders a batch report, one `<name>: <result>` line per query.
pub fn render_batch(report: &BatchReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Text => {
            let mut lines = Vec::new();
            for query in &report.queries {
                let mut line = format!("{}: {}", query.name, query.result);
                if !query.meets_expectation() {
                    if let Some(expected) = query.expected {
                        line.push_str(&format!(" (expected {})", expected));
                    }
                }
                lines.push(line);

                if let Some(pairs) = &query.pairs {
                    lines.extend(pairs.iter().map(|p| format!("  {}", pair_line(p))));
                }
            }
            Ok(lines.join("\n"))
        }
    }
}
