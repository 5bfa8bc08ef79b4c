//! Anomaly report model and the pure derivations the capstone viewer needs:
//! count sorting, placeholder formatting, and the CSV export.
//!
//! Every numeric field coming from the backend may be absent or null, so the
//! record fields are `Option` and rendering substitutes `-` instead of
//! failing. A `-` means "no data"; a true zero still renders as a number.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use indexmap::IndexMap;
use serde::Deserialize;

/// The mini-report table shows at most this many of the pre-sorted
/// `top_anomalies` entries.
pub const TOP_ANOMALY_LIMIT: usize = 10;

/// One flagged data point.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnomalyRecord {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub ticker: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Fractional daily return.
    #[serde(default)]
    pub ret: Option<f64>,
    #[serde(default)]
    pub ret_z: Option<f64>,
    #[serde(default)]
    pub volz: Option<f64>,
    #[serde(default)]
    pub range_pct: Option<f64>,
    #[serde(default)]
    pub why: Option<String>,
    /// Backend-computed percentile rank, 0-100.
    #[serde(default)]
    pub severity: Option<f64>,
}

/// One market-wide day in the breadth table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MarketDayRecord {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub market_ret: Option<f64>,
    /// Fraction of tickers moving together, 0-1.
    #[serde(default)]
    pub breadth: Option<f64>,
    #[serde(default)]
    pub market_anomaly_flag: bool,
}

/// Full result of one analysis run. Immutable once received; a new run
/// replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisReport {
    #[serde(default)]
    pub total_anomalies: Option<u64>,
    #[serde(default)]
    pub market_days_flagged: Option<u64>,
    /// Ticker -> anomaly count, in backend insertion order.
    #[serde(default)]
    pub by_ticker: IndexMap<String, u64>,
    /// Anomaly type -> count, in backend insertion order.
    #[serde(default)]
    pub by_type: IndexMap<String, u64>,
    #[serde(default)]
    pub daily_anomaly_card: Vec<AnomalyRecord>,
    #[serde(default)]
    pub market_day_table: Vec<MarketDayRecord>,
    /// Pre-sorted by severity descending by the backend.
    #[serde(default)]
    pub top_anomalies: Vec<AnomalyRecord>,
}

impl AnalysisReport {
    /// First [`TOP_ANOMALY_LIMIT`] entries of `top_anomalies`, input order.
    pub fn top_anomalies(&self) -> &[AnomalyRecord] {
        let end = self.top_anomalies.len().min(TOP_ANOMALY_LIMIT);
        &self.top_anomalies[..end]
    }
}

/// Entries of a count map sorted by count descending. The sort is stable, so
/// equal counts keep their insertion order.
pub fn counts_by_desc(counts: &IndexMap<String, u64>) -> Vec<(String, u64)> {
    let mut entries: Vec<(String, u64)> =
        counts.iter().map(|(k, v)| (k.clone(), *v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries
}

// -- Placeholder formatting --
//
// Column-specific precision matches the report tables: returns x100 at 2dp,
// z-scores at 2dp, intraday range at 1dp, market return x100 at 3dp, breadth
// x100 at 1dp.

pub fn text_or_dash(value: &Option<String>) -> String {
    match value {
        Some(s) => s.clone(),
        None => "-".to_string(),
    }
}

pub fn ret_pct(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}%", v * 100.0),
        None => "-".to_string(),
    }
}

pub fn zscore(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "-".to_string(),
    }
}

pub fn range_pct(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}"),
        None => "-".to_string(),
    }
}

pub fn market_ret_pct(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.3}%", v * 100.0),
        None => "-".to_string(),
    }
}

pub fn breadth_pct(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}%", v * 100.0),
        None => "-".to_string(),
    }
}

pub fn severity_note(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("Severity: {v:.1}%"),
        None => "-".to_string(),
    }
}

/// Build the downloadable CSV. Deterministic for a given report; only the
/// caller-supplied `generated_at` line varies between invocations.
///
/// Layout: title line, generated line, then the ticker and type tables in
/// map insertion order, then the two summary lines (absent totals count as 0).
pub fn report_csv(report: &AnalysisReport, generated_at: &str) -> String {
    let mut csv = String::from("Stock Market Anomaly Detection Report\n");
    csv.push_str(&format!("Generated: {generated_at}\n\n"));

    csv.push_str("ANOMALIES BY TICKER\n");
    csv.push_str("Ticker,Anomaly Count\n");
    for (ticker, count) in &report.by_ticker {
        csv.push_str(&format!("{ticker},{count}\n"));
    }

    csv.push_str("\nANOMALIES BY TYPE\n");
    csv.push_str("Type,Count\n");
    for (kind, count) in &report.by_type {
        csv.push_str(&format!("{kind},{count}\n"));
    }

    csv.push_str(&format!(
        "\nTotal Anomalies: {}\n",
        report.total_anomalies.unwrap_or(0)
    ));
    csv.push_str(&format!(
        "Market Days Flagged: {}\n",
        report.market_days_flagged.unwrap_or(0)
    ));
    csv
}
