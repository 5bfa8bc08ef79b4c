use super::*;

fn empty_report() -> AnalysisReport {
    AnalysisReport {
        total_anomalies: None,
        market_days_flagged: None,
        by_ticker: IndexMap::new(),
        by_type: IndexMap::new(),
        daily_anomaly_card: Vec::new(),
        market_day_table: Vec::new(),
        top_anomalies: Vec::new(),
    }
}

fn anomaly(date: &str) -> AnomalyRecord {
    AnomalyRecord {
        date: Some(date.to_string()),
        ticker: Some("AAPL".to_string()),
        kind: Some("ret_z".to_string()),
        ret: Some(0.031),
        ret_z: Some(2.71),
        volz: Some(1.10),
        range_pct: Some(4.2),
        why: Some("return spike".to_string()),
        severity: Some(97.5),
    }
}

// =============================================================
// Deserialization
// =============================================================

#[test]
fn report_parses_with_all_sections_absent() {
    let report: AnalysisReport = serde_json::from_str("{}").unwrap();
    assert_eq!(report, empty_report());
}

#[test]
fn record_parses_with_null_numeric_fields() {
    let json = r#"{"date":"2020-03-12","ticker":"QQQ","type":"range","ret":null,"ret_z":null,"volz":null,"range_pct":null,"why":null}"#;
    let record: AnomalyRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.date.as_deref(), Some("2020-03-12"));
    assert_eq!(record.ret, None);
    assert_eq!(record.severity, None);
}

#[test]
fn count_maps_keep_insertion_order() {
    let json = r#"{"by_ticker":{"QQQ":3,"AAPL":7,"MSFT":3}}"#;
    let report: AnalysisReport = serde_json::from_str(json).unwrap();
    let keys: Vec<&String> = report.by_ticker.keys().collect();
    assert_eq!(keys, ["QQQ", "AAPL", "MSFT"]);
}

// =============================================================
// Count sorting
// =============================================================

#[test]
fn counts_sorted_descending() {
    let mut counts = IndexMap::new();
    counts.insert("QQQ".to_string(), 3);
    counts.insert("AAPL".to_string(), 7);
    counts.insert("NVDA".to_string(), 5);

    let sorted = counts_by_desc(&counts);
    assert_eq!(
        sorted,
        vec![
            ("AAPL".to_string(), 7),
            ("NVDA".to_string(), 5),
            ("QQQ".to_string(), 3),
        ]
    );
}

#[test]
fn equal_counts_keep_insertion_order() {
    let mut counts = IndexMap::new();
    counts.insert("MSFT".to_string(), 4);
    counts.insert("AMZN".to_string(), 4);
    counts.insert("META".to_string(), 4);

    let sorted = counts_by_desc(&counts);
    let tickers: Vec<&str> = sorted.iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(tickers, ["MSFT", "AMZN", "META"]);
}

// =============================================================
// Top anomalies truncation
// =============================================================

#[test]
fn top_anomalies_truncated_to_ten_in_input_order() {
    let mut report = empty_report();
    report.top_anomalies = (0..15).map(|i| anomaly(&format!("day-{i}"))).collect();

    let top = report.top_anomalies();
    assert_eq!(top.len(), 10);
    assert_eq!(top[0].date.as_deref(), Some("day-0"));
    assert_eq!(top[9].date.as_deref(), Some("day-9"));
}

#[test]
fn top_anomalies_short_list_passes_through() {
    let mut report = empty_report();
    report.top_anomalies = vec![anomaly("a"), anomaly("b")];
    assert_eq!(report.top_anomalies().len(), 2);
}

// =============================================================
// Placeholder formatting
// =============================================================

#[test]
fn missing_values_render_as_dash() {
    assert_eq!(text_or_dash(&None), "-");
    assert_eq!(ret_pct(None), "-");
    assert_eq!(zscore(None), "-");
    assert_eq!(range_pct(None), "-");
    assert_eq!(market_ret_pct(None), "-");
    assert_eq!(breadth_pct(None), "-");
    assert_eq!(severity_note(None), "-");
}

#[test]
fn zero_is_a_value_not_a_placeholder() {
    assert_eq!(ret_pct(Some(0.0)), "0.00%");
    assert_eq!(zscore(Some(0.0)), "0.00");
}

#[test]
fn column_precision() {
    assert_eq!(ret_pct(Some(0.03125)), "3.13%");
    assert_eq!(zscore(Some(2.718)), "2.72");
    assert_eq!(range_pct(Some(4.26)), "4.3");
    assert_eq!(market_ret_pct(Some(-0.012345)), "-1.234%");
    assert_eq!(breadth_pct(Some(0.667)), "66.7%");
    assert_eq!(severity_note(Some(97.46)), "Severity: 97.5%");
}

// =============================================================
// CSV export
// =============================================================

#[test]
fn csv_layout_for_populated_report() {
    let mut report = empty_report();
    report.total_anomalies = Some(42);
    report.market_days_flagged = Some(6);
    report.by_ticker.insert("QQQ".to_string(), 12);
    report.by_ticker.insert("AAPL".to_string(), 30);
    report.by_type.insert("ret_z".to_string(), 25);
    report.by_type.insert("volz".to_string(), 17);

    let csv = report_csv(&report, "2026-08-31 10:00:00");
    let expected = "Stock Market Anomaly Detection Report\n\
                    Generated: 2026-08-31 10:00:00\n\
                    \n\
                    ANOMALIES BY TICKER\n\
                    Ticker,Anomaly Count\n\
                    QQQ,12\n\
                    AAPL,30\n\
                    \n\
                    ANOMALIES BY TYPE\n\
                    Type,Count\n\
                    ret_z,25\n\
                    volz,17\n\
                    \n\
                    Total Anomalies: 42\n\
                    Market Days Flagged: 6\n";
    assert_eq!(csv, expected);
}

#[test]
fn csv_ticker_rows_use_insertion_order_not_count_order() {
    let mut report = empty_report();
    report.by_ticker.insert("LOW".to_string(), 1);
    report.by_ticker.insert("HIGH".to_string(), 99);

    let csv = report_csv(&report, "t");
    let low = csv.find("LOW,1").unwrap();
    let high = csv.find("HIGH,99").unwrap();
    assert!(low < high);
}

#[test]
fn csv_summary_defaults_to_zero_when_totals_absent() {
    let csv = report_csv(&empty_report(), "t");
    assert!(csv.contains("\nTotal Anomalies: 0\n"));
    assert!(csv.ends_with("Market Days Flagged: 0\n"));
}

#[test]
fn csv_same_report_same_bytes() {
    let mut report = empty_report();
    report.by_ticker.insert("NVDA".to_string(), 9);
    assert_eq!(report_csv(&report, "x"), report_csv(&report, "x"));
}
