//! Capstone section: stock-anomaly report viewer.
//!
//! Fetches project metadata on mount, triggers analysis runs against the
//! backend, renders the report into stat tiles and tables, and exports the
//! same data as a CSV download.

use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, ProjectInfo};
use crate::report::{self, AnalysisReport};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Tab {
    Overview,
    Results,
}

#[component]
pub fn Capstone() -> impl IntoView {
    let (info, set_info) = signal::<Option<ProjectInfo>>(None);
    let (analysis, set_analysis) = signal::<Option<AnalysisReport>>(None);
    let (loading, set_loading) = signal(false);
    // Run failures gate the Results tab; the informational fetch keeps its
    // own channel so its failure cannot unlock an empty results panel.
    let (error, set_error) = signal::<Option<String>>(None);
    let (info_error, set_info_error) = signal::<Option<String>>(None);
    let (active_tab, set_active_tab) = signal(Tab::Overview);
    // Bumped on every run; a response only lands if its generation is still
    // current, so a slow older request cannot overwrite a newer one.
    let run_generation = StoredValue::new(0u64);

    // Project info is informational only; a failure must not block the demo.
    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_project_info().await {
                Ok(i) => set_info.set(Some(i)),
                Err(e) => {
                    log::warn!("project info fetch failed: {e}");
                    set_info_error.set(Some("Could not load project info".to_string()));
                }
            }
        });
    });

    let run_analysis = move |_: ()| {
        let generation = run_generation.get_value() + 1;
        run_generation.set_value(generation);

        set_analysis.set(None);
        set_error.set(None);
        set_loading.set(true);
        set_active_tab.set(Tab::Results);

        spawn_local(async move {
            let outcome = api::run_analysis().await;
            if run_generation.get_value() != generation {
                log::debug!("discarding stale analysis response (generation {generation})");
                return;
            }
            match outcome {
                Ok(r) => set_analysis.set(Some(r)),
                Err(e) => set_error.set(Some(format!("Failed to fetch analysis: {e}"))),
            }
            set_loading.set(false);
        });
    };

    let download_report = move |_: ()| {
        let Some(r) = analysis.get_untracked() else {
            return;
        };
        let now = js_sys::Date::new_0();
        let generated = String::from(now.to_locale_string("en-US", &JsValue::UNDEFINED));
        let date: String = String::from(now.to_iso_string()).chars().take(10).collect();
        let csv = report::report_csv(&r, &generated);
        if let Err(e) = download_csv(&csv, &format!("capstone-report-{date}.csv")) {
            log::error!("csv download failed: {e:?}");
        }
    };

    view! {
        <section class="capstone section container" id="capstone">
            <style>{include_str!("capstone.css")}</style>
            <h2>"Capstone Project"</h2>
            <h5 class="text-light">"Stock Market Anomaly Detection"</h5>

            <div class="capstone-tabs">
                <button
                    class="tab-btn"
                    class:active=move || active_tab.get() == Tab::Overview
                    on:click=move |_| set_active_tab.set(Tab::Overview)
                >
                    "Overview"
                </button>
                <button
                    class="tab-btn"
                    class:active=move || active_tab.get() == Tab::Results
                    disabled=move || {
                        analysis.with(|r| r.is_none()) && !loading.get()
                            && error.with(|e| e.is_none())
                    }
                    on:click=move |_| set_active_tab.set(Tab::Results)
                >
                    "Results"
                </button>
            </div>

            {move || match active_tab.get() {
                Tab::Overview => view! {
                    <OverviewPanel
                        info=info
                        info_error=info_error
                        error=error
                        loading=loading
                        on_run=Callback::new(run_analysis)
                    />
                }
                .into_any(),
                Tab::Results => view! {
                    <div class="capstone-content">
                        {move || loading.get().then(|| view! {
                            <div class="panel-note">"Loading analysis..."</div>
                        })}
                        {move || error.get().map(|e| view! {
                            <div class="panel-note error-msg">{e}</div>
                        })}
                        {move || {
                            (!loading.get() && error.with(|e| e.is_none())
                                && analysis.with(|r| r.is_none()))
                                .then(|| view! {
                                    <div class="panel-note">
                                        "Click \"Run Full Analysis\" to start"
                                    </div>
                                })
                        }}
                        {move || analysis.get().map(|r| view! {
                            <ResultsPanel report=r on_download=Callback::new(download_report) />
                        })}
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
}

#[component]
fn OverviewPanel(
    info: ReadSignal<Option<ProjectInfo>>,
    info_error: ReadSignal<Option<String>>,
    error: ReadSignal<Option<String>>,
    loading: ReadSignal<bool>,
    on_run: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="capstone-content">
            <div class="overview-grid">
                <div class="overview-card">
                    <h3>"Project Summary"</h3>
                    <p class="capstone-desc">
                        {move || match info.get() {
                            Some(i) => i.description,
                            None if info_error.with(|e| e.is_some()) => String::new(),
                            None => "Loading project summary...".to_string(),
                        }}
                    </p>
                    {move || info_error.get().map(|e| view! { <p class="error-msg">{e}</p> })}
                </div>

                <div class="overview-card">
                    <h3>"Dataset Info"</h3>
                    <ul class="info-list">
                        <li><strong>"Universe: "</strong> "QQQ, AAPL, MSFT, NVDA, AMZN, META"</li>
                        <li><strong>"Train: "</strong> "2018"</li>
                        <li><strong>"Validation: "</strong> "2019"</li>
                        <li><strong>"Test: "</strong> "2020 Q1"</li>
                    </ul>
                </div>

                <div class="overview-card">
                    <h3>"Detection Rules"</h3>
                    <ul class="info-list">
                        <li>"|Return Z-score| > 2.5"</li>
                        <li>"Log-volume Z-score > 2.5"</li>
                        <li>"Intraday range > 95th percentile"</li>
                    </ul>
                </div>

                <div class="overview-card">
                    <h3>"Techniques & Models"</h3>
                    <ul class="info-list">
                        <li><strong>"K-Means Clustering"</strong> " - Unsupervised anomaly detection"</li>
                        <li><strong>"Rolling-window Z-scores"</strong> " - 63-day window for returns"</li>
                        <li><strong>"Log-volume Analysis"</strong> " - 21-day rolling std"</li>
                        <li><strong>"Intraday Range Percentiles"</strong> " - Relative to 63-day history"</li>
                        <li><strong>"Market Breadth"</strong> " - Cross-ticker anomaly context"</li>
                    </ul>
                </div>

                <div class="overview-card">
                    <h3>"Run Analysis"</h3>
                    <p class="capstone-desc text-small">
                        "Run the full stock anomaly detection analysis. \
                         Results will be displayed in tables."
                    </p>
                    <button
                        class="btn-run"
                        disabled=move || loading.get()
                        on:click=move |_| on_run.run(())
                    >
                        {move || if loading.get() { "Analyzing..." } else { "Run Full Analysis" }}
                    </button>
                    {move || error.get().map(|e| view! { <p class="error-msg">{e}</p> })}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ResultsPanel(report: AnalysisReport, on_download: Callback<()>) -> impl IntoView {
    let ticker_rows = report::counts_by_desc(&report.by_ticker);
    let type_rows = report::counts_by_desc(&report.by_type);
    let distinct_tickers = report.by_ticker.len();
    let total = report.total_anomalies.unwrap_or(0);
    let flagged = report.market_days_flagged.unwrap_or(0);

    let daily = report.daily_anomaly_card.clone();
    let market_days = report.market_day_table.clone();
    let top = report.top_anomalies().to_vec();

    view! {
        <div class="results-header">
            <h3>"Capstone Analysis Results"</h3>
            <button class="btn-download" on:click=move |_| on_download.run(())>
                "Download Report"
            </button>
        </div>

        <div class="results-grid">
            <div class="stats-box">
                <div class="stat-value">{total}</div>
                <div class="stat-label">"Total Anomalies Detected"</div>
            </div>
            <div class="stats-box">
                <div class="stat-value">{flagged}</div>
                <div class="stat-label">"Market Days Flagged"</div>
            </div>
            <div class="stats-box">
                <div class="stat-value">{distinct_tickers}</div>
                <div class="stat-label">"Stocks Analyzed"</div>
            </div>
        </div>

        <div class="tables-grid">
            <CountTable title="By Ticker" key_header="Ticker" rows=ticker_rows />
            <CountTable title="By Type" key_header="Type" rows=type_rows />
        </div>

        {(!daily.is_empty()).then(|| view! {
            <div class="table-card full-width">
                <h4>"A. Daily Anomaly Card"</h4>
                <table class="result-table">
                    <thead>
                        <tr>
                            <th>"Date"</th>
                            <th>"Ticker"</th>
                            <th>"Type"</th>
                            <th>"Return"</th>
                            <th>"Ret Z"</th>
                            <th>"Vol Z"</th>
                            <th>"Range %"</th>
                            <th>"Why"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {daily.iter().map(|a| view! {
                            <tr class="severity-high">
                                <td>{report::text_or_dash(&a.date)}</td>
                                <td><strong>{report::text_or_dash(&a.ticker)}</strong></td>
                                <td><span class="type-badge">{report::text_or_dash(&a.kind)}</span></td>
                                <td>{report::ret_pct(a.ret)}</td>
                                <td>{report::zscore(a.ret_z)}</td>
                                <td>{report::zscore(a.volz)}</td>
                                <td>{report::range_pct(a.range_pct)}</td>
                                <td class="why-cell">{report::text_or_dash(&a.why)}</td>
                            </tr>
                        }).collect::<Vec<_>>()}
                    </tbody>
                </table>
            </div>
        })}

        {(!market_days.is_empty()).then(|| view! {
            <div class="table-card full-width">
                <h4>"B. Market-Day Table"</h4>
                <table class="result-table">
                    <thead>
                        <tr>
                            <th>"Date"</th>
                            <th>"Market Return"</th>
                            <th>"Breadth"</th>
                            <th>"Flagged"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {market_days.iter().map(|m| view! {
                            <tr>
                                <td>{report::text_or_dash(&m.date)}</td>
                                <td>{report::market_ret_pct(m.market_ret)}</td>
                                <td>{report::breadth_pct(m.breadth)}</td>
                                <td>
                                    <span class=if m.market_anomaly_flag { "flag-yes" } else { "flag-no" }>
                                        {if m.market_anomaly_flag { "Yes" } else { "No" }}
                                    </span>
                                </td>
                            </tr>
                        }).collect::<Vec<_>>()}
                    </tbody>
                </table>
            </div>
        })}

        {(!top.is_empty()).then(|| view! {
            <div class="table-card full-width">
                <h4>"D. Monthly Mini-Report (Top 10 Most Severe Anomalies)"</h4>
                <table class="result-table">
                    <thead>
                        <tr>
                            <th>"Date"</th>
                            <th>"Ticker"</th>
                            <th>"Type"</th>
                            <th>"Ret Z"</th>
                            <th>"Vol Z"</th>
                            <th>"Mkt Flag"</th>
                            <th>"Why"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {top.iter().map(|a| {
                            let flagged = a.severity.is_some_and(|s| s >= 95.0);
                            view! {
                                <tr class="severity-high">
                                    <td>{report::text_or_dash(&a.date)}</td>
                                    <td><strong>{report::text_or_dash(&a.ticker)}</strong></td>
                                    <td><span class="type-badge">{report::text_or_dash(&a.kind)}</span></td>
                                    <td>{report::zscore(a.ret_z)}</td>
                                    <td>{report::zscore(a.volz)}</td>
                                    <td>
                                        <span class=if flagged { "flag-yes" } else { "flag-no" }>
                                            {if flagged { "Yes" } else { "No" }}
                                        </span>
                                    </td>
                                    <td class="why-cell">{report::severity_note(a.severity)}</td>
                                </tr>
                            }
                        }).collect::<Vec<_>>()}
                    </tbody>
                </table>
            </div>
        })}
    }
}

/// Count table sorted by count descending (stable for equal counts).
#[component]
fn CountTable(
    title: &'static str,
    key_header: &'static str,
    rows: Vec<(String, u64)>,
) -> impl IntoView {
    view! {
        <div class="table-card">
            <h4>{title}</h4>
            <table class="result-table">
                <thead>
                    <tr>
                        <th>{key_header}</th>
                        <th>"Count"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows.into_iter().map(|(key, count)| view! {
                        <tr>
                            <td class="ticker-cell">{key}</td>
                            <td class="count-cell">{count}</td>
                        </tr>
                    }).collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>
    }
}

/// Hand a CSV blob to the browser as a named file download.
fn download_csv(contents: &str, filename: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();
    web_sys::Url::revoke_object_url(&url)?;
    Ok(())
}
