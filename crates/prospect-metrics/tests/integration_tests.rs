//! Integration tests for the prospecting dashboard.
//!
//! These tests load the fixture exports and check the derived dashboard end
//! to end through the public API.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use prospect_metrics::{
    Channel, Dashboard, DashboardConfig, DashboardError, LoadOptions, NO_DATE_MARKER,
    ProspectRecord, RecordFilter, ReportGenerator, Stage, load_records, percent,
};
use std::path::PathBuf;

// ============================================================================
// Helper Functions
// ============================================================================

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load(filename: &str) -> Vec<ProspectRecord> {
    load_records(fixtures_path().join(filename), &LoadOptions::default())
        .expect("Failed to load fixture")
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

fn dashboard() -> Dashboard {
    Dashboard::builder().today(today()).build().unwrap()
}

fn channel_counts(series: &[prospect_metrics::ChannelCount]) -> Vec<(Channel, usize)> {
    series.iter().map(|c| (c.channel, c.count)).collect()
}

// ============================================================================
// CSV Export
// ============================================================================

#[test]
fn test_csv_fixture_loads_and_drops_blank_rows() {
    let records = load("prospects.csv");
    assert_eq!(records.len(), 7);
    assert_eq!(records[0].display_name(), "Ana Souza");
    assert_eq!(records[6].display_name(), "Gabi");
}

#[test]
fn test_kpis_from_csv() {
    let summary = dashboard().summarize(&load("prospects.csv"));
    let kpis = &summary.kpis;

    assert_eq!(kpis.total, 7);
    assert_eq!(kpis.responded, 4);
    assert_eq!(kpis.scheduled, 2);
    assert_eq!(kpis.prospecting, 3);
    assert_eq!(kpis.active_conversations, 1);
    assert_eq!(kpis.closed, 1);
    assert_eq!(kpis.finalized, 3);
    assert_eq!(kpis.late, 1);

    assert_eq!(percent(kpis.response_rate), "57.1%");
    assert_eq!(percent(kpis.schedule_from_response_rate), "50.0%");
    assert_eq!(percent(kpis.schedule_from_total_rate), "28.6%");
}

#[test]
fn test_timeline_from_csv() {
    let summary = dashboard().summarize(&load("prospects.csv"));
    let points: Vec<(String, usize, usize, usize)> = summary
        .timeline
        .into_iter()
        .map(|p| (p.label, p.connections, p.responses, p.meetings))
        .collect();

    // The serial date 45719 is 03/03/2025
    assert_eq!(
        points,
        vec![
            ("01/03".to_string(), 1, 0, 0),
            ("02/03".to_string(), 2, 0, 0),
            ("03/03".to_string(), 4, 0, 0),
            ("04/03".to_string(), 6, 0, 0),
            ("05/03".to_string(), 7, 1, 1),
            ("06/03".to_string(), 7, 2, 1),
            ("07/03".to_string(), 7, 3, 1),
            ("08/03".to_string(), 7, 4, 2),
        ]
    );
}

#[test]
fn test_channels_from_csv() {
    let summary = dashboard().summarize(&load("prospects.csv"));

    assert_eq!(
        channel_counts(&summary.channel_volume),
        vec![
            (Channel::LinkedIn, 5),
            (Channel::Email, 3),
            (Channel::WhatsApp, 1),
            (Channel::Other, 1),
        ]
    );
    assert_eq!(
        channel_counts(&summary.scheduling_efficiency),
        vec![
            (Channel::LinkedIn, 0),
            (Channel::Email, 1),
            (Channel::WhatsApp, 1),
            (Channel::Other, 0),
        ]
    );
}

#[test]
fn test_board_from_csv() {
    let summary = dashboard().summarize(&load("prospects.csv"));
    let board = &summary.board;

    let prospecting = board.column(Stage::Prospecting);
    assert_eq!(prospecting.len(), 3);

    let ana = &prospecting[0];
    assert!(ana.is_late);
    let pending = ana.pending.as_ref().unwrap();
    assert_eq!(pending.label, "Touch 2");
    assert_eq!(pending.date_str, "05/03/2025");

    let bruno = &prospecting[1];
    assert!(!bruno.is_late);
    assert_eq!(bruno.pending.as_ref().unwrap().label, "Touch 3");

    let gabi = &prospecting[2];
    assert!(!gabi.is_late);
    assert_eq!(gabi.pending.as_ref().unwrap().date_str, NO_DATE_MARKER);

    let scheduled: Vec<&str> = board
        .column(Stage::Scheduled)
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(scheduled, vec!["Carla Dias", "Fábio Nunes"]);
    assert_eq!(board.column(Stage::Responded)[0].name, "Diego Alves");
    assert_eq!(board.column(Stage::Closed)[0].name, "Elisa Rocha");
    assert_eq!(board.len(), 7);
}

#[test]
fn test_goal_from_csv() {
    let summary = dashboard().summarize(&load("prospects.csv"));
    assert_eq!(summary.goal.remaining, 18);
    assert_eq!(summary.goal.needed_responses, 36);
    assert!(summary.goal.needed_contacts >= 63);
}

#[test]
fn test_filters_from_csv() {
    let records = load("prospects.csv");
    let filter = RecordFilter {
        company: Some("Acme".to_string()),
        ..Default::default()
    };
    let summary = dashboard().summarize_with(&records, &filter);

    assert_eq!(summary.filtered_count, 3);
    assert_eq!(summary.kpis.prospecting, 3);
    assert_eq!(summary.kpis.late, 1);
    assert_eq!(summary.filter_options.companies, vec!["Acme", "Globex", "Initech"]);
    assert_eq!(
        summary.filter_options.lead_sources,
        vec!["Evento", "Indicação", "Outbound"]
    );
    assert_eq!(summary.filter_options.winning_touches, vec!["Touch 2"]);

    let winners = RecordFilter {
        winning_touch: Some("Touch 2".to_string()),
        lead_source: Some("Outbound".to_string()),
        ..Default::default()
    };
    let summary = dashboard().summarize_with(&records, &winners);
    assert_eq!(summary.filtered_count, 1);
    assert_eq!(summary.board.column(Stage::Scheduled)[0].name, "Fábio Nunes");
}

#[test]
fn test_search_from_csv() {
    let records = load("prospects.csv");
    let dashboard = dashboard();

    let hits = dashboard.search(&records, "cto");
    let names: Vec<&str> = hits.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["Ana Souza", "Fábio Nunes"]);
    assert_eq!(hits[1].status, "Reunião agendada");

    assert_eq!(dashboard.search(&records, "ACME").len(), 3);
    assert!(dashboard.search(&records, "x").is_empty());
}

#[test]
fn test_semicolon_export() {
    let records = load_records(
        fixtures_path().join("prospects_semicolon.csv"),
        &LoadOptions { separator: b';' },
    )
    .unwrap();
    assert_eq!(records.len(), 3);

    let summary = dashboard().summarize(&records);
    assert_eq!(summary.kpis.scheduled, 1);
    assert_eq!(summary.kpis.closed, 1);
    assert_eq!(summary.kpis.prospecting, 1);
}

// ============================================================================
// JSON Export
// ============================================================================

#[test]
fn test_json_export() {
    let records = load("prospects.json");
    assert_eq!(records.len(), 3);

    let summary = dashboard().summarize(&records);
    assert_eq!(summary.kpis.total, 3);
    assert_eq!(summary.kpis.responded, 2);
    assert_eq!(summary.kpis.scheduled, 1);
    assert_eq!(summary.kpis.closed, 1);
    assert_eq!(summary.kpis.late, 1);

    // English headers are read through aliases
    assert_eq!(summary.board.column(Stage::Closed)[0].name, "Julia");

    let helena = &summary.board.column(Stage::Prospecting)[0];
    assert_eq!(
        helena.pending.as_ref().unwrap().date,
        NaiveDate::from_ymd_opt(2025, 3, 3)
    );
}

// ============================================================================
// Errors and Configuration
// ============================================================================

#[test]
fn test_empty_export_is_rejected() {
    let result = load_records(fixtures_path().join("empty.csv"), &LoadOptions::default());
    assert!(matches!(result, Err(DashboardError::EmptyDataset(_))));
}

#[test]
fn test_missing_file_is_rejected() {
    let err = load_records(fixtures_path().join("missing.json"), &LoadOptions::default())
        .unwrap_err();
    assert_eq!(err.error_code(), "FILE_NOT_FOUND");
    assert!(err.is_user_error());
}

#[test]
fn test_invalid_config_is_rejected() {
    let result = DashboardConfig::builder().working_days(0).build();
    assert!(result.is_err());
}

#[test]
fn test_custom_goal() {
    let config = DashboardConfig::builder()
        .target_meetings(4)
        .working_days(5)
        .build()
        .unwrap();
    let summary = Dashboard::builder()
        .config(config)
        .today(today())
        .build()
        .unwrap()
        .summarize(&load("prospects.csv"));

    assert_eq!(summary.goal.remaining, 2);
    assert_eq!(summary.goal.needed_responses, 4);
    assert_eq!(summary.goal.needed_contacts, 7);
    assert_eq!(summary.goal.daily_new_contacts, 2);
}

// ============================================================================
// Reporting
// ============================================================================

#[test]
fn test_report_serializes_summary() {
    let summary = dashboard().summarize(&load("prospects.csv"));
    let report = ReportGenerator::build_report("prospects.csv", summary);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["input_file"], "prospects.csv");
    assert_eq!(json["highlights"]["response_rate"], "57.1%");
    assert_eq!(json["summary"]["kpis"]["total"], 7);
    assert_eq!(json["summary"]["channel_volume"][0]["channel"], "linkedin");
    assert_eq!(json["summary"]["board"]["scheduled"][0]["stage"], "scheduled");
}
