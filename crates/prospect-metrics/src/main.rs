//! CLI entry point for the prospecting dashboard.

use anyhow::{Result, anyhow};
use clap::Parser;
use prospect_metrics::dates::{format_date, parse_user_date};
use prospect_metrics::{
    Dashboard, DashboardConfig, DashboardReport, DashboardSummary, LoadOptions, ReportGenerator,
    Stage, load_records, percent,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Sales prospecting dashboard metrics",
    long_about = "Derives KPIs, trends, channel breakdowns, the stage board and a goal \
                  projection from a prospecting spreadsheet export.\n\n\
                  EXAMPLES:\n  \
                  # Summary of a comma-separated export\n  \
                  prospect-metrics -i leads.csv\n\n  \
                  # Semicolon-separated export, one company only\n  \
                  prospect-metrics -i leads.csv --separator ';' --company Acme\n\n  \
                  # Machine-readable output with a pinned reference date\n  \
                  prospect-metrics -i leads.json --today 15/03/2025 --json"
)]
struct Args {
    /// Path to the CSV or JSON export
    #[arg(short, long)]
    input: String,

    /// CSV field separator
    #[arg(long, default_value = ",")]
    separator: char,

    /// Only include contacts from this company
    #[arg(long)]
    company: Option<String>,

    /// Only include contacts whose winning touch matches
    #[arg(long)]
    winning_touch: Option<String>,

    /// Only include contacts from this lead source
    #[arg(long)]
    source: Option<String>,

    /// Reference date for lateness (DD/MM/YYYY). Defaults to today
    #[arg(long)]
    today: Option<String>,

    /// Meeting target for the goal projection
    #[arg(long, default_value = "20")]
    goal: u32,

    /// Touches in one outreach cycle
    #[arg(long, default_value = "7")]
    touches: u32,

    /// Working days available to reach the goal
    #[arg(long, default_value = "20")]
    days: u32,

    /// Search contacts by name, company or title
    #[arg(long)]
    search: Option<String>,

    /// Output results as JSON to stdout (disables logging)
    #[arg(long)]
    json: bool,

    /// Write the JSON report to the output directory
    #[arg(short = 'r', long)]
    emit_report: bool,

    /// Output directory for reports
    #[arg(short, long, default_value = "./outputs")]
    output: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show errors and final result)
    #[arg(short, long)]
    quiet: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is completely disabled to ensure
/// only JSON is written to stdout.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    let separator = u8::try_from(args.separator)
        .map_err(|_| anyhow!("Separator must be a single ASCII character: {:?}", args.separator))?;
    let records = load_records(&args.input, &LoadOptions { separator })?;

    let config = build_config(&args)?;
    let mut builder = Dashboard::builder().config(config);
    if let Some(ref raw) = args.today {
        builder = builder.today(parse_user_date(raw)?);
    }
    let dashboard = builder.build()?;
    debug!("Reference date: {}", format_date(Some(dashboard.today())));

    if let Some(ref query) = args.search {
        return run_search(&dashboard, &records, query, &args);
    }

    let summary = dashboard.summarize(&records);
    let report = ReportGenerator::build_report(&args.input, summary);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if args.emit_report {
        let generator = ReportGenerator::new(PathBuf::from(&args.output));
        let report_path = generator.write_report_to_file(&report, &extract_file_stem(&args.input))?;
        info!("Report written to: {}", report_path.display());
    }

    print_human_readable_summary(&report);
    Ok(())
}

fn build_config(args: &Args) -> Result<DashboardConfig> {
    let mut builder = DashboardConfig::builder()
        .target_meetings(args.goal)
        .touches_per_cycle(args.touches)
        .working_days(args.days);

    if let Some(ref company) = args.company {
        builder = builder.company(company);
    }
    if let Some(ref touch) = args.winning_touch {
        builder = builder.winning_touch(touch);
    }
    if let Some(ref source) = args.source {
        builder = builder.lead_source(source);
    }

    Ok(builder.build()?)
}

/// Run a contact search instead of the summary.
///
/// Uses `println!` for user-facing output; logs stay on tracing.
fn run_search(
    dashboard: &Dashboard,
    records: &[prospect_metrics::ProspectRecord],
    query: &str,
    args: &Args,
) -> Result<()> {
    let hits = dashboard.search(records, query);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    if hits.is_empty() {
        println!("No contacts match '{}'", query);
        return Ok(());
    }
    for hit in &hits {
        println!(
            "{:<4} {:<28} {:<24} {}",
            hit.index,
            truncate_str(&hit.name, 28),
            truncate_str(&hit.company, 24),
            hit.status
        );
    }
    Ok(())
}

/// Extract the file stem (name without extension) from a path.
fn extract_file_stem(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output")
        .to_string()
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

/// Print the dashboard as plain text.
///
/// This is the default output when `--json` is not given.
fn print_human_readable_summary(report: &DashboardReport) {
    let summary: &DashboardSummary = &report.summary;
    let kpis = &summary.kpis;

    println!();
    println!("{}", "=".repeat(80));
    println!("PROSPECTING DASHBOARD");
    println!("{}", "=".repeat(80));
    println!();

    println!("Input: {}", report.input_file);
    println!("Reference date: {}", format_date(Some(summary.today)));
    if summary.filtered_count != summary.record_count {
        println!(
            "Filter: {} of {} contacts",
            summary.filtered_count, summary.record_count
        );
    }
    println!();

    println!("Funnel:");
    println!("  Contacts:             {}", kpis.total);
    println!("  Prospecting:          {} ({} late)", kpis.prospecting, kpis.late);
    println!("  Active conversations: {}", kpis.active_conversations);
    println!("  Meetings scheduled:   {}", kpis.scheduled);
    println!("  Closed:               {}", kpis.closed);
    println!();

    println!("Conversion:");
    println!("  Response rate:          {}", report.highlights.response_rate);
    println!(
        "  Meetings per response:  {}",
        report.highlights.schedule_from_response_rate
    );
    println!(
        "  Meetings per contact:   {}",
        report.highlights.schedule_from_total_rate
    );
    println!();

    println!("Touches by channel:");
    for (volume, booked) in summary
        .channel_volume
        .iter()
        .zip(&summary.scheduling_efficiency)
    {
        println!(
            "  {:<10} {:>5} sent  {:>4} meetings",
            volume.channel.as_str(),
            volume.count,
            booked.count
        );
    }
    println!();

    let goal = &summary.goal;
    println!("Goal ({} meetings):", goal.target_meetings);
    if goal.remaining == 0 {
        println!("  Reached");
    } else {
        println!("  Remaining meetings: {}", goal.remaining);
        println!("  Responses needed:   {}", goal.needed_responses);
        println!(
            "  Contacts needed:    {} (~{} per day over {} days)",
            goal.needed_contacts, goal.daily_new_contacts, goal.working_days
        );
        println!("  Estimated touches:  {:.0}", goal.estimated_touches);
        println!(
            "  Using rates: {} per response, {} per contact",
            percent(goal.response_to_meeting_rate),
            percent(goal.contact_to_meeting_rate)
        );
    }
    println!();

    let late: Vec<_> = summary
        .board
        .column(Stage::Prospecting)
        .iter()
        .filter(|card| card.is_late)
        .collect();
    if !late.is_empty() {
        println!("Late follow-ups:");
        for card in late.iter().take(10) {
            if let Some(ref pending) = card.pending {
                println!(
                    "  ! {} ({}) - {} due {}",
                    card.name, card.company, pending.label, pending.date_str
                );
            }
        }
        if late.len() > 10 {
            println!("  ... and {} more", late.len() - 10);
        }
        println!();
    }

    println!("Use --json for machine-readable output");
    println!("Use --emit-report to save the JSON report");
    println!("{}", "=".repeat(80));
}
