mod error;
mod report;
mod settings;
mod sports;
mod weather;

use crate::report::ReportData;
use crate::report::assembler::{build_sports, build_weather};
use crate::report::publish::{GitPublisher, Publisher, StdoutPublisher};
use crate::report::render::{MarkdownRenderer, Renderer};
use crate::settings::{ReportKind, RunOptions, Settings};
use anyhow::Context;
use chrono::Local;
use log::{LevelFilter, debug, error, info};
use report_api::client::ReportApi;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let Some(options) = handle_cli_args()? else {
        return Ok(());
    };

    better_panic::install();
    setup_logging(options.log_level);

    let settings = Settings::load(&options.settings_path)?;
    let api = ReportApi::new(&settings.web.user_agent);
    let publisher: Box<dyn Publisher> = if options.dry_run {
        Box::new(StdoutPublisher)
    } else {
        Box::new(GitPublisher::new(settings.repos.daily_report.clone()))
    };

    let kinds = match options.only {
        Some(kind) => vec![kind],
        None => vec![ReportKind::Weather, ReportKind::Sports],
    };

    // Each report stands alone: one failing to publish does not stop the next.
    let mut failed = 0;
    for kind in kinds {
        if let Err(e) = build_report(kind, &api, &settings, publisher.as_ref()).await {
            error!("{kind:?} report failed: {e:#}");
            failed += 1;
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} report(s) failed");
    }
    Ok(())
}

async fn build_report(
    kind: ReportKind,
    api: &ReportApi,
    settings: &Settings,
    publisher: &dyn Publisher,
) -> anyhow::Result<()> {
    let today = Local::now().date_naive();
    let data: ReportData = match kind {
        ReportKind::Sports => build_sports(api, settings, today).await,
        ReportKind::Weather => build_weather(api, settings.location, today).await,
    };
    debug!("{}", serde_json::to_string(&data)?);

    let template = data.template();
    let text = MarkdownRenderer
        .render(template, &data)
        .with_context(|| format!("rendering {}", template.file_name()))?;
    publisher
        .publish(template.file_name(), &text)
        .with_context(|| format!("publishing {}", template.file_name()))?;
    info!("{} done", template.file_name());
    Ok(())
}

/// Parse arguments. `None` means the invocation was fully handled (help,
/// version) and the program should exit.
fn handle_cli_args() -> anyhow::Result<Option<RunOptions>> {
    let mut options = RunOptions::default();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{}", usage_text());
                return Ok(None);
            }
            "-V" | "--version" => {
                println!("rupert-report {}", env!("CARGO_PKG_VERSION"));
                return Ok(None);
            }
            "-s" | "--settings" => {
                let path = args.next().context("--settings needs a path")?;
                options.settings_path = path.into();
            }
            "-n" | "--dry-run" => options.dry_run = true,
            "-v" | "--verbose" => options.log_level = LevelFilter::Debug,
            "--only" => {
                let name = args.next().context("--only needs a report name")?;
                let kind = ReportKind::parse(&name)
                    .with_context(|| format!("unknown report {name:?}, expected sports or weather"))?;
                options.only = Some(kind);
            }
            _ => {
                eprintln!("Unknown argument: {arg}\n\n{}", usage_text());
                std::process::exit(2);
            }
        }
    }
    Ok(Some(options))
}

fn usage_text() -> &'static str {
    "rupert-report - daily sports and weather report

Usage:
  rupert-report [--settings <path>] [--only sports|weather] [--dry-run] [--verbose]
  rupert-report --help
  rupert-report --version

Options:
  -s, --settings <path>  Settings file (default cfg/settings.json)
      --only <report>    Build only the sports or the weather report
  -n, --dry-run          Print reports instead of committing them
  -v, --verbose          Debug logging

Environment:
  RUPERT_SETTINGS        Settings file path, overridden by --settings
  RUST_LOG               Log filter, overrides --verbose"
}

/// `log` records are bridged into the subscriber.
fn setup_logging(level: LevelFilter) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string().to_lowercase()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
