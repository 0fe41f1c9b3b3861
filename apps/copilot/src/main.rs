use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cv_copilot::config::Config;
use cv_copilot::{AnalysisReport, AnalysisSession, Analyzer, Locale};

#[derive(Parser)]
#[command(name = "cv-copilot")]
#[command(about = "Analyse a CV and print its profile, job recommendations and insights as JSON")]
#[command(version)]
struct Cli {
    /// PDF or DOCX file to analyse
    file: PathBuf,

    /// Display language for rendered advice (fr or en); overrides CV_COPILOT_LOCALE
    #[arg(short, long)]
    locale: Option<Locale>,

    /// Declared media type; guessed from the file extension when omitted
    #[arg(long)]
    media_type: Option<String>,

    /// CV fragment to get rewrite advice for (repeatable)
    #[arg(short, long)]
    enhance: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let config = Config::from_env()?;

    // Logs go to stderr; stdout carries only the report.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let locale = cli.locale.unwrap_or(config.locale);
    info!("cv-copilot v{} (locale: {locale})", env!("CARGO_PKG_VERSION"));

    let analyzer = Analyzer::default();
    let session = AnalysisSession::default();
    let work = analyzer.analyze_file(&cli.file, cli.media_type.as_deref());

    let outcome = tokio::time::timeout(config.timeout, session.run(work))
        .await
        .with_context(|| {
            format!(
                "analysis of {} did not finish within {}s",
                cli.file.display(),
                config.timeout.as_secs()
            )
        })?;

    let profile = match outcome.into_accepted() {
        Some(Ok(profile)) => profile,
        Some(Err(e)) => {
            error!(code = e.code(), "{e}");
            eprintln!("{}", e.user_message(locale));
            return Ok(ExitCode::FAILURE);
        }
        None => bail!("analysis was superseded by a newer request"),
    };

    if profile.is_degraded() {
        warn!(
            source = ?profile.text_source(),
            "profile built from fallback text, not from the document itself"
        );
    }

    let report = AnalysisReport::build(profile, locale, &cli.enhance);
    let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    println!("{json}");

    Ok(ExitCode::SUCCESS)
}
