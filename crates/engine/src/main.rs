//! Investigator engine - replays an edit script against a fresh sheet.
//!
//! Usage: `investigator-engine [SCRIPT]`. The script path may also come from
//! `INVESTIGATOR_SCRIPT`. The resulting sheet document is printed as JSON.

use std::path::PathBuf;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use investigator_engine::infrastructure::config::{load_dotenv_from_repo_root, EngineConfig};
use investigator_engine::infrastructure::script::EditScript;
use investigator_engine::use_cases::character_sheet::budget_report;
use investigator_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    let cli_script = std::env::args_os().nth(1).map(PathBuf::from);
    let config = EngineConfig::from_env().with_script_override(cli_script.as_deref());

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting investigator engine");

    let script = match &config.script {
        Some(path) => EditScript::load(path).await?,
        None => {
            tracing::info!("No edit script configured, emitting a blank sheet");
            EditScript::default()
        }
    };

    let app = App::in_memory();
    let sheets = &app.use_cases.character_sheet;

    let created = sheets.create(script.name.clone()).await?;
    let document = if script.edits.is_empty() {
        created
    } else {
        sheets
            .apply_script(created.id, script.edits)
            .await
            .context("Edit script failed")?
            .document
    };

    let report = budget_report(&document.character);
    tracing::info!(
        occupation_used = report.occupation.used,
        occupation_available = report.occupation.available,
        personal_used = report.personal.used,
        personal_available = report.personal.available,
        unresolved_choice = report.unresolved_choice,
        "Skill point budgets"
    );
    if report.occupation.is_over_budget() || report.personal.is_over_budget() {
        tracing::warn!("Skill points exceed the available budget");
    }

    let json = if config.pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };
    println!("{json}");

    Ok(())
}
