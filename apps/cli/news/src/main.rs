use news::cli::{self, GlobalArgs};
use news::commands::{execute, resolve_config};
use news::error::NewsError;
use news::logger::initialize as LoggerInitialize;
use news::report::PageReport;

use client_core::config::load_dotenv;

use std::fs::create_dir_all;
use std::path::PathBuf;
use std::process::ExitCode;

use log::info;

const APP_DIR_NAME: &str = "news-client";

#[tokio::main]
async fn main() -> ExitCode {
    // .env must be loaded before clap reads env-backed arguments
    let dotenv_path = load_dotenv();

    let matches = cli::new().get_matches();
    let globals = cli::global_args(&matches);

    let result = run(&matches, &globals, dotenv_path).await;

    match result {
        Ok(report) => {
            print_report(&report, &globals);
            if report.succeeded {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            if globals.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&e).unwrap_or_else(|_| e.to_string())
                );
            } else {
                eprintln!("{e}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(
    matches: &clap::ArgMatches,
    globals: &GlobalArgs,
    dotenv_path: Option<PathBuf>,
) -> Result<PageReport, NewsError> {
    let log_dir = match &globals.log_dir {
        Some(dir) => dir.clone(),
        None => dirs::data_local_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join("logs"))
            .ok_or_else(|| NewsError::news("Failed to get log directory"))?,
    };

    create_dir_all(&log_dir)
        .map_err(|e| NewsError::news(format!("Failed to create log directory: {e}")))?;

    // Initialize logger FIRST
    LoggerInitialize(&log_dir, globals.verbose)?;

    info!("news client starting");
    info!("Log directory: {}", log_dir.display());
    if let Some(path) = dotenv_path {
        info!("Environment loaded from {}", path.display());
    }

    let action = cli::dispatch(matches)?;
    let config = resolve_config(globals)?;

    execute(action, &config).await
}

fn print_report(report: &PageReport, globals: &GlobalArgs) {
    if globals.json {
        match serde_json::to_string_pretty(report) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("Failed to serialize report: {e}"),
        }
        return;
    }

    let text = report.to_text(globals.html);
    if !text.is_empty() {
        println!("{text}");
    }
}
