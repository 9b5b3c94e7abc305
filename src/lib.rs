pub mod commands;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

use std::path::PathBuf;

use tracing::info;

const DATA_DIR_ENV: &str = "DASHBOARD_DATA_DIR";
const DEFAULT_DATA_DIR: &str = "data";
const DATABASE_FILE: &str = "weekly-dashboard.sqlite";

pub fn run() {
    if let Err(error) = try_run() {
        eprintln!("failed to launch application: {error}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = std::env::var_os(DATA_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

    std::fs::create_dir_all(&data_dir)?;
    crate::utils::logger::init_logging(&data_dir.join("logs"))?;

    let pool = crate::db::DbPool::new(data_dir.join(DATABASE_FILE))?;
    let state = crate::commands::AppState::new(pool)?;
    info!(target: "app::startup", data_dir = %data_dir.display(), "dashboard state ready");

    let overview = crate::commands::dashboard::dashboard_overview_fetch(&state, None)
        .map_err(|err| format!("{}: {}", err.code, err.message))?;
    println!("{}", serde_json::to_string_pretty(&overview)?);

    Ok(())
}
