//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable that drives the whole service surface
//!   against an in-memory store.
//! - Keep output deterministic enough for quick local sanity checks.

use log::info;
use techlink_core::db::open_db_in_memory;
use techlink_core::{
    core_version, default_log_level, init_logging, ApiResponse, CapabilityTechnologyService,
    SqliteCapabilityTechnologyRepository, SqliteTechnologyRepository, StatusMessage, Technology,
    TechnologyDraft, TechnologyService,
};

fn main() {
    if let Ok(log_dir) = std::env::var("TECHLINK_LOG_DIR") {
        let level = std::env::var("TECHLINK_LOG_LEVEL")
            .unwrap_or_else(|_| default_log_level().to_string());
        if let Err(err) = init_logging(&level, &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    println!("techlink_core version={}", core_version());

    if let Err(err) = run_smoke() {
        eprintln!("smoke flow failed: {err}");
        std::process::exit(1);
    }
}

/// Drives one create -> associate -> query -> delete round trip and prints
/// each response envelope as JSON.
fn run_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let conn = open_db_in_memory()?;

    let technologies = TechnologyService::new(
        SqliteTechnologyRepository::new(&conn),
        SqliteCapabilityTechnologyRepository::new(&conn),
    );
    let capabilities = CapabilityTechnologyService::new(
        SqliteTechnologyRepository::new(&conn),
        SqliteCapabilityTechnologyRepository::new(&conn),
    );

    let drafts = vec![
        TechnologyDraft::new("Rust", "systems programming language"),
        TechnologyDraft::new("SQLite", "embedded relational database"),
        TechnologyDraft::new("Serde", "serialization framework"),
    ];
    let created = technologies.create_technologies(&drafts)?;
    print_envelope(&ApiResponse::success(
        StatusMessage::TechnologyCreated,
        &created,
    ))?;

    let ids: Vec<i64> = created.iter().map(|technology| technology.id).collect();
    capabilities.associate(1, &ids)?;
    print_envelope(&ApiResponse::<Vec<Technology>>::success_empty(
        StatusMessage::RelationsCreated,
    ))?;

    let linked = capabilities.find_by_capability(1)?;
    print_envelope(&ApiResponse::success(
        StatusMessage::TechnologiesFound,
        &linked,
    ))?;

    technologies.delete_technologies(&ids)?;
    print_envelope(&ApiResponse::<Vec<Technology>>::success_empty(
        StatusMessage::RelationsDeleted,
    ))?;

    info!("event=cli_smoke module=cli status=ok");
    Ok(())
}

fn print_envelope<T: serde::Serialize>(
    envelope: &ApiResponse<T>,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(envelope)?);
    Ok(())
}
