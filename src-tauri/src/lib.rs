mod commands;
mod error;
pub mod project;
pub mod sizing;

pub use error::SmartCircuitError;
pub use project::{PowerLine, Project, ProjectStore, SqliteProjectStore};
pub use sizing::{recommend, recommend_main, DeviceRecommendation, LoadSpecification, MainRecommendation};

pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tauri::Builder::default()
        .plugin(tauri_plugin_store::Builder::new().build())
        .invoke_handler(tauri::generate_handler![
            commands::config::get_preference,
            commands::config::set_preference,
            commands::project::get_project,
            commands::project::update_project,
            commands::project::list_power_lines,
            commands::project::preview_power_line,
            commands::project::add_power_line,
            commands::project::get_load_summary,
            commands::sizing::list_load_kinds,
            commands::sizing::recommend_circuit,
            commands::sizing::recommend_main_supply,
        ])
        .setup(|app| {
            // Log which sizing catalog is active
            let engine = commands::config::sizing_engine(app.handle());
            tracing::info!(
                "Sizing catalog ready: {} circuit brackets, {} main brackets",
                engine.catalog().circuit.ladder.brackets.len(),
                engine.catalog().main.brackets.len()
            );
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
