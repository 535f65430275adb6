use std::path::Path;
use std::time::Duration;

use chrono::Utc;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use thiserror::Error;
use tracing::{debug, info};

use super::types::{BuildingType, NewPowerLine, PowerLine, Project, ProjectSettings, ProjectUpdate};
use crate::sizing::PhaseCount;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to open project database: {0}")]
    Open(String),

    #[error("Database query failed: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },
}

/// Record storage for projects and their power lines.
///
/// Service functions take the store as an argument, so tests and commands
/// decide which backing store is used.
pub trait ProjectStore {
    /// Most recently created project, if any.
    fn latest_project(&self) -> Result<Option<Project>, StoreError>;

    /// Project by id, or `NotFound`.
    fn get_project(&self, id: i64) -> Result<Project, StoreError>;

    fn create_project(&self, settings: &ProjectSettings) -> Result<Project, StoreError>;

    /// Create a project together with its initial lines. Either both are
    /// stored or neither is; each line gets its slice position as `order_index`.
    fn create_project_with_lines(
        &self,
        settings: &ProjectSettings,
        lines: &[NewPowerLine],
    ) -> Result<Project, StoreError>;

    /// Apply a partial update and refresh `updated_at`.
    fn update_project(&self, id: i64, update: &ProjectUpdate) -> Result<Project, StoreError>;

    /// Lines of a project ordered by `order_index`.
    fn list_lines(&self, project_id: i64) -> Result<Vec<PowerLine>, StoreError>;

    /// Append a line after the highest existing `order_index` of the project.
    fn insert_line(&self, project_id: i64, line: &NewPowerLine) -> Result<PowerLine, StoreError>;
}

/// SQLite-backed project store.
/// All operations are synchronous (rusqlite is blocking).
/// Callers in async contexts should use `tokio::task::spawn_blocking`.
pub struct SqliteProjectStore {
    conn: Connection,
}

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS projects (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        building_type TEXT NOT NULL,
        phase TEXT NOT NULL,
        wooden_construction INTEGER NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS power_lines (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        project_id INTEGER NOT NULL REFERENCES projects(id),
        name TEXT NOT NULL,
        icon TEXT NOT NULL,
        power_kw REAL NOT NULL,
        length_m REAL NOT NULL,
        breaker TEXT NOT NULL,
        cable TEXT NOT NULL,
        rcd TEXT NOT NULL,
        afdd INTEGER NOT NULL DEFAULT 0,
        order_index INTEGER NOT NULL,
        created_at TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_power_lines_project ON power_lines(project_id, order_index);";

/// How long a connection waits for another writer before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const PROJECT_COLUMNS: &str =
    "id, name, building_type, phase, wooden_construction, created_at, updated_at";

const LINE_COLUMNS: &str =
    "id, project_id, name, icon, power_kw, length_m, breaker, cable, rcd, afdd, order_index, created_at";

impl SqliteProjectStore {
    /// Create or open the project database.
    /// Typically called with: app.path().app_data_dir()?.join("smartcircuit.db")
    pub fn open(db_path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StoreError::Open(format!("Failed to create data dir: {}", e)))?;
        }

        let conn = Connection::open(db_path)
            .map_err(|e| StoreError::Open(format!("{:?}: {}", db_path, e)))?;
        let store = Self::init(conn)?;

        info!("Opened project database at {:?}", db_path);
        Ok(store)
    }

    /// Fresh database that lives only as long as the store.
    pub fn in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(|e| StoreError::Open(e.to_string()))?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        conn.busy_timeout(BUSY_TIMEOUT)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    fn get_line(&self, id: i64) -> Result<PowerLine, StoreError> {
        self.conn
            .query_row(
                &format!("SELECT {} FROM power_lines WHERE id = ?1", LINE_COLUMNS),
                params![id],
                line_from_row,
            )
            .optional()?
            .ok_or(StoreError::NotFound {
                entity: "Power line",
                id,
            })
    }
}

impl ProjectStore for SqliteProjectStore {
    fn get_project(&self, id: i64) -> Result<Project, StoreError> {
        self.conn
            .query_row(
                &format!("SELECT {} FROM projects WHERE id = ?1", PROJECT_COLUMNS),
                params![id],
                project_from_row,
            )
            .optional()?
            .ok_or(StoreError::NotFound {
                entity: "Project",
                id,
            })
    }

    fn latest_project(&self) -> Result<Option<Project>, StoreError> {
        let project = self
            .conn
            .query_row(
                &format!(
                    "SELECT {} FROM projects ORDER BY created_at DESC, id DESC LIMIT 1",
                    PROJECT_COLUMNS
                ),
                [],
                project_from_row,
            )
            .optional()?;
        Ok(project)
    }

    fn create_project(&self, settings: &ProjectSettings) -> Result<Project, StoreError> {
        let id = insert_project_row(&self.conn, settings)?;
        info!("Created project {} ({})", id, settings.name);
        self.get_project(id)
    }

    fn create_project_with_lines(
        &self,
        settings: &ProjectSettings,
        lines: &[NewPowerLine],
    ) -> Result<Project, StoreError> {
        let tx = self.conn.unchecked_transaction()?;
        let id = insert_project_row(&tx, settings)?;
        for (index, line) in lines.iter().enumerate() {
            insert_line_at(&tx, id, line, index as u32)?;
        }
        tx.commit()?;

        info!(
            "Created project {} ({}) with {} lines",
            id,
            settings.name,
            lines.len()
        );
        self.get_project(id)
    }

    fn update_project(&self, id: i64, update: &ProjectUpdate) -> Result<Project, StoreError> {
        let current = self.get_project(id)?;
        let name = update.name.clone().unwrap_or(current.name);
        let building_type = update.building_type.unwrap_or(current.building_type);
        let phase = update.phase.unwrap_or(current.phase);
        let wooden = update
            .wooden_construction
            .unwrap_or(current.wooden_construction);

        self.conn.execute(
            "UPDATE projects
             SET name = ?1, building_type = ?2, phase = ?3, wooden_construction = ?4, updated_at = ?5
             WHERE id = ?6",
            params![
                name,
                building_type.as_str(),
                phase_to_str(phase),
                wooden,
                Utc::now().to_rfc3339(),
                id
            ],
        )?;

        debug!("Updated project {}", id);
        self.get_project(id)
    }

    fn list_lines(&self, project_id: i64) -> Result<Vec<PowerLine>, StoreError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM power_lines WHERE project_id = ?1 ORDER BY order_index, id",
            LINE_COLUMNS
        ))?;

        let rows = stmt.query_map(params![project_id], line_from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    fn insert_line(&self, project_id: i64, line: &NewPowerLine) -> Result<PowerLine, StoreError> {
        let stored = self.get_line(append_line(&self.conn, project_id, line)?)?;
        info!(
            "Inserted line {} '{}' into project {} at position {}",
            stored.id, line.name, project_id, stored.order_index
        );
        Ok(stored)
    }
}

fn insert_line_at(
    conn: &Connection,
    project_id: i64,
    line: &NewPowerLine,
    order_index: u32,
) -> Result<(), StoreError> {
    conn.execute(
        "INSERT INTO power_lines
         (project_id, name, icon, power_kw, length_m, breaker, cable, rcd, afdd, order_index, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            project_id,
            line.name,
            line.icon,
            line.power_kw,
            line.length_m,
            line.breaker,
            line.cable,
            line.rcd,
            line.afdd,
            order_index,
            Utc::now().to_rfc3339()
        ],
    )?;
    Ok(())
}

/// Insert at `MAX(order_index) + 1` in a single statement.
fn append_line(conn: &Connection, project_id: i64, line: &NewPowerLine) -> Result<i64, StoreError> {
    conn.execute(
        "INSERT INTO power_lines
         (project_id, name, icon, power_kw, length_m, breaker, cable, rcd, afdd, order_index, created_at)
         SELECT ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, COALESCE(MAX(order_index) + 1, 0), ?10
         FROM power_lines WHERE project_id = ?1",
        params![
            project_id,
            line.name,
            line.icon,
            line.power_kw,
            line.length_m,
            line.breaker,
            line.cable,
            line.rcd,
            line.afdd,
            Utc::now().to_rfc3339()
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

fn insert_project_row(conn: &Connection, settings: &ProjectSettings) -> Result<i64, StoreError> {
    let now = Utc::now().to_rfc3339();
    conn.execute(
        "INSERT INTO projects (name, building_type, phase, wooden_construction, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
        params![
            settings.name,
            settings.building_type.as_str(),
            phase_to_str(settings.phase),
            settings.wooden_construction,
            now
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

fn project_from_row(row: &Row<'_>) -> rusqlite::Result<Project> {
    let building_type: String = row.get(2)?;
    let phase: String = row.get(3)?;
    Ok(Project {
        id: row.get(0)?,
        name: row.get(1)?,
        building_type: BuildingType::parse(&building_type)
            .ok_or_else(|| unknown_value(2, "building type", &building_type))?,
        phase: phase_from_str(&phase).ok_or_else(|| unknown_value(3, "phase", &phase))?,
        wooden_construction: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}

fn line_from_row(row: &Row<'_>) -> rusqlite::Result<PowerLine> {
    Ok(PowerLine {
        id: row.get(0)?,
        project_id: row.get(1)?,
        name: row.get(2)?,
        icon: row.get(3)?,
        power_kw: row.get(4)?,
        length_m: row.get(5)?,
        breaker: row.get(6)?,
        cable: row.get(7)?,
        rcd: row.get(8)?,
        afdd: row.get(9)?,
        order_index: row.get(10)?,
        created_at: row.get(11)?,
    })
}

fn phase_to_str(phase: PhaseCount) -> &'static str {
    match phase {
        PhaseCount::Single => "1 phase",
        PhaseCount::Three => "3 phases",
    }
}

fn phase_from_str(s: &str) -> Option<PhaseCount> {
    match s {
        "1 phase" => Some(PhaseCount::Single),
        "3 phases" => Some(PhaseCount::Three),
        _ => None,
    }
}

fn unknown_value(column: usize, what: &str, value: &str) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        column,
        Type::Text,
        format!("unknown {} '{}'", what, value).into(),
    )
}
