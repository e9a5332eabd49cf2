/*!
 * Persistent storage for interview process records.
 *
 * Backed by SQLite. The connection is shared behind a mutex and every query
 * runs on the blocking thread pool so async handlers never stall on disk.
 */

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::info;
use rusqlite::{params, Connection};

use crate::errors::StorageError;

use super::models::{ProcessRecord, ProcessStage};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS processes (
    id TEXT PRIMARY KEY,
    company TEXT NOT NULL,
    stage TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_processes_company ON processes(company);
";

/// Storage interface for process records
#[async_trait]
pub trait ProcessStore: Send + Sync {
    /// Persist a record, returning its id
    async fn add(&self, record: ProcessRecord) -> Result<String, StorageError>;

    /// Every record for a company, newest first
    async fn by_company(&self, company: &str) -> Result<Vec<ProcessRecord>, StorageError>;

    /// Records for a company at a specific stage, newest first
    async fn by_company_and_stage(
        &self,
        company: &str,
        stage: ProcessStage,
    ) -> Result<Vec<ProcessRecord>, StorageError>;
}

/// SQLite-backed process store
pub struct SqliteProcessStore {
    connection: Arc<Mutex<Connection>>,
}

impl SqliteProcessStore {
    /// Open (or create) a database at `path`
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let connection = Connection::open(path)?;
        connection.execute_batch(SCHEMA)?;
        info!("Opened process database at {}", path.display());
        Ok(Self {
            connection: Arc::new(Mutex::new(connection)),
        })
    }

    /// Open the database at the platform data directory
    pub fn open_default() -> Result<Self, StorageError> {
        let path = default_database_path();
        Self::open(&path)
    }

    /// In-memory database, used by tests
    pub fn in_memory() -> Result<Self, StorageError> {
        let connection = Connection::open_in_memory()?;
        connection.execute_batch(SCHEMA)?;
        Ok(Self {
            connection: Arc::new(Mutex::new(connection)),
        })
    }

    async fn with_conn<T, F>(&self, f: F) -> Result<T, StorageError>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> Result<T, StorageError> + Send + 'static,
    {
        let connection = Arc::clone(&self.connection);
        tokio::task::spawn_blocking(move || {
            let conn = connection.lock().map_err(|_| StorageError::Poisoned)?;
            f(&conn)
        })
        .await?
    }
}

pub fn default_database_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("prepbot")
        .join("prepbot.db")
}

fn row_to_record(
    id: String,
    company: String,
    stage: String,
    created_at: String,
    updated_at: String,
) -> Result<ProcessRecord, StorageError> {
    let stage = stage
        .parse::<ProcessStage>()
        .map_err(|_| StorageError::InvalidRecord(format!("unknown stage '{stage}'")))?;
    let created_at = parse_timestamp(&created_at)?;
    let updated_at = parse_timestamp(&updated_at)?;
    Ok(ProcessRecord {
        id,
        company,
        stage,
        created_at,
        updated_at,
    })
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, StorageError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| StorageError::InvalidRecord(format!("bad timestamp '{value}'")))
}

#[async_trait]
impl ProcessStore for SqliteProcessStore {
    async fn add(&self, record: ProcessRecord) -> Result<String, StorageError> {
        let id = record.id.clone();
        self.with_conn(move |conn| {
            conn.execute(
                "INSERT INTO processes (id, company, stage, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    record.id,
                    record.company,
                    record.stage.as_str(),
                    record.created_at.to_rfc3339(),
                    record.updated_at.to_rfc3339(),
                ],
            )?;
            Ok(record.id)
        })
        .await?;
        Ok(id)
    }

    async fn by_company(&self, company: &str) -> Result<Vec<ProcessRecord>, StorageError> {
        let company = company.to_string();
        self.with_conn(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, company, stage, created_at, updated_at
                 FROM processes WHERE company = ?1 ORDER BY created_at DESC",
            )?;
            let rows = stmt.query_map(params![company], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, String>(4)?,
                ))
            })?;
            let mut records = Vec::new();
            for row in rows {
                let (id, company, stage, created, updated) = row?;
                records.push(row_to_record(id, company, stage, created, updated)?);
            }
            Ok(records)
        })
        .await
    }

    async fn by_company_and_stage(
        &self,
        company: &str,
        stage: ProcessStage,
    ) -> Result<Vec<ProcessRecord>, StorageError> {
        let company = company.to_string();
        self.with_conn(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, company, stage, created_at, updated_at
                 FROM processes WHERE company = ?1 AND stage = ?2 ORDER BY created_at DESC",
            )?;
            let rows = stmt.query_map(params![company, stage.as_str()], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, String>(4)?,
                ))
            })?;
            let mut records = Vec::new();
            for row in rows {
                let (id, company, stage, created, updated) = row?;
                records.push(row_to_record(id, company, stage, created, updated)?);
            }
            Ok(records)
        })
        .await
    }
}
