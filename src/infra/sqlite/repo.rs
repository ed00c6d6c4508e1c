use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rusqlite::params;

use crate::domain::entities::column::ColumnConfig;
use crate::infra::sqlite::schema::{init_db, open_connection};
use crate::usecase::ports::repo::{ColumnRepository, RepoError};

pub struct SqliteColumnRepo {
    pub db_path: PathBuf,
}

impl SqliteColumnRepo {
    pub fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}

impl ColumnRepository for SqliteColumnRepo {
    fn init(&self) -> Result<(), RepoError> {
        init_db(&self.db_path).map_err(|err| RepoError::Message(err.to_string()))
    }

    fn load_columns(&self) -> Result<Vec<ColumnConfig>, RepoError> {
        load_columns(&self.db_path).map_err(|err| RepoError::Message(err.to_string()))
    }

    fn save_columns(&self, columns: &[ColumnConfig]) -> Result<(), RepoError> {
        save_columns(&self.db_path, columns).map_err(|err| RepoError::Message(err.to_string()))
    }
}

fn load_columns(db_path: &Path) -> Result<Vec<ColumnConfig>> {
    let conn = open_connection(db_path)?;
    let mut stmt = conn
        .prepare(
            "SELECT key, title, visible, order_idx
             FROM column_setting
             ORDER BY order_idx ASC",
        )
        .context("failed to prepare column setting query")?;

    let column_iter = stmt
        .query_map([], |row| {
            let key: String = row.get(0)?;
            let title: String = row.get(1)?;
            let visible: i64 = row.get(2)?;
            let order: i64 = row.get(3)?;
            Ok(ColumnConfig {
                key,
                title,
                visible: visible != 0,
                order,
            })
        })
        .context("failed to query column settings")?;

    let mut columns = Vec::new();
    for item in column_iter {
        columns.push(item.context("failed to read column setting row")?);
    }

    Ok(columns)
}

// Overwrites the stored set wholesale; partial layouts never persist.
fn save_columns(db_path: &Path, columns: &[ColumnConfig]) -> Result<()> {
    let mut conn = open_connection(db_path)?;
    let tx = conn
        .transaction()
        .context("failed to start column setting transaction")?;

    tx.execute("DELETE FROM column_setting", [])
        .context("failed to clear existing column settings")?;

    let mut insert_stmt = tx
        .prepare(
            "INSERT INTO column_setting(key, title, visible, order_idx)
             VALUES (?1, ?2, ?3, ?4)",
        )
        .context("failed to prepare column setting insert")?;

    for column in columns {
        let visible = if column.visible { 1 } else { 0 };
        insert_stmt
            .execute(params![column.key, column.title, visible, column.order])
            .context("failed to insert column setting")?;
    }

    drop(insert_stmt);
    tx.commit().context("failed to commit column settings")?;
    Ok(())
}
