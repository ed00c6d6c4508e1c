use std::sync::Arc;

use crate::domain::entities::column::{default_columns, ColumnConfig};
use crate::usecase::ports::repo::{ColumnRepository, RepoError};

/// Loads and persists the operator's column layout. A missing or unreadable
/// stored layout falls back to the defaults; the failure is logged, never
/// surfaced.
pub struct ColumnService {
    repo: Arc<dyn ColumnRepository>,
}

impl ColumnService {
    pub fn new(repo: Arc<dyn ColumnRepository>) -> Self {
        Self { repo }
    }

    pub fn init(&self) -> Result<(), RepoError> {
        self.repo.init()
    }

    pub fn load(&self) -> Vec<ColumnConfig> {
        match self.repo.load_columns() {
            Ok(columns) if !columns.is_empty() => columns,
            Ok(_) => default_columns(),
            Err(err) => {
                log::warn!("加载列设置失败，使用默认列: {err}");
                default_columns()
            }
        }
    }

    pub fn save(&self, columns: &[ColumnConfig]) -> Result<(), RepoError> {
        self.repo.save_columns(columns)
    }
}
