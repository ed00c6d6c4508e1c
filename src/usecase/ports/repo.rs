use crate::domain::entities::column::ColumnConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Message(String),
}

impl std::fmt::Display for RepoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepoError::Message(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for RepoError {}

/// Persistence boundary for the column configuration. A save overwrites the
/// whole stored set; a load returns it in stored order.
pub trait ColumnRepository: Send + Sync {
    fn init(&self) -> Result<(), RepoError>;
    fn load_columns(&self) -> Result<Vec<ColumnConfig>, RepoError>;
    fn save_columns(&self, columns: &[ColumnConfig]) -> Result<(), RepoError>;
}
