use ude_dsa::TableError;

#[derive(Debug, thiserror::Error)]
pub enum UdeError {
    /// An embedded table failed its construction-time check.
    #[error("invalid table {table}: {error}")]
    Table { table: &'static str, error: TableError },
    #[error("invalid calibration: {0}")]
    Config(String),
    #[error("cannot parse config {path}: {message}")]
    ConfigParse { path: String, message: String },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl UdeError {
    pub fn table(table: &'static str, error: TableError) -> Self {
        UdeError::Table { table, error }
    }
}
