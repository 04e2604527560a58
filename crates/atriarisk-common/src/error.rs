use thiserror::Error;

#[derive(Debug, Error)]
pub enum AtriaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not read a table from {0}")]
    UnreadableTable(String),

    #[error("table is not column-oriented (first data cell is numeric)")]
    BadOrientation,

    #[error("no plots could be generated from the dataset")]
    NoPlots,

    #[error("missing or invalid form field: {0}")]
    Field(String),

    #[error("plot render error: {0}")]
    Render(String),

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, AtriaError>;
