use thiserror::Error;

/// Failure modes of a single user interaction. None of these are retried;
/// the session prints the error and returns to the menu.
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("could not read upload: {0}")]
    Io(#[from] std::io::Error),

    #[error("required column missing from upload: {0}")]
    MissingColumn(String),

    #[error("malformed CSV data: {0}")]
    Csv(#[from] csv::Error),

    #[error("PDF rendering failed: {0}")]
    Pdf(#[from] printpdf::Error),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
