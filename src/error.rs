#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("FILETIME {filetime} is outside the representable date range")]
    OutOfRange { filetime: i128 },
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
