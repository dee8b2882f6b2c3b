use thiserror::Error;
use word_tally_shared_kernel::WordTallyError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Tally(#[from] WordTallyError),
}

pub type Result<T> = std::result::Result<T, AppError>;
