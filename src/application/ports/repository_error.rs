#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("session limit of {0} reached")]
    CapacityExceeded(usize),
}
