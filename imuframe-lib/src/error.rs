#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Structural decode failure: fewer bytes than the fixed layout requires.
    #[error("Not enough bytes")]
    NotEnoughData { actual: usize, minimum: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
