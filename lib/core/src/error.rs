use crate::domain::Domain;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to load {domain} catalog: {reason}")]
    DataLoad { domain: Domain, reason: String },

    #[error("Neighbor index {index} out of bounds for {domain} catalog ({len} rows)")]
    NeighborOutOfBounds {
        domain: Domain,
        index: usize,
        len: usize,
    },

    #[error("Unknown domain: {0}")]
    UnknownDomain(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Wrap any load-time failure as a per-domain `DataLoad` error.
    pub fn data_load(domain: Domain, err: impl std::fmt::Display) -> Self {
        Error::DataLoad {
            domain,
            reason: err.to_string(),
        }
    }
}
