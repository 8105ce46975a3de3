use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Hdf5(#[from] hdf5::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Mismatched Dimensions Found {0}, expected {1}")]
    MismatchedDimensions(usize, usize),

    #[error("Mismatched Block Count: Found {0}, expected {1}")]
    MismatchedBlockCount(usize, usize),

    #[error("Mismatched Block Size: Found {0}, expected {1}")]
    MismatchedBlockSize(usize, usize),

    #[error("Mismatched Data Size: Found {0}, expected {1}")]
    MismatchedDataSize(usize, usize),

    #[error("Empty Input: {0}")]
    EmptyInput(String),

    #[error("Invalid Value: {0}")]
    InvalidValue(String),

    #[error("Invalid Configuration: {0}")]
    InvalidConfig(String),

    #[error("Reading block {block} of {seqid}: {source}")]
    BlockRead {
        block: usize,
        seqid: String,
        #[source]
        source: Box<Error>,
    },
}
