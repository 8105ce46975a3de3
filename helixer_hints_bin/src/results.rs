use std::path::Path;

use log::info;

pub mod conv;
pub mod error;
pub mod index;
pub mod raw;
pub mod source;

pub use crate::results::error::Error;
pub type Result<T> = std::result::Result<T, Error>;

use self::index::HelixerIndex;
use self::raw::{RawHelixerGenome, RawHelixerPredictions};
use self::source::{GenomeSource, PredictionSource};

pub struct HelixerResults<P: PredictionSource> {
    predictions: P,

    index: HelixerIndex,
}

impl HelixerResults<RawHelixerPredictions> {
    pub fn new(predictions_path: &Path, genome_path: &Path) -> Result<Self> {
        let predictions = RawHelixerPredictions::new(predictions_path)?;
        let (blocks, blocksize) = predictions.get_blocks_and_blocksize();
        info!(
            "Predictions {}: {} blocks of {}bp",
            predictions_path.display(),
            blocks,
            blocksize
        );

        let genome = RawHelixerGenome::new(genome_path, blocks)?;

        Self::from_sources(predictions, &genome)
    }
}

impl<P: PredictionSource> HelixerResults<P> {
    pub fn from_sources<G: GenomeSource>(predictions: P, genome: &G) -> Result<Self> {
        let index = HelixerIndex::new(
            genome,
            predictions.get_block_count(),
            predictions.get_block_size(),
        )?;

        Ok(HelixerResults { predictions, index })
    }

    pub fn get_predictions(&self) -> &P {
        &self.predictions
    }

    pub fn get_index(&self) -> &HelixerIndex {
        &self.index
    }
}

// Newtype for Block ID

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BlockID(usize);

impl BlockID {
    pub fn new(id: usize) -> BlockID {
        BlockID(id)
    }

    pub fn inner(&self) -> usize {
        self.0
    }
}
