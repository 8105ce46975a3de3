use ndarray::{Array2, Array3, Axis};

use super::{BlockID, Error, Result};

/// Per-block sequence metadata, index-aligned with a `PredictionSource`.
pub trait GenomeSource {
    fn get_seqids(&self) -> Result<Vec<String>>;

    /// `(start, end)` per block; `start > end` marks a minus strand block.
    fn get_start_ends(&self) -> Result<Vec<(u64, u64)>>;
}

/// Random access to blocks of `[block_size][4]` class predictions.
pub trait PredictionSource {
    fn get_block_count(&self) -> usize;

    fn get_block_size(&self) -> usize;

    fn read_block(&self, block_id: BlockID) -> Result<Array2<f32>>;
}

pub struct MemoryGenome {
    seqids: Vec<String>,
    start_ends: Vec<(u64, u64)>,
}

impl MemoryGenome {
    pub fn new(seqids: Vec<String>, start_ends: Vec<(u64, u64)>) -> MemoryGenome {
        MemoryGenome { seqids, start_ends }
    }
}

impl GenomeSource for MemoryGenome {
    fn get_seqids(&self) -> Result<Vec<String>> {
        Ok(self.seqids.clone())
    }

    fn get_start_ends(&self) -> Result<Vec<(u64, u64)>> {
        Ok(self.start_ends.clone())
    }
}

pub struct MemoryPredictions {
    predictions: Array3<f32>,
}

impl MemoryPredictions {
    pub fn new(predictions: Array3<f32>) -> Result<MemoryPredictions> {
        let shape = predictions.shape();
        if shape[2] != 4 {
            return Err(Error::MismatchedDataSize(shape[2], 4));
        }

        Ok(MemoryPredictions { predictions })
    }
}

impl PredictionSource for MemoryPredictions {
    fn get_block_count(&self) -> usize {
        self.predictions.shape()[0]
    }

    fn get_block_size(&self) -> usize {
        self.predictions.shape()[1]
    }

    fn read_block(&self, block_id: BlockID) -> Result<Array2<f32>> {
        if block_id.inner() >= self.get_block_count() {
            return Err(Error::InvalidValue(format!(
                "Block {} out of range ({} blocks)",
                block_id.inner(),
                self.get_block_count()
            )));
        }

        Ok(self
            .predictions
            .index_axis(Axis(0), block_id.inner())
            .to_owned())
    }
}
