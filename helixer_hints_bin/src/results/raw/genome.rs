use super::super::{Error, Result};
use crate::results::source::GenomeSource;
use hdf5::types::FixedAscii;
use hdf5::{Dataset, File};
use std::path::Path;

pub struct RawHelixerGenome {
    genome_file: File,

    blocks: usize,
}

const STARTENDS_DATASIZE: usize = 2;

type SeqidsType = FixedAscii<50>;

impl RawHelixerGenome {
    pub fn new(genome_file_path: &Path, blocks: usize) -> Result<RawHelixerGenome> {
        let genome_file = File::open(genome_file_path)?;
        Ok(RawHelixerGenome {
            genome_file,
            blocks,
        })
    }

    // Should be 1D - [Blocks]
    fn validate_dataset_shape_scalar(&self, dataset: &Dataset) -> Result<()> {
        let shape = dataset.shape();
        if shape.len() != 1 {
            return Err(Error::MismatchedDimensions(shape.len(), 1));
        }

        if shape[0] != self.blocks {
            return Err(Error::MismatchedBlockCount(shape[0], self.blocks));
        }

        Ok(())
    }

    // Should be 2D - [Blocks][size]
    fn validate_dataset_shape_array(&self, dataset: &Dataset, data_size: usize) -> Result<()> {
        let shape = dataset.shape();
        if shape.len() != 2 {
            return Err(Error::MismatchedDimensions(shape.len(), 2));
        }

        if shape[0] != self.blocks {
            return Err(Error::MismatchedBlockCount(shape[0], self.blocks));
        }

        if shape[1] != data_size {
            return Err(Error::MismatchedDataSize(shape[1], data_size));
        }

        Ok(())
    }

    pub fn get_seqids_raw(&self) -> Result<Dataset> {
        let dataset = self.genome_file.dataset("data/seqids")?;
        self.validate_dataset_shape_scalar(&dataset)?;
        Ok(dataset)
    }

    pub fn get_start_ends_raw(&self) -> Result<Dataset> {
        let dataset = self.genome_file.dataset("data/start_ends")?;
        self.validate_dataset_shape_array(&dataset, STARTENDS_DATASIZE)?;
        Ok(dataset)
    }
}

impl GenomeSource for RawHelixerGenome {
    fn get_seqids(&self) -> Result<Vec<String>> {
        let seqids_ds = self.get_seqids_raw()?;
        let seqids_array = seqids_ds.read_1d::<SeqidsType>()?;

        Ok(seqids_array.iter().map(|x| x.to_string()).collect())
    }

    fn get_start_ends(&self) -> Result<Vec<(u64, u64)>> {
        let startends_ds = self.get_start_ends_raw()?;
        let startends_array = startends_ds.read_2d::<i64>()?;

        startends_array
            .outer_iter()
            .enumerate()
            .map(|(idx, x)| {
                if x[0] < 0 || x[1] < 0 {
                    Err(Error::InvalidValue(format!(
                        "Negative start/end ({}, {}) at block {}",
                        x[0], x[1], idx
                    )))
                } else {
                    Ok((x[0] as u64, x[1] as u64))
                }
            })
            .collect()
    }
}
