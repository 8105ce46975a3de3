use super::super::{BlockID, Error, Result};
use crate::results::source::PredictionSource;
use hdf5::{Dataset, File};
use ndarray::{s, Array2};
use std::path::Path;

pub struct RawHelixerPredictions
{
    _predictions_file: File,
    predictions: Dataset,
}


const PREDICTIONS_DATASIZE: usize = 4;

impl RawHelixerPredictions
{
    pub fn new(predictions_file_path: &Path) -> Result<RawHelixerPredictions>
    {
        let predictions_file = File::open(predictions_file_path)?;
        let predictions = Self::get_predictions_raw(&predictions_file)?;

        Ok(RawHelixerPredictions { _predictions_file: predictions_file, predictions })
    }

    // Should be 3D - [Blocks][Blocksize][Classes]
    fn get_predictions_raw(predictions_file: &File) -> Result<Dataset>
    {
        let pred_dataset = predictions_file.dataset("predictions")?;

        let shape = pred_dataset.shape();
        if shape.len()!=3
            { return Err(Error::MismatchedDimensions(shape.len(), 3)); }

        if shape[2]!= PREDICTIONS_DATASIZE
            { return Err(Error::MismatchedDataSize(shape[2], PREDICTIONS_DATASIZE)); }

        Ok(pred_dataset)
    }

    pub fn get_blocks_and_blocksize(&self) -> (usize, usize)
    {
        let shape = self.predictions.shape();
        (shape[0], shape[1])
    }
}

impl PredictionSource for RawHelixerPredictions
{
    fn get_block_count(&self) -> usize
    {
        self.get_blocks_and_blocksize().0
    }

    fn get_block_size(&self) -> usize
    {
        self.get_blocks_and_blocksize().1
    }

    fn read_block(&self, block_id: BlockID) -> Result<Array2<f32>>
    {
        let slice = s![block_id.inner(), .., ..];
        Ok(self.predictions.read_slice_2d(slice)?)
    }
}
