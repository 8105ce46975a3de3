use log::debug;
use ndarray::{s, Array2, ArrayView1, ArrayView2, Axis};

use crate::hints::config::HintCategory;
use crate::hints::contiguous::ContiguousBit;
use crate::results::source::PredictionSource;
use crate::results::{BlockID, Error, HelixerResults, Result};

/// Unpadded class predictions for consecutive blocks of one contiguous range.
/// `start` is the genomic position of the first row in storage order; on the
/// minus strand it is the exclusive upper bound and rows count downwards.
pub struct PredictionChunk {
    predictions: Array2<f32>,
    start: u64,
}

impl PredictionChunk {
    pub fn new(predictions: Array2<f32>, start: u64) -> PredictionChunk {
        PredictionChunk { predictions, start }
    }

    pub fn get_predictions(&self) -> ArrayView2<'_, f32> {
        self.predictions.view()
    }

    pub fn get_start(&self) -> u64 {
        self.start
    }

    pub fn len(&self) -> usize {
        self.predictions.nrows()
    }

    pub fn get_class_probs(&self, category: HintCategory, start: usize, end: usize) -> ArrayView1<'_, f32> {
        self.predictions
            .slice(s![start..end, ..])
            .index_axis_move(Axis(1), category.get_class_idx())
    }
}

pub struct ChunkReader<'a, P: PredictionSource> {
    results: &'a HelixerResults<P>,
    next_i: usize,
    end_i: usize,
    blocks_per_chunk: usize,
}

impl<'a, P: PredictionSource> ChunkReader<'a, P> {
    pub fn new(
        results: &'a HelixerResults<P>,
        contiguous_bit: &ContiguousBit,
        blocks_per_chunk: usize,
    ) -> ChunkReader<'a, P> {
        ChunkReader {
            results,
            next_i: contiguous_bit.get_start_i(),
            end_i: contiguous_bit.get_end_i(),
            blocks_per_chunk: blocks_per_chunk.max(1),
        }
    }

    fn read_block(&self, id: BlockID, length: usize) -> Result<Array2<f32>> {
        let block = self.results.get_predictions().read_block(id)?;

        if block.nrows() < length {
            return Err(Error::MismatchedBlockSize(block.nrows(), length));
        }

        if block.ncols() != 4 {
            return Err(Error::MismatchedDataSize(block.ncols(), 4));
        }

        Ok(block)
    }

    fn read_chunk(&self, start_i: usize, end_i: usize) -> Result<PredictionChunk> {
        let index = self.results.get_index();

        let rows: usize = (start_i..end_i)
            .map(|i| index.get_block_length(BlockID::new(i)))
            .sum();
        let mut predictions = Array2::zeros((rows, 4));

        let mut offset = 0;
        for id in (start_i..end_i).map(BlockID::new) {
            let length = index.get_block_length(id);
            let block = self.read_block(id, length).map_err(|e| Error::BlockRead {
                block: id.inner(),
                seqid: index.get_seqid(id).to_owned(),
                source: Box::new(e),
            })?;

            predictions
                .slice_mut(s![offset..offset + length, ..])
                .assign(&block.slice(s![..length, ..]));
            offset += length;
        }

        let start = index.get_block_offsets(BlockID::new(start_i)).0;
        debug!(
            "Chunk of blocks {}..{} from {} with {} rows",
            start_i, end_i, start, rows
        );

        Ok(PredictionChunk::new(predictions, start))
    }
}

impl<'a, P: PredictionSource> Iterator for ChunkReader<'a, P> {
    type Item = Result<PredictionChunk>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_i >= self.end_i {
            return None;
        }

        let chunk_end = std::cmp::min(self.next_i + self.blocks_per_chunk, self.end_i);
        let chunk = self.read_chunk(self.next_i, chunk_end);

        // Nothing more is read from this range after a failure
        self.next_i = if chunk.is_ok() { chunk_end } else { self.end_i };

        Some(chunk)
    }
}

#[cfg(test)]
mod tests {
    use crate::hints::chunks::ChunkReader;
    use crate::hints::config::HintCategory;
    use crate::hints::contiguous::ContiguousRanges;
    use crate::results::source::{MemoryGenome, MemoryPredictions};
    use crate::results::HelixerResults;
    use ndarray::Array3;

    // Intergenic column holds block * 10 + row, to identify where each row came from
    fn build_results(start_ends: Vec<(u64, u64)>, block_size: usize) -> HelixerResults<MemoryPredictions> {
        let blocks = start_ends.len();
        let data = Array3::from_shape_fn((blocks, block_size, 4), |(b, r, c)| {
            if c == 0 { (b * 10 + r) as f32 } else { 0.0 }
        });
        let genome = MemoryGenome::new(vec!["chr1".to_owned(); blocks], start_ends);

        HelixerResults::from_sources(MemoryPredictions::new(data).unwrap(), &genome).unwrap()
    }

    #[test]
    fn test_chunks_cover_range_without_padding()
    {
        let results = build_results(vec![(0, 4), (4, 8), (8, 10)], 4);
        let bit = ContiguousRanges::new(results.get_index()).next().unwrap();

        let chunks: Vec<_> = ChunkReader::new(&results, &bit, 2)
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(chunks.len(), 2);
        assert_eq!((chunks[0].get_start(), chunks[0].len()), (0, 8));
        assert_eq!((chunks[1].get_start(), chunks[1].len()), (8, 2));

        let first = chunks[0].get_class_probs(HintCategory::Intergenic, 0, 8).to_vec();
        assert_eq!(first, vec![0.0, 1.0, 2.0, 3.0, 10.0, 11.0, 12.0, 13.0]);

        let last = chunks[1].get_class_probs(HintCategory::Intergenic, 0, 2).to_vec();
        assert_eq!(last, vec![20.0, 21.0]);
    }

    #[test]
    fn test_reverse_chunk_start()
    {
        let results = build_results(vec![(10, 6), (6, 2)], 4);
        let bit = ContiguousRanges::new(results.get_index()).next().unwrap();
        assert!(!bit.is_plus_strand());

        let chunks: Vec<_> = ChunkReader::new(&results, &bit, 1)
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].get_start(), 10);
        assert_eq!(chunks[1].get_start(), 6);
    }
}
