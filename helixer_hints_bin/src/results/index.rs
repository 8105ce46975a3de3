use std::fmt::Write;

use super::source::GenomeSource;
use super::{BlockID, Error, Result};

pub struct HelixerIndex {
    seqids: Vec<String>,            // Block Idx -> Sequence name
    block_offsets: Vec<(u64, u64)>, // Block Idx -> Position range
    block_size: usize,
}

impl HelixerIndex {
    pub fn new<G: GenomeSource>(
        genome: &G,
        block_count: usize,
        block_size: usize,
    ) -> Result<HelixerIndex> {
        let all_seqids = genome.get_seqids()?;
        let all_startends = genome.get_start_ends()?;

        Self::build_from_slices(all_seqids, all_startends, block_count, block_size)
    }

    fn build_from_slices(
        seqids: Vec<String>,
        block_offsets: Vec<(u64, u64)>,
        block_count: usize,
        block_size: usize,
    ) -> Result<HelixerIndex> {
        if seqids.len() != block_offsets.len() {
            return Err(Error::MismatchedBlockCount(
                block_offsets.len(),
                seqids.len(),
            ));
        }

        if seqids.len() != block_count {
            return Err(Error::MismatchedBlockCount(seqids.len(), block_count));
        }

        if seqids.is_empty() {
            return Err(Error::EmptyInput("No blocks in genome metadata".to_owned()));
        }

        for (idx, (seqid, (start, end))) in seqids.iter().zip(block_offsets.iter()).enumerate() {
            let mut msg = String::new();

            if seqid.trim().is_empty() {
                write!(&mut msg, "Empty sequence identifier at index {}", idx).unwrap();
                return Err(Error::InvalidValue(msg));
            }

            if start == end {
                write!(&mut msg, "Zero length block {}:{} at index {}", seqid, start, idx).unwrap();
                return Err(Error::InvalidValue(msg));
            }

            let length = if start < end { end - start } else { start - end } as usize;
            if length > block_size {
                write!(
                    &mut msg,
                    "Block {}:{}-{} at index {} has length {}, exceeding block size {}",
                    seqid, start, end, idx, length, block_size
                )
                .unwrap();
                return Err(Error::InvalidValue(msg));
            }
        }

        Ok(HelixerIndex {
            seqids,
            block_offsets,
            block_size,
        })
    }

    pub fn get_block_count(&self) -> usize {
        self.seqids.len()
    }

    pub fn get_block_size(&self) -> usize {
        self.block_size
    }

    pub fn get_seqid(&self, id: BlockID) -> &str {
        &self.seqids[id.inner()]
    }

    pub fn get_block_offsets(&self, id: BlockID) -> (u64, u64) {
        self.block_offsets[id.inner()]
    }

    pub fn is_plus_strand(&self, id: BlockID) -> bool {
        let (start, end) = self.block_offsets[id.inner()];
        start < end
    }

    /// Number of sequence positions in the block, excluding padding
    pub fn get_block_length(&self, id: BlockID) -> usize {
        let (start, end) = self.block_offsets[id.inner()];
        if start < end {
            (end - start) as usize
        } else {
            (start - end) as usize
        }
    }
}
