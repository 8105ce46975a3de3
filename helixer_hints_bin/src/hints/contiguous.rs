use crate::results::index::HelixerIndex;
use crate::results::BlockID;

/// A maximal run of blocks on one sequence and strand, with no gaps between them
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContiguousBit {
    seqid: String,
    start_i: usize,
    end_i: usize,
    is_plus_strand: bool,
}

impl ContiguousBit {
    pub fn new(seqid: String, start_i: usize, end_i: usize, is_plus_strand: bool) -> ContiguousBit {
        ContiguousBit {
            seqid,
            start_i,
            end_i,
            is_plus_strand,
        }
    }

    pub fn get_seqid(&self) -> &str {
        &self.seqid
    }

    pub fn get_start_i(&self) -> usize {
        self.start_i
    }

    pub fn get_end_i(&self) -> usize {
        self.end_i
    }

    pub fn is_plus_strand(&self) -> bool {
        self.is_plus_strand
    }
}

pub struct ContiguousRanges<'a> {
    index: &'a HelixerIndex,
    next_i: usize,
}

impl<'a> ContiguousRanges<'a> {
    pub fn new(index: &'a HelixerIndex) -> ContiguousRanges<'a> {
        ContiguousRanges { index, next_i: 0 }
    }

    fn continues(&self, prev: BlockID, curr: BlockID) -> bool {
        let index = self.index;

        index.get_seqid(prev) == index.get_seqid(curr)
            && index.is_plus_strand(prev) == index.is_plus_strand(curr)
            && index.get_block_offsets(prev).1 == index.get_block_offsets(curr).0
    }
}

impl<'a> Iterator for ContiguousRanges<'a> {
    type Item = ContiguousBit;

    fn next(&mut self) -> Option<Self::Item> {
        let block_count = self.index.get_block_count();
        if self.next_i >= block_count {
            return None;
        }

        let start_i = self.next_i;
        let mut end_i = start_i + 1;

        while end_i < block_count && self.continues(BlockID::new(end_i - 1), BlockID::new(end_i)) {
            end_i += 1;
        }
        self.next_i = end_i;

        let first = BlockID::new(start_i);
        Some(ContiguousBit::new(
            self.index.get_seqid(first).to_owned(),
            start_i,
            end_i,
            self.index.is_plus_strand(first),
        ))
    }
}

#[cfg(test)]
mod tests {
    use crate::hints::contiguous::{ContiguousBit, ContiguousRanges};
    use crate::results::index::HelixerIndex;
    use crate::results::source::MemoryGenome;

    fn build_index(blocks: &[(&str, u64, u64)]) -> HelixerIndex {
        let genome = MemoryGenome::new(
            blocks.iter().map(|(s, _, _)| s.to_string()).collect(),
            blocks.iter().map(|(_, start, end)| (*start, *end)).collect(),
        );
        HelixerIndex::new(&genome, blocks.len(), 10).unwrap()
    }

    #[test]
    fn test_strand_split()
    {
        let index = build_index(&[
            ("chr1", 0, 10),
            ("chr1", 10, 20),
            ("chr1", 20, 25),
            ("chr1", 25, 20),
            ("chr1", 20, 10),
            ("chr1", 10, 0),
        ]);

        let bits: Vec<_> = ContiguousRanges::new(&index).collect();
        assert_eq!(
            bits,
            vec![
                ContiguousBit::new("chr1".to_owned(), 0, 3, true),
                ContiguousBit::new("chr1".to_owned(), 3, 6, false),
            ]
        );
    }

    #[test]
    fn test_sequence_split()
    {
        let index = build_index(&[("chr1", 0, 10), ("chr2", 10, 20), ("chr2", 20, 30)]);

        let bits: Vec<_> = ContiguousRanges::new(&index).collect();
        assert_eq!(bits.len(), 2);
        assert_eq!(bits[0].get_seqid(), "chr1");
        assert_eq!((bits[1].get_start_i(), bits[1].get_end_i()), (1, 3));
    }

    #[test]
    fn test_gap_split()
    {
        let index = build_index(&[("chr1", 0, 10), ("chr1", 20, 30), ("chr1", 30, 40)]);

        let bits: Vec<_> = ContiguousRanges::new(&index).collect();
        assert_eq!(bits.len(), 2);
        assert_eq!((bits[0].get_start_i(), bits[0].get_end_i()), (0, 1));
        assert_eq!((bits[1].get_start_i(), bits[1].get_end_i()), (1, 3));
        assert!(bits.iter().all(|b| b.is_plus_strand()));
    }
}
