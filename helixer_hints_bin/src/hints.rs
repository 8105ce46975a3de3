use std::io::Write;

use log::{debug, info};

pub mod chunks;
pub mod config;
pub mod confident;
pub mod contiguous;
pub mod coords;
pub mod divvy;

use crate::gff::{GffRecord, GffWriter};
use crate::results::source::PredictionSource;
use crate::results::{Error, HelixerResults, Result};

use self::chunks::{ChunkReader, PredictionChunk};
use self::config::{HintCategory, HintConfig};
use self::confident::ConfidentRegionFinder;
use self::contiguous::ContiguousRanges;
use self::coords::resolve_coordinates;
use self::divvy::{ConfidenceDivvier, PreHint};

pub const HINT_SOURCE: &str = "Helixer";
pub const HINT_ATTRIBUTES: &str = "source=H"; // Must match the source in Augustus' extrinsic.cfg

pub struct HintGenerator<'a, P: PredictionSource> {
    results: &'a HelixerResults<P>,
    config: HintConfig,
}

impl<'a, P: PredictionSource> HintGenerator<'a, P> {
    pub fn new(results: &'a HelixerResults<P>, config: HintConfig) -> Result<HintGenerator<'a, P>> {
        config.validate(results.get_index().get_block_size())?;
        Ok(HintGenerator { results, config })
    }

    pub fn get_config(&self) -> &HintConfig {
        &self.config
    }

    pub fn iter(&self) -> HintIterator<'_, P> {
        HintIterator::new(self.results, &self.config)
    }

    /// Writes every hint in order, stopping at the first error. Records already written stay written.
    pub fn write_gff<W: Write>(&self, gff_writer: &mut GffWriter<W>) -> Result<HintSummary> {
        let mut hints = self.iter();

        for record in &mut hints {
            gff_writer.write_record(&record?)?;
        }
        gff_writer.flush()?;

        Ok(hints.get_summary().clone())
    }
}

/*
    Pull based, four levels deep:
        contiguous range -> prediction chunk -> confident sub-region -> pre-hint -> record

    Only the current chunk and the current sub-region's divvier are held at any time.
 */

pub struct HintIterator<'a, P: PredictionSource> {
    results: &'a HelixerResults<P>,
    config: &'a HintConfig,
    finder: ConfidentRegionFinder,

    ranges: ContiguousRanges<'a>,
    seqid: String,
    is_plus_strand: bool,

    chunks: Option<ChunkReader<'a, P>>,
    chunk: Option<PredictionChunk>,
    chunk_start: u64,

    region_cursor: usize,
    region_start: usize,
    divvier: Option<ConfidenceDivvier>,

    failed: bool,
    summary: HintSummary,
}

impl<'a, P: PredictionSource> HintIterator<'a, P> {
    fn new(results: &'a HelixerResults<P>, config: &'a HintConfig) -> HintIterator<'a, P> {
        HintIterator {
            results,
            config,
            finder: ConfidentRegionFinder::new(config.pad, config.min_confidence),
            ranges: ContiguousRanges::new(results.get_index()),
            seqid: String::new(),
            is_plus_strand: true,
            chunks: None,
            chunk: None,
            chunk_start: 0,
            region_cursor: 0,
            region_start: 0,
            divvier: None,
            failed: false,
            summary: HintSummary::default(),
        }
    }

    pub fn get_summary(&self) -> &HintSummary {
        &self.summary
    }

    fn build_record(&self, pre_hint: &PreHint) -> Result<GffRecord> {
        let (start, end, strand) = resolve_coordinates(
            self.is_plus_strand,
            self.chunk_start,
            self.region_start,
            pre_hint,
        )
        .map_err(|e| Error::InvalidValue(format!("Sequence {}: {}", self.seqid, e)))?;

        Ok(GffRecord::new(
            self.seqid.clone(),
            HINT_SOURCE.to_owned(),
            pre_hint.get_category().get_feature(),
            start,
            end,
            Some(pre_hint.get_confidence()),
            Some(strand),
            HINT_ATTRIBUTES.to_owned(),
        ))
    }

    // Divvier for the next confident sub-region of the current chunk, if any
    fn next_divvier(&mut self) -> Option<ConfidenceDivvier> {
        let chunk = self.chunk.as_ref()?;
        let region = self
            .finder
            .find_next(chunk.get_predictions(), self.region_cursor)?;

        self.region_cursor = region.get_end();
        self.region_start = region.get_start();

        let category = region.get_category();
        let probs = chunk
            .get_class_probs(category, region.get_start(), region.get_end())
            .to_vec();

        Some(ConfidenceDivvier::new(
            category,
            probs,
            self.config.get_policy(category),
            self.config.pad,
            self.config.stability_threshold,
        ))
    }
}

impl<'a, P: PredictionSource> Iterator for HintIterator<'a, P> {
    type Item = Result<GffRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            if let Some(pre_hint) = self.divvier.as_mut().and_then(|d| d.next()) {
                let record = self.build_record(&pre_hint);
                match &record {
                    Ok(_) => self.summary.add_hint(pre_hint.get_category(), pre_hint.len()),
                    Err(_) => self.failed = true,
                }
                return Some(record);
            }

            self.divvier = self.next_divvier();
            if self.divvier.is_some() {
                continue;
            }
            self.chunk = None;

            match self.chunks.as_mut().and_then(|c| c.next()) {
                Some(Ok(chunk)) => {
                    self.summary.chunks += 1;
                    self.chunk_start = chunk.get_start();
                    self.region_cursor = 0;
                    self.chunk = Some(chunk);
                    continue;
                }
                Some(Err(e)) => {
                    self.failed = true;
                    return Some(Err(e));
                }
                None => self.chunks = None,
            }

            let bit = self.ranges.next()?;
            debug!(
                "Contiguous range {} {} blocks {}..{}",
                bit.get_seqid(),
                if bit.is_plus_strand() { "+" } else { "-" },
                bit.get_start_i(),
                bit.get_end_i()
            );

            self.summary.ranges += 1;
            self.seqid = bit.get_seqid().to_owned();
            self.is_plus_strand = bit.is_plus_strand();
            self.chunks = Some(ChunkReader::new(
                self.results,
                &bit,
                self.config.blocks_per_chunk,
            ));
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HintSummary {
    ranges: usize,
    chunks: usize,
    hint_counts: [usize; 4],
    hint_lengths: [u64; 4],
}

impl HintSummary {
    fn add_hint(&mut self, category: HintCategory, length: usize) {
        let idx = category.get_class_idx();
        self.hint_counts[idx] += 1;
        self.hint_lengths[idx] += length as u64;
    }

    pub fn get_range_count(&self) -> usize {
        self.ranges
    }

    pub fn get_chunk_count(&self) -> usize {
        self.chunks
    }

    pub fn get_hint_count(&self, category: HintCategory) -> usize {
        self.hint_counts[category.get_class_idx()]
    }

    pub fn get_hint_length(&self, category: HintCategory) -> u64 {
        self.hint_lengths[category.get_class_idx()]
    }

    pub fn get_total_hint_count(&self) -> usize {
        self.hint_counts.iter().sum()
    }

    pub fn dump(&self) {
        info!(
            "{} contiguous ranges in {} chunks",
            self.ranges, self.chunks
        );

        for category in HintCategory::ALL.iter() {
            info!(
                "  {}: {} hints covering {}bp",
                category.get_feature(),
                self.get_hint_count(*category),
                self.get_hint_length(*category)
            );
        }

        info!("Total: {} hints", self.get_total_hint_count());
    }
}
