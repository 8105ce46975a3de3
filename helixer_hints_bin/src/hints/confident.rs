use ndarray::{ArrayView2, Axis};

use crate::hints::config::HintCategory;
use crate::results::conv::{ArrayConvFrom, ClassPrediction};

/// Half-open row range of a chunk where one class stays confidently on top
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ConfidentSubRegion {
    category: HintCategory,
    start: usize,
    end: usize,
}

impl ConfidentSubRegion {
    pub fn new(category: HintCategory, start: usize, end: usize) -> ConfidentSubRegion {
        ConfidentSubRegion { category, start, end }
    }

    pub fn get_category(&self) -> HintCategory {
        self.category
    }

    pub fn get_start(&self) -> usize {
        self.start
    }

    pub fn get_end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

}

#[derive(Copy, Clone, Debug)]
pub struct ConfidentRegionFinder {
    pad: usize,
    min_confidence: f32,
}

impl ConfidentRegionFinder {
    pub fn new(pad: usize, min_confidence: f32) -> ConfidentRegionFinder {
        ConfidentRegionFinder { pad, min_confidence }
    }

    fn confident_category(&self, predictions: &ArrayView2<'_, f32>, row: usize) -> Option<HintCategory> {
        let pred = <ClassPrediction as ArrayConvFrom<f32>>::from(predictions.index_axis(Axis(0), row));

        pred.get_confident_idx(self.min_confidence)
            .and_then(HintCategory::from_class_idx)
    }

    /// First region starting at or after `from` that is longer than both pads together.
    /// Shorter runs are skipped.
    pub fn find_next(&self, predictions: ArrayView2<'_, f32>, from: usize) -> Option<ConfidentSubRegion> {
        let rows = predictions.nrows();
        let mut pos = from;

        while pos < rows {
            let category = match self.confident_category(&predictions, pos) {
                Some(category) => category,
                None => {
                    pos += 1;
                    continue;
                }
            };

            let start = pos;
            pos += 1;
            while pos < rows && self.confident_category(&predictions, pos) == Some(category) {
                pos += 1;
            }

            if pos - start > self.pad.saturating_mul(2) {
                return Some(ConfidentSubRegion::new(category, start, pos));
            }
        }

        None
    }

    pub fn regions<'a>(&self, predictions: ArrayView2<'a, f32>) -> ConfidentRegions<'a> {
        ConfidentRegions {
            finder: *self,
            predictions,
            pos: 0,
        }
    }
}

pub struct ConfidentRegions<'a> {
    finder: ConfidentRegionFinder,
    predictions: ArrayView2<'a, f32>,
    pos: usize,
}

impl<'a> Iterator for ConfidentRegions<'a> {
    type Item = ConfidentSubRegion;

    fn next(&mut self) -> Option<Self::Item> {
        let region = self.finder.find_next(self.predictions.view(), self.pos)?;
        self.pos = region.get_end();
        Some(region)
    }
}

#[cfg(test)]
mod tests {
    use crate::hints::confident::{ConfidentRegionFinder, ConfidentSubRegion};
    use crate::hints::config::HintCategory;
    use ndarray::Array2;

    fn build_chunk(rows: &[[f32; 4]]) -> Array2<f32> {
        Array2::from_shape_fn((rows.len(), 4), |(r, c)| rows[r][c])
    }

    const IG: [f32; 4] = [0.9, 0.05, 0.03, 0.02];
    const CDS: [f32; 4] = [0.05, 0.05, 0.85, 0.05];
    const INTRON: [f32; 4] = [0.1, 0.05, 0.15, 0.7];
    const UNSURE: [f32; 4] = [0.3, 0.3, 0.2, 0.2];

    #[test]
    fn test_class_switches()
    {
        let mut rows = vec![IG; 12];
        rows.extend(vec![CDS; 15]);
        rows.extend(vec![INTRON; 11]);
        let chunk = build_chunk(&rows);

        let regions: Vec<_> = ConfidentRegionFinder::new(5, 0.5).regions(chunk.view()).collect();
        assert_eq!(
            regions,
            vec![
                ConfidentSubRegion::new(HintCategory::Intergenic, 0, 12),
                ConfidentSubRegion::new(HintCategory::Coding, 12, 27),
                ConfidentSubRegion::new(HintCategory::Intron, 27, 38),
            ]
        );
    }

    #[test]
    fn test_unconfident_rows_break_regions()
    {
        let mut rows = vec![CDS; 12];
        rows.push(UNSURE);
        rows.extend(vec![CDS; 12]);
        let chunk = build_chunk(&rows);

        let regions: Vec<_> = ConfidentRegionFinder::new(5, 0.5).regions(chunk.view()).collect();
        assert_eq!(regions.len(), 2);
        assert_eq!((regions[0].get_start(), regions[0].get_end()), (0, 12));
        assert_eq!((regions[1].get_start(), regions[1].get_end()), (13, 25));
    }

    #[test]
    fn test_short_runs_dropped()
    {
        let mut rows = vec![IG; 10];
        rows.extend(vec![CDS; 11]);
        rows.extend(vec![IG; 3]);
        let chunk = build_chunk(&rows);

        let regions: Vec<_> = ConfidentRegionFinder::new(5, 0.5).regions(chunk.view()).collect();
        assert_eq!(regions, vec![ConfidentSubRegion::new(HintCategory::Coding, 10, 21)]);
        assert!(regions.iter().all(|r| r.len() > 10));
    }

    #[test]
    fn test_pad_wider_than_any_region()
    {
        let chunk = build_chunk(&vec![CDS; 40]);
        assert_eq!(ConfidentRegionFinder::new(usize::MAX / 2 + 1, 0.5).find_next(chunk.view(), 0), None);
        assert_eq!(ConfidentRegionFinder::new(20, 0.5).find_next(chunk.view(), 0), None);
        assert!(ConfidentRegionFinder::new(19, 0.5).find_next(chunk.view(), 0).is_some());
    }

    #[test]
    fn test_no_regions()
    {
        let chunk = build_chunk(&vec![UNSURE; 40]);
        assert_eq!(ConfidentRegionFinder::new(5, 0.5).find_next(chunk.view(), 0), None);

        let empty = Array2::<f32>::zeros((0, 4));
        assert_eq!(ConfidentRegionFinder::new(5, 0.5).find_next(empty.view(), 0), None);
    }
}
