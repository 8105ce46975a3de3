use crate::hints::config::{HintCategory, StepPolicy};

/// A scored hint candidate, half-open and relative to its confident sub-region
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PreHint {
    category: HintCategory,
    start: usize,
    end: usize,
    confidence: f32,
}

impl PreHint {
    pub fn new(category: HintCategory, start: usize, end: usize, confidence: f32) -> PreHint {
        PreHint {
            category,
            start,
            end,
            confidence,
        }
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

    pub fn get_confidence(&self) -> f32 {
        self.confidence
    }
}

/*
    Splits one confident sub-region into pre-hints of semi-consistent confidence.

    Candidate boundaries sit every min_step rows from pad, the last one clamped to len - pad.
    The open pre-hint is closed at a candidate when the dominant class probability has moved
    by more than the stability threshold inside it, when one more step would take it past
    max_size, or at the padded end. Stable stretches come out as few long hints, volatile
    ones as many short hints.
 */

pub struct ConfidenceDivvier {
    category: HintCategory,
    probs: Vec<f32>,
    cumulative_diffs: Vec<f64>, // [i] is the total change between rows 0 and i
    policy: StepPolicy,
    stability_threshold: f64,

    padded_end: usize,
    candidate: usize,
    end_of_last_yield: usize,
}

impl ConfidenceDivvier {
    pub fn new(
        category: HintCategory,
        probs: Vec<f32>,
        policy: StepPolicy,
        pad: usize,
        stability_threshold: f32,
    ) -> ConfidenceDivvier {
        let mut cumulative_diffs = Vec::with_capacity(probs.len());
        let mut total = 0.0;

        for (idx, p) in probs.iter().enumerate() {
            if idx > 0 {
                total += (*p as f64 - probs[idx - 1] as f64).abs();
            }
            cumulative_diffs.push(total);
        }

        let padded_end = probs.len().saturating_sub(pad);

        ConfidenceDivvier {
            category,
            probs,
            cumulative_diffs,
            policy: StepPolicy::new(policy.min_step.max(1), policy.max_size),
            stability_threshold: stability_threshold as f64,
            padded_end,
            candidate: pad,
            end_of_last_yield: pad,
        }
    }

    /// Total absolute change of the dominant class probability within `[start, end)`
    pub fn get_volatility(&self, start: usize, end: usize) -> f64 {
        if end <= start + 1 {
            0.0
        } else {
            self.cumulative_diffs[end - 1] - self.cumulative_diffs[start]
        }
    }

    fn mean_confidence(&self, start: usize, end: usize) -> f32 {
        let sum: f64 = self.probs[start..end].iter().map(|p| *p as f64).sum();
        (sum / (end - start) as f64) as f32
    }
}

impl Iterator for ConfidenceDivvier {
    type Item = PreHint;

    fn next(&mut self) -> Option<Self::Item> {
        let min_step = self.policy.min_step;

        while self.candidate < self.padded_end {
            let end = std::cmp::min(self.candidate.saturating_add(min_step), self.padded_end);
            self.candidate = self.candidate.saturating_add(min_step);

            let start = self.end_of_last_yield;
            let unstable = self.get_volatility(start, end) > self.stability_threshold;
            let full = end.saturating_add(min_step) - start > self.policy.max_size;

            if unstable || full || end == self.padded_end {
                self.end_of_last_yield = end;
                return Some(PreHint::new(
                    self.category,
                    start,
                    end,
                    self.mean_confidence(start, end),
                ));
            }
        }

        None
    }
}
