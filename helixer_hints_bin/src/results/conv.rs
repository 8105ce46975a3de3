use ndarray::ArrayView1;

pub trait ArrayConvFrom<T> {
    fn from(array: ArrayView1<'_, T>) -> Self;
}

#[derive(Clone, Copy)]
pub struct ClassPrediction {
    values: [f32; 4], // Ordering is intergenic, utr, coding, intron
}

impl ClassPrediction {
    pub fn new(values: [f32; 4]) -> ClassPrediction {
        ClassPrediction { values }
    }

    pub fn get_max_idx(&self) -> usize {
        let mut max = self.values[0];
        let mut max_idx = 0;

        for i in 1..4 {
            if self.values[i] > max {
                max = self.values[i];
                max_idx = i;
            }
        }

        max_idx
    }

    /// Index of the dominant class, if it holds at least `min_confidence`
    pub fn get_confident_idx(&self, min_confidence: f32) -> Option<usize> {
        let max_idx = self.get_max_idx();

        if self.values[max_idx] >= min_confidence {
            Some(max_idx)
        } else {
            None
        }
    }
}

impl ArrayConvFrom<f32> for ClassPrediction {
    fn from(array: ArrayView1<'_, f32>) -> Self {
        let values: [f32; 4] = [array[0], array[1], array[2], array[3]];
        ClassPrediction { values }
    }
}

#[cfg(test)]
mod tests {
    use crate::results::conv::{ArrayConvFrom, ClassPrediction};
    use ndarray::arr1;

    #[test]
    fn test_max_idx_first_wins_ties()
    {
        let pred = ClassPrediction::new([0.1, 0.4, 0.4, 0.1]);
        assert_eq!(pred.get_max_idx(), 1);
    }

    #[test]
    fn test_confident_idx()
    {
        let row = arr1(&[0.05f32, 0.05, 0.8, 0.1]);
        let pred = <ClassPrediction as ArrayConvFrom<f32>>::from(row.view());

        assert_eq!(pred.get_confident_idx(0.5), Some(2));
        assert_eq!(pred.get_confident_idx(0.9), None);
    }

    #[test]
    fn test_nan_is_never_confident()
    {
        let pred = ClassPrediction::new([f32::NAN, f32::NAN, f32::NAN, f32::NAN]);
        assert_eq!(pred.get_confident_idx(0.0), None);
    }
}
