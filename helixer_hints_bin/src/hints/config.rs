use crate::gff::GffFeature;
use crate::results::{Error, Result};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum HintCategory {
    Intergenic,
    UTR,
    Coding,
    Intron,
}

impl HintCategory {
    pub const ALL: [HintCategory; 4] = [
        HintCategory::Intergenic,
        HintCategory::UTR,
        HintCategory::Coding,
        HintCategory::Intron,
    ];

    /// Category for a class index in prediction order
    pub fn from_class_idx(idx: usize) -> Option<HintCategory> {
        Self::ALL.get(idx).copied()
    }

    pub fn get_class_idx(self) -> usize {
        match self {
            HintCategory::Intergenic => 0,
            HintCategory::UTR => 1,
            HintCategory::Coding => 2,
            HintCategory::Intron => 3,
        }
    }

    pub fn get_feature(self) -> GffFeature {
        match self {
            HintCategory::Intergenic => GffFeature::IntergenicPart,
            HintCategory::UTR => GffFeature::UTRPart,
            HintCategory::Coding => GffFeature::CDSPart,
            HintCategory::Intron => GffFeature::IntronPart,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct StepPolicy {
    pub min_step: usize,
    pub max_size: usize,
}

impl StepPolicy {
    pub fn new(min_step: usize, max_size: usize) -> StepPolicy {
        StepPolicy { min_step, max_size }
    }

    fn validate(&self, name: &str) -> Result<()> {
        if self.min_step == 0 {
            return Err(Error::InvalidConfig(format!("{} step must be positive", name)));
        }

        if self.max_size < self.min_step {
            return Err(Error::InvalidConfig(format!(
                "{} max size {} is smaller than its step {}",
                name, self.max_size, self.min_step
            )));
        }

        Ok(())
    }
}

pub const DEFAULT_STEP_GENICPART: usize = 10;
pub const DEFAULT_MAX_GENICPART_SIZE: usize = 500;
pub const DEFAULT_STEP_IRPART: usize = 100;
pub const DEFAULT_MAX_IRPART_SIZE: usize = 10_000;
pub const DEFAULT_PAD: usize = 5;
pub const DEFAULT_STABILITY_THRESHOLD: f32 = 0.1;
pub const DEFAULT_MIN_CONFIDENCE: f32 = 0.5;
pub const DEFAULT_BLOCKS_PER_CHUNK: usize = 16;

#[derive(Clone, Debug)]
pub struct HintConfig {
    pub ir: StepPolicy,
    pub genic: StepPolicy, // Shared by UTR, coding and intron
    pub pad: usize,
    pub stability_threshold: f32,
    pub min_confidence: f32,
    pub blocks_per_chunk: usize,
}

impl Default for HintConfig {
    fn default() -> Self {
        HintConfig {
            ir: StepPolicy::new(DEFAULT_STEP_IRPART, DEFAULT_MAX_IRPART_SIZE),
            genic: StepPolicy::new(DEFAULT_STEP_GENICPART, DEFAULT_MAX_GENICPART_SIZE),
            pad: DEFAULT_PAD,
            stability_threshold: DEFAULT_STABILITY_THRESHOLD,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            blocks_per_chunk: DEFAULT_BLOCKS_PER_CHUNK,
        }
    }
}

impl HintConfig {
    pub fn get_policy(&self, category: HintCategory) -> StepPolicy {
        match category {
            HintCategory::Intergenic => self.ir,
            HintCategory::UTR | HintCategory::Coding | HintCategory::Intron => self.genic,
        }
    }

    pub fn validate(&self, block_size: usize) -> Result<()> {
        self.ir.validate("Intergenic")?;
        self.genic.validate("Genic")?;

        if !self.stability_threshold.is_finite() || self.stability_threshold < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "Stability threshold {} must be finite and non-negative",
                self.stability_threshold
            )));
        }

        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(Error::InvalidConfig(format!(
                "Minimum confidence {} must be within [0, 1]",
                self.min_confidence
            )));
        }

        if self.blocks_per_chunk == 0 {
            return Err(Error::InvalidConfig("Blocks per chunk must be positive".to_owned()));
        }

        if self.pad.checked_mul(2).map_or(true, |both| both >= block_size) {
            return Err(Error::InvalidConfig(format!(
                "Padding {} leaves nothing to score in blocks of {}bp",
                self.pad, block_size
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::hints::config::{HintCategory, HintConfig, StepPolicy};

    #[test]
    fn test_policy_per_category()
    {
        let config = HintConfig::default();

        assert_eq!(config.get_policy(HintCategory::Intergenic), StepPolicy::new(100, 10_000));
        for category in &[HintCategory::UTR, HintCategory::Coding, HintCategory::Intron]
            { assert_eq!(config.get_policy(*category), StepPolicy::new(10, 500)); }
    }

    #[test]
    fn test_category_idx()
    {
        for idx in 0..4
            { assert_eq!(HintCategory::from_class_idx(idx).unwrap().get_class_idx(), idx); }

        assert_eq!(HintCategory::from_class_idx(4), None);
        assert_eq!(HintCategory::Coding.get_feature().as_str(), "CDSpart");
    }

    #[test]
    fn test_default_config_valid()
    {
        assert!(HintConfig::default().validate(20_000).is_ok());
    }

    #[test]
    fn test_invalid_config()
    {
        let mut config = HintConfig::default();
        config.genic.min_step = 0;
        assert!(config.validate(20_000).is_err());

        let mut config = HintConfig::default();
        config.ir.max_size = 50;
        assert!(config.validate(20_000).is_err());

        let mut config = HintConfig::default();
        config.stability_threshold = f32::NAN;
        assert!(config.validate(20_000).is_err());

        let mut config = HintConfig::default();
        config.min_confidence = 1.5;
        assert!(config.validate(20_000).is_err());

        let mut config = HintConfig::default();
        config.blocks_per_chunk = 0;
        assert!(config.validate(20_000).is_err());

        let config = HintConfig::default();
        assert!(config.validate(10).is_err());
        assert!(config.validate(11).is_ok());
    }

    #[test]
    fn test_huge_pad_rejected()
    {
        let config = HintConfig { pad: usize::MAX / 2 + 1, ..HintConfig::default() };
        assert!(config.validate(20_000).is_err());

        let config = HintConfig { pad: usize::MAX, ..HintConfig::default() };
        assert!(config.validate(usize::MAX).is_err());
    }
}
