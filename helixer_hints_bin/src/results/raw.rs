mod genome;
mod predictions;

pub use genome::RawHelixerGenome;
pub use predictions::RawHelixerPredictions;
