use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use helixer_hints_bin::gff::GffWriter;
use helixer_hints_bin::hints::config::{
    HintConfig, StepPolicy, DEFAULT_BLOCKS_PER_CHUNK, DEFAULT_MAX_GENICPART_SIZE,
    DEFAULT_MAX_IRPART_SIZE, DEFAULT_MIN_CONFIDENCE, DEFAULT_PAD, DEFAULT_STABILITY_THRESHOLD,
    DEFAULT_STEP_GENICPART, DEFAULT_STEP_IRPART,
};
use helixer_hints_bin::hints::HintGenerator;
use helixer_hints_bin::results::HelixerResults;

/// Converts Helixer's base-wise class predictions into Augustus compatible hints
#[derive(Parser)]
#[command(name = "helixer_hints")]
#[command(version)]
struct Cli {
    /// predictions.h5 file produced by Helixer
    #[arg(short = 'p', long)]
    predictions: PathBuf,

    /// h5 file that was used as input to make predictions
    #[arg(short = 'd', long = "h5-data")]
    h5_data: PathBuf,

    /// Output gff file of hints
    #[arg(short = 'o', long = "hints-out")]
    hints_out: PathBuf,

    #[arg(long, default_value_t = DEFAULT_STEP_GENICPART)]
    step_genicpart: usize,

    #[arg(long, default_value_t = DEFAULT_MAX_GENICPART_SIZE)]
    max_genicpart_size: usize,

    #[arg(long, default_value_t = DEFAULT_STEP_IRPART)]
    step_irpart: usize,

    #[arg(long, default_value_t = DEFAULT_MAX_IRPART_SIZE)]
    max_irpart_size: usize,

    /// Positions excluded from scoring at each edge of a confident region
    #[arg(long, default_value_t = DEFAULT_PAD)]
    pad: usize,

    /// Sets hint size by changes in prediction confidence, set high for few hints (push towards
    /// max-size) and low for many hints (push towards step size)
    #[arg(long, default_value_t = DEFAULT_STABILITY_THRESHOLD)]
    stability_threshold: f32,

    /// Minimum probability of the top class for a position to be part of a hint
    #[arg(long, default_value_t = DEFAULT_MIN_CONFIDENCE)]
    min_confidence: f32,

    /// Storage blocks read per prediction chunk
    #[arg(long, default_value_t = DEFAULT_BLOCKS_PER_CHUNK)]
    blocks_per_chunk: usize,
}

impl Cli {
    fn hint_config(&self) -> HintConfig {
        HintConfig {
            ir: StepPolicy::new(self.step_irpart, self.max_irpart_size),
            genic: StepPolicy::new(self.step_genicpart, self.max_genicpart_size),
            pad: self.pad,
            stability_threshold: self.stability_threshold,
            min_confidence: self.min_confidence,
            blocks_per_chunk: self.blocks_per_chunk,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let helixer_res = HelixerResults::new(&cli.predictions, &cli.h5_data)
        .context("Failed to open input files")?;
    info!(
        "Genome {}: {} blocks",
        cli.h5_data.display(),
        helixer_res.get_index().get_block_count()
    );

    let generator = HintGenerator::new(&helixer_res, cli.hint_config())?;
    info!("{:?}", generator.get_config());

    let hints_file = File::create(&cli.hints_out)
        .with_context(|| format!("Failed to create {}", cli.hints_out.display()))?;
    let mut gff_writer = GffWriter::new(BufWriter::new(hints_file));

    let summary = generator
        .write_gff(&mut gff_writer)
        .with_context(|| format!("Failed writing hints to {}", cli.hints_out.display()))?;

    summary.dump();

    Ok(())
}
