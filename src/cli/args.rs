use clap::Parser;
use std::path::PathBuf;

use ditlaunch::{Compressor, DitModel, ModelArch, SeqParallelMode};

#[derive(Parser)]
#[command(name = "ditlaunch", version, about = "DITLAUNCH CLI")]
pub struct CliArgs {
    /// Processes per node requested from the launcher (default 8)
    #[arg(value_name = "GPU_COUNT")]
    pub gpu_count: Option<u32>,

    /// Launch preset JSON file; explicit flags override its values
    #[arg(short, long)]
    pub preset: Option<PathBuf>,

    /// Launch root directory (default: parent of the executable's directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Print the resolved root and command line without launching
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Caption shard path, repeatable and ordered
    /// (default: datasets/processed/part-00000 .. part-00009)
    #[arg(short = 'd', long = "dataset", value_name = "PATH")]
    pub datasets: Vec<PathBuf>,

    /// Directory holding the raw video clips
    #[arg(short = 'v', long)]
    pub video_dir: Option<PathBuf>,

    /// Epoch count (default 1)
    #[arg(short, long)]
    pub epochs: Option<u32>,

    /// Per-device batch size (default 1)
    #[arg(short, long)]
    pub batch_size: Option<u32>,

    /// Learning rate (default 1e-4)
    #[arg(long)]
    pub lr: Option<f64>,

    /// Gradient accumulation steps (default 32)
    #[arg(short, long)]
    pub accumulation_steps: Option<u32>,

    /// Optimizer steps between checkpoints; 0 saves only the final one
    /// (default 224)
    #[arg(long)]
    pub save_interval: Option<u32>,

    /// Disable gradient checkpointing (enabled by default)
    #[arg(long, default_value_t = false)]
    pub no_grad_checkpoint: bool,

    /// Checkpoint root; the run timestamp is appended beneath it
    #[arg(long)]
    pub checkpoint_root: Option<PathBuf>,

    /// Tensorboard root; the run timestamp is appended beneath it
    #[arg(long)]
    pub tensorboard_root: Option<PathBuf>,

    /// DiT model table entry; the trainer's default applies when omitted
    #[arg(short, long, value_enum)]
    pub model: Option<DitModel>,

    /// Conditioning architecture (cross-attn or adaln)
    #[arg(short = 'x', long, value_enum)]
    pub model_arch: Option<ModelArch>,

    /// Video compressor (raw, vqvae or vae)
    #[arg(short = 'c', long, value_enum)]
    pub compressor: Option<Compressor>,

    /// Sequence-parallel group size
    #[arg(long)]
    pub sp_size: Option<u32>,

    /// Sequence-parallel mode (ulysses or fastseq)
    #[arg(long, value_enum)]
    pub sp_mode: Option<SeqParallelMode>,

    /// Overlap sequence-parallel communication with compute
    #[arg(long, default_value_t = false)]
    pub sp_overlap: bool,

    /// Model checkpoint to resume from
    #[arg(long)]
    pub load_model: Option<PathBuf>,

    /// Optimizer checkpoint to resume from
    #[arg(long)]
    pub load_optimizer: Option<PathBuf>,

    /// Distributed launch program (default torchrun)
    #[arg(long)]
    pub launcher: Option<String>,

    /// Training entry point handed to the launcher (default train.py)
    #[arg(long)]
    pub script: Option<PathBuf>,
}
