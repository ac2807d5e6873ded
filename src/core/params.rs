use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{Compressor, DitModel, ModelArch, SeqParallelMode};

/// Number of dataset shards in the default caption set
pub const DEFAULT_SHARD_COUNT: usize = 10;

/// Launch parameters suitable for config files and presets.
///
/// `Default` reproduces the reference run: 8 GPUs, one epoch, per-device
/// batch of 1 with 32 accumulation steps, lr 1e-4, gradient checkpointing
/// on, a checkpoint every 224 optimizer steps, and the ten-shard caption
/// set. Optional trainer pass-throughs stay `None` so the trainer's own
/// defaults apply unless a run overrides them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchParams {
    /// Processes per node requested from the distributed launcher
    pub gpus: u32,
    pub epochs: u32,
    pub batch_size: u32,
    pub lr: f64,
    pub accumulation_steps: u32,
    /// Optimizer steps between checkpoints; 0 means final checkpoint only
    pub save_interval: u32,
    pub grad_checkpoint: bool,
    /// Caption shards, passed to the trainer in this order
    pub datasets: Vec<PathBuf>,
    pub video_dir: PathBuf,
    /// Run-timestamped checkpoint directories are created beneath this root
    pub checkpoint_root: PathBuf,
    /// Run-timestamped tensorboard directories are created beneath this root
    pub tensorboard_root: PathBuf,
    pub model: Option<DitModel>,
    pub model_arch: Option<ModelArch>,
    pub compressor: Option<Compressor>,
    pub sp_size: Option<u32>,
    pub sp_mode: Option<SeqParallelMode>,
    pub sp_overlap: bool,
    pub load_model: Option<PathBuf>,
    pub load_optimizer: Option<PathBuf>,
    /// Distributed launch program
    pub launcher: String,
    /// Training entry point handed to the launcher
    pub script: PathBuf,
}

/// The ten caption shards of the reference dataset, in processing order
pub fn default_datasets() -> Vec<PathBuf> {
    (0..DEFAULT_SHARD_COUNT)
        .map(|i| PathBuf::from(format!("datasets/processed/part-{:05}", i)))
        .collect()
}

impl Default for LaunchParams {
    fn default() -> Self {
        Self {
            gpus: 8,
            epochs: 1,
            batch_size: 1,
            lr: 1e-4,
            accumulation_steps: 32,
            save_interval: 224,
            grad_checkpoint: true,
            datasets: default_datasets(),
            video_dir: PathBuf::from("datasets/videos"),
            checkpoint_root: PathBuf::from("./checkpoints"),
            tensorboard_root: PathBuf::from("./runs"),
            model: None,
            model_arch: None,
            compressor: None,
            sp_size: None,
            sp_mode: None,
            sp_overlap: false,
            load_model: None,
            load_optimizer: None,
            launcher: "torchrun".to_string(),
            script: PathBuf::from("train.py"),
        }
    }
}

impl LaunchParams {
    /// Validate before any side effect. `save_interval` may be zero; the
    /// trainer treats a non-positive interval as "final save only".
    pub fn validate(&self) -> Result<()> {
        for (arg, value) in [
            ("gpus", self.gpus),
            ("epochs", self.epochs),
            ("batch_size", self.batch_size),
            ("accumulation_steps", self.accumulation_steps),
        ] {
            if value == 0 {
                return Err(Error::ZeroValue { arg, value });
            }
        }
        if !self.lr.is_finite() || self.lr <= 0.0 {
            return Err(Error::InvalidArgument {
                arg: "lr",
                value: self.lr.to_string(),
            });
        }
        if let Some(sp_size) = self.sp_size {
            if sp_size == 0 {
                return Err(Error::ZeroValue {
                    arg: "sp_size",
                    value: sp_size,
                });
            }
        }
        if self.datasets.is_empty() {
            return Err(Error::EmptyDatasetList);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_run() {
        let params = LaunchParams::default();
        assert_eq!(params.gpus, 8);
        assert_eq!(params.epochs, 1);
        assert_eq!(params.batch_size, 1);
        assert_eq!(params.lr, 1e-4);
        assert_eq!(params.accumulation_steps, 32);
        assert_eq!(params.save_interval, 224);
        assert!(params.grad_checkpoint);
        assert!(params.model.is_none());
        assert!(params.validate().is_ok());
    }

    #[test]
    fn default_datasets_are_ten_ordered_shards() {
        let shards = default_datasets();
        assert_eq!(shards.len(), 10);
        assert_eq!(shards[0], PathBuf::from("datasets/processed/part-00000"));
        assert_eq!(shards[9], PathBuf::from("datasets/processed/part-00009"));
    }

    #[test]
    fn validate_rejects_zero_gpus() {
        let params = LaunchParams {
            gpus: 0,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(Error::ZeroValue { arg: "gpus", .. })
        ));
    }

    #[test]
    fn validate_rejects_nonpositive_lr() {
        for lr in [0.0, -1e-4, f64::NAN, f64::INFINITY] {
            let params = LaunchParams {
                lr,
                ..Default::default()
            };
            assert!(params.validate().is_err(), "lr={lr} accepted");
        }
    }

    #[test]
    fn validate_rejects_empty_dataset_list() {
        let params = LaunchParams {
            datasets: Vec::new(),
            ..Default::default()
        };
        assert!(matches!(params.validate(), Err(Error::EmptyDatasetList)));
    }

    #[test]
    fn zero_save_interval_is_accepted() {
        let params = LaunchParams {
            save_interval: 0,
            ..Default::default()
        };
        assert!(params.validate().is_ok());
    }
}
