//! Shared types and enums used across DITLAUNCH.
//! Includes the trainer's model table (`DitModel`), conditioning architecture
//! (`ModelArch`), video compressor (`Compressor`), and sequence-parallel mode
//! (`SeqParallelMode`). Each enum's `Display` output is the exact spelling the
//! external trainer's argument parser accepts.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// DiT model table entries, sized by family (XL/L/B/S) and patch size (2/4/8).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum DitModel {
    Xl2,
    Xl4,
    Xl8,
    L2,
    L4,
    L8,
    B2,
    B4,
    B8,
    S2,
    S4,
    S8,
}

// Manual implementation for ValueEnum since the canonical spellings
// ("DiT-XL/2") are not valid variant names
impl clap::ValueEnum for DitModel {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            DitModel::Xl2,
            DitModel::Xl4,
            DitModel::Xl8,
            DitModel::L2,
            DitModel::L4,
            DitModel::L8,
            DitModel::B2,
            DitModel::B4,
            DitModel::B8,
            DitModel::S2,
            DitModel::S4,
            DitModel::S8,
        ]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.as_str()))
    }
}

impl DitModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DitModel::Xl2 => "DiT-XL/2",
            DitModel::Xl4 => "DiT-XL/4",
            DitModel::Xl8 => "DiT-XL/8",
            DitModel::L2 => "DiT-L/2",
            DitModel::L4 => "DiT-L/4",
            DitModel::L8 => "DiT-L/8",
            DitModel::B2 => "DiT-B/2",
            DitModel::B4 => "DiT-B/4",
            DitModel::B8 => "DiT-B/8",
            DitModel::S2 => "DiT-S/2",
            DitModel::S4 => "DiT-S/4",
            DitModel::S8 => "DiT-S/8",
        }
    }
}

impl std::fmt::Display for DitModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Conditioning architecture of the DiT blocks
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum ModelArch {
    CrossAttn,
    Adaln,
}

impl std::fmt::Display for ModelArch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelArch::CrossAttn => write!(f, "cross-attn"),
            ModelArch::Adaln => write!(f, "adaln"),
        }
    }
}

/// Video compressor applied before patchification
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum Compressor {
    Raw,
    Vqvae,
    Vae,
}

impl std::fmt::Display for Compressor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Compressor::Raw => write!(f, "raw"),
            Compressor::Vqvae => write!(f, "vqvae"),
            Compressor::Vae => write!(f, "vae"),
        }
    }
}

/// Sequence-parallel attention mode
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum SeqParallelMode {
    Ulysses,
    #[value(name = "fastseq")]
    FastSeq,
}

impl std::fmt::Display for SeqParallelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeqParallelMode::Ulysses => write!(f, "ulysses"),
            SeqParallelMode::FastSeq => write!(f, "fastseq"),
        }
    }
}
