//! Core domain types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Tail direction of the paired t-test.
///
/// The test is run on `base - booksum`, so `Less` asks whether the base group
/// correlates lower than the booksum group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alternative {
    /// Means differ in either direction.
    TwoSided,
    /// Mean of base is less than mean of booksum.
    Less,
    /// Mean of base is greater than mean of booksum.
    Greater,
}

impl Alternative {
    /// Name as accepted on the command line and used in output paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Alternative::TwoSided => "two-sided",
            Alternative::Less => "less",
            Alternative::Greater => "greater",
        }
    }
}

impl fmt::Display for Alternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Alternative {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "two-sided" => Ok(Alternative::TwoSided),
            "less" => Ok(Alternative::Less),
            "greater" => Ok(Alternative::Greater),
            other => Err(format!(
                "unknown alternative '{}'; expected one of: two-sided, less, greater",
                other
            )),
        }
    }
}

/// Which side of the comparison a model belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelGroup {
    /// Pretrained checkpoint without summarization fine-tuning.
    Base,
    /// Checkpoint fine-tuned on BookSum.
    Booksum,
}

impl ModelGroup {
    /// Classify a model by its name suffix.
    pub fn from_model_name(model: &str, booksum_suffix: &str) -> Self {
        if model.ends_with(booksum_suffix) {
            ModelGroup::Booksum
        } else {
            ModelGroup::Base
        }
    }
}

impl fmt::Display for ModelGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelGroup::Base => write!(f, "base"),
            ModelGroup::Booksum => write!(f, "booksum"),
        }
    }
}

/// One point of the model × layer × sequence-length grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelConfiguration {
    /// Model name, e.g. `led-booksum`.
    pub model: String,
    /// Encoder layer the features were taken from.
    pub layer: u32,
    /// Context length in words.
    pub seq_len: u32,
}

impl ModelConfiguration {
    /// Create a configuration.
    pub fn new(model: impl Into<String>, layer: u32, seq_len: u32) -> Self {
        Self {
            model: model.into(),
            layer,
            seq_len,
        }
    }
}

impl fmt::Display for ModelConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_layer_{}_len_{}", self.model, self.layer, self.seq_len)
    }
}
