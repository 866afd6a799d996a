use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Linear gain in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Volume(f32);

impl Volume {
    pub const SILENT: Volume = Volume(0.0);
    pub const FULL: Volume = Volume(1.0);

    /// Create a volume, clamping into range (NaN becomes silent)
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::SILENT;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Create a volume, rejecting out-of-range values
    pub fn try_new(value: f32) -> Result<Self> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::InvalidVolume(value))
        }
    }

    pub fn value(&self) -> f32 {
        self.0
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::FULL
    }
}
