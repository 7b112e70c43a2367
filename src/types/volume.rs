// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Volume level type.

use std::fmt;

use crate::error::ValueError;

/// Minimum volume level.
pub const MIN_VOLUME: u8 = 0;

/// Maximum volume level.
pub const MAX_VOLUME: u8 = 2;

/// Stored volume level (0-2).
///
/// Stepping the volume saturates at either end instead of wrapping around.
///
/// # Examples
///
/// ```
/// use telly_lib::types::Volume;
///
/// let quiet = Volume::MIN;
/// assert_eq!(quiet.increment().value(), 1);
///
/// // Saturates at the top
/// assert_eq!(Volume::MAX.increment(), Volume::MAX);
///
/// // Invalid values return error
/// assert!(Volume::new(3).is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Volume(u8);

impl Volume {
    /// Lowest volume level.
    pub const MIN: Self = Self(MIN_VOLUME);

    /// Highest volume level.
    pub const MAX: Self = Self(MAX_VOLUME);

    /// Creates a new volume level.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds [`MAX_VOLUME`].
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > MAX_VOLUME {
            return Err(ValueError::OutOfRange {
                min: MIN_VOLUME,
                max: MAX_VOLUME,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Creates a volume level, clamping to the valid range.
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > MAX_VOLUME {
            Self::MAX
        } else {
            Self(value)
        }
    }

    /// Returns the numeric level.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns the next level up, staying at [`Volume::MAX`] once reached.
    #[must_use]
    pub const fn increment(self) -> Self {
        if self.0 < MAX_VOLUME {
            Self(self.0 + 1)
        } else {
            self
        }
    }

    /// Returns the next level down, staying at [`Volume::MIN`] once reached.
    #[must_use]
    pub const fn decrement(self) -> Self {
        if self.0 > MIN_VOLUME {
            Self(self.0 - 1)
        } else {
            self
        }
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Volume {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Volume> for u8 {
    fn from(volume: Volume) -> Self {
        volume.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_valid_values() {
        for v in MIN_VOLUME..=MAX_VOLUME {
            assert_eq!(Volume::new(v).unwrap().value(), v);
        }
    }

    #[test]
    fn volume_invalid_value() {
        assert_eq!(
            Volume::new(3),
            Err(ValueError::OutOfRange {
                min: 0,
                max: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn volume_clamped() {
        assert_eq!(Volume::clamped(1).value(), 1);
        assert_eq!(Volume::clamped(200), Volume::MAX);
    }

    #[test]
    fn volume_default_is_min() {
        assert_eq!(Volume::default(), Volume::MIN);
    }

    #[test]
    fn volume_increment_saturates() {
        assert_eq!(Volume::MIN.increment().value(), 1);
        assert_eq!(Volume::MAX.increment(), Volume::MAX);
    }

    #[test]
    fn volume_decrement_saturates() {
        assert_eq!(Volume::MAX.decrement().value(), 1);
        assert_eq!(Volume::MIN.decrement(), Volume::MIN);
    }

    #[test]
    fn volume_serde_rejects_out_of_range() {
        assert_eq!(serde_json::to_string(&Volume::MAX).unwrap(), "2");
        assert_eq!(serde_json::from_str::<Volume>("1").unwrap().value(), 1);
        assert!(serde_json::from_str::<Volume>("5").is_err());
    }
}
