// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Channel number type.

use std::fmt;

use crate::error::ValueError;

/// Lowest channel number.
pub const MIN_CHANNEL: u8 = 0;

/// Highest channel number.
pub const MAX_CHANNEL: u8 = 3;

/// Tuned channel number (0-3).
///
/// Stepping past either end wraps around to the opposite end.
///
/// # Examples
///
/// ```
/// use telly_lib::types::Channel;
///
/// assert_eq!(Channel::MAX.next(), Channel::MIN);
/// assert_eq!(Channel::MIN.previous(), Channel::MAX);
/// assert!(Channel::new(4).is_err());
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
pub struct Channel(u8);

impl Channel {
    /// First channel.
    pub const MIN: Self = Self(MIN_CHANNEL);

    /// Last channel.
    pub const MAX: Self = Self(MAX_CHANNEL);

    /// Creates a new channel number.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if number exceeds [`MAX_CHANNEL`].
    ///
    /// # Examples
    ///
    /// ```
    /// use telly_lib::types::Channel;
    ///
    /// let ch = Channel::new(2).unwrap();
    /// assert_eq!(ch.value(), 2);
    /// ```
    pub fn new(number: u8) -> Result<Self, ValueError> {
        if number > MAX_CHANNEL {
            return Err(ValueError::OutOfRange {
                min: MIN_CHANNEL,
                max: MAX_CHANNEL,
                actual: number,
            });
        }
        Ok(Self(number))
    }

    /// Returns the channel number.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns the channel above this one, wrapping to [`Channel::MIN`].
    #[must_use]
    pub const fn next(self) -> Self {
        if self.0 < MAX_CHANNEL {
            Self(self.0 + 1)
        } else {
            Self::MIN
        }
    }

    /// Returns the channel below this one, wrapping to [`Channel::MAX`].
    #[must_use]
    pub const fn previous(self) -> Self {
        if self.0 > MIN_CHANNEL {
            Self(self.0 - 1)
        } else {
            Self::MAX
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Channel {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Channel> for u8 {
    fn from(channel: Channel) -> Self {
        channel.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_valid_values() {
        for n in MIN_CHANNEL..=MAX_CHANNEL {
            assert_eq!(Channel::new(n).unwrap().value(), n);
        }
    }

    #[test]
    fn channel_invalid_value() {
        let result = Channel::new(4);
        assert!(matches!(
            result.unwrap_err(),
            ValueError::OutOfRange { actual: 4, .. }
        ));
    }

    #[test]
    fn channel_next_wraps() {
        assert_eq!(Channel::new(2).unwrap().next(), Channel::MAX);
        assert_eq!(Channel::MAX.next(), Channel::MIN);
    }

    #[test]
    fn channel_previous_wraps() {
        assert_eq!(Channel::new(1).unwrap().previous(), Channel::MIN);
        assert_eq!(Channel::MIN.previous(), Channel::MAX);
    }

    #[test]
    fn channel_full_cycle_returns_to_start() {
        let mut ch = Channel::MIN;
        for _ in MIN_CHANNEL..=MAX_CHANNEL {
            ch = ch.next();
        }
        assert_eq!(ch, Channel::MIN);
    }

    #[test]
    fn channel_display() {
        assert_eq!(Channel::MAX.to_string(), "3");
    }
}
