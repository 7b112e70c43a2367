// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Rendered status of a television.

use std::fmt;

use crate::types::PowerState;

/// What the television shows on its status line.
///
/// `volume` is the effective volume: zero while muted, regardless of the
/// stored level.
///
/// # Examples
///
/// ```
/// use telly_lib::state::StatusSnapshot;
///
/// let status = StatusSnapshot { power: true, channel: 2, volume: 1 };
/// assert_eq!(status.to_string(), "Power = True, Channel = 2, Volume = 1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct StatusSnapshot {
    /// Whether the set is on.
    pub power: bool,
    /// Current channel number.
    pub channel: u8,
    /// Effective volume.
    pub volume: u8,
}

impl fmt::Display for StatusSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Power = {}, Channel = {}, Volume = {}",
            PowerState::from(self.power),
            self.channel,
            self.volume
        )
    }
}
