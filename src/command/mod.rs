// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Remote control commands.
//!
//! A [`RemoteCommand`] names one button on the remote. Pressing it through
//! [`Television::press`](crate::Television::press) runs the matching
//! operation and reports the resulting [`StateChange`](crate::state::StateChange).
//!
//! | Command | Operation | While off |
//! |---------|-----------|-----------|
//! | [`RemoteCommand::Power`] | toggle power | applies |
//! | [`RemoteCommand::Mute`] | toggle mute | ignored |
//! | [`RemoteCommand::ChannelUp`] | next channel, wrapping | ignored |
//! | [`RemoteCommand::ChannelDown`] | previous channel, wrapping | ignored |
//! | [`RemoteCommand::VolumeUp`] | unmute, louder, saturating | ignored |
//! | [`RemoteCommand::VolumeDown`] | unmute, quieter, saturating | ignored |
//!
//! # Examples
//!
//! ```
//! use telly_lib::Television;
//! use telly_lib::command::RemoteCommand;
//!
//! let mut tv = Television::new();
//! for command in [RemoteCommand::Power, RemoteCommand::ChannelDown] {
//!     tv.press(command);
//! }
//! assert_eq!(tv.render_status(), "Power = True, Channel = 3, Volume = 0");
//! ```

use std::fmt;

/// A button on the television remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum RemoteCommand {
    /// Toggle power.
    Power,
    /// Toggle mute.
    Mute,
    /// Step to the next channel.
    ChannelUp,
    /// Step to the previous channel.
    ChannelDown,
    /// Raise the volume.
    VolumeUp,
    /// Lower the volume.
    VolumeDown,
}

impl RemoteCommand {
    /// Every button, in remote layout order.
    pub const ALL: [Self; 6] = [
        Self::Power,
        Self::Mute,
        Self::ChannelUp,
        Self::ChannelDown,
        Self::VolumeUp,
        Self::VolumeDown,
    ];

    /// Returns the button label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Power => "Power",
            Self::Mute => "Mute",
            Self::ChannelUp => "ChannelUp",
            Self::ChannelDown => "ChannelDown",
            Self::VolumeUp => "VolumeUp",
            Self::VolumeDown => "VolumeDown",
        }
    }

    /// Returns `true` if the button still works while the set is off.
    #[must_use]
    pub const fn works_while_off(&self) -> bool {
        matches!(self, Self::Power)
    }
}

impl fmt::Display for RemoteCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_labels_are_unique() {
        let mut labels: Vec<_> = RemoteCommand::ALL.iter().map(RemoteCommand::as_str).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), RemoteCommand::ALL.len());
    }

    #[test]
    fn only_power_works_while_off() {
        let working: Vec<_> = RemoteCommand::ALL
            .into_iter()
            .filter(RemoteCommand::works_while_off)
            .collect();
        assert_eq!(working, vec![RemoteCommand::Power]);
    }

    #[test]
    fn command_display() {
        assert_eq!(RemoteCommand::VolumeDown.to_string(), "VolumeDown");
    }

    #[test]
    fn command_serde() {
        let json = serde_json::to_string(&RemoteCommand::ChannelUp).unwrap();
        assert_eq!(json, "\"ChannelUp\"");
        let back: RemoteCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, RemoteCommand::ChannelUp);
    }
}
