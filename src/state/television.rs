// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Television state machine.

use crate::command::RemoteCommand;
use crate::types::{Channel, PowerState, Volume};

use super::{StateChange, StatusSnapshot};

/// State of a remote-controlled television.
///
/// Holds the power state, the mute flag, the stored volume level and the
/// tuned channel. Fields change only through the remote operations. While
/// the set is off every operation except [`toggle_power`](Self::toggle_power)
/// is a silent no-op, and switching off never resets the other fields.
///
/// Mute is a display overlay: the stored volume is kept while muted and
/// [`render_status`](Self::render_status) reports zero instead.
///
/// # Examples
///
/// ```
/// use telly_lib::Television;
///
/// let mut tv = Television::new();
/// tv.toggle_power();
/// tv.channel_up();
/// tv.channel_up();
/// tv.volume_up();
/// assert_eq!(tv.render_status(), "Power = True, Channel = 2, Volume = 1");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Television {
    power: PowerState,
    muted: bool,
    volume: Volume,
    channel: Channel,
}

impl Television {
    /// Creates a television that is off, unmuted, at minimum volume and on
    /// the first channel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Accessors ==========

    /// Returns the power state.
    #[must_use]
    pub const fn power(&self) -> PowerState {
        self.power
    }

    /// Returns `true` if the set is on.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.power.is_on()
    }

    /// Returns `true` if the mute flag is set.
    ///
    /// The flag keeps its value while the set is off.
    #[must_use]
    pub const fn is_muted(&self) -> bool {
        self.muted
    }

    /// Returns the stored volume level, ignoring mute.
    #[must_use]
    pub const fn volume(&self) -> Volume {
        self.volume
    }

    /// Returns the tuned channel.
    #[must_use]
    pub const fn channel(&self) -> Channel {
        self.channel
    }

    /// Returns the volume as shown on screen: zero while muted.
    #[must_use]
    pub const fn effective_volume(&self) -> u8 {
        if self.muted { 0 } else { self.volume.value() }
    }

    // ========== Operations ==========

    /// Switches the set on or off.
    pub fn toggle_power(&mut self) {
        self.power = self.power.toggled();
        tracing::debug!(power = %self.power, "Power toggled");
    }

    /// Flips the mute flag. Ignored while off.
    pub fn toggle_mute(&mut self) {
        if !self.is_powered_for("toggle_mute") {
            return;
        }
        self.muted = !self.muted;
        tracing::debug!(muted = self.muted, "Mute toggled");
    }

    /// Steps to the next channel, wrapping from the last to the first.
    /// Ignored while off.
    pub fn channel_up(&mut self) {
        if !self.is_powered_for("channel_up") {
            return;
        }
        self.channel = self.channel.next();
        tracing::debug!(channel = %self.channel, "Channel up");
    }

    /// Steps to the previous channel, wrapping from the first to the last.
    /// Ignored while off.
    pub fn channel_down(&mut self) {
        if !self.is_powered_for("channel_down") {
            return;
        }
        self.channel = self.channel.previous();
        tracing::debug!(channel = %self.channel, "Channel down");
    }

    /// Unmutes, then raises the volume by one unless already at maximum.
    /// Ignored while off.
    pub fn volume_up(&mut self) {
        if !self.is_powered_for("volume_up") {
            return;
        }
        self.unmute();
        self.volume = self.volume.increment();
        tracing::debug!(volume = %self.volume, "Volume up");
    }

    /// Unmutes, then lowers the volume by one unless already at minimum.
    /// Ignored while off.
    pub fn volume_down(&mut self) {
        if !self.is_powered_for("volume_down") {
            return;
        }
        self.unmute();
        self.volume = self.volume.decrement();
        tracing::debug!(volume = %self.volume, "Volume down");
    }

    /// Renders the status line.
    ///
    /// Format: `Power = {True|False}, Channel = {channel}, Volume = {effective volume}`.
    #[must_use]
    pub fn render_status(&self) -> String {
        self.snapshot().to_string()
    }

    /// Returns the status as a structured value.
    #[must_use]
    pub const fn snapshot(&self) -> StatusSnapshot {
        StatusSnapshot {
            power: self.power.is_on(),
            channel: self.channel.value(),
            volume: self.effective_volume(),
        }
    }

    /// Presses a remote button and reports what changed.
    ///
    /// Returns `None` when the press left the state untouched, which is the
    /// case for every button but power while the set is off.
    ///
    /// # Examples
    ///
    /// ```
    /// use telly_lib::Television;
    /// use telly_lib::command::RemoteCommand;
    ///
    /// let mut tv = Television::new();
    /// assert!(tv.press(RemoteCommand::Mute).is_none());
    /// assert!(tv.press(RemoteCommand::Power).is_some());
    /// ```
    pub fn press(&mut self, command: RemoteCommand) -> Option<StateChange> {
        let before = self.clone();
        match command {
            RemoteCommand::Power => self.toggle_power(),
            RemoteCommand::Mute => self.toggle_mute(),
            RemoteCommand::ChannelUp => self.channel_up(),
            RemoteCommand::ChannelDown => self.channel_down(),
            RemoteCommand::VolumeUp => self.volume_up(),
            RemoteCommand::VolumeDown => self.volume_down(),
        }
        StateChange::between(&before, self)
    }

    fn unmute(&mut self) {
        if self.muted {
            self.muted = false;
            tracing::debug!("Unmuted by volume key");
        }
    }

    fn is_powered_for(&self, operation: &'static str) -> bool {
        if !self.is_on() {
            tracing::trace!(operation, "Ignoring operation while powered off");
        }
        self.is_on()
    }
}
