// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State change representation.
//!
//! A [`StateChange`] describes what a button press actually did to a
//! [`Television`](super::Television). Presses that are ignored (any button
//! but power while the set is off) produce no change at all.
//!
//! # Change Types
//!
//! - [`StateChange::Power`] - Set switched on or off
//! - [`StateChange::Mute`] - Mute flag flipped, or cleared by a volume key
//! - [`StateChange::Channel`] - Channel stepped
//! - [`StateChange::Volume`] - Stored volume level stepped
//! - [`StateChange::Batch`] - Several of the above from one press
//!
//! # Examples
//!
//! ```
//! use telly_lib::Television;
//! use telly_lib::command::RemoteCommand;
//! use telly_lib::state::StateChange;
//! use telly_lib::types::{PowerState, Volume};
//!
//! let mut tv = Television::new();
//! assert_eq!(tv.press(RemoteCommand::VolumeUp), None);
//!
//! assert_eq!(
//!     tv.press(RemoteCommand::Power),
//!     Some(StateChange::Power(PowerState::On))
//! );
//! assert_eq!(
//!     tv.press(RemoteCommand::VolumeUp),
//!     Some(StateChange::Volume(Volume::new(1).unwrap()))
//! );
//! ```

use crate::types::{Channel, PowerState, Volume};

use super::Television;

/// Represents a change in television state.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum StateChange {
    /// Power state changed.
    Power(PowerState),

    /// Mute flag changed to the given value.
    Mute(bool),

    /// Channel changed.
    Channel(Channel),

    /// Stored volume level changed.
    Volume(Volume),

    /// Multiple changes at once.
    ///
    /// Produced when a volume key both unmutes and steps the level.
    Batch(Vec<StateChange>),
}

impl StateChange {
    /// Computes the change that turns `before` into `after`.
    ///
    /// Returns `None` when both states are equal. A single differing field
    /// yields that change directly; several yield a [`StateChange::Batch`].
    #[must_use]
    pub fn between(before: &Television, after: &Television) -> Option<Self> {
        let mut changes = Vec::new();

        if before.power() != after.power() {
            changes.push(Self::Power(after.power()));
        }
        if before.is_muted() != after.is_muted() {
            changes.push(Self::Mute(after.is_muted()));
        }
        if before.channel() != after.channel() {
            changes.push(Self::Channel(after.channel()));
        }
        if before.volume() != after.volume() {
            changes.push(Self::Volume(after.volume()));
        }

        match changes.len() {
            0 => None,
            1 => changes.pop(),
            _ => Some(Self::Batch(changes)),
        }
    }

    /// Returns `true` if this is a batch of changes.
    #[must_use]
    pub fn is_batch(&self) -> bool {
        matches!(self, Self::Batch(_))
    }

    /// Returns the individual changes, flattening any batch.
    #[must_use]
    pub fn flatten(&self) -> Vec<&StateChange> {
        match self {
            Self::Batch(changes) => changes.iter().flat_map(Self::flatten).collect(),
            other => vec![other],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn powered_on() -> Television {
        let mut tv = Television::new();
        tv.toggle_power();
        tv
    }

    #[test]
    fn between_equal_states_is_none() {
        let tv = Television::new();
        assert_eq!(StateChange::between(&tv, &tv.clone()), None);
    }

    #[test]
    fn between_single_field() {
        let before = powered_on();
        let mut after = before.clone();
        after.channel_up();
        assert_eq!(
            StateChange::between(&before, &after),
            Some(StateChange::Channel(Channel::new(1).unwrap()))
        );
    }

    #[test]
    fn between_unmute_and_volume_is_batch() {
        let mut before = powered_on();
        before.toggle_mute();
        let mut after = before.clone();
        after.volume_up();

        let change = StateChange::between(&before, &after).unwrap();
        assert!(change.is_batch());
        assert_eq!(
            change.flatten(),
            vec![
                &StateChange::Mute(false),
                &StateChange::Volume(Volume::new(1).unwrap())
            ]
        );
    }

    #[test]
    fn flatten_single_change() {
        let change = StateChange::Mute(true);
        assert_eq!(change.flatten(), vec![&StateChange::Mute(true)]);
        assert!(!change.is_batch());
    }

    #[test]
    fn state_change_serde() {
        let change = StateChange::Batch(vec![
            StateChange::Mute(false),
            StateChange::Volume(Volume::MAX),
        ]);
        let json = serde_json::to_string(&change).unwrap();
        let back: StateChange = serde_json::from_str(&json).unwrap();
        assert_eq!(back, change);
    }
}
