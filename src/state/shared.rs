// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shared handle for callers that drive one television from several places.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::command::RemoteCommand;

use super::{StateChange, StatusSnapshot, Television};

/// Cloneable handle to a single [`Television`] behind a mutex.
///
/// Every clone refers to the same set. Each call takes the lock for its
/// whole duration, so presses from different threads are applied one at a
/// time in lock order.
///
/// # Examples
///
/// ```
/// use telly_lib::SharedTelevision;
/// use telly_lib::command::RemoteCommand;
///
/// let tv = SharedTelevision::new();
/// let remote = tv.clone();
///
/// remote.press(RemoteCommand::Power);
/// assert!(tv.status().power);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedTelevision {
    inner: Arc<Mutex<Television>>,
}

impl SharedTelevision {
    /// Creates a handle to a new television with default state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Presses a button on the shared television.
    pub fn press(&self, command: RemoteCommand) -> Option<StateChange> {
        self.inner.lock().press(command)
    }

    /// Returns the current status.
    #[must_use]
    pub fn status(&self) -> StatusSnapshot {
        self.inner.lock().snapshot()
    }

    /// Renders the current status line.
    #[must_use]
    pub fn render_status(&self) -> String {
        self.inner.lock().render_status()
    }

    /// Runs `f` with exclusive access to the television.
    ///
    /// Use this to apply several operations without another caller
    /// interleaving between them.
    pub fn with<R>(&self, f: impl FnOnce(&mut Television) -> R) -> R {
        f(&mut *self.inner.lock())
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn get(&self) -> Television {
        self.inner.lock().clone()
    }
}

impl From<Television> for SharedTelevision {
    fn from(tv: Television) -> Self {
        Self {
            inner: Arc::new(Mutex::new(tv)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::types::{Channel, Volume};

    #[test]
    fn clones_share_state() {
        let tv = SharedTelevision::new();
        let other = tv.clone();
        other.press(RemoteCommand::Power);
        other.press(RemoteCommand::ChannelUp);

        assert_eq!(tv.render_status(), "Power = True, Channel = 1, Volume = 0");
    }

    #[test]
    fn with_applies_sequence_atomically() {
        let tv = SharedTelevision::new();
        let status = tv.with(|tv| {
            tv.toggle_power();
            tv.volume_up();
            tv.toggle_mute();
            tv.snapshot()
        });
        assert_eq!(status.volume, 0);
        assert_eq!(tv.get().volume(), Volume::new(1).unwrap());
    }

    #[test]
    fn from_existing_television() {
        let mut inner = Television::new();
        inner.toggle_power();
        let tv = SharedTelevision::from(inner);
        assert!(tv.status().power);
    }

    #[test]
    fn concurrent_presses_keep_ranges() {
        let tv = SharedTelevision::new();
        tv.press(RemoteCommand::Power);

        let handles: Vec<_> = RemoteCommand::ALL
            .into_iter()
            .filter(|c| !c.works_while_off())
            .map(|command| {
                let tv = tv.clone();
                thread::spawn(move || {
                    for _ in 0..100 {
                        tv.press(command);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let state = tv.get();
        assert!(state.is_on());
        assert!(state.volume() <= Volume::MAX);
        assert!(state.channel() <= Channel::MAX);
    }
}
