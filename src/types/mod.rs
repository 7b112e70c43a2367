// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for television control.
//!
//! Each type ensures values are within their valid ranges at construction
//! time, so a [`Television`](crate::Television) can never hold an
//! out-of-range level or channel.
//!
//! # Types
//!
//! - [`PowerState`] - On/Off
//! - [`Volume`] - Stored volume level (0-2), saturating
//! - [`Channel`] - Channel number (0-3), wrapping

mod channel;
mod power;
mod volume;

pub use channel::{Channel, MAX_CHANNEL, MIN_CHANNEL};
pub use power::PowerState;
pub use volume::{MAX_VOLUME, MIN_VOLUME, Volume};
