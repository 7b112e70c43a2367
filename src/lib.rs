// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `Telly` Lib - A Rust library modelling a remote-controlled television.
//!
//! The library tracks a television's power, mute, volume and channel and
//! applies the rules a remote control follows:
//!
//! - **Power**: toggles freely and never resets the other settings
//! - **Mute**: toggles only while on; hides the volume without changing it
//! - **Channel**: steps up or down, wrapping at both ends (0-3)
//! - **Volume**: steps up or down, saturating at both ends (0-2), and
//!   unmutes first
//!
//! Every button except power is ignored while the set is off. No operation
//! can fail.
//!
//! # Quick Start
//!
//! ```
//! use telly_lib::Television;
//!
//! let mut tv = Television::new();
//! assert_eq!(tv.render_status(), "Power = False, Channel = 0, Volume = 0");
//!
//! tv.toggle_power();
//! tv.channel_down();
//! assert_eq!(tv.render_status(), "Power = True, Channel = 3, Volume = 0");
//! ```
//!
//! ## Driving by Command
//!
//! ```
//! use telly_lib::{RemoteCommand, StateChange, Television};
//!
//! let mut tv = Television::new();
//! tv.press(RemoteCommand::Power);
//! tv.press(RemoteCommand::Mute);
//!
//! // A volume key unmutes and steps the level in one press
//! let change = tv.press(RemoteCommand::VolumeUp).unwrap();
//! assert!(change.is_batch());
//! ```

pub mod command;
pub mod error;
pub mod state;
pub mod types;

pub use command::RemoteCommand;
pub use error::{Error, Result, ValueError};
pub use state::{SharedTelevision, StateChange, StatusSnapshot, Television};
pub use types::{
    Channel, MAX_CHANNEL, MAX_VOLUME, MIN_CHANNEL, MIN_VOLUME, PowerState, Volume,
};
