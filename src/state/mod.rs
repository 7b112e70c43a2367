// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Television state management types.
//!
//! The [`Television`] struct owns the power, mute, volume and channel state
//! and the operations that change it. [`StateChange`] describes what a button
//! press did, [`StatusSnapshot`] is the rendered status, and
//! [`SharedTelevision`] lets several callers drive one set.
//!
//! # Examples
//!
//! ```
//! use telly_lib::state::Television;
//!
//! let mut tv = Television::new();
//! tv.toggle_power();
//! tv.toggle_mute();
//! tv.volume_up();
//!
//! assert!(!tv.is_muted());
//! assert_eq!(tv.render_status(), "Power = True, Channel = 0, Volume = 1");
//! ```

mod shared;
mod state_change;
mod status;
mod television;

pub use shared::SharedTelevision;
pub use state_change::StateChange;
pub use status::StatusSnapshot;
pub use television::Television;
