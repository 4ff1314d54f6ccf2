//! Mode transition event and observer.
//!
//! The mode controller triggers a [`ModeChangedEvent`] whenever the shared
//! [`Mode`](crate::resources::mode::Mode) resource actually changes value.
//! The observer here is the single place transitions are logged, replacing
//! per-frame stdout chatter.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::resources::mode::Mode;

/// Notification that the application switched between edit and play.
#[derive(Event, Debug, Clone, Copy)]
pub struct ModeChangedEvent {
    pub from: Mode,
    pub to: Mode,
}

/// Observer that logs mode transitions.
pub fn observe_mode_change(trigger: On<ModeChangedEvent>) {
    let event = trigger.event();
    info!("Mode changed: {:?} -> {:?}", event.from, event.to);
}
