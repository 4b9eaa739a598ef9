//! Events delivered to state machines.
//!
//! Every machine shares the same lifecycle vocabulary (`Init`, `Entry`,
//! `Exit`, `Timeout`) and carries its own domain events in `Domain(D)`.

use super::timer::TimerId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An event, passed by value.
///
/// `NoEvent` doubles as the "fully consumed" residual returned by
/// `dispatch`; any other residual is an event that still needs handling.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Event<D> {
    /// Residual meaning the input was consumed.
    NoEvent,
    /// Bootstrap event, legal only in the initial pseudo-state.
    Init,
    /// Synthetic event run after a state becomes current.
    Entry,
    /// Synthetic event run before a state stops being current.
    Exit,
    /// A named timer expired.
    Timeout(TimerId),
    /// A machine-specific event such as a bump or a button press.
    Domain(D),
}

/// Payload-free classification of an [`Event`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum EventKind {
    NoEvent,
    Init,
    Entry,
    Exit,
    Timeout,
    Domain,
}

impl<D> Event<D> {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::NoEvent => EventKind::NoEvent,
            Self::Init => EventKind::Init,
            Self::Entry => EventKind::Entry,
            Self::Exit => EventKind::Exit,
            Self::Timeout(_) => EventKind::Timeout,
            Self::Domain(_) => EventKind::Domain,
        }
    }

    /// True when this residual means "fully consumed".
    pub fn is_no_event(&self) -> bool {
        matches!(self, Self::NoEvent)
    }

    /// True for the synthetic events never posted by external sources.
    pub fn is_lifecycle(&self) -> bool {
        matches!(self, Self::Init | Self::Entry | Self::Exit)
    }

    /// The timer carried by a `Timeout`, if any.
    pub fn timer(&self) -> Option<TimerId> {
        match self {
            Self::Timeout(id) => Some(*id),
            _ => None,
        }
    }

    /// True for a `Timeout` of exactly this timer.
    pub fn is_timeout_of(&self, id: TimerId) -> bool {
        self.timer() == Some(id)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NoEvent => "NO_EVENT",
            Self::Init => "INIT",
            Self::Entry => "ENTRY",
            Self::Exit => "EXIT",
            Self::Timeout => "TIMEOUT",
            Self::Domain => "DOMAIN",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
    enum Button {
        Pressed,
    }

    #[test]
    fn kind_ignores_payload() {
        assert_eq!(Event::<Button>::Timeout(TimerId(1)).kind(), EventKind::Timeout);
        assert_eq!(Event::Domain(Button::Pressed).kind(), EventKind::Domain);
        assert_eq!(Event::<Button>::NoEvent.kind(), EventKind::NoEvent);
    }

    #[test]
    fn lifecycle_events_are_init_entry_exit() {
        assert!(Event::<Button>::Init.is_lifecycle());
        assert!(Event::<Button>::Entry.is_lifecycle());
        assert!(Event::<Button>::Exit.is_lifecycle());
        assert!(!Event::<Button>::Timeout(TimerId(0)).is_lifecycle());
        assert!(!Event::Domain(Button::Pressed).is_lifecycle());
        assert!(!Event::<Button>::NoEvent.is_lifecycle());
    }

    #[test]
    fn timeout_match_checks_the_timer_id() {
        let event = Event::<Button>::Timeout(TimerId(2));
        assert!(event.is_timeout_of(TimerId(2)));
        assert!(!event.is_timeout_of(TimerId(3)));
        assert!(!Event::<Button>::Entry.is_timeout_of(TimerId(2)));
    }

    #[test]
    fn events_are_plain_values() {
        let event = Event::Domain(Button::Pressed);
        let copy = event.clone();
        assert_eq!(event, copy);
    }

    #[test]
    fn kind_displays_framework_names() {
        assert_eq!(EventKind::Timeout.to_string(), "TIMEOUT");
        assert_eq!(EventKind::NoEvent.to_string(), "NO_EVENT");
    }
}
