//! Press-and-hold repeat timing for editing keys.
//!
//! The first press of a key is handled as a discrete key event. While the key
//! stays down, an initial delay elapses, after which the action fires once per
//! interval until the key is released.

use lumen_gui::NamedKey;
use lumen_gui_macros::WithBuilders;

/// Keys that auto-repeat while held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepeatKey {
    Backspace,
    ArrowLeft,
    ArrowRight,
}

impl RepeatKey {
    /// All repeating keys, highest priority first. When several are held,
    /// only the first one repeats.
    pub const ALL: [RepeatKey; 3] = [
        RepeatKey::Backspace,
        RepeatKey::ArrowRight,
        RepeatKey::ArrowLeft,
    ];

    pub fn named_key(self) -> NamedKey {
        match self {
            RepeatKey::Backspace => NamedKey::Backspace,
            RepeatKey::ArrowLeft => NamedKey::ArrowLeft,
            RepeatKey::ArrowRight => NamedKey::ArrowRight,
        }
    }
}

/// Repeat timing, in seconds
#[derive(Debug, Clone, Copy, PartialEq, WithBuilders)]
pub struct KeyRepeatConfig {
    /// How long a key must be held before repeating starts
    pub initial_delay: f32,
    /// Time between repeats once repeating
    pub interval: f32,
}

impl Default for KeyRepeatConfig {
    fn default() -> Self {
        Self {
            initial_delay: 0.5,
            interval: 0.05,
        }
    }
}

/// Timer pair driving auto-repeat for one widget.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyRepeat {
    held: Option<RepeatKey>,
    delay_elapsed: f32,
    interval_elapsed: f32,
}

impl KeyRepeat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the timers by one frame.
    ///
    /// `held` is the repeating key currently down, if any. Releasing the key,
    /// or switching to a different one, restarts the initial delay. Returns the
    /// key whose action should fire this frame.
    pub fn update(
        &mut self,
        held: Option<RepeatKey>,
        frame_time: f32,
        config: &KeyRepeatConfig,
    ) -> Option<RepeatKey> {
        if held != self.held {
            self.held = held;
            self.delay_elapsed = 0.0;
            self.interval_elapsed = 0.0;
        }

        let key = held?;
        let mut fired = None;

        if self.delay_elapsed >= config.initial_delay {
            if self.interval_elapsed >= config.interval {
                fired = Some(key);
                self.interval_elapsed = 0.0;
            }
            self.interval_elapsed += frame_time;
        }
        self.delay_elapsed += frame_time;

        fired
    }

    /// Whether the initial delay has passed for the held key
    #[cfg(test)]
    fn is_armed(&self, config: &KeyRepeatConfig) -> bool {
        self.held.is_some() && self.delay_elapsed >= config.initial_delay
    }
}
