//! Idle/vanity timer
//!
//! Counts seconds without qualifying input. Past the threshold the camera
//! drops into vanity mode, once; the timer then parks on a negative
//! sentinel until input arrives, at which point vanity mode switches off
//! and counting restarts from zero.

/// Seconds of inactivity before vanity mode engages.
pub const IDLE_THRESHOLD: f32 = 30.0;

const TRIGGERED: f32 = -1.0;

/// Side effect the timer asks the world for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdleEvent {
    VanityOn,
    VanityOff,
}

/// Tracks time since the last qualifying input.
pub struct IdleTimer {
    time: f32,
}

impl IdleTimer {
    pub fn new() -> Self {
        Self { time: 0.0 }
    }

    /// Add idle time. Emits `VanityOn` exactly once when the threshold is
    /// crossed; afterwards the timer stays parked until reset.
    pub fn accumulate(&mut self, dt: f32) -> Option<IdleEvent> {
        if self.time >= 0.0 {
            self.time += dt;
        }
        if self.time > IDLE_THRESHOLD {
            self.time = TRIGGERED;
            return Some(IdleEvent::VanityOn);
        }
        None
    }

    /// Qualifying input arrived. Emits `VanityOff` if vanity mode had been
    /// triggered; accumulation restarts from zero either way.
    pub fn reset(&mut self) -> Option<IdleEvent> {
        let was_triggered = self.time < 0.0;
        self.time = 0.0;
        if was_triggered {
            Some(IdleEvent::VanityOff)
        } else {
            None
        }
    }
}

impl Default for IdleTimer {
    fn default() -> Self {
        Self::new()
    }
}
