//! Cosmetic progress animation started by "Nouveau"

use std::time::Duration;

/// Interval between two ticks
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Amount added per tick
pub const STEP: u8 = 2;

pub const MAX: u8 = 100;

/// What a tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressTick {
    /// Not running, nothing changed
    Idle,
    /// Value advanced to the contained percentage
    Advanced(u8),
    /// Reached the end: stopped and reset to zero
    Completed,
}

/// Timer-driven progress value in `0..=100`
#[derive(Debug, Clone, Default)]
pub struct ProgressAnimation {
    value: u8,
    running: bool,
}

impl ProgressAnimation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Value as a fraction for progress bar widgets
    pub fn fraction(&self) -> f32 {
        f32::from(self.value) / f32::from(MAX)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Restart from zero
    pub fn start(&mut self) {
        self.value = 0;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.value = 0;
    }

    pub fn tick(&mut self) -> ProgressTick {
        if !self.running {
            return ProgressTick::Idle;
        }
        if self.value < MAX {
            self.value = (self.value + STEP).min(MAX);
            ProgressTick::Advanced(self.value)
        } else {
            self.stop();
            ProgressTick::Completed
        }
    }
}
