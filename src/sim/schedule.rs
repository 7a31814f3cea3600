//! Timed rotation through spawn patterns
//!
//! The scheduler owns the frame counter each pattern sees. The counter is local
//! to the active pattern: it restarts whenever the rotation moves on, so every
//! pattern begins its own cadence from scratch.

use serde::{Deserialize, Serialize};

use super::pattern::Pattern;

/// One slot in the rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub pattern: Pattern,
    /// How long the pattern stays active (seconds)
    pub duration_secs: u32,
}

impl ScheduleEntry {
    pub const fn new(pattern: Pattern, duration_secs: u32) -> Self {
        Self {
            pattern,
            duration_secs,
        }
    }
}

/// Reference rotation: radial 8s, sweeping 6s, random burst 10s
pub const DEFAULT_SCHEDULE: [ScheduleEntry; 3] = [
    ScheduleEntry::new(Pattern::Radial, 8),
    ScheduleEntry::new(Pattern::Sweeping, 6),
    ScheduleEntry::new(Pattern::RandomBurst, 10),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternScheduler {
    entries: Vec<ScheduleEntry>,
    ticks_per_second: u32,
    index: usize,
    /// Frame number handed to the active pattern
    frame: u32,
    /// Ticks spent in the active pattern
    ticks_in_pattern: u32,
    /// Number of pattern changes so far
    switches: u64,
}

impl PatternScheduler {
    /// Create a scheduler. An empty rotation falls back to [`DEFAULT_SCHEDULE`].
    pub fn new(entries: Vec<ScheduleEntry>, ticks_per_second: u32) -> Self {
        let entries = if entries.is_empty() {
            log::warn!("Empty pattern schedule, using the default rotation");
            DEFAULT_SCHEDULE.to_vec()
        } else {
            entries
        };
        Self {
            entries,
            ticks_per_second,
            index: 0,
            frame: 0,
            ticks_in_pattern: 0,
            switches: 0,
        }
    }

    /// Advance one tick and return the pattern to run with its local frame.
    ///
    /// The switch check happens before counting, so the tick that crosses a
    /// duration boundary already belongs to the next pattern. Frames start at 1.
    pub fn advance_and_get(&mut self) -> (Pattern, u32) {
        let entry = self.entries[self.index];
        if self.ticks_in_pattern >= entry.duration_secs.saturating_mul(self.ticks_per_second) {
            self.switch_to((self.index + 1) % self.entries.len());
        }
        self.ticks_in_pattern += 1;
        self.frame += 1;
        (self.entries[self.index].pattern, self.frame)
    }

    /// Jump to the next pattern immediately (wrapping)
    pub fn skip(&mut self) -> Pattern {
        self.switch_to((self.index + 1) % self.entries.len());
        self.current()
    }

    fn switch_to(&mut self, index: usize) {
        self.index = index;
        self.ticks_in_pattern = 0;
        self.frame = 0;
        self.switches += 1;
    }

    pub fn current(&self) -> Pattern {
        self.entries[self.index].pattern
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn ticks_in_pattern(&self) -> u32 {
        self.ticks_in_pattern
    }

    pub fn switches(&self) -> u64 {
        self.switches
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }
}

impl Default for PatternScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_SCHEDULE.to_vec(), crate::consts::TICKS_PER_SECOND)
    }
}
