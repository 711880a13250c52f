// Snapshot management for step playback

use crate::errors::{Result, VisualizerError};
use crate::sorting::{ArrayElement, StepKind, StepSink};
use std::time::{Duration, Instant};

/// Full copy of the array at one step of a sort
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub kind: StepKind,
    pub elements: Vec<ArrayElement>,
}

impl Snapshot {
    /// Estimate the memory usage of this snapshot in bytes
    pub fn estimated_size(&self) -> usize {
        std::mem::size_of::<Snapshot>()
            + self.elements.len() * std::mem::size_of::<ArrayElement>()
    }
}

/// Recorded step history, bounded by a memory budget
#[derive(Debug)]
pub struct SnapshotManager {
    snapshots: Vec<Snapshot>,
    max_memory: usize,
    current_memory: usize,
}

impl SnapshotManager {
    pub fn new(max_memory: usize) -> Self {
        SnapshotManager {
            snapshots: Vec::new(),
            max_memory,
            current_memory: 0,
        }
    }

    /// Add a snapshot to history
    pub fn push(&mut self, snapshot: Snapshot) -> Result<()> {
        let snapshot_size = snapshot.estimated_size();

        if self.current_memory + snapshot_size > self.max_memory {
            return Err(VisualizerError::SnapshotLimitExceeded {
                current: self.current_memory + snapshot_size,
                limit: self.max_memory,
            });
        }

        self.current_memory += snapshot_size;
        self.snapshots.push(snapshot);
        Ok(())
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    /// Get the number of snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Get current memory usage
    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    /// Get max memory limit
    pub fn memory_limit(&self) -> usize {
        self.max_memory
    }
}

impl StepSink for SnapshotManager {
    fn record(&mut self, kind: StepKind, elements: &[ArrayElement]) -> Result<()> {
        self.push(Snapshot {
            kind,
            elements: elements.to_vec(),
        })
    }
}

/// Slowest and fastest playback speeds
pub const MIN_SPEED: u64 = 100;
pub const MAX_SPEED: u64 = 1000;

/// Delay between frames for a speed on the `MIN_SPEED..=MAX_SPEED` scale
pub fn frame_interval(speed: u64) -> Duration {
    let speed = speed.clamp(MIN_SPEED, MAX_SPEED);
    Duration::from_millis(1100 - speed)
}

/// Cursor over a recorded history with auto-play
///
/// Playback only indexes into the history; it never regenerates steps, so
/// scrubbing backward is as cheap as scrubbing forward.
#[derive(Debug)]
pub struct Playback {
    history: SnapshotManager,
    position: usize,
    playing: bool,
    speed: u64,
    last_advance: Instant,
}

impl Playback {
    /// Start at the first step, paused
    pub fn new(history: SnapshotManager, speed: u64, now: Instant) -> Result<Self> {
        if history.is_empty() {
            return Err(VisualizerError::NoSteps);
        }
        Ok(Playback {
            history,
            position: 0,
            playing: false,
            speed: speed.clamp(MIN_SPEED, MAX_SPEED),
            last_advance: now,
        })
    }

    pub fn current(&self) -> &Snapshot {
        // Position is kept within 0..len and the history is never empty
        &self.history.snapshots[self.position]
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn total(&self) -> usize {
        self.history.len()
    }

    pub fn is_at_start(&self) -> bool {
        self.position == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.position + 1 >= self.history.len()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn speed(&self) -> u64 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: u64) {
        self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
    }

    /// Start auto-play; the first advance happens one interval from `now`
    pub fn play(&mut self, now: Instant) {
        self.playing = !self.is_at_end();
        self.last_advance = now;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn toggle(&mut self, now: Instant) {
        if self.playing {
            self.pause();
        } else {
            self.play(now);
        }
    }

    /// Step forward one snapshot
    pub fn step_forward(&mut self) -> Result<()> {
        if self.is_at_end() {
            return Err(VisualizerError::HistoryBoundary {
                message: "Already at the last step".to_string(),
            });
        }
        self.position += 1;
        Ok(())
    }

    /// Step backward one snapshot
    pub fn step_backward(&mut self) -> Result<()> {
        if self.position == 0 {
            return Err(VisualizerError::HistoryBoundary {
                message: "Already at the first step".to_string(),
            });
        }
        self.position -= 1;
        Ok(())
    }

    pub fn rewind_to_start(&mut self) {
        self.position = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.position = self.history.len() - 1;
    }

    /// Advance auto-play if an interval has elapsed.
    ///
    /// Returns `true` exactly once, on the tick that reaches the final step.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.playing || now.duration_since(self.last_advance) < frame_interval(self.speed) {
            return false;
        }
        self.last_advance = now;

        if self.step_forward().is_err() || self.is_at_end() {
            self.playing = false;
            return true;
        }
        false
    }
}
