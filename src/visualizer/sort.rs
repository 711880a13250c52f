use crate::config::{Config, RANDOM_ARRAY_LEN};
use crate::errors::{Result, VisualizerError};
use crate::ident::TokenSource;
use crate::input::parse_array;
use crate::notify::Notification;
use crate::snapshot::{Playback, SnapshotManager, MAX_SPEED, MIN_SPEED};
use crate::sorting::{
    elements_from_values, random_values, ArrayElement, ElementState, SortAlgorithm, StepKind,
};
use rand::Rng;
use std::time::Instant;
use tracing::{debug, info};

/// Speed change per key press
pub const SPEED_STEP: u64 = 100;

/// Quicksort or mergesort with a scrubbable step history
#[derive(Debug)]
pub struct SortVisualizer {
    algorithm: SortAlgorithm,
    elements: Vec<ArrayElement>,
    playback: Option<Playback>,
    tokens: TokenSource,
    speed: u64,
    snapshot_limit: usize,
}

impl SortVisualizer {
    /// Open with the configured array, or the algorithm's default one
    pub fn new(algorithm: SortAlgorithm, config: &Config) -> Self {
        let mut tokens = TokenSource::new();
        let values = config
            .array_input
            .as_deref()
            .and_then(|text| parse_array(text).ok())
            .or_else(|| parse_array(algorithm.default_input()).ok())
            .unwrap_or_default();
        let elements = elements_from_values(&values, &mut tokens);

        SortVisualizer {
            algorithm,
            elements,
            playback: None,
            tokens,
            speed: config.speed.clamp(MIN_SPEED, MAX_SPEED),
            snapshot_limit: config.snapshot_limit,
        }
    }

    pub fn algorithm(&self) -> SortAlgorithm {
        self.algorithm
    }

    /// Replace the array with the parsed input; non-numbers are dropped
    pub fn create_from_input(&mut self, text: &str) -> Result<Notification> {
        let values = parse_array(text)?;
        self.load(&values);
        Ok(Notification::info(
            "Array created",
            format!("{} elements ready to sort", values.len()),
        ))
    }

    /// Replace the array with random values in `1..=100`
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) -> Notification {
        let values = random_values(rng, RANDOM_ARRAY_LEN);
        self.load(&values);
        Notification::info("Random array", describe_values(&values))
    }

    fn load(&mut self, values: &[i64]) {
        self.playback = None;
        self.elements = elements_from_values(values, &mut self.tokens);
        debug!(algorithm = %self.algorithm, len = values.len(), "array loaded");
    }

    /// Generate every step, then start auto-play from the first one
    pub fn start(&mut self, now: Instant) -> Result<Notification> {
        if self.is_playing() {
            return Err(VisualizerError::AlreadyRunning);
        }
        if self.elements.is_empty() {
            return Err(VisualizerError::EmptyArray);
        }

        let mut working: Vec<ArrayElement> = self
            .elements
            .iter()
            .map(|e| ArrayElement {
                state: ElementState::Normal,
                ..*e
            })
            .collect();
        let mut history = SnapshotManager::new(self.snapshot_limit);
        self.algorithm.run(&mut working, &mut history)?;

        info!(
            algorithm = %self.algorithm,
            len = working.len(),
            steps = history.len(),
            bytes = history.memory_usage(),
            "steps generated"
        );

        let total = history.len();
        let mut playback = Playback::new(history, self.speed, now)?;
        playback.play(now);
        let finished = playback.is_at_end();
        self.playback = Some(playback);

        // A single recorded step is already the sorted array
        if finished {
            return Ok(self.completed(total));
        }
        Ok(Notification::info(
            format!("{} started", self.algorithm),
            format!("{total} steps recorded"),
        ))
    }

    fn completed(&self, total: usize) -> Notification {
        info!(algorithm = %self.algorithm, steps = total, "sort finished");
        let unit = if total == 1 { "step" } else { "steps" };
        Notification::info(
            "Sorting complete",
            format!("{} finished in {total} {unit}", self.algorithm),
        )
    }

    /// Pause or resume auto-play
    pub fn toggle(&mut self, now: Instant) -> Result<()> {
        self.playback_mut()?.toggle(now);
        Ok(())
    }

    pub fn step_forward(&mut self) -> Result<()> {
        let playback = self.playback_mut()?;
        playback.pause();
        playback.step_forward()
    }

    pub fn step_backward(&mut self) -> Result<()> {
        let playback = self.playback_mut()?;
        playback.pause();
        playback.step_backward()
    }

    pub fn rewind_to_start(&mut self) -> Result<()> {
        let playback = self.playback_mut()?;
        playback.pause();
        playback.rewind_to_start();
        Ok(())
    }

    pub fn jump_to_end(&mut self) -> Result<()> {
        let playback = self.playback_mut()?;
        playback.pause();
        playback.jump_to_end();
        Ok(())
    }

    /// Drop the recorded steps and show the array unsorted again
    pub fn reset(&mut self) {
        if self.playback.take().is_some() {
            debug!(algorithm = %self.algorithm, "playback reset");
        }
        for element in &mut self.elements {
            element.state = ElementState::Normal;
        }
    }

    pub fn speed(&self) -> u64 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: u64) {
        self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
        if let Some(playback) = &mut self.playback {
            playback.set_speed(self.speed);
        }
    }

    pub fn faster(&mut self) {
        self.set_speed(self.speed.saturating_add(SPEED_STEP));
    }

    pub fn slower(&mut self) {
        self.set_speed(self.speed.saturating_sub(SPEED_STEP));
    }

    /// Advance auto-play; reports once when the last step is reached
    pub fn tick(&mut self, now: Instant) -> Option<Notification> {
        let playback = self.playback.as_mut()?;
        if !playback.tick(now) {
            return None;
        }
        let total = playback.total();
        Some(self.completed(total))
    }

    /// Elements as they should be drawn right now
    pub fn display(&self) -> &[ArrayElement] {
        match &self.playback {
            Some(playback) => &playback.current().elements,
            None => &self.elements,
        }
    }

    /// `(position, total, kind)` of the step on screen
    pub fn current_step(&self) -> Option<(usize, usize, StepKind)> {
        self.playback
            .as_ref()
            .map(|p| (p.position(), p.total(), p.current().kind))
    }

    pub fn is_playing(&self) -> bool {
        self.playback.as_ref().is_some_and(Playback::is_playing)
    }

    pub fn has_steps(&self) -> bool {
        self.playback.is_some()
    }

    /// Current array values as editable input text
    pub fn input_text(&self) -> String {
        describe_values(&self.elements.iter().map(|e| e.value).collect::<Vec<_>>())
    }

    fn playback_mut(&mut self) -> Result<&mut Playback> {
        self.playback.as_mut().ok_or(VisualizerError::NoSteps)
    }
}

fn describe_values(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    fn visualizer(algorithm: SortAlgorithm) -> SortVisualizer {
        SortVisualizer::new(algorithm, &Config::default())
    }

    fn values(v: &SortVisualizer) -> Vec<i64> {
        v.display().iter().map(|e| e.value).collect()
    }

    #[test]
    fn test_opens_with_default_input() {
        assert_eq!(
            values(&visualizer(SortAlgorithm::QuickSort)),
            vec![64, 34, 25, 12, 22, 11, 90]
        );
        assert_eq!(visualizer(SortAlgorithm::MergeSort).display().len(), 8);
    }

    #[test]
    fn test_invalid_input_keeps_array() {
        let mut v = visualizer(SortAlgorithm::QuickSort);
        assert_eq!(
            v.create_from_input("a, b"),
            Err(VisualizerError::EmptyArray)
        );
        assert_eq!(values(&v).len(), 7);

        v.create_from_input("3, x, 1").unwrap();
        assert_eq!(values(&v), vec![3, 1]);
    }

    #[test]
    fn test_start_plays_to_sorted() {
        let t0 = Instant::now();
        let mut v = visualizer(SortAlgorithm::MergeSort);
        v.start(t0).unwrap();
        assert!(v.is_playing());
        assert_eq!(v.start(t0), Err(VisualizerError::AlreadyRunning));

        let mut done = None;
        for i in 1..10_000u64 {
            if let Some(n) = v.tick(t0 + Duration::from_millis(600 * i)) {
                done = Some(n);
                break;
            }
        }
        assert_eq!(done.map(|n| n.title), Some("Sorting complete".to_string()));
        assert_eq!(values(&v), vec![11, 12, 22, 25, 34, 64, 88, 90]);
        assert!(v
            .display()
            .iter()
            .all(|e| e.state == ElementState::Sorted));
    }

    #[test]
    fn test_single_element_completes_on_start() {
        let t0 = Instant::now();
        let mut v = visualizer(SortAlgorithm::QuickSort);
        v.create_from_input("42").unwrap();

        let started = v.start(t0).unwrap();
        assert_eq!(started.title, "Sorting complete");
        assert_eq!(started.description, "Quick Sort finished in 1 step");
        assert!(!v.is_playing());
        assert_eq!(values(&v), vec![42]);
        assert!(v.tick(t0 + Duration::from_secs(5)).is_none());
    }

    #[test]
    fn test_scrub_requires_steps() {
        let mut v = visualizer(SortAlgorithm::QuickSort);
        assert_eq!(v.step_forward(), Err(VisualizerError::NoSteps));

        v.start(Instant::now()).unwrap();
        v.step_forward().unwrap();
        assert!(!v.is_playing());
        assert_eq!(v.current_step().map(|(pos, _, _)| pos), Some(1));
        v.step_backward().unwrap();
        assert!(v.step_backward().is_err());
    }

    #[test]
    fn test_reset_restores_unsorted_array() {
        let mut v = visualizer(SortAlgorithm::QuickSort);
        v.start(Instant::now()).unwrap();
        v.jump_to_end().unwrap();
        v.reset();
        assert!(!v.has_steps());
        assert_eq!(values(&v), vec![64, 34, 25, 12, 22, 11, 90]);
        assert!(v.display().iter().all(|e| e.state == ElementState::Normal));
    }

    #[test]
    fn test_randomize_is_seedable() {
        let mut a = visualizer(SortAlgorithm::QuickSort);
        let mut b = visualizer(SortAlgorithm::QuickSort);
        a.randomize(&mut StdRng::seed_from_u64(11));
        b.randomize(&mut StdRng::seed_from_u64(11));
        assert_eq!(values(&a), values(&b));
        assert_eq!(values(&a).len(), RANDOM_ARRAY_LEN);
        assert!(values(&a).iter().all(|v| (1..=100).contains(v)));
    }

    #[test]
    fn test_speed_is_clamped() {
        let mut v = visualizer(SortAlgorithm::QuickSort);
        v.set_speed(5000);
        assert_eq!(v.speed(), MAX_SPEED);
        v.slower();
        assert_eq!(v.speed(), MAX_SPEED - SPEED_STEP);
        v.set_speed(0);
        assert_eq!(v.speed(), MIN_SPEED);
    }
}
