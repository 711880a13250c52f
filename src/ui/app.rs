//! Main TUI application state and logic

use crate::compare::{
    self, complexity_table, Algorithm, Comparison, GrowthRow, Measurement, DATA_SIZES,
    GROWTH_SIZES,
};
use crate::config::Config;
use crate::errors::Result;
use crate::graph::TraversalAlgorithm;
use crate::notify::{Notification, NotificationLog};
use crate::sorting::SortAlgorithm;
use crate::structures::StructureKind;
use crate::ui::panes::{self, Badge};
use crate::ui::route::Route;
use crate::visualizer::{SortVisualizer, StructureVisualizer, TraversalVisualizer};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use rustc_hash::FxHashMap;
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

const HOME_HINTS: &[(&str, &str)] = &[("↑/↓", "select"), ("↵ / 1-4", "open"), ("q", "quit")];
const NOT_FOUND_HINTS: &[(&str, &str)] = &[("esc", "home"), ("q", "quit")];
const STRUCTURE_HINTS: &[(&str, &str)] = &[
    ("tab", "switch"),
    ("↵", "insert"),
    ("r", "remove"),
    ("p/k", "take/peek"),
    ("s", "search"),
    ("c", "clear"),
    ("x", "reset"),
    ("esc", "home"),
];
const SORT_HINTS: &[(&str, &str)] = &[
    ("tab", "switch"),
    ("↵", "create"),
    ("n", "random"),
    ("s", "start"),
    ("⎵", "play"),
    ("←/→", "step"),
    ("↑/↓", "speed"),
    ("x", "reset"),
    ("esc", "home"),
];
const SEARCH_HINTS: &[(&str, &str)] = &[
    ("tab", "switch"),
    ("↵", "run"),
    ("x", "reset"),
    ("esc", "home"),
];
const COMPARE_HINTS: &[(&str, &str)] = &[
    ("a/b", "algorithms"),
    ("z", "size"),
    ("↵", "compare"),
    ("esc", "home"),
];

/// Selections and results of the Compare view
#[derive(Debug)]
pub struct CompareState {
    pub first: Algorithm,
    pub second: Algorithm,
    pub size_index: usize,
    pub result: Option<Comparison>,
    pub growth: Vec<GrowthRow>,
    pub sort_growth: Vec<(usize, Vec<Measurement>)>,
}

impl CompareState {
    fn new((first, second): (Algorithm, Algorithm), seed: u64) -> Self {
        let sort_growth = compare::sort_growth(&GROWTH_SIZES, seed).unwrap_or_else(|err| {
            warn!(error = %err, "sort growth measurement failed");
            Vec::new()
        });
        CompareState {
            first,
            second,
            size_index: 0,
            result: None,
            growth: complexity_table(&GROWTH_SIZES),
            sort_growth,
        }
    }

    pub fn size(&self) -> usize {
        DATA_SIZES[self.size_index % DATA_SIZES.len()]
    }
}

/// The main application state
pub struct App {
    /// View on screen
    pub route: Route,

    pub config: Config,

    structures: Vec<StructureVisualizer>,
    structure_tab: usize,
    sorts: Vec<SortVisualizer>,
    sort_tab: usize,
    traversals: Vec<TraversalVisualizer>,
    traversal_tab: usize,
    compare: CompareState,

    /// Text of the input line
    pub input: String,

    /// Input kept per view and tab while another one is on screen
    drafts: FxHashMap<(Route, usize), String>,

    pub notifications: NotificationLog,

    /// Scroll offset of the notifications pane; `usize::MAX` follows the newest
    pub notification_scroll: usize,

    rng: StdRng,

    /// Selected card on the home view
    pub home_selection: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports an error
    pub status_is_error: bool,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(config: Config) -> Self {
        let now = Instant::now();
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let growth_seed = rng.gen();

        let structures = StructureKind::ALL
            .into_iter()
            .map(|kind| StructureVisualizer::new(kind, &config, now))
            .collect();
        let sorts = SortAlgorithm::ALL
            .into_iter()
            .map(|algorithm| SortVisualizer::new(algorithm, &config))
            .collect();
        let traversals = TraversalAlgorithm::ALL
            .into_iter()
            .map(|algorithm| TraversalVisualizer::new(algorithm, &config, now))
            .collect();

        let compare = CompareState::new(config.compare, growth_seed);
        let route = Route::from_path(&config.start_view);
        let mut app = App {
            route: Route::Home,
            config,
            structures,
            structure_tab: 0,
            sorts,
            sort_tab: 0,
            traversals,
            traversal_tab: 0,
            compare,
            input: String::new(),
            drafts: FxHashMap::default(),
            notifications: NotificationLog::default(),
            notification_scroll: usize::MAX,
            rng,
            home_selection: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            status_is_error: false,
            last_space_press: now.checked_sub(Duration::from_secs(1)).unwrap_or(now),
        };
        app.navigate(route);
        app
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.tick(Instant::now());

            // Use poll with timeout so animations keep advancing
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Advance every animation and report the ones that finished
    pub fn tick(&mut self, now: Instant) {
        let mut finished = Vec::new();
        finished.extend(self.sorts.iter_mut().filter_map(|v| v.tick(now)));
        finished.extend(self.traversals.iter_mut().filter_map(|v| v.tick(now)));
        finished.extend(self.structures.iter_mut().filter_map(|v| v.tick(now)));
        for notification in finished {
            self.notify(notification);
        }
    }

    fn notify(&mut self, notification: Notification) {
        self.status_message = format!("{}: {}", notification.title, notification.description);
        self.status_is_error = notification.is_error();
        self.notifications.push(notification);
        self.notification_scroll = usize::MAX;
    }

    fn report(&mut self, outcome: Result<Notification>) {
        match outcome {
            Ok(notification) => self.notify(notification),
            Err(err) => {
                debug!(error = %err, route = %self.route, "operation rejected");
                self.notify(Notification::from(err));
            }
        }
    }

    /// Switch views, keeping the current input as a draft
    pub fn navigate(&mut self, route: Route) {
        self.stash_input();
        if let Route::NotFound(path) = &route {
            warn!(path = %path, "unknown view");
        } else {
            info!(path = %route, "navigated");
        }
        self.status_message = route.title().to_string();
        self.status_is_error = false;
        self.route = route;
        self.restore_input();
    }

    fn current_tab(&self) -> usize {
        match self.route {
            Route::Structures => self.structure_tab,
            Route::Sorting => self.sort_tab,
            Route::Search => self.traversal_tab,
            _ => 0,
        }
    }

    fn stash_input(&mut self) {
        let key = (self.route.clone(), self.current_tab());
        self.drafts.insert(key, std::mem::take(&mut self.input));
    }

    fn restore_input(&mut self) {
        let key = (self.route.clone(), self.current_tab());
        self.input = match self.drafts.remove(&key) {
            Some(draft) => draft,
            None if self.route == Route::Sorting => self.sort().input_text(),
            None => String::new(),
        };
    }

    fn switch_tab(&mut self, forward: bool) {
        let count = match self.route {
            Route::Structures => self.structures.len(),
            Route::Sorting => self.sorts.len(),
            Route::Search => self.traversals.len(),
            _ => return,
        };
        self.stash_input();
        let current = self.current_tab();
        let next = if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        };
        match self.route {
            Route::Structures => self.structure_tab = next,
            Route::Sorting => self.sort_tab = next,
            Route::Search => self.traversal_tab = next,
            _ => {}
        }
        self.restore_input();
    }

    pub fn structure(&self) -> &StructureVisualizer {
        &self.structures[self.structure_tab]
    }

    pub fn sort(&self) -> &SortVisualizer {
        &self.sorts[self.sort_tab]
    }

    pub fn traversal(&self) -> &TraversalVisualizer {
        &self.traversals[self.traversal_tab]
    }

    pub fn compare_state(&self) -> &CompareState {
        &self.compare
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(7),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let view_area = main_chunks[0];
        match self.route.clone() {
            Route::Home => panes::render_home_pane(frame, view_area, self.home_selection),
            Route::NotFound(path) => panes::render_not_found_pane(frame, view_area, &path),
            Route::Compare => self.render_compare(frame, view_area),
            Route::Structures => self.render_structures(frame, view_area),
            Route::Sorting => self.render_sorting(frame, view_area),
            Route::Search => self.render_search(frame, view_area),
        }

        panes::render_notifications_pane(
            frame,
            main_chunks[1],
            &self.notifications,
            &mut self.notification_scroll,
        );

        self.render_status(frame, main_chunks[2]);
    }

    /// Tabs on top, the visualizer in the middle, the input line at the bottom
    fn topic_layout(area: Rect) -> std::rc::Rc<[Rect]> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(area)
    }

    fn render_structures(&self, frame: &mut Frame, area: Rect) {
        let chunks = Self::topic_layout(area);
        let labels: Vec<&str> = self.structures.iter().map(|v| v.kind().label()).collect();
        panes::render_tabs(frame, chunks[0], self.route.title(), &labels, self.structure_tab);

        let visualizer = self.structure();
        let items = visualizer.items();
        let layout = visualizer.tree_layout();
        panes::render_structure_pane(
            frame,
            chunks[1],
            &panes::StructureRenderData {
                kind: visualizer.kind(),
                items: &items,
                layout: layout.as_deref(),
                height: visualizer.tree_height(),
                highlight: visualizer.highlight(),
                found: visualizer.found(),
                is_running: visualizer.is_running(),
            },
        );
        panes::render_input_line(frame, chunks[2], "Value", &self.input, "type a number");
    }

    fn render_sorting(&self, frame: &mut Frame, area: Rect) {
        let chunks = Self::topic_layout(area);
        let labels: Vec<&str> = self.sorts.iter().map(|v| v.algorithm().label()).collect();
        panes::render_tabs(frame, chunks[0], self.route.title(), &labels, self.sort_tab);

        let visualizer = self.sort();
        panes::render_bars_pane(
            frame,
            chunks[1],
            &panes::SortRenderData {
                algorithm: visualizer.algorithm(),
                elements: visualizer.display(),
                step: visualizer.current_step(),
                speed: visualizer.speed(),
                is_playing: visualizer.is_playing(),
            },
        );
        panes::render_input_line(
            frame,
            chunks[2],
            "Array",
            &self.input,
            "comma-separated numbers, e.g. 5,3,8",
        );
    }

    fn render_search(&self, frame: &mut Frame, area: Rect) {
        let chunks = Self::topic_layout(area);
        let labels: Vec<&str> = self
            .traversals
            .iter()
            .map(|v| v.algorithm().label())
            .collect();
        panes::render_tabs(frame, chunks[0], self.route.title(), &labels, self.traversal_tab);

        let visualizer = self.traversal();
        panes::render_graph_pane(
            frame,
            chunks[1],
            &panes::GraphRenderData {
                algorithm: visualizer.algorithm(),
                graph: visualizer.graph(),
                frontier: visualizer.frontier(),
                order: visualizer.order(),
                outcome: visualizer.outcome(),
                is_running: visualizer.is_running(),
            },
        );
        let (label, hint) = if visualizer.algorithm().needs_target() {
            ("Start,End", "e.g. 0,5")
        } else {
            ("Start node", "0-5")
        };
        panes::render_input_line(frame, chunks[2], label, &self.input, hint);
    }

    fn render_compare(&self, frame: &mut Frame, area: Rect) {
        panes::render_compare_pane(
            frame,
            area,
            &panes::CompareRenderData {
                first: self.compare.first,
                second: self.compare.second,
                size: self.compare.size(),
                result: self.compare.result.as_ref(),
                growth: &self.compare.growth,
                sort_growth: &self.compare.sort_growth,
            },
        );
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let (hints, step, badge) = match self.route {
            Route::Home => (HOME_HINTS, None, None),
            Route::NotFound(_) => (NOT_FOUND_HINTS, None, None),
            Route::Compare => (COMPARE_HINTS, None, None),
            Route::Structures => (
                STRUCTURE_HINTS,
                None,
                self.structure().is_running().then_some(Badge::Running),
            ),
            Route::Search => (
                SEARCH_HINTS,
                None,
                self.traversal().is_running().then_some(Badge::Running),
            ),
            Route::Sorting => {
                let sort = self.sort();
                let step = sort.current_step();
                let badge = match step {
                    _ if sort.is_playing() => Some(Badge::Playing),
                    Some((position, total, _)) if position + 1 >= total => Some(Badge::End),
                    Some((0, _, _)) => Some(Badge::Start),
                    _ => None,
                };
                (SORT_HINTS, step.map(|(position, total, _)| (position, total)), badge)
            }
        };

        panes::render_status_bar(
            frame,
            area,
            &panes::StatusRenderData {
                path: self.route.path(),
                message: &self.status_message,
                step,
                is_error: self.status_is_error,
                badge,
                hints,
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                self.navigate(Route::Home);
                return;
            }
            KeyCode::PageUp => {
                let visible_end = self.notification_scroll.min(self.notifications.len());
                self.notification_scroll = visible_end.saturating_sub(1);
                return;
            }
            KeyCode::PageDown => {
                self.notification_scroll = self.notification_scroll.saturating_add(1);
                return;
            }
            KeyCode::Tab => {
                self.switch_tab(true);
                return;
            }
            KeyCode::BackTab => {
                self.switch_tab(false);
                return;
            }
            _ => {}
        }

        match self.route {
            Route::Home => self.handle_home_key(key.code),
            Route::Structures => self.handle_structure_key(key.code),
            Route::Sorting => self.handle_sort_key(key.code),
            Route::Search => self.handle_search_key(key.code),
            Route::Compare => self.handle_compare_key(key.code),
            Route::NotFound(_) => {}
        }
    }

    /// Edit the input line; returns false for keys that are not editing keys
    fn edit_input(&mut self, code: KeyCode, allow_space: bool) -> bool {
        match code {
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' || c == ',' => {
                self.input.push(c);
                true
            }
            KeyCode::Char(' ') if allow_space => {
                self.input.push(' ');
                true
            }
            KeyCode::Backspace => {
                self.input.pop();
                true
            }
            _ => false,
        }
    }

    fn handle_home_key(&mut self, code: KeyCode) {
        let count = Route::SECTIONS.len();
        match code {
            KeyCode::Up | KeyCode::Left => {
                self.home_selection = (self.home_selection + count - 1) % count;
            }
            KeyCode::Down | KeyCode::Right => {
                self.home_selection = (self.home_selection + 1) % count;
            }
            KeyCode::Enter => {
                let route = Route::SECTIONS[self.home_selection % count].clone();
                self.navigate(route);
            }
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                self.home_selection = index;
                self.navigate(Route::SECTIONS[index].clone());
            }
            _ => {}
        }
    }

    fn handle_structure_key(&mut self, code: KeyCode) {
        if self.edit_input(code, true) {
            return;
        }
        let now = Instant::now();
        let tab = self.structure_tab;
        let outcome = match code {
            KeyCode::Enter => self.structures[tab].insert(&self.input),
            KeyCode::Char('r') => self.structures[tab].remove(&self.input),
            KeyCode::Char('p') => self.structures[tab].take(),
            KeyCode::Char('k') => self.structures[tab].inspect(),
            KeyCode::Char('s') => self.structures[tab].search(&self.input, now),
            KeyCode::Char('c') => Ok(self.structures[tab].clear()),
            KeyCode::Char('x') => {
                self.structures[tab].reset();
                self.status_message = "Reset".to_string();
                self.status_is_error = false;
                return;
            }
            _ => return,
        };
        let clears_input = matches!(code, KeyCode::Enter | KeyCode::Char('r')) && outcome.is_ok();
        self.report(outcome);
        if clears_input {
            self.input.clear();
        }
    }

    fn handle_sort_key(&mut self, code: KeyCode) {
        if self.edit_input(code, false) {
            return;
        }
        let now = Instant::now();
        let tab = self.sort_tab;
        let outcome = match code {
            KeyCode::Enter => self.sorts[tab].create_from_input(&self.input),
            KeyCode::Char('n') => {
                let notification = self.sorts[tab].randomize(&mut self.rng);
                self.input = self.sorts[tab].input_text();
                Ok(notification)
            }
            KeyCode::Char('s') => self.sorts[tab].start(now),
            KeyCode::Char(' ') => {
                if now.duration_since(self.last_space_press) < Duration::from_millis(200) {
                    return;
                }
                self.last_space_press = now;
                match self.sorts[tab].toggle(now) {
                    Ok(()) => {
                        self.status_message = if self.sorts[tab].is_playing() {
                            "Playing...".to_string()
                        } else {
                            "Paused".to_string()
                        };
                        self.status_is_error = false;
                        return;
                    }
                    Err(err) => Err(err),
                }
            }
            KeyCode::Right => {
                self.scrub(SortVisualizer::step_forward, "Step forward");
                return;
            }
            KeyCode::Left => {
                self.scrub(SortVisualizer::step_backward, "Step back");
                return;
            }
            KeyCode::Home => {
                self.scrub(SortVisualizer::rewind_to_start, "Start");
                return;
            }
            KeyCode::End => {
                self.scrub(SortVisualizer::jump_to_end, "End");
                return;
            }
            KeyCode::Up => {
                self.sorts[tab].faster();
                self.status_message = format!("Speed {}", self.sorts[tab].speed());
                return;
            }
            KeyCode::Down => {
                self.sorts[tab].slower();
                self.status_message = format!("Speed {}", self.sorts[tab].speed());
                return;
            }
            KeyCode::Char('x') => {
                self.sorts[tab].reset();
                self.status_message = "Reset".to_string();
                self.status_is_error = false;
                return;
            }
            _ => return,
        };
        self.report(outcome);
    }

    /// Move the sort cursor; only failures become notifications
    fn scrub(&mut self, action: fn(&mut SortVisualizer) -> Result<()>, label: &str) {
        match action(&mut self.sorts[self.sort_tab]) {
            Ok(()) => {
                self.status_message = label.to_string();
                self.status_is_error = false;
            }
            Err(err) => self.report(Err(err)),
        }
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        if self.edit_input(code, true) {
            return;
        }
        let tab = self.traversal_tab;
        let outcome = match code {
            KeyCode::Enter => self.traversals[tab].run_input(&self.input, Instant::now()),
            KeyCode::Char('x') => {
                self.traversals[tab].reset();
                self.status_message = "Reset".to_string();
                self.status_is_error = false;
                return;
            }
            _ => return,
        };
        self.report(outcome);
    }

    fn handle_compare_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('a') => {
                self.compare.first = self.compare.first.next();
                self.compare.result = None;
            }
            KeyCode::Char('b') => {
                self.compare.second = self.compare.second.next();
                self.compare.result = None;
            }
            KeyCode::Char('z') => {
                self.compare.size_index = (self.compare.size_index + 1) % DATA_SIZES.len();
                self.compare.result = None;
            }
            KeyCode::Enter => {
                let seed = self.rng.gen();
                let outcome = compare::compare(
                    self.compare.first,
                    self.compare.second,
                    self.compare.size(),
                    seed,
                )
                .map(|comparison| {
                    let description = match comparison.winner() {
                        Some(winner) => format!(
                            "{winner} used fewer operations on {} elements",
                            comparison.size
                        ),
                        None => format!("Both used the same operations on {} elements", comparison.size),
                    };
                    self.compare.result = Some(comparison);
                    Notification::info("Comparison complete", description)
                });
                self.report(outcome);
            }
            _ => {}
        }
    }
}
