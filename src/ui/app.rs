//! Main TUI application state and logic

use crate::algorithm::{Algorithm, Family, StartParams};
use crate::config::Config;
use crate::errors::PlaybackError;
use crate::playback::{PlaybackCursor, PlaybackState};
use crate::structures::{Generator, NodeId, Structure};
use crate::trace::Step;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Longest wait for input before the loop redraws
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Space presses closer together than this are ignored (key repeat)
const SPACE_DEBOUNCE: Duration = Duration::from_millis(200);

/// Speed change per `+`/`-` press
const SPEED_STEP: i16 = 5;

/// The main application state
pub struct App {
    pub config: Config,

    generator: Generator,

    /// Selected algorithm; its family decides which structure is shown
    pub algorithm: Algorithm,

    /// Structure the next run is computed on
    pub structure: Structure,

    /// Start node for traversals (None = first node / root)
    pub start: Option<NodeId>,

    pub cursor: PlaybackCursor,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports a failure
    pub is_error: bool,

    /// Last time space was pressed (for debouncing)
    last_space_press: Instant,
}

impl App {
    /// Create the app and generate the first structure for `algorithm`
    pub fn new(config: Config, algorithm: Algorithm, start: Option<NodeId>) -> Self {
        let mut generator = Generator::new(config.seed);
        let structure = generator.structure(algorithm.family(), &config);
        let cursor = PlaybackCursor::new(config.delay_for(algorithm));
        let now = Instant::now();

        App {
            config,
            generator,
            algorithm,
            structure,
            start,
            cursor,
            should_quit: false,
            status_message: String::from("Press space to start"),
            is_error: false,
            last_space_press: now.checked_sub(Duration::from_secs(1)).unwrap_or(now),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            let now = Instant::now();
            if self.cursor.tick(now) && self.cursor.is_at_end() {
                self.set_status("Playback complete");
            }

            // Wake up in time for the next tick, but keep polling input
            let timeout = self
                .cursor
                .next_tick_in(now)
                .map_or(POLL_INTERVAL, |d| d.min(POLL_INTERVAL));

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key, Instant::now());
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        // Structure (left) | Info (right)
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(main_chunks[0]);

        let step = self.cursor.current();
        self.render_structure(frame, columns[0], step);

        super::panes::render_info_pane(
            frame,
            columns[1],
            super::panes::InfoRenderData {
                algorithm: self.algorithm,
                structure: &self.structure,
                start: self.start,
                step,
                delay_ms: self.cursor.delay().as_millis(),
            },
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            super::panes::StatusRenderData {
                message: &self.status_message,
                current_step: self.cursor.position(),
                total_steps: self.cursor.len(),
                state: self.cursor.state(),
                is_error: self.is_error,
            },
        );
    }

    fn render_structure(&self, frame: &mut Frame, area: Rect, step: Option<&Step>) {
        match &self.structure {
            Structure::Array(values) => super::panes::render_array_pane(
                frame,
                area,
                values,
                step.and_then(Step::as_sort),
            ),
            Structure::Graph(graph) => super::panes::render_graph_pane(
                frame,
                area,
                graph,
                step.and_then(Step::as_traversal),
            ),
            Structure::Tree(tree) => super::panes::render_tree_pane(
                frame,
                area,
                tree,
                step.and_then(Step::as_traversal),
            ),
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => {
                // 200ms debounce to prevent key repeat spam
                if now.duration_since(self.last_space_press) >= SPACE_DEBOUNCE {
                    self.last_space_press = now;
                    self.toggle_play(now);
                }
            }
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char('s') => self.reshuffle(now),
            KeyCode::Char('a') => self.select_algorithm(self.algorithm.next(), now),
            KeyCode::Char('A') => self.select_algorithm(self.algorithm.prev(), now),
            KeyCode::Char('n') => self.cycle_start(),
            KeyCode::Char('+') | KeyCode::Char('=') => self.adjust_speed(SPEED_STEP, now),
            KeyCode::Char('-') => self.adjust_speed(-SPEED_STEP, now),
            KeyCode::Char(']') => self.adjust_array_size(1, now),
            KeyCode::Char('[') => self.adjust_array_size(-1, now),
            KeyCode::Right => {
                self.ensure_loaded(now);
                let res = self.cursor.step_forward();
                self.report(res, "Stepped forward");
            }
            KeyCode::Left => {
                self.ensure_loaded(now);
                let res = self.cursor.step_backward();
                self.report(res, "Stepped backward");
            }
            KeyCode::Enter => {
                self.ensure_loaded(now);
                let res = self.cursor.jump_to_end();
                self.report(res, "Jumped to end");
            }
            KeyCode::Backspace => {
                self.ensure_loaded(now);
                let res = self.cursor.jump_to_start();
                self.report(res, "Jumped to start");
            }
            _ => {}
        }
    }

    /// Pause a running playback, resume a paused one, or start a new run
    /// when nothing is loaded or the last run has finished
    pub fn toggle_play(&mut self, now: Instant) {
        match self.cursor.state() {
            PlaybackState::Playing => {
                self.cursor.pause();
                self.set_status("Paused");
            }
            PlaybackState::Paused if !self.cursor.is_at_end() => {
                let res = self.cursor.resume(now);
                self.report(res, "Playing...");
            }
            _ => {
                if self.load_run(now) {
                    if self.cursor.is_playing() {
                        self.set_status("Playing...");
                    } else {
                        self.set_status("Nothing to animate");
                    }
                }
            }
        }
    }

    /// Rewind the current run to its first step
    pub fn reset(&mut self) {
        self.cursor.reset();
        self.set_status("Reset");
    }

    /// Generate a fresh structure of the current family
    pub fn reshuffle(&mut self, now: Instant) {
        self.cursor.stop();
        self.regenerate();
        self.cursor.set_delay(self.config.delay_for(self.algorithm), now);
        let family = self.algorithm.family();
        self.set_status(format!("New {} generated", family));
    }

    /// Switch algorithm; a different family gets a new structure
    pub fn select_algorithm(&mut self, algorithm: Algorithm, now: Instant) {
        self.cursor.stop();
        let family_changed = algorithm.family() != self.algorithm.family();
        self.algorithm = algorithm;
        if family_changed {
            self.regenerate();
        }
        self.cursor.set_delay(self.config.delay_for(algorithm), now);
        info!(%algorithm, family_changed, "algorithm selected");
        self.set_status(algorithm.info().name);
    }

    /// Move the traversal start to the next node
    pub fn cycle_start(&mut self) {
        if self.algorithm.family() == Family::Sorting {
            self.set_status("Sorting has no start node");
            return;
        }
        let ids = self.structure.node_ids();
        let Some(&first) = ids.first() else {
            self.set_status("Structure is empty");
            return;
        };

        let current = self.start.unwrap_or(first);
        let position = ids.iter().position(|&id| id == current).unwrap_or(0);
        let next = ids[(position + 1) % ids.len()];

        self.cursor.stop();
        self.start = Some(next);
        let label = self
            .structure
            .node_value(next)
            .map_or_else(|| next.to_string(), |v| v.to_string());
        self.set_status(format!("Start node: {}", label));
    }

    /// Change the sorting speed and reschedule any pending tick
    pub fn adjust_speed(&mut self, delta: i16, now: Instant) {
        self.config.adjust_speed(delta);
        let delay = self.config.delay_for(self.algorithm);
        self.cursor.set_delay(delay, now);
        self.set_status(format!(
            "Speed {} ({} ms)",
            self.config.playback.speed,
            delay.as_millis()
        ));
    }

    /// Resize the array; a sorting view gets a fresh array of the new size
    pub fn adjust_array_size(&mut self, delta: isize, now: Instant) {
        self.config.adjust_array_size(delta);
        let size = self.config.array.size;
        if self.algorithm.family() == Family::Sorting {
            self.cursor.stop();
            self.regenerate();
            self.cursor.set_delay(self.config.delay_for(self.algorithm), now);
        }
        self.set_status(format!("Array size {}", size));
    }

    /// Compute a run on the current structure and hand it to the cursor
    fn load_run(&mut self, now: Instant) -> bool {
        self.cursor.stop();
        let params = StartParams { start: self.start };
        match self
            .algorithm
            .trace(&self.structure, params, self.config.step_limit)
        {
            Ok(trace) => {
                debug!(algorithm = %trace.algorithm(), steps = trace.len(), "run loaded");
                let res = self.cursor.start(trace, now);
                if let Err(e) = res {
                    self.set_error(e.to_string());
                    return false;
                }
                true
            }
            Err(e) => {
                warn!(error = %e, "could not compute run");
                self.set_error(e.to_string());
                false
            }
        }
    }

    /// Manual navigation before the first run computes one, paused
    fn ensure_loaded(&mut self, now: Instant) {
        if self.cursor.trace().is_none() && self.load_run(now) {
            self.cursor.pause();
        }
    }

    fn regenerate(&mut self) {
        self.structure = self
            .generator
            .structure(self.algorithm.family(), &self.config);
        self.start = None;
    }

    fn report(&mut self, res: Result<(), PlaybackError>, ok: &str) {
        match res {
            Ok(()) => self.set_status(ok),
            Err(e) => self.set_error(e.to_string()),
        }
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.is_error = false;
    }

    fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.is_error = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn app(algorithm: Algorithm) -> App {
        let config = Config {
            seed: Some(11),
            ..Config::default()
        };
        App::new(config, algorithm, None)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_space_starts_and_pauses() {
        let mut app = app(Algorithm::Bubble);
        let now = Instant::now();

        app.handle_key_event(key(KeyCode::Char(' ')), now);
        assert!(app.cursor.is_playing());
        assert!(app.cursor.len() > 1);

        app.handle_key_event(key(KeyCode::Char(' ')), now + Duration::from_secs(1));
        assert_eq!(app.cursor.state(), PlaybackState::Paused);
    }

    #[test]
    fn test_space_debounce() {
        let mut app = app(Algorithm::Bubble);
        let now = Instant::now();

        app.handle_key_event(key(KeyCode::Char(' ')), now);
        app.handle_key_event(key(KeyCode::Char(' ')), now + Duration::from_millis(50));
        assert!(app.cursor.is_playing());
    }

    #[test]
    fn test_space_after_finish_restarts() {
        let mut app = app(Algorithm::Merge);
        let now = Instant::now();

        app.toggle_play(now);
        app.cursor.jump_to_end().unwrap();
        assert!(app.cursor.is_at_end());

        app.toggle_play(now);
        assert!(app.cursor.is_playing());
        assert_eq!(app.cursor.position(), 0);
    }

    #[test]
    fn test_algorithm_switch_regenerates_on_family_change() {
        let mut app = app(Algorithm::Bubble);
        let now = Instant::now();

        app.select_algorithm(Algorithm::Quick, now);
        assert_eq!(app.structure.family(), Family::Sorting);

        app.handle_key_event(key(KeyCode::Char('A')), now);
        app.handle_key_event(key(KeyCode::Char('A')), now);
        assert_eq!(app.algorithm, Algorithm::TreeBfs);
        assert_eq!(app.structure.family(), Family::Tree);
        assert_eq!(app.cursor.delay(), Duration::from_millis(800));
    }

    #[test]
    fn test_algorithm_switch_stops_playback() {
        let mut app = app(Algorithm::GraphBfs);
        let now = Instant::now();

        app.toggle_play(now);
        assert!(app.cursor.is_playing());

        app.select_algorithm(Algorithm::GraphDfs, now);
        assert_eq!(app.cursor.state(), PlaybackState::Idle);
        assert!(app.cursor.trace().is_none());
    }

    #[test]
    fn test_cycle_start_wraps() {
        let mut app = app(Algorithm::GraphBfs);
        let count = app.structure.node_ids().len();

        app.cycle_start();
        assert_eq!(app.start, Some(NodeId(1)));
        for _ in 1..count {
            app.cycle_start();
        }
        assert_eq!(app.start, Some(NodeId(0)));
    }

    #[test]
    fn test_cycle_start_ignored_for_sorting() {
        let mut app = app(Algorithm::Bubble);
        app.cycle_start();
        assert_eq!(app.start, None);
    }

    #[test]
    fn test_step_without_run_loads_one() {
        let mut app = app(Algorithm::InOrder);
        let now = Instant::now();

        app.handle_key_event(key(KeyCode::Right), now);
        assert_eq!(app.cursor.state(), PlaybackState::Paused);
        assert_eq!(app.cursor.position(), 1);

        app.handle_key_event(key(KeyCode::Enter), now);
        assert!(app.cursor.is_at_end());

        app.handle_key_event(key(KeyCode::Right), now);
        assert!(app.is_error);
    }

    #[test]
    fn test_speed_keys_change_sort_delay() {
        let mut app = app(Algorithm::Bubble);
        let now = Instant::now();

        app.handle_key_event(key(KeyCode::Char('+')), now);
        assert_eq!(app.config.playback.speed, 55);
        assert_eq!(app.cursor.delay(), Duration::from_millis(46));

        app.handle_key_event(key(KeyCode::Char('-')), now);
        app.handle_key_event(key(KeyCode::Char('-')), now);
        assert_eq!(app.cursor.delay(), Duration::from_millis(56));
    }

    #[test]
    fn test_size_keys_regenerate_array() {
        let mut app = app(Algorithm::Quick);
        let now = Instant::now();
        app.toggle_play(now);

        app.handle_key_event(key(KeyCode::Char(']')), now);
        assert_eq!(app.config.array.size, 21);
        assert!(matches!(&app.structure, Structure::Array(v) if v.len() == 21));
        assert_eq!(app.cursor.state(), PlaybackState::Idle);

        for _ in 0..30 {
            app.handle_key_event(key(KeyCode::Char('[')), now);
        }
        assert!(matches!(&app.structure, Structure::Array(v) if v.len() == 5));
    }

    #[test]
    fn test_size_keys_keep_tree() {
        let mut app = app(Algorithm::InOrder);
        let before = app.structure.clone();
        app.handle_key_event(key(KeyCode::Char('[')), Instant::now());
        assert_eq!(app.config.array.size, 19);
        assert_eq!(app.structure, before);
    }

    #[test]
    fn test_reshuffle_keeps_family() {
        let mut app = app(Algorithm::PreOrder);
        app.start = Some(NodeId(2));
        app.reshuffle(Instant::now());
        assert_eq!(app.structure.family(), Family::Tree);
        assert_eq!(app.start, None);
    }

    #[test]
    fn test_quit() {
        let mut app = app(Algorithm::Bubble);
        app.handle_key_event(key(KeyCode::Char('q')), Instant::now());
        assert!(app.should_quit);
    }
}
