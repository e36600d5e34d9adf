//! SandboxApp — the TEA model.
//!
//! All state lives here. Update receives TuiMessages and mutates state.
//! The layout module reads it to draw frames. No side effects in view.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::config::SandboxConfig;
use crate::patterns::{generate_patterns, Pattern};
use crate::stream::{RunState, ThoughtStream, Tick};

use super::event::TuiMessage;

/// Which panel is visible. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Patterns, // 1
    Recognition, // 2
    Thoughts, // 3
}

impl ActiveView {
    pub const ALL: [ActiveView; 3] = [
        ActiveView::Patterns,
        ActiveView::Recognition,
        ActiveView::Thoughts,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ActiveView::Patterns => "Pattern Generation",
            ActiveView::Recognition => "Recognition Tests",
            ActiveView::Thoughts => "Thought Stream",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            ActiveView::Patterns => ActiveView::Recognition,
            ActiveView::Recognition => ActiveView::Thoughts,
            ActiveView::Thoughts => ActiveView::Patterns,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            ActiveView::Patterns => ActiveView::Thoughts,
            ActiveView::Recognition => ActiveView::Patterns,
            ActiveView::Thoughts => ActiveView::Recognition,
        }
    }
}

/// The main dashboard state (TEA model).
pub struct SandboxApp {
    /// Which panel is currently visible.
    pub view: ActiveView,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Patterns currently on screen.
    pub patterns: Vec<Pattern>,
    /// Regenerate presses plus generated thoughts.
    pub generation_count: u64,
    /// The thought-stream generator. Dropped with the app, which stops its timer.
    pub stream: ThoughtStream,
    /// Index of the first visible line in the thought list.
    pub thought_scroll: usize,
    /// When true, keep the newest thought in view.
    pub thought_auto_scroll: bool,
    /// Viewport height of the thought list (set by renderer).
    pub thought_viewport_height: usize,
    rng: StdRng,
}

impl SandboxApp {
    /// Create the app. Thought ticks will be delivered on `tick_tx`.
    pub fn new(config: &SandboxConfig, tick_tx: mpsc::UnboundedSender<Tick>) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let patterns = generate_patterns(&mut rng);
        Self {
            view: ActiveView::default(),
            should_quit: false,
            patterns,
            generation_count: 0,
            stream: ThoughtStream::new(config.thought_interval(), tick_tx),
            thought_scroll: 0,
            thought_auto_scroll: true,
            thought_viewport_height: 10, // sensible default, updated by renderer
            rng,
        }
    }

    /// Handle a message (TEA update).
    pub fn update(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::Input(key) => {
                super::input::handle_key(self, key);
            }
            TuiMessage::Thought(tick) => {
                if self.stream.on_tick(tick).is_some() {
                    self.generation_count += 1;
                }
            }
            TuiMessage::Quit => {
                self.should_quit = true;
            }
        }
    }

    /// Show a panel. Entering the pattern panel samples fresh patterns.
    pub fn select_view(&mut self, view: ActiveView) {
        if view == self.view {
            return;
        }
        debug!(from = self.view.label(), to = view.label(), "view changed");
        if view == ActiveView::Patterns {
            self.patterns = generate_patterns(&mut self.rng);
        }
        self.view = view;
    }

    /// The "Generate New Patterns" control.
    pub fn regenerate(&mut self) {
        self.patterns = generate_patterns(&mut self.rng);
        self.generation_count += 1;
        debug!(generation = self.generation_count, "patterns regenerated");
    }

    /// The start/pause control.
    pub fn toggle_stream(&mut self) -> RunState {
        let state = self.stream.toggle();
        info!(?state, "thought generation toggled");
        state
    }

    /// Total lines in the thought list (seeds + generated).
    pub fn thought_line_count(&self) -> usize {
        self.stream.line_count()
    }

    fn max_thought_scroll(&self) -> usize {
        self.thought_line_count()
            .saturating_sub(self.thought_viewport_height)
    }

    pub fn scroll_up(&mut self) {
        if self.thought_auto_scroll {
            self.thought_scroll = self.max_thought_scroll();
            self.thought_auto_scroll = false;
        }
        self.thought_scroll = self.thought_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.thought_auto_scroll {
            return;
        }
        let max = self.max_thought_scroll();
        self.thought_scroll = (self.thought_scroll + 1).min(max);
        if self.thought_scroll >= max {
            self.thought_auto_scroll = true;
        }
    }

    /// Jump back to following the newest thought.
    pub fn scroll_to_bottom(&mut self) {
        self.thought_auto_scroll = true;
    }

    /// First line to draw, honouring auto-scroll.
    pub fn effective_thought_scroll(&self) -> usize {
        if self.thought_auto_scroll {
            self.max_thought_scroll()
        } else {
            self.thought_scroll.min(self.max_thought_scroll())
        }
    }
}
