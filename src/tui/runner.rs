//! Dashboard runner — main loop that wires everything together.
//!
//! Creates the terminal, spawns the key reader, runs the TEA loop, and
//! restores the terminal whether or not the loop failed.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{info, warn};

use crate::config::SandboxConfig;
use crate::error::SandboxResult;
use crate::stream::Tick;

use super::app::SandboxApp;
use super::event::TuiMessage;
use super::layout;

type SandboxTerminal = Terminal<CrosstermBackend<Stdout>>;

/// How long the key reader blocks before re-checking for shutdown.
const INPUT_POLL: Duration = Duration::from_millis(100);

fn setup_terminal() -> SandboxResult<SandboxTerminal> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    Ok(Terminal::new(backend)?)
}

fn restore_terminal() -> SandboxResult<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Forward key presses from crossterm until the receiver goes away.
fn spawn_key_reader(tx: mpsc::UnboundedSender<TuiMessage>) {
    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            match event::poll(INPUT_POLL) {
                Ok(false) => continue,
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) => {
                        let _ = tx.send(TuiMessage::Input(key));
                    }
                    Ok(_) => {}
                    Err(e) => {
                        warn!("terminal read failed: {e}");
                        let _ = tx.send(TuiMessage::Quit);
                        break;
                    }
                },
                Err(e) => {
                    warn!("terminal poll failed: {e}");
                    let _ = tx.send(TuiMessage::Quit);
                    break;
                }
            }
        }
    });
}

async fn event_loop(
    terminal: &mut SandboxTerminal,
    app: &mut SandboxApp,
    tick_rx: &mut mpsc::UnboundedReceiver<Tick>,
    input_rx: &mut mpsc::UnboundedReceiver<TuiMessage>,
    frame: Duration,
) -> anyhow::Result<()> {
    let mut render_interval = interval(frame);
    render_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = render_interval.tick() => {
                terminal.draw(|f| layout::draw(f, app))?;
            }
            Some(tick) = tick_rx.recv() => {
                app.update(TuiMessage::Thought(tick));
            }
            msg = input_rx.recv() => match msg {
                Some(msg) => app.update(msg),
                // Reader is gone; nothing can drive the UI any more.
                None => app.should_quit = true,
            },
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

/// Run the dashboard. Blocks until quit.
pub async fn run_sandbox(config: &SandboxConfig) -> anyhow::Result<()> {
    let (tick_tx, mut tick_rx) = mpsc::unbounded_channel();
    let (input_tx, mut input_rx) = mpsc::unbounded_channel();
    let mut app = SandboxApp::new(config, tick_tx);

    let mut terminal = setup_terminal()?;
    spawn_key_reader(input_tx);
    info!(
        interval_ms = config.thought_interval_ms,
        fps = config.render_fps,
        "dashboard started"
    );

    let result = event_loop(
        &mut terminal,
        &mut app,
        &mut tick_rx,
        &mut input_rx,
        config.frame_interval(),
    )
    .await;

    // Stops the thought producer before the terminal is handed back.
    app.stream.pause();
    restore_terminal()?;
    info!(thoughts = app.stream.len(), "dashboard closed");
    result
}
