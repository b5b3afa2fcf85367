use std::ffi::c_int;
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use tracing::{info, warn};

use super::app::App;

/// How long each poll waits for input before the loop re-checks for a
/// shutdown signal.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Signals meaning the terminal (our window) is closing or the process is
/// being asked to stop.
#[cfg(unix)]
const SHUTDOWN_SIGNALS: &[c_int] = &[
    signal_hook::consts::SIGHUP,
    signal_hook::consts::SIGTERM,
    signal_hook::consts::SIGINT,
];
#[cfg(not(unix))]
const SHUTDOWN_SIGNALS: &[c_int] = &[signal_hook::consts::SIGTERM, signal_hook::consts::SIGINT];

/// Spin up the terminal backend, process input until the user quits or a
/// shutdown signal arrives, then flush the current board and close the store.
pub fn run_app(mut app: App) -> Result<()> {
    let shutdown = register_shutdown_signals()?;

    let mut stdout = io::stdout();
    enable_raw_mode().context("failed to enable raw mode")?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal backend")?;

    let result = event_loop(&mut terminal, &mut app, &shutdown, poll_event);

    let cleanup = cleanup_terminal(&mut terminal);
    let closed = app.close();
    // After a hangup there is no terminal left to restore.
    let cleanup = match cleanup {
        Err(err) if shutdown.load(Ordering::Relaxed) => {
            warn!(error = %err, "could not restore terminal after shutdown signal");
            Ok(())
        }
        other => other,
    };
    result.and(closed).and(cleanup)
}

/// Route SIGHUP/SIGTERM/SIGINT into a flag the event loop polls.
fn register_shutdown_signals() -> Result<Arc<AtomicBool>> {
    let flag = Arc::new(AtomicBool::new(false));
    for &signal in SHUTDOWN_SIGNALS {
        signal_hook::flag::register(signal, Arc::clone(&flag))
            .with_context(|| format!("failed to register handler for signal {signal}"))?;
    }
    Ok(flag)
}

fn poll_event() -> Result<Option<Event>> {
    if event::poll(POLL_INTERVAL).context("event polling failed")? {
        event::read().map(Some).context("failed to read event")
    } else {
        Ok(None)
    }
}

/// Draw, wait for the next event and dispatch it. Returns once the user quits
/// or `shutdown` is raised; the caller is responsible for saving.
fn event_loop<B, F>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    shutdown: &AtomicBool,
    mut next_event: F,
) -> Result<()>
where
    B: Backend,
    F: FnMut() -> Result<Option<Event>>,
{
    loop {
        if shutdown.load(Ordering::Relaxed) {
            info!("shutdown signal received");
            return Ok(());
        }

        terminal
            .draw(|frame| app.draw(frame))
            .context("failed to draw frame")?;

        let Some(event) = next_event()? else {
            continue;
        };

        match event {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                if key_event.modifiers.contains(KeyModifiers::CONTROL)
                    && key_event.code == KeyCode::Char('c')
                {
                    return Ok(());
                }
                if app.handle_key_event(key_event)? {
                    return Ok(());
                }
            }
            Event::Mouse(mouse_event) => app.handle_mouse(mouse_event)?,
            _ => {}
        }
    }
}

fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("failed to leave alternate screen")?;
    terminal
        .show_cursor()
        .context("failed to restore cursor visibility")
}
