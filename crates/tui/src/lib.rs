pub mod app;
pub mod async_ops;
pub mod config;
pub mod theme;
pub mod ui;
pub mod views;

use anyhow::Result;
use app::App;
use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use std::io::stdout;
use std::sync::mpsc;
use std::time::{Duration, Instant};

/// Launch the shell.
pub fn run() -> Result<()> {
    let shell_config = config::load_shell_config();
    if let Err(e) = config::ensure_shell_config_file(&shell_config) {
        tracing::warn!(error = %e, "could not write default config file");
    }
    let mut app = App::new(shell_config);

    // Populate the guest feed before the first frame
    app.begin_feed_load();

    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    let (tx, result_rx) = mpsc::channel::<async_ops::CommandResult>();

    loop {
        // ── Drain finished background commands ───────────────────────
        while let Ok(result) = result_rx.try_recv() {
            app.apply_command_result(result);
        }

        // ── Fire the delayed post-session-change reload ──────────────
        if app.take_due_reload(Instant::now()) {
            app.begin_feed_load();
        }

        // ── Spawn pending async command without blocking the UI ──────
        if let Some(cmd) = app.pending_command.take() {
            let backend = app.config.backend.clone();
            let tx = tx.clone();
            rt.spawn(async move {
                let result = async_ops::execute(cmd, &backend).await;
                let _ = tx.send(result);
            });
        }

        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if app.handle_key(key.code) {
                    break;
                }
            }
        }
    }

    Ok(())
}
