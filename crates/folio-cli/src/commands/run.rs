use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tracing::info;

use folio_core::{AppConfig, Portfolio};
use folio_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event},
    load_theme,
    widgets::{NavBarWidget, OverlayWidget, PageWidget, StatusBarWidget},
};

pub fn run(config: Arc<AppConfig>, portfolio_path: Option<PathBuf>) -> Result<()> {
    // Resolve the document: CLI flag, configured path, then built-in sample
    let portfolio = match portfolio_path.or_else(|| config.general.portfolio_path.clone()) {
        Some(path) => Portfolio::load(&path)
            .with_context(|| format!("failed to load portfolio from {}", path.display()))?,
        None => Portfolio::sample(),
    };
    info!(title = %portfolio.title, "starting viewer");

    // Setup terminal; mouse capture drives the pointer effects
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle(portfolio.title.clone())
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Load theme from config
    let theme = load_theme(&config.ui.theme);

    let mut app = App::new(portfolio, config.clone(), theme);

    // Event handler with a fast path for animation frames
    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.motion.animation_fps);

    // Checked at the END of each iteration to pick the NEXT tick rate
    let mut needs_fast_update = true;

    // Main loop
    loop {
        let now = Instant::now();
        app.on_tick(now);

        // Draw UI
        terminal.draw(|frame| {
            let size = frame.area();
            app.hit_rects.clear();

            // The nav bar hands its row back to the page while hidden
            let nav_height = if config.ui.nav_bar && !app.nav.hidden { 1 } else { 0 };
            let status_height = if config.ui.status_bar { 1 } else { 0 };

            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(nav_height),
                    Constraint::Min(1),
                    Constraint::Length(status_height),
                ])
                .split(size);

            PageWidget::render(frame, rows[1], &mut app, now);
            if nav_height > 0 {
                NavBarWidget::render(frame, rows[0], &mut app);
            }
            if status_height > 0 {
                StatusBarWidget::render(frame, rows[2], &app);
            }
            OverlayWidget::render(frame, size, &app, now);
        })?;

        // Handle events (faster tick rate while animations run)
        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app);
                    app.on_action(action, Instant::now());
                }
                AppEvent::Mouse(mouse) => {
                    let action = handle_mouse_event(mouse);
                    app.on_action(action, Instant::now());
                }
                AppEvent::Resize(_, _) => {
                    // Geometry is recomputed on the next draw
                }
                AppEvent::Tick => {}
            }
        }

        // Update fast update flag for next iteration
        needs_fast_update = app.needs_fast_update(Instant::now());

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
