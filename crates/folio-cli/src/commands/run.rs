use std::io;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use folio_core::{AppConfig, ContentRegistry};
use folio_tui::{
    app::{App, Mode},
    assets::spawn_image_load,
    event::{AppEvent, EventHandler, ImageLoadResult},
    input::handle_key_event,
    keymap::Keymap,
    widgets::{CertificateModalWidget, HelpWidget, NavbarWidget, PageWidget, StatusBarWidget},
};

pub async fn run(config: Arc<AppConfig>) -> Result<()> {
    let content = ContentRegistry::load_or_builtin(config.content_file().as_deref())
        .context("failed to load page content")?;
    let keymap = Keymap::from_config(&config.keymap);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if config.ui.mouse {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle(&content.profile.brand))?;
    } else {
        execute!(stdout, EnterAlternateScreen, SetTitle(&content.profile.brand))?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.clone(), content);
    tracing::info!("Page started");

    let result = event_loop(&mut terminal, &mut app, &keymap).await;

    app.teardown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    keymap: &Keymap,
) -> Result<()> {
    let event_handler = EventHandler::from_config(&app.config.ui);

    // Create channel for async image loading results
    let (img_tx, mut img_rx) = mpsc::unbounded_channel::<ImageLoadResult>();

    // Checked at the end of each iteration to pick the next poll timeout
    let mut needs_fast_update = false;

    loop {
        // Process any completed image loads (non-blocking)
        while let Ok(result) = img_rx.try_recv() {
            app.apply_image(result);
        }

        let now = Instant::now();
        app.tick(now);

        for (asset, path) in app.assets_to_load() {
            spawn_image_load(asset, path, img_tx.clone());
        }

        for url in app.take_external_opens() {
            if let Err(e) = open::that(url.as_str()) {
                tracing::warn!(%url, error = %e, "Failed to open link");
                app.status_message = Some(format!("Failed to open link: {}", e));
            }
        }

        terminal.draw(|frame| {
            let size = frame.area();
            app.layout(size, now);
            let app: &App = app;

            let [navbar, page, status] = App::split(size);
            PageWidget::render(frame, page, app);
            NavbarWidget::render(frame, navbar, app);
            StatusBarWidget::render(frame, status, app);

            if let Some(cert) = app.modal.active().and_then(|&id| app.content.certificate(id)) {
                CertificateModalWidget::render(frame, size, cert, app);
            }
            if app.mode == Mode::Help {
                HelpWidget::render(frame, size, app);
            }
        })?;

        // Use the animation frame rate while something is moving
        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            let now = Instant::now();
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, app, keymap);
                    app.handle_action(action, now);
                }
                AppEvent::Mouse(mouse) => {
                    if app.config.ui.mouse {
                        app.handle_mouse(mouse, now);
                    }
                }
                // Layout is recomputed on every draw
                AppEvent::Resize(_, _) | AppEvent::Tick => {}
            }
        }

        needs_fast_update = app.needs_fast_update(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
