use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io::stdout;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use scroller_menu::app::App;
use scroller_menu::config::{Config, parse_item_list};
use scroller_menu::log;
use scroller_menu::menu::{self, NotificationQueue};
use scroller_menu::tui;

/// Command line overrides
#[derive(Debug, Default)]
struct Args {
    items: Option<Vec<String>>,
    debug: Option<bool>,
    config: Option<PathBuf>,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = Args::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--items" | "-i" => {
                if i + 1 < args.len() {
                    parsed.items = Some(parse_item_list(&args[i + 1]));
                    i += 2;
                    continue;
                } else {
                    eprintln!("Warning: --items requires a comma separated list");
                }
            }
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    parsed.config = Some(PathBuf::from(&args[i + 1]));
                    i += 2;
                    continue;
                } else {
                    eprintln!("Warning: --config requires a path argument");
                }
            }
            "--debug" | "-d" => parsed.debug = Some(true),
            _ => {
                // Unknown flag, ignore
            }
        }
        i += 1;
    }

    parsed
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    let args = parse_args();
    let config = match &args.config {
        Some(path) => Config::from_path(path)?,
        None => Config::load(),
    }
    .with_overrides(args.items, args.debug);
    log::set_debug(config.debug);

    let (notifier, notifications) = menu::channel();
    let mut app = App::new(&config, notifier);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, notifications).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    mut notifications: NotificationQueue,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    loop {
        let size = terminal.size()?;
        let (menu_area, _) = tui::ui::split(Rect::new(0, 0, size.width, size.height));
        app.resize(menu_area);

        terminal.draw(|frame| tui::ui::render(frame, app))?;

        if app.should_quit {
            return Ok(());
        }

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        for action in app.handler.handle_event(&event, Instant::now()) {
                            app.apply(action);
                        }
                    }
                    Some(Err(e)) => log::log_error(&format!("Terminal event error: {}", e)),
                    None => return Ok(()),
                }
            }

            // Notifications posted while handling input land here, on a later turn
            Some(notification) = notifications.recv() => {
                notification.deliver(&mut *app);
            }

            // Timeout to keep long-press detection ticking
            _ = tokio::time::sleep(Duration::from_millis(80)) => {
                if let Some(action) = app.handler.tick(Instant::now()) {
                    app.apply(action);
                }
            }
        }
    }
}
