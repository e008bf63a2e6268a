//! SQL-Flow TUI entry point.

use std::io;

use color_eyre::{eyre::WrapErr, Result};
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use sqlflow::adapters::ReqwestHttpClient;
use sqlflow::app::{spawn_health_monitor, App, AppMessage};
use sqlflow::cli::{parse_args, CliCommand};
use sqlflow::config::Config;
use sqlflow::domain::BackendStatus;
use sqlflow::health::{display_probe_result, HealthClient};
use sqlflow::theme::ThemeStore;
use sqlflow::{storage, terminal, ui};

fn main() -> Result<()> {
    color_eyre::install()?;

    match parse_args(std::env::args()) {
        CliCommand::Version => {
            println!("sqlflow {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        CliCommand::Health => run_health_command(),
        CliCommand::RunTui => run_tui(),
    }
}

/// One-shot health probe for operators: print the breakdown, exit 0 only
/// when the backend is fully connected.
fn run_health_command() -> Result<()> {
    let config = Config::from_env();
    let runtime = tokio::runtime::Runtime::new().wrap_err("Failed to start async runtime")?;

    let result = runtime.block_on(async {
        let client = HealthClient::new(
            config.api_base_url.clone(),
            ReqwestHttpClient::new(),
            config.probe_timeout,
        );
        client.probe().await
    });

    println!("Probing {} ...", config.api_base_url);
    display_probe_result(&result);

    if result.outcome.status == BackendStatus::Connected {
        Ok(())
    } else {
        std::process::exit(1);
    }
}

fn run_tui() -> Result<()> {
    init_logging();

    let config = Config::from_env();
    let theme = ThemeStore::init(storage::theme_path().ok());
    let mut app = App::new(config, theme);

    let runtime = tokio::runtime::Runtime::new().wrap_err("Failed to start async runtime")?;
    let _guard = runtime.enter();

    terminal::install_panic_hook();
    let mut stdout = io::stdout();
    terminal::enter_tui_mode(&mut stdout).wrap_err("Failed to enter TUI mode")?;

    let backend = CrosstermBackend::new(stdout);
    let mut term = Terminal::new(backend).wrap_err("Failed to build terminal")?;

    if let Ok(size) = term.size() {
        app.update_terminal_dimensions(size.width, size.height);
    }

    spawn_health_monitor(
        std::sync::Arc::clone(&app.health),
        app.message_tx.clone(),
        app.config.poll_interval,
    );

    let result = runtime.block_on(run_app(&mut term, &mut app));

    let mut stdout = io::stdout();
    terminal::leave_tui_mode(&mut stdout);
    result
}

/// File-backed logging so the alternate screen stays clean.
fn init_logging() {
    let Ok(path) = storage::log_path() else {
        return;
    };
    let Ok(file) = std::fs::OpenOptions::new().create(true).append(true).open(path) else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init();
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, &mut *app);
            })?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(std::time::Duration::from_millis(16));

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                if let Some(Ok(event)) = event_result {
                    match event {
                        Event::Resize(width, height) => {
                            app.update_terminal_dimensions(width, height);
                        }
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            app.handle_key(key);
                        }
                        Event::Mouse(mouse) => {
                            app.handle_mouse(mouse);
                        }
                        _ => {}
                    }
                }
            }

            message = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(message) = message {
                    app.handle_message(message);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
