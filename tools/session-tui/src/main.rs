//! Session TUI: terminal front-end for the session UI controller.
//!
//! Shows the login form while logged out and the polled session status
//! while logged in. The session cookie is kept in a file between runs, so
//! restarting with a still-valid session opens straight onto the status
//! screen.
//!
//! ## Usage
//!
//! ```bash
//! # Connect to localhost (default)
//! session-tui
//!
//! # Remote server, keep the session between runs
//! session-tui --base-url http://app.example.com:8080 --cookie-file ~/.session-ui/cookies
//!
//! # No server needed: in-memory demo (admin / password)
//! session-tui --demo
//! ```

mod app;
mod ui;

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use session_ui::{
    init_logging, ClientConfig, CookieFile, DocumentView, HttpSessionApi, LogConfig,
    MockSessionApi, SessionApi, SessionController,
};
use tracing::{error, info, warn};

use app::{Action, App};

/// Session UI terminal front-end
#[derive(Parser, Debug)]
#[command(name = "session-tui")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Server origin (overrides SESSION_UI_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// File that keeps the session cookie between runs (overrides SESSION_UI_COOKIE_FILE)
    #[arg(long)]
    cookie_file: Option<PathBuf>,

    /// Write logs to this file (overrides SESSION_UI_LOG_FILE)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Use an in-memory server instead of HTTP
    #[arg(long)]
    demo: bool,
}

/// The session backend picked at startup.
enum SessionBackend {
    Http {
        api: Arc<HttpSessionApi>,
        cookie_file: Option<CookieFile>,
    },
    Demo(Arc<MockSessionApi>),
}

impl SessionBackend {
    fn connect(args: &Args) -> Result<Self> {
        if args.demo {
            return Ok(SessionBackend::Demo(Arc::new(MockSessionApi::demo())));
        }

        let mut config = ClientConfig::from_env();
        if let Some(base_url) = &args.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(path) = &args.cookie_file {
            config.cookie_file = Some(path.clone());
        }

        let api = HttpSessionApi::new(&config).context("invalid client configuration")?;
        let cookie_file = config.cookie_file.map(CookieFile::new);

        if let Some(file) = &cookie_file {
            match file.load() {
                Ok(Some(jar)) => {
                    if let Err(e) = api.import_cookies(&jar) {
                        warn!(path = %file.path().display(), error = %e, "Ignoring unreadable cookie file");
                    }
                }
                Ok(None) => {}
                Err(e) => warn!(path = %file.path().display(), error = %e, "Could not read cookie file"),
            }
        }

        Ok(SessionBackend::Http {
            api: Arc::new(api),
            cookie_file,
        })
    }

    fn api(&self) -> Arc<dyn SessionApi> {
        match self {
            SessionBackend::Http { api, .. } => api.clone() as Arc<dyn SessionApi>,
            SessionBackend::Demo(api) => api.clone() as Arc<dyn SessionApi>,
        }
    }

    fn label(&self) -> String {
        match self {
            SessionBackend::Http { api, .. } => api.base_url().to_string(),
            SessionBackend::Demo(_) => "demo (in-memory)".to_string(),
        }
    }

    /// Persist the jar so the next run resumes the session.
    fn save_cookies(&self) {
        let SessionBackend::Http {
            api,
            cookie_file: Some(file),
        } = self
        else {
            return;
        };

        if let Err(e) = api
            .export_cookies()
            .and_then(|jar| file.save(jar.as_deref()))
        {
            warn!(path = %file.path().display(), error = %e, "Could not save cookie file");
        }
    }
}

/// Whether the server already considers us logged in.
async fn probe_logged_in(api: &dyn SessionApi) -> bool {
    match api.status().await {
        Ok(snapshot) => snapshot.authenticated,
        Err(e) => {
            warn!(error = %e, "Initial status probe failed, showing login");
            false
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut log_config = LogConfig::from_env();
    log_config.console_output = false;
    if let Some(path) = &args.log_file {
        log_config.log_file = Some(path.clone());
    }
    init_logging(&log_config)?;

    let backend = SessionBackend::connect(&args)?;
    let api = backend.api();

    let logged_in = probe_logged_in(api.as_ref()).await;
    info!(server = %backend.label(), logged_in, "Session TUI starting");

    let view = Arc::new(DocumentView::new(logged_in));
    let mut controller = SessionController::new(api, view.clone());
    controller.initialize();

    let mut app = App::new(view, backend.label());

    // Setup terminal with panic hook for cleanup
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run_app(&mut terminal, &mut app, &mut controller).await;

    controller.stop_refresh_loop();
    backend.save_cookies();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        error!(error = %e, "Session TUI exited with error");
        eprintln!("Error: {}", e);
    }

    info!("Session TUI stopped");
    Ok(())
}

/// Main application loop.
async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    controller: &mut SessionController<dyn SessionApi, DocumentView>,
) -> Result<()> {
    // Ticks render from their own tasks; a short poll keeps the screen current
    let poll_timeout = Duration::from_millis(100);

    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(poll_timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match app.handle_key(key) {
                        Action::Login => {
                            controller.login().await;
                        }
                        Action::Logout => {
                            if let Err(e) = controller.logout().await {
                                error!(error = %e, "Logout request failed");
                            }
                        }
                        Action::Quit | Action::None => {}
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
