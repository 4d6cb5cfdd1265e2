use kizuna::adapters::{FileSession, InMemorySession, ReqwestHttpClient};
use kizuna::app::{App, AppMessage};
use kizuna::config::KizunaConfig;
use kizuna::i18n::I18n;
use kizuna::input::{Command, CommandRegistry};
use kizuna::telemetry::init_tracing;
use kizuna::terminal::{setup_panic_hook, TerminalManager};
use kizuna::traits::SessionProvider;
use kizuna::translation::{GeminiTranslator, Translator};
use kizuna::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{info, warn};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Redraw cadence while something on screen animates.
const TICK: Duration = Duration::from_millis(16);

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

fn main() -> Result<()> {
    color_eyre::install()?;

    let config = KizunaConfig::from_env()?;
    let log_path = init_tracing(None);

    // Restores the terminal if a panic unwinds past the manager
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    info!(version = VERSION, locale = config.locale.code(), log = ?log_path, "starting");

    let session = session_provider(&config);
    let http = ReqwestHttpClient::with_timeout(HTTP_TIMEOUT)?;
    let translator: Arc<dyn Translator> = Arc::new(
        GeminiTranslator::new(http, config.api_key.clone())
            .with_model(config.translate_model.clone())
            .with_base_url(config.translate_url.clone()),
    );
    if config.api_key.is_none() {
        warn!("no translation API key configured; translate requests will fail");
    }

    let i18n = runtime.block_on(I18n::load(config.locale, config.locales_dir.as_deref()));

    let mut manager = TerminalManager::new()?;
    let result = runtime.block_on(async {
        let mut app = App::new(config, translator, session);
        app.i18n = i18n;
        app.check_session();
        run_app(manager.terminal(), &mut app).await
    });

    manager.restore()?;
    info!("exiting");
    result
}

/// The configured session file, `~/.kizuna/session.json`, or memory when
/// there is no home directory.
fn session_provider(config: &KizunaConfig) -> Arc<dyn SessionProvider> {
    if let Some(path) = &config.session_file {
        return Arc::new(FileSession::at(path));
    }
    match FileSession::new() {
        Ok(session) => Arc::new(session),
        Err(e) => {
            warn!(error = %e, "session kept in memory");
            Arc::new(InMemorySession::new())
        }
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let registry = CommandRegistry::new();
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.should_quit {
            return Ok(());
        }

        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(TICK);

        tokio::select! {
            _ = timeout => {
                app.tick();
                if app.is_animating() {
                    app.mark_dirty();
                }
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.mark_dirty();
                        app.handle_key(&registry, key);
                    }
                    Some(Ok(Event::Paste(text))) => {
                        app.execute_command(Command::Paste(text));
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => warn!(error = %e, "terminal event error"),
                    None => return Ok(()),
                }
            }

            Some(msg) = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                app.handle_message(msg);
            }
        }
    }
}
