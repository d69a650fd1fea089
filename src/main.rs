// ============================================================================
// LazyFinances - Dashboard financier dans le terminal
// ============================================================================
// Charge transactions et solde depuis GET /transactions, les normalise et
// affiche trois cartes de résumé et le tableau des transactions.
//
// CONCEPTS RUST CLÉS :
// 1. Terminal raw mode : contrôle total du terminal
// 2. Event loop : boucle qui gère événements et rendering
// 3. Worker thread + runtime tokio : le fetch ne bloque pas l'UI
// 4. mpsc channel : le résultat du fetch revient à la boucle UI
// ============================================================================

use std::io;
use std::path::PathBuf;
use std::sync::mpsc;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, error, info};

use lazyfinances::api::{fetch_transactions, TransactionsResponse};
use lazyfinances::app::App;
use lazyfinances::config::Config;
use lazyfinances::ui::{events::EventHandler, render};

/// Résultat de l'unique fetch, envoyé par le worker à la boucle UI
#[derive(Debug)]
enum FetchResult {
    Loaded(TransactionsResponse),
    Failed(String),
}

// ============================================================================
// Initialisation du logging
// ============================================================================
// Les println! ne fonctionnent plus une fois le TUI lancé : on log vers un
// fichier avec rotation quotidienne.
// ============================================================================

/// Répertoire des logs
///
/// - Linux : ~/.local/share/lazyfinances/logs
/// - macOS : ~/Library/Application Support/lazyfinances/logs
/// - Windows : C:\Users\<user>\AppData\Local\lazyfinances\logs
/// - Sinon : ./logs
fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("lazyfinances").join("logs"))
        .unwrap_or_else(|| PathBuf::from("./logs"))
}

/// Initialise le système de logging vers fichier
///
/// # Utilisation
/// ```bash
/// tail -f ~/.local/share/lazyfinances/logs/lazyfinances.log
/// RUST_LOG=lazyfinances=trace cargo run
/// ```
fn init_logging() -> Result<()> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir).context("Échec de la création du répertoire de logs")?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir.clone(), "lazyfinances.log");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false) // Pas de codes couleur dans le fichier
                .with_target(true)
                .with_thread_ids(true) // Worker et UI tournent sur deux threads
                .with_line_number(true),
        )
        .with(
            // Par défaut : debug pour lazyfinances, info pour les dépendances
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lazyfinances=debug,info".into()),
        )
        .init();

    info!(?log_dir, "Logging initialisé");
    Ok(())
}

// ============================================================================
// Point d'entrée du programme
// ============================================================================

fn main() -> Result<()> {
    init_logging().unwrap_or_else(|e| {
        eprintln!("⚠️  Warning: Failed to initialize logging: {}", e);
        eprintln!("   Continuing without logging...");
    });

    let config = Config::from_env()?;
    info!(api_url = %config.api_url, timeout = ?config.request_timeout, "LazyFinances starting up");
    println!("LazyFinances : {}", config.transactions_url());

    debug!("Setting up terminal");
    let mut terminal = setup_terminal()?;

    // L'état de la vue appartient à la boucle UI : le worker n'y touche pas
    let mut app = App::new();

    let (result_tx, result_rx) = mpsc::channel::<FetchResult>();

    // Activation de la vue : un seul fetch, en arrière-plan
    info!("Spawning fetch worker thread");
    spawn_fetch_worker(config, result_tx);

    let events = EventHandler::new();

    info!("Starting event loop");
    let result = run(&mut terminal, &mut app, &events, result_rx);

    // Restaure le terminal (même en cas d'erreur)
    debug!("Restoring terminal");
    restore_terminal(&mut terminal)?;

    match &result {
        Ok(_) => info!("Application exited normally"),
        Err(e) => error!(error = ?e, "Application exited with error"),
    }

    result
}

// ============================================================================
// Worker : l'unique fetch
// ============================================================================
// CONCEPT RUST : Thread + runtime tokio
// - std::thread::spawn() : thread OS dédié au fetch
// - Runtime::block_on() bloque le worker, pas l'UI
// - Si l'UI a quitté avant la fin, send() échoue et le résultat est perdu
// ============================================================================

fn spawn_fetch_worker(config: Config, result_tx: mpsc::Sender<FetchResult>) {
    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Runtime::new() {
            Ok(runtime) => runtime,
            Err(e) => {
                error!(error = ?e, "Failed to create tokio runtime");
                let _ = result_tx.send(FetchResult::Failed(format!("runtime tokio : {}", e)));
                return;
            }
        };

        let result = match runtime.block_on(fetch_transactions(&config)) {
            Ok(response) => FetchResult::Loaded(response),
            Err(e) => {
                error!(error = ?e, "Failed to fetch transactions");
                // {:#} : message avec toute la chaîne de contexte anyhow
                FetchResult::Failed(format!("{:#}", e))
            }
        };

        if result_tx.send(result).is_err() {
            info!("View closed before fetch completed, result discarded");
        }
    });
}

// ============================================================================
// Event Loop Principal
// ============================================================================
// À chaque itération :
//   0. Résultat du fetch éventuel
//   1. Render
//   2. Input
// ============================================================================

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
    result_rx: mpsc::Receiver<FetchResult>,
) -> Result<()> {
    while app.is_running() {
        // CONCEPT : try_recv ne bloque pas
        // - Empty : fetch encore en cours
        // - Disconnected : le worker a déjà livré (ou est mort)
        match result_rx.try_recv() {
            Ok(FetchResult::Loaded(response)) => {
                info!(transactions = response.transactions.len(), "Fetch completed");
                app.load_response(response);
            }
            Ok(FetchResult::Failed(message)) => {
                app.load_failed(message);
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => {
                if app.is_loading() {
                    error!("Fetch worker disconnected without result");
                    app.load_failed("worker interrompu".to_string());
                }
            }
        }

        terminal.draw(|frame| render(frame, app))?;

        if let Ok(event) = events.next() {
            handle_event(app, event);
        }
    }

    Ok(())
}

// ============================================================================
// Gestion des événements
// ============================================================================

fn handle_event(app: &mut App, event: lazyfinances::ui::events::Event) {
    use lazyfinances::ui::events::{is_down_event, is_escape_event, is_quit_event, is_up_event, Event};

    match event {
        Event::Key(_) if is_quit_event(&event) => {
            if app.is_awaiting_quit_confirmation() {
                info!("User confirmed quit");
                app.quit();
            } else {
                info!("User requested quit (awaiting confirmation)");
                app.request_quit();
            }
        }

        Event::Key(_) if is_up_event(&event) => {
            app.cancel_quit();
            app.navigate_up();
        }

        Event::Key(_) if is_down_event(&event) => {
            app.cancel_quit();
            app.navigate_down();
        }

        Event::Key(_) if is_escape_event(&event) => {
            debug!("User cancelled");
            app.cancel_quit();
        }

        // Toute autre touche annule la confirmation de quit
        Event::Key(_) => app.cancel_quit(),

        Event::Tick => {}
    }
}

// ============================================================================
// Setup et restauration du terminal
// ============================================================================

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Échec de l'activation du raw mode")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(|e| e.into())
}

/// Restaure le terminal à son état normal
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
