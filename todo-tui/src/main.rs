use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use time::UtcOffset;
use todo_tui::{
    api::ApiClient,
    app::App,
    bootstrap,
    cli::{Cli, Commands},
    config::TodoConfig,
    logging,
    runtime::{self, ActionRx, ActionTx},
};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // The local offset can only be read while the process is single-threaded.
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    rt.block_on(run(cli, offset))
}

async fn run(cli: Cli, offset: UtcOffset) -> Result<()> {
    match cli.command {
        Commands::ConfigPath => {
            let path = TodoConfig::config_path()?;
            if TodoConfig::ensure_default_at(&path)? {
                println!("Created default config at:");
            }
            println!("{}", path.display());
            Ok(())
        }
        Commands::Run { api_url } => {
            let mut config = TodoConfig::load()?;
            if let Some(url) = api_url {
                config.api_url = url;
            }
            logging::init(&TodoConfig::log_path()?)?;
            start(config, offset).await
        }
        Commands::Dev => {
            let mut config = TodoConfig::load()?;
            logging::init(&TodoConfig::log_path()?)?;
            let addr = todo_store::spawn(todo_store::Store::seeded()).await?;
            tracing::info!("dev store listening on {}", addr);
            config.api_url = format!("http://{}", addr);
            start(config, offset).await
        }
    }
}

async fn start(config: TodoConfig, offset: UtcOffset) -> Result<()> {
    let (action_tx, action_rx) = runtime::channel();
    let (mut app, client) = bootstrap::initialize_app(&config, offset, action_tx.clone())?;
    run_tui(&mut app, &client, action_tx, action_rx).await
}

async fn run_tui(
    app: &mut App,
    client: &ApiClient,
    action_tx: ActionTx,
    action_rx: ActionRx,
) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, app, client, action_tx, action_rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!("event loop failed: {:?}", err);
    }
    res
}
