use clap::Parser;
use tokio::net::TcpListener;
use todo_store::Store;

#[derive(Debug, Parser)]
#[command(name = "todo-store")]
#[command(about = "In-memory /todo REST store for local development")]
struct Args {
    /// Address to bind
    #[arg(long, env = "TODO_STORE_HOST", default_value = "127.0.0.1")]
    host: String,
    /// Port to listen on
    #[arg(long, env = "TODO_STORE_PORT", default_value_t = 3000)]
    port: u16,
    /// Start with a few sample records
    #[arg(long)]
    seed: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("todo_store=info,tower_http=info")
            }),
        )
        .init();

    let args = Args::parse();
    let store = if args.seed { Store::seeded() } else { Store::new() };

    let addr = format!("{}:{}", args.host, args.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("todo store listening on {}", listener.local_addr()?);

    todo_store::serve(listener, store).await
}
