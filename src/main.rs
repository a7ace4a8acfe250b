use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;
use kuliner_api::{MenuApi, RecommendApi};
use kuliner_core::MenuCatalog;
use kuliner_storage::ArtifactLoader;

/// Palembang culinary recommendation and menu-resolver services
#[derive(Parser, Debug)]
#[command(name = "kuliner")]
#[command(about = "Kuliner recommendation and menu resolver APIs", long_about = None)]
struct Args {
    /// Directory holding the precomputed recommendation artifacts
    #[arg(short, long, default_value = "models")]
    models_dir: PathBuf,

    /// Address both APIs bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Recommendation API port
    #[arg(long, default_value_t = 7860)]
    recommend_port: u16,

    /// Menu resolver API port
    #[arg(long, default_value_t = 7861)]
    menu_port: u16,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting kuliner v{}", env!("CARGO_PKG_VERSION"));
    info!("Models directory: {:?}", args.models_dir);

    info!("Loading recommendation models...");
    let availability = ArtifactLoader::new(&args.models_dir).load_availability()?;
    if !availability.is_ready() {
        warn!("Recommendation API starting without models; /recommend will answer 503");
    }

    let menu = Arc::new(MenuCatalog::default());
    info!("Menu catalog ready: {} entries", menu.len());

    let host = args.host.clone();
    let recommend_port = args.recommend_port;
    let recommend_handle = std::thread::spawn(move || {
        info!("Starting recommendation API on port {}", recommend_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RecommendApi::start(availability, host, recommend_port).await {
                tracing::error!("Recommendation API error: {}", e);
            }
        })
    });

    let host = args.host.clone();
    let menu_port = args.menu_port;
    let menu_handle = std::thread::spawn(move || {
        info!("Starting menu resolver API on port {}", menu_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = MenuApi::start(menu, host, menu_port).await {
                tracing::error!("Menu resolver API error: {}", e);
            }
        })
    });

    info!("kuliner started successfully");
    info!("Recommendation API: http://{}:{}/", args.host, args.recommend_port);
    info!("Menu resolver API: http://{}:{}/", args.host, args.menu_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            recommend_handle.join().ok();
        }) => {
            info!("Recommendation API stopped");
        }
        _ = tokio::task::spawn_blocking(move || {
            menu_handle.join().ok();
        }) => {
            info!("Menu resolver API stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
