use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use statcard::api;
use statcard::models::{AppConfig, LeetCodeStats, RenderOptions};
use statcard::rendering::render_card;
use statcard::server;
use statcard::services::{LeetCodeCnFetcher, StatsFetcher};

#[derive(Parser)]
#[command(name = "statcard")]
#[command(about = "Statcard - SVG statistics cards for LeetCode profiles")]
struct Cli {
    /// Path to config.yaml (defaults to $CONFIG_FILE)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Render a card from a JSON statistics file (no network access)
    Render {
        /// JSON file holding LeetCode statistics
        #[arg(short, long)]
        input: PathBuf,

        /// Output SVG file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        card: CardArgs,
    },
    /// Fetch a user's statistics and render their card
    Fetch {
        /// LeetCode CN user slug
        #[arg(short, long)]
        username: String,

        /// Output SVG file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        card: CardArgs,
    },
}

/// Card appearance options shared by `render` and `fetch`
#[derive(Args)]
struct CardArgs {
    /// Theme name (e.g. "dark", "radical")
    #[arg(long)]
    theme: Option<String>,

    /// Label language ("en", "cn", "zh-tw")
    #[arg(long)]
    locale: Option<String>,

    /// Replace the default title
    #[arg(long)]
    custom_title: Option<String>,

    /// Card width in pixels
    #[arg(long)]
    card_width: Option<f64>,

    /// Number of recent submissions to list
    #[arg(long)]
    submissions_limit: Option<usize>,

    /// Omit the recent submissions list
    #[arg(long)]
    hide_submissions: bool,

    #[arg(long)]
    hide_border: bool,

    #[arg(long)]
    hide_title: bool,

    /// Render a static card without animations
    #[arg(long)]
    disable_animations: bool,
}

impl CardArgs {
    fn into_options(self, config: &AppConfig) -> RenderOptions {
        RenderOptions {
            theme: Some(self.theme.unwrap_or_else(|| config.card.default_theme.clone())),
            locale: Some(
                self.locale
                    .unwrap_or_else(|| config.card.default_locale.clone()),
            ),
            custom_title: self.custom_title,
            card_width: self.card_width,
            submissions_limit: self.submissions_limit,
            hide_submissions: self.hide_submissions,
            hide_border: self.hide_border,
            hide_title: self.hide_title,
            disable_animations: self.disable_animations,
            ..Default::default()
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Statcard API",
        description = "SVG statistics cards for LeetCode profiles",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(api::handle_leetcode),
    tags(
        (name = "Cards", description = "Rendered statistics cards")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_file = cli
        .config
        .or_else(|| std::env::var("CONFIG_FILE").ok().map(PathBuf::from));

    match cli.command {
        Some(Commands::Serve) => run_server(config_file.as_deref()).await,
        Some(Commands::Render {
            input,
            output,
            card,
        }) => run_render_command(config_file.as_deref(), &input, output.as_deref(), card),
        Some(Commands::Fetch {
            username,
            output,
            card,
        }) => {
            run_fetch_command(config_file.as_deref(), &username, output.as_deref(), card).await
        }
        None => {
            run_status_command(config_file.as_deref());
            Ok(())
        }
    }
}

/// Minimal logging for CLI commands
fn init_cli_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "statcard=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn write_output(output: Option<&Path>, svg: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
            eprintln!("Rendered {} ({} bytes)", path.display(), svg.len());
        }
        None => print!("{svg}"),
    }
    Ok(())
}

/// Render a card from a statistics file
fn run_render_command(
    config_file: Option<&Path>,
    input: &Path,
    output: Option<&Path>,
    card: CardArgs,
) -> anyhow::Result<()> {
    init_cli_tracing();

    let config = AppConfig::load(config_file);
    let content = std::fs::read_to_string(input)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", input.display()))?;
    let stats: LeetCodeStats = serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Invalid statistics file {}: {e}", input.display()))?;

    let svg = render_card(&stats, &card.into_options(&config));
    write_output(output, &svg)
}

/// Fetch statistics upstream and render a card
async fn run_fetch_command(
    config_file: Option<&Path>,
    username: &str,
    output: Option<&Path>,
    card: CardArgs,
) -> anyhow::Result<()> {
    init_cli_tracing();

    let config = AppConfig::load(config_file);
    let fetcher = LeetCodeCnFetcher::new(&config.upstream)?;
    let stats = fetcher.fetch(username).await?;

    let svg = render_card(&stats, &card.into_options(&config));
    write_output(output, &svg)
}

/// Display status and configuration information
fn run_status_command(config_file: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();

    println!("Statcard v{VERSION}");
    println!("SVG statistics cards for LeetCode profiles\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(not set)".to_string())
    );

    let source = match config_file {
        Some(path) if path.exists() => path.display().to_string(),
        Some(_) => "defaults (file not found)".to_string(),
        None => "defaults".to_string(),
    };
    let config = match config_file {
        Some(path) => AppConfig::from_file(path).unwrap_or_default(),
        None => AppConfig::default(),
    };

    println!("\nConfiguration ({source}):");
    println!(
        "  Listen:    {}",
        bind_addr.as_deref().unwrap_or(&config.bind_addr)
    );
    println!("  Upstream:  {}", config.upstream.endpoint);
    println!("  Timeout:   {}s", config.upstream.timeout_secs);
    println!("  Cache:     {}s", config.cache_seconds);
    println!(
        "  Defaults:  theme={} locale={}",
        config.card.default_theme, config.card.default_locale
    );

    println!("\nCommands:");
    println!("  statcard serve    Start the HTTP server");
    println!("  statcard render   Render a card from a JSON statistics file");
    println!("  statcard fetch    Fetch a user's statistics and render their card");
    println!("\nRun 'statcard --help' for more details.");
}

/// Run the HTTP server
async fn run_server(config_file: Option<&Path>) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "statcard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load(config_file);
    let bind_addr = config.bind_addr.clone();
    tracing::info!(
        config = ?config_file.map(|p| p.display().to_string()).unwrap_or_else(|| "defaults".to_string()),
        upstream = %config.upstream.endpoint,
        cache_seconds = config.cache_seconds,
        "Configuration loaded"
    );

    let state = server::create_app_state(config)?;

    // OpenAPI documentation is production only
    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Statcard server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
