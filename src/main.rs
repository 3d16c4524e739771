use anyhow::Context;
use clap::Parser;
use dugout::{
    api,
    auth::jwt::AuthService,
    cli::{
        init::{InitConfig, InitResult},
        output::Output,
        Cli, Commands,
    },
    db::SqliteClient,
    utils::config::DugoutConfig,
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    if let Some(Commands::Init {
        path,
        force,
        host,
        port,
    }) = cli.command
    {
        return match dugout::cli::init::run(
            InitConfig {
                path,
                force,
                host,
                port,
            },
            &output,
        ) {
            InitResult::Success | InitResult::AlreadyExists => Ok(()),
            InitResult::Error(e) => anyhow::bail!("init failed: {}", e),
        };
    }

    let config = DugoutConfig::load(&cli.config)
        .with_context(|| format!("loading configuration from {}", cli.config.display()))?;

    // RUST_LOG wins over the config file; --verbose wins over both
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.server.log_level))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db = if config.database.url == ":memory:" {
        SqliteClient::new_memory().await?
    } else {
        SqliteClient::new_local(&config.database.url).await?
    };

    let auth_service = Arc::new(AuthService::new(
        config.jwt_secret()?,
        config.auth.token_expiry,
    ));

    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = AppState {
        config: Arc::new(config),
        db: Arc::new(db),
        auth_service,
    };

    let app = api::routes::app(state);

    output.banner();
    output.info(&format!("Listening on http://{}", addr));
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding to {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
