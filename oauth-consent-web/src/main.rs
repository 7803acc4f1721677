//! Demo consent backend entry point

use std::path::PathBuf;

use actix_web::{App, HttpServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use oauth_consent_web::{handlers, settings::Settings};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::var("CONSENT_WEB_CONFIG")
        .map_or_else(|_| PathBuf::from("config.toml"), PathBuf::from);
    let settings = Settings::load(&config_path)?;

    // Keep the non-blocking writer guard alive for the process lifetime
    let _file_guard = init_tracing(&settings);

    tracing::info!(
        host = settings.server.host,
        port = settings.server.port,
        "starting consent demo backend"
    );

    HttpServer::new(|| App::new().configure(handlers::configure))
        .workers(num_cpus::get())
        .bind((settings.server.host.as_str(), settings.server.port))?
        .run()
        .await?;

    Ok(())
}

/// Stderr logging, plus a daily-rolling file when configured
fn init_tracing(settings: &Settings) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let (file_layer, guard) = match settings.log.directory.as_ref() {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "oauth-consent-web.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .with(env_filter)
        .init();

    guard
}
