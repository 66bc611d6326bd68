use async_trait::async_trait;
use dotenv::dotenv;
use factcheck_dashboard::config::Config;
use factcheck_dashboard::error::FetchError;
use factcheck_dashboard::models::ResultSet;
use factcheck_dashboard::pipeline::{FactSource, FileFactSource, WebFactSource};
use factcheck_dashboard::ui::{app, App};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

enum Source {
    Web(WebFactSource),
    Fixture(FileFactSource),
}

#[async_trait]
impl FactSource for Source {
    async fn fetch(&self) -> Result<ResultSet, FetchError> {
        match self {
            Source::Web(s) => s.fetch().await,
            Source::Fixture(s) => s.fetch().await,
        }
    }
}

fn init_tracing(path: &Path) -> anyhow::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = Config::from_env()?;

    if let Some(path) = &config.log_file {
        init_tracing(path)?;
    }
    tracing::info!(?config, "starting dashboard");

    let source = match &config.fixture {
        Some(path) => Source::Fixture(FileFactSource::new(path)),
        None => Source::Web(WebFactSource::new(config.source_url.clone())?),
    };

    let mut dashboard = App::new(Arc::new(source));
    app::run_terminal(&mut dashboard).await
}
