use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use nb_core::{Config, DigestNotifier, Result};
use nb_notify::{LogNotifier, SmtpNotifier};
use nb_scrappers::{DigestPipeline, RunOutcome};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
struct HumanDuration(Duration);

impl FromStr for HumanDuration {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        let (value, unit) = match s.find(|c: char| !c.is_ascii_digit()) {
            Some(idx) => s.split_at(idx),
            None => (s, "s"),
        };
        let value: u64 = value
            .parse()
            .map_err(|_| format!("invalid duration: {:?}", s))?;
        let seconds = match unit {
            "s" => value,
            "m" => value * 60,
            "h" => value * 3600,
            "d" => value * 86400,
            other => return Err(format!("invalid duration unit: {:?}", other)),
        };
        Ok(HumanDuration(Duration::from_secs(seconds)))
    }
}

#[derive(Parser, Debug)]
#[command(name = "nb", version, about = "Harvest news, index it, and email a daily digest")]
struct Cli {
    /// Index backend to store articles in: elastic or memory
    #[arg(long, default_value = "elastic")]
    storage: String,

    /// Summarization backend: hosted or naive
    #[arg(long, default_value = "hosted")]
    model: String,

    /// Override the index backend URL
    #[arg(long)]
    backend_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the full harvest, store, summarize, notify pipeline once
    Run {
        /// Repeat on a fixed interval (e.g. 30m, 6h, 1d)
        #[arg(long)]
        interval: Option<HumanDuration>,
    },
    /// Start the web viewer
    Serve {
        /// Port to listen on (defaults to WEB_PORT)
        #[arg(long)]
        port: Option<u16>,
    },
    /// List the registered news sources
    Sources,
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let index = nb_storage::create_index(&cli.storage, cli.backend_url.as_deref())?;
    info!(backend = %cli.storage, "💾 index backend ready");

    let model = nb_inference::create_model(
        &cli.model,
        config.summary_model_url.clone(),
        config.summary_api_key.clone(),
    )?;
    info!(model = model.name(), "🧠 summarizer ready");

    let notifier: Arc<dyn DigestNotifier> = match SmtpNotifier::from_config(&config) {
        Ok(notifier) => Arc::new(notifier),
        Err(e) => {
            warn!(error = %e, "SMTP not configured, digests will be logged instead");
            Arc::new(LogNotifier)
        }
    };

    let pipeline = DigestPipeline::new(
        index,
        model,
        notifier,
        config.digest_subject.clone(),
        config.digest_to.clone(),
    );
    info!(sources = pipeline.sources().len(), "🦗 scrapers ready");

    match cli.command {
        Commands::Run { interval } => match interval {
            Some(interval) => loop {
                if let Err(e) = pipeline.run().await {
                    warn!(error = %e, "digest run failed");
                }
                info!(secs = interval.0.as_secs(), "sleeping until next run");
                tokio::time::sleep(interval.0).await;
            },
            None => match pipeline.run().await? {
                RunOutcome::Empty => info!("no data found"),
                RunOutcome::Completed(lines) => info!(lines, "✨ run complete"),
            },
        },
        Commands::Serve { port } => {
            let state = nb_web::AppState::new(pipeline, config.heatmap_images.clone());
            nb_web::serve(state, &config.web_host, port.unwrap_or(config.web_port)).await?;
        }
        Commands::Sources => {
            for meta in pipeline.sources() {
                println!("{} {} - {}", meta.emoji, meta.name, meta.listing_url);
            }
        }
    }

    Ok(())
}
