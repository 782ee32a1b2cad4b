use std::path::Path;
use std::time::Duration;

use clap::Parser;
use imgfetch_engine::{Fetcher, FetcherConfig, HttpSourceConfig, Image, ProxyConfig};
use tracing::{Level, error, info, warn};
use tracing_subscriber::FmtSubscriber;

mod cli;
mod error;
mod utils;

use cli::CliArgs;
use error::AppError;
use utils::{create_dirs, output_path, parse_header};

fn main() {
    if let Err(e) = bootstrap() {
        eprintln!("Error: {e}");
        error!(error = ?e, "Application failed");
        std::process::exit(1);
    }
}

#[tokio::main]
async fn bootstrap() -> Result<(), AppError> {
    let args = CliArgs::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_ansi(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| AppError::Initialization(e.to_string()))?;

    let http_config = build_http_config(&args)?;

    let fetcher_config = FetcherConfig::default()
        .with_max_retries(args.retries)
        .with_retry_delay_base(retry_delay_base(args.retry_delay)?);

    info!(
        "HTTP configuration: timeout={}s, connect={}s, retries={}, retry delay base={}s",
        args.timeout, args.connect_timeout, args.retries, args.retry_delay
    );

    let fetcher = Fetcher::images(&http_config, fetcher_config)?;

    // Ctrl-C cancels whatever is in flight; remaining URLs fail fast.
    tokio::spawn({
        let fetcher = fetcher.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupt received, cancelling");
                fetcher.cancel();
            }
        }
    });

    if let Some(dir) = &args.output_dir {
        create_dirs(dir).await?;
    }

    let total = args.urls.len();
    let failed = fetch_all(&fetcher, &args.urls, args.output_dir.as_deref()).await;

    if failed > 0 {
        return Err(AppError::Incomplete { failed, total });
    }
    Ok(())
}

/// Fetches every URL in order and returns how many failed.
///
/// Fetch and save failures are logged and counted; later URLs still run.
async fn fetch_all(fetcher: &Fetcher<Image>, urls: &[String], output_dir: Option<&Path>) -> usize {
    let mut failed = 0;
    for (index, url) in urls.iter().enumerate() {
        if let Err(e) = fetch_one(fetcher, url, index, output_dir).await {
            failed += 1;
            error!(url = %url, error = %e, "Failed to process image");
        }
    }
    failed
}

async fn fetch_one(
    fetcher: &Fetcher<Image>,
    url: &str,
    index: usize,
    output_dir: Option<&Path>,
) -> Result<(), AppError> {
    let image = fetcher.fetch(url).await?;
    report(url, &image);

    if let Some(dir) = output_dir {
        let path = output_path(dir, url, index)?;
        image.save(&path)?;
        info!(path = %path.display(), "Saved image");
    }
    Ok(())
}

fn retry_delay_base(secs: f64) -> Result<Duration, AppError> {
    Duration::try_from_secs_f64(secs)
        .map_err(|e| AppError::InvalidInput(format!("Invalid retry delay {secs}: {e}")))
}

fn build_http_config(args: &CliArgs) -> Result<HttpSourceConfig, AppError> {
    let mut builder = HttpSourceConfig::builder()
        .with_timeout(Duration::from_secs(args.timeout))
        .with_connect_timeout(Duration::from_secs(args.connect_timeout));

    for header in &args.headers {
        if let Some((name, value)) = parse_header(header) {
            info!("Adding header: {}: {}", name, value);
            builder = builder.with_header(name, value);
        }
    }

    if let Some(user_agent) = &args.user_agent {
        builder = builder.with_user_agent(user_agent.as_str());
    }

    if args.no_proxy {
        info!("All proxy settings disabled (--no-proxy flag)");
        builder = builder.with_system_proxy(false);
    } else if let Some(proxy_url) = &args.proxy {
        let mut proxy = ProxyConfig::new(proxy_url.as_str(), args.proxy_type);
        match (&args.proxy_user, &args.proxy_pass) {
            (Some(user), Some(pass)) => proxy = proxy.with_auth(user.as_str(), pass.as_str()),
            (None, None) => {}
            _ => {
                return Err(AppError::InvalidInput(
                    "--proxy-user and --proxy-pass must be given together".to_string(),
                ));
            }
        }
        info!(
            proxy_url = %proxy_url,
            proxy_type = ?args.proxy_type,
            has_auth = proxy.auth.is_some(),
            "Using explicit proxy configuration"
        );
        builder = builder.with_proxy(proxy);
    }

    Ok(builder.build())
}

fn report(url: &str, image: &Image) {
    info!(
        url,
        width = image.width(),
        height = image.height(),
        color = ?image.color(),
        "Fetched image"
    );
}
