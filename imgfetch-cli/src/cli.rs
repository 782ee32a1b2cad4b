use clap::Parser;
use imgfetch_engine::ProxyType;
use std::path::PathBuf;

/// Define CLI arguments
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Fetch and decode remote images",
    long_about = "Fetches one or more image URLs, retrying transient network failures with\n\
                  exponential backoff, and reports the decoded dimensions. Decoded images\n\
                  can optionally be written out as PNG files. Press Ctrl-C to cancel."
)]
pub struct CliArgs {
    /// Image URL(s) to fetch
    #[arg(required = true, value_name = "URL")]
    pub urls: Vec<String>,

    /// Network attempts per URL
    #[arg(short = 'r', long, default_value = "3")]
    pub retries: u32,

    /// Backoff base in seconds; the wait after failed attempt n is base * 2^n
    #[arg(long, default_value = "1")]
    pub retry_delay: f64,

    /// Overall timeout in seconds for each HTTP request (0 disables it)
    #[arg(long, default_value = "30")]
    pub timeout: u64,

    /// Connection timeout in seconds (0 disables it)
    #[arg(long, default_value = "10")]
    pub connect_timeout: u64,

    /// Custom HTTP header, can be repeated. Format: 'Name: Value'
    #[arg(long = "header", short = 'H', value_name = "HEADER")]
    pub headers: Vec<String>,

    /// Override the User-Agent header
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Proxy server URL (e.g., "http://proxy.example.com:8080")
    #[arg(long)]
    pub proxy: Option<String>,

    /// Proxy type
    #[arg(long, value_enum, default_value = "http")]
    pub proxy_type: ProxyType,

    /// Username for proxy authentication
    #[arg(long)]
    pub proxy_user: Option<String>,

    /// Password for proxy authentication
    #[arg(long)]
    pub proxy_pass: Option<String>,

    /// Disable all proxy settings, including the system proxy
    #[arg(long)]
    pub no_proxy: bool,

    /// Directory where decoded images are saved as PNG
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Enable detailed debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
