use std::env;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use once_cell::sync::OnceCell;
use reqwest::blocking::Client;

const DEFAULT_TIMEOUT_SECS: u64 = 15;
const DEFAULT_DELAY_MS: u64 = 2000;

/// Desktop-browser header set; some of these sites serve bots a stub page.
const BROWSER_HEADERS: &[(&str, &str)] = &[
    (
        "User-Agent",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    ),
    (
        "Accept",
        "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8",
    ),
    ("Accept-Language", "en-US,en;q=0.9"),
    ("DNT", "1"),
    ("Connection", "keep-alive"),
    ("Upgrade-Insecure-Requests", "1"),
    ("Sec-Fetch-Mode", "navigate"),
    ("Cache-Control", "max-age=0"),
];

static CLIENT: OnceCell<Client> = OnceCell::new();

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub timeout_secs: u64,
    pub delay_ms: u64,
}

impl FetchConfig {
    pub fn from_env() -> Self {
        let timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|val| val.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS)
            .clamp(1, 120);
        let delay_ms = env::var("FETCH_DELAY_MS")
            .ok()
            .and_then(|val| val.parse::<u64>().ok())
            .unwrap_or(DEFAULT_DELAY_MS)
            .clamp(0, 30_000);
        Self {
            timeout_secs,
            delay_ms,
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

/// Blocking fetcher over a shared client. Explicit config, no process-wide
/// mutable session state.
pub struct Fetcher {
    config: FetchConfig,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> Self {
        Self { config }
    }

    pub fn get(&self, url: &str) -> Result<String> {
        let client = shared_client(self.config.timeout_secs)?;
        let mut req = client.get(url);
        for (name, value) in BROWSER_HEADERS {
            req = req.header(*name, *value);
        }
        let resp = req
            .send()
            .with_context(|| format!("request failed: {url}"))?;
        let status = resp.status();
        let body = resp
            .text()
            .with_context(|| format!("failed reading body: {url}"))?;
        if !status.is_success() {
            return Err(anyhow!("http {status}: {url}"));
        }
        Ok(body)
    }

    /// Courtesy delay between requests.
    pub fn pause(&self) {
        if self.config.delay_ms > 0 {
            thread::sleep(Duration::from_millis(self.config.delay_ms));
        }
    }
}

fn shared_client(timeout_secs: u64) -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("failed to build http client")
    })
}
