use std::time::Duration;

use reqwest::{Client, Proxy, redirect};
use tracing::error;

use crate::args::FuzzArgs;
use crate::error::HttpError;

/// Redirect hops followed when `follow_redirects` is on.
const MAX_REDIRECTS: usize = 10;
const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(90);

/// Transport settings for the shared client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub proxy_url: Option<String>,
    pub insecure: bool,
    pub follow_redirects: bool,
    pub pool_max_idle_per_host: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
            proxy_url: None,
            insecure: false,
            follow_redirects: false,
            pool_max_idle_per_host: 500,
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn from_args(args: &FuzzArgs) -> Self {
        Self {
            timeout: args.request_timeout,
            connect_timeout: args.connect_timeout,
            proxy_url: args.proxy_url.clone(),
            insecure: args.insecure,
            follow_redirects: args.follow_redirects,
            pool_max_idle_per_host: args.pool_max_idle_per_host.get(),
        }
    }
}

/// Builds the pooled HTTP client shared by every request of a run.
///
/// # Errors
///
/// Returns an error when the proxy URL is invalid or the TLS backend cannot
/// be initialised.
pub fn build_client(config: &ClientConfig) -> Result<Client, HttpError> {
    let mut client_builder = Client::builder()
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .pool_max_idle_per_host(config.pool_max_idle_per_host)
        .pool_idle_timeout(Some(POOL_IDLE_TIMEOUT));

    client_builder = if config.follow_redirects {
        client_builder.redirect(redirect::Policy::limited(MAX_REDIRECTS))
    } else {
        client_builder.redirect(redirect::Policy::none())
    };

    if config.insecure {
        client_builder = client_builder
            .danger_accept_invalid_certs(true)
            .danger_accept_invalid_hostnames(true);
    }

    if let Some(proxy_url) = config.proxy_url.as_ref() {
        let proxy = Proxy::all(proxy_url).map_err(|err| {
            error!("Invalid proxy URL '{}': {}", proxy_url, err);
            HttpError::InvalidProxyUrl {
                url: proxy_url.clone(),
                source: err,
            }
        })?;
        client_builder = client_builder.proxy(proxy);
    }

    client_builder.build().map_err(|err| {
        error!("Failed to build HTTP client: {}", err);
        HttpError::BuildClientFailed { source: err }
    })
}
