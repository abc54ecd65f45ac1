use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Url};
use rocket::{
    fairing::{Fairing, Info, Kind},
    Build, Rocket,
};
use serde::Deserialize;

use crate::upstream::{
    ElectionService, HttpElectionService, HttpTemplateStore, MemoryElectionService,
    MemoryTemplateStore, TemplateStore, Upstream,
};

/// Application configuration, derived from `Rocket.toml` and `ROCKET_*`
/// environment variables. This struct becomes managed state and can be
/// inspected by any endpoint.
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_rollback")]
    rollback_partial_elections: bool,
}

fn default_rollback() -> bool {
    true
}

impl Config {
    /// Whether an election left without all of its candidates is deleted
    /// again.
    pub fn rollback_partial_elections(&self) -> bool {
        self.rollback_partial_elections
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rollback_partial_elections: default_rollback(),
        }
    }
}

/// A fairing that loads the application config and puts it in managed state.
pub struct ConfigFairing;

#[rocket::async_trait]
impl Fairing for ConfigFairing {
    fn info(&self) -> Info {
        Info {
            name: "Config",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, mut rocket: Rocket<Build>) -> rocket::fairing::Result {
        let config = match rocket.figment().extract::<Config>() {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load application config");
                rocket::config::pretty_print_error(e);
                return Err(rocket);
            }
        };
        debug!("Loaded {config:?}");

        rocket = rocket.manage(config);
        Ok(rocket)
    }
}

/// Where the upstream services live.
#[derive(Deserialize)]
struct UpstreamConfig {
    template_store_url: Option<String>,
    election_service_url: Option<String>,
    /// Seconds before an upstream call is abandoned.
    #[serde(default = "default_timeout")]
    upstream_timeout: u64,
}

fn default_timeout() -> u64 {
    10
}

/// Parse a configured base URL, which must be able to take path segments.
fn base_url(key: &str, value: &str) -> Result<Url, String> {
    let url = Url::parse(value).map_err(|e| format!("`{key}` is not a valid URL: {e}"))?;
    if url.cannot_be_a_base() {
        return Err(format!("`{key}` cannot be used as a base URL: {value}"));
    }
    Ok(url)
}

/// A fairing that loads the upstream config, builds an HTTP client for each
/// configured service, and places the resulting [`Upstream`] into managed
/// state. Services without a URL are held in memory instead.
pub struct UpstreamFairing;

#[rocket::async_trait]
impl Fairing for UpstreamFairing {
    fn info(&self) -> Info {
        Info {
            name: "Upstream services",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, rocket: Rocket<Build>) -> rocket::fairing::Result {
        let config = match rocket.figment().extract::<UpstreamConfig>() {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load upstream config");
                rocket::config::pretty_print_error(e);
                return Err(rocket);
            }
        };

        let client = match Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout))
            .build()
        {
            Ok(client) => client,
            Err(e) => {
                error!("Failed to build HTTP client: {e}");
                return Err(rocket);
            }
        };

        let templates: Arc<dyn TemplateStore> = match config.template_store_url.as_deref() {
            Some(url) => match base_url("template_store_url", url) {
                Ok(url) => {
                    info!("Using template store at {url}");
                    Arc::new(HttpTemplateStore::new(client.clone(), url))
                }
                Err(e) => {
                    error!("{e}");
                    return Err(rocket);
                }
            },
            None => {
                warn!("No `template_store_url` set, templates will be held in memory");
                Arc::new(MemoryTemplateStore::default())
            }
        };

        let elections: Arc<dyn ElectionService> = match config.election_service_url.as_deref() {
            Some(url) => match base_url("election_service_url", url) {
                Ok(url) => {
                    info!("Using election service at {url}");
                    Arc::new(HttpElectionService::new(client, url))
                }
                Err(e) => {
                    error!("{e}");
                    return Err(rocket);
                }
            },
            None => {
                warn!("No `election_service_url` set, elections will be held in memory");
                Arc::new(MemoryElectionService::default())
            }
        };

        Ok(rocket.manage(Upstream::new(templates, elections)))
    }
}

#[cfg(test)]
mod tests {
    use rocket::figment::Figment;

    use super::*;

    #[test]
    fn base_urls() {
        assert!(base_url("template_store_url", "http://store.local/api").is_ok());
        assert!(base_url("template_store_url", "mailto:someone@example.com").is_err());
        assert!(base_url("template_store_url", "not a url").is_err());
    }

    #[test]
    fn defaults() {
        let config: Config = Figment::new().extract().unwrap();
        assert!(config.rollback_partial_elections());

        let upstream: UpstreamConfig = Figment::new().extract().unwrap();
        assert_eq!(upstream.upstream_timeout, 10);
        assert!(upstream.template_store_url.is_none());
    }
}
