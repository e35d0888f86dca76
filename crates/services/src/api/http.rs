use std::time::Duration;

use async_trait::async_trait;
use habit_core::{Clock, HabitDay};
use habit_core::model::{HabitId, HabitsInfo};
use reqwest::Client;
use url::Url;

use super::HabitsApi;
use crate::error::ApiError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3333";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug)]
pub struct ApiConfig {
    base_url: Url,
    timeout: Duration,
}

impl ApiConfig {
    /// # Errors
    ///
    /// Returns `ApiError::InvalidBaseUrl` if `base_url` is not an absolute
    /// http(s) url.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let invalid = || ApiError::InvalidBaseUrl {
            raw: base_url.to_string(),
        };
        let parsed = Url::parse(base_url.trim()).map_err(|_| invalid())?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.cannot_be_a_base() {
            return Err(invalid());
        }
        Ok(Self {
            base_url: parsed,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// `{base}/day?date=<ISO-8601>`, where the date is local midnight of `day`
    /// in the clock's zone.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidBaseUrl` if the base url cannot take path segments.
    pub fn day_url(&self, day: HabitDay, clock: &Clock) -> Result<Url, ApiError> {
        let mut url = self.endpoint(&["day"])?;
        url.query_pairs_mut()
            .append_pair("date", &day.query_value(clock));
        Ok(url)
    }

    /// `{base}/habits/{id}/toggle`, with the id encoded as one path segment.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidBaseUrl` if the base url cannot take path segments.
    pub fn toggle_url(&self, id: &HabitId) -> Result<Url, ApiError> {
        self.endpoint(&["habits", id.as_str(), "toggle"])
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidBaseUrl {
                raw: self.base_url.to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Parse a positive whole number of seconds.
///
/// # Errors
///
/// Returns `ApiError::InvalidTimeout` for zero or non-numeric input.
pub fn parse_timeout(raw: &str) -> Result<Duration, ApiError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ApiError::InvalidTimeout {
            raw: raw.to_string(),
        }),
    }
}

/// `HabitsApi` over HTTP. Day queries are sent as local midnight of the
/// clock's zone.
#[derive(Clone)]
pub struct HttpHabitsApi {
    client: Client,
    config: ApiConfig,
    clock: Clock,
}

impl HttpHabitsApi {
    /// # Errors
    ///
    /// Returns `ApiError::Http` if the HTTP client cannot be built.
    pub fn new(config: ApiConfig, clock: Clock) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            config,
            clock,
        })
    }
}

#[async_trait]
impl HabitsApi for HttpHabitsApi {
    async fn day(&self, day: HabitDay) -> Result<HabitsInfo, ApiError> {
        let url = self.config.day_url(day, &self.clock)?;
        tracing::debug!(%url, "GET habit day");

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::HttpStatus(response.status()));
        }

        let info: HabitsInfo = response.json().await?;
        Ok(info)
    }

    async fn toggle_habit(&self, id: &HabitId) -> Result<(), ApiError> {
        let url = self.config.toggle_url(id)?;
        tracing::debug!(%url, "PATCH habit toggle");

        let response = self.client.patch(url).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::HttpStatus(response.status()));
        }
        Ok(())
    }
}
