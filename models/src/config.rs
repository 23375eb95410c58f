//! Dashboard configuration.
//!
//! The frontend is a static bundle, so its settings are baked in at build
//! time from the environment (or a `.env` file read by the build script).
//! They are validated once at startup; a bad value stops the dashboard from
//! polling and is shown on screen instead of failing every request.
//!
//! Required:
//! - `DASHBOARD_BACKEND_URL` – absolute `http`/`https` base URL of the backend
//!
//! Optional:
//! - `DASHBOARD_DEVICE_ID` – device to display (default: `ESP32_001`)
//! - `DASHBOARD_POLL_MS` – telemetry/prediction period (default: 5000)
//! - `DASHBOARD_CLOCK_MS` – header clock period (default: 1000)
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use url::Url;

pub const BACKEND_URL_VAR: &str = "DASHBOARD_BACKEND_URL";
pub const DEVICE_ID_VAR: &str = "DASHBOARD_DEVICE_ID";
pub const POLL_MS_VAR: &str = "DASHBOARD_POLL_MS";
pub const CLOCK_MS_VAR: &str = "DASHBOARD_CLOCK_MS";

pub const DEFAULT_DEVICE_ID: &str = "ESP32_001";
pub const DEFAULT_POLL_MS: u64 = 5000;
pub const DEFAULT_CLOCK_MS: u64 = 1000;

/// Raw values as they were found in the environment.
#[derive(Clone, Debug, Default)]
pub struct RawConfig<'a> {
    pub backend_url: Option<&'a str>,
    pub device_id: Option<&'a str>,
    pub poll_ms: Option<&'a str>,
    pub clock_ms: Option<&'a str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardConfig {
    backend: Url,
    device_id: String,
    pub poll_interval: Duration,
    pub clock_interval: Duration,
}

impl DashboardConfig {
    pub fn from_raw(raw: RawConfig<'_>) -> Result<DashboardConfig> {
        let backend_url = non_empty(raw.backend_url)
            .ok_or_else(|| anyhow!("{BACKEND_URL_VAR} must be set at build time"))?;
        let backend = parse_backend(backend_url)?;

        let device_id = non_empty(raw.device_id).unwrap_or(DEFAULT_DEVICE_ID);
        if !device_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            bail!("{DEVICE_ID_VAR} may only contain ASCII letters, digits, '_' or '-': {device_id:?}");
        }

        Ok(DashboardConfig {
            backend,
            device_id: device_id.to_owned(),
            poll_interval: parse_millis(POLL_MS_VAR, raw.poll_ms, DEFAULT_POLL_MS)?,
            clock_interval: parse_millis(CLOCK_MS_VAR, raw.clock_ms, DEFAULT_CLOCK_MS)?,
        })
    }

    /// Path of the telemetry endpoint, as named in status messages.
    pub fn telemetry_path(&self) -> String {
        format!("/dashboard-data/{}", self.device_id)
    }

    pub fn telemetry_url(&self) -> String {
        let base = self.backend.as_str().trim_end_matches('/');
        format!("{base}{}", self.telemetry_path())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_backend(value: &str) -> Result<Url> {
    let url = Url::parse(value).with_context(|| format!("Invalid {BACKEND_URL_VAR}: {value:?}"))?;

    if !matches!(url.scheme(), "http" | "https") {
        bail!("{BACKEND_URL_VAR} must use http or https, got {:?}", url.scheme());
    }
    if url.host_str().is_none() {
        bail!("{BACKEND_URL_VAR} has no host: {value:?}");
    }
    if url.query().is_some() || url.fragment().is_some() {
        bail!("{BACKEND_URL_VAR} must not carry a query or fragment: {value:?}");
    }

    Ok(url)
}

fn parse_millis(name: &str, value: Option<&str>, default: u64) -> Result<Duration> {
    let millis = match non_empty(value) {
        Some(v) => v
            .parse::<u64>()
            .map_err(|e| anyhow!("Invalid {name}: {e}"))?,
        None => default,
    };

    if millis == 0 {
        bail!("{name} must be greater than zero");
    }

    Ok(Duration::from_millis(millis))
}
