use models::config::{DashboardConfig, RawConfig};

/// Reads the settings baked in by the build script.
pub fn load() -> anyhow::Result<DashboardConfig> {
    DashboardConfig::from_raw(RawConfig {
        backend_url: option_env!("DASHBOARD_BACKEND_URL"),
        device_id: option_env!("DASHBOARD_DEVICE_ID"),
        poll_ms: option_env!("DASHBOARD_POLL_MS"),
        clock_ms: option_env!("DASHBOARD_CLOCK_MS"),
    })
}
