use std::fmt;

use chrono::NaiveDateTime;
use serde_json::Value;

use crate::{
    history::{History, HistoryPoint},
    telemetry::{prediction_from_payload, TelemetrySample},
};

pub const WAITING_MESSAGE: &str = "Waiting for data...";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Live,
    History,
}

impl DisplayMode {
    pub fn label(self) -> &'static str {
        match self {
            DisplayMode::Live => "Live Data",
            DisplayMode::History => "Historical Data",
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum LinkStatus {
    #[default]
    Waiting,
    Connected,
    Disconnected,
}

impl LinkStatus {
    pub fn css_class(self) -> &'static str {
        match self {
            LinkStatus::Waiting => "link-badge link-waiting",
            LinkStatus::Connected => "link-badge link-connected",
            LinkStatus::Disconnected => "link-badge link-disconnected",
        }
    }
}

impl fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            LinkStatus::Waiting => f.write_str("● Waiting for backend"),
            LinkStatus::Connected => f.write_str("● Connected to backend"),
            LinkStatus::Disconnected => f.write_str("● Backend unreachable"),
        }
    }
}

/// All state owned by a mounted dashboard. Nothing here outlives the view.
#[derive(Clone, Debug)]
pub struct ViewState {
    pub sample: Option<TelemetrySample>,
    pub predicted: Option<i64>,
    pub now: NaiveDateTime,
    pub mode: DisplayMode,
    pub history: History,
    pub status: String,
    pub link: LinkStatus,
}

impl ViewState {
    pub fn new(now: NaiveDateTime, history: History) -> ViewState {
        ViewState {
            sample: None,
            predicted: None,
            now,
            mode: DisplayMode::default(),
            history,
            status: WAITING_MESSAGE.into(),
            link: LinkStatus::default(),
        }
    }

    /// Applies a decoded telemetry response that arrived at `received_at`.
    pub fn apply_telemetry(&mut self, payload: &Value, received_at: NaiveDateTime) {
        let raw = serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string());
        self.status = format!("Data from {raw}");
        self.link = LinkStatus::Connected;

        let Some(sample) = TelemetrySample::from_payload(payload) else {
            return;
        };

        self.history.push(HistoryPoint {
            time: clock_time(received_at),
            temperature: sample.temperature.unwrap_or(0.0),
        });
        self.sample = Some(sample);
    }

    /// Records a failed telemetry fetch. The last good sample stays on screen.
    pub fn apply_telemetry_failure(&mut self, endpoint: &str, error: impl fmt::Display) {
        self.status = format!("Error fetching from {endpoint}: {error}");
        self.link = LinkStatus::Disconnected;
    }

    pub fn apply_prediction(&mut self, payload: &Value) {
        self.predicted = prediction_from_payload(payload);
    }

    pub fn tick_clock(&mut self, now: NaiveDateTime) {
        self.now = now;
    }

    pub fn select_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
    }

    /// `Last updated` header text
    pub fn clock_text(&self) -> String {
        format!("{} - {}", clock_time(self.now), self.now.format("%Y-%m-%d"))
    }
}

pub fn clock_time(at: NaiveDateTime) -> String {
    at.format("%H:%M:%S").to_string()
}
