pub mod config;
pub mod display;
pub mod history;
pub mod sequence;
pub mod telemetry;
pub mod view_state;

pub use config::DashboardConfig;
pub use history::{History, HistoryPoint};
pub use telemetry::{MotorState, TelemetrySample};
pub use view_state::{DisplayMode, LinkStatus, ViewState};
