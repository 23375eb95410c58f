pub use self::charts::{MotorActivityChart, TemperatureChart};
pub use self::header::{ConfigError, Header, StatusPanel};
pub use self::motor_panel::MotorDetail;
pub use self::sensor_card::SensorCard;

pub mod charts;
pub mod header;
pub mod motor_panel;
pub mod sensor_card;
