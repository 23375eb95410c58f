//! Text and colors shown by the dashboard, derived from view state.

use std::fmt;

use crate::telemetry::{MotorState, TelemetrySample};

pub const PLACEHOLDER: &str = "--";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const MEASUREMENT: Rgb = Rgb(0x74, 0xb9, 0xff);
    pub const MOTOR_ON: Rgb = Rgb(0x00, 0xb8, 0x94);
    pub const MOTOR_OFF: Rgb = Rgb(0x63, 0x6e, 0x72);
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Everything one summary card needs.
#[derive(Clone, Debug, PartialEq)]
pub struct CardContent {
    pub title: &'static str,
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str,
    pub color: Rgb,
}

fn fixed(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.decimals$}"),
        _ => PLACEHOLDER.into(),
    }
}

fn code(value: Option<i64>) -> String {
    value.map(|c| c.to_string()).unwrap_or_else(|| PLACEHOLDER.into())
}

/// Unknown motor state is drawn the same as a stopped motor.
pub fn motor_color(state: Option<MotorState>) -> Rgb {
    match state {
        Some(MotorState::On) => Rgb::MOTOR_ON,
        _ => Rgb::MOTOR_OFF,
    }
}

pub fn temperature_card(sample: Option<&TelemetrySample>) -> CardContent {
    CardContent {
        title: "Temperature",
        icon: "🌡️",
        value: fixed(sample.and_then(|s| s.temperature), 1),
        unit: "°C",
        color: Rgb::MEASUREMENT,
    }
}

pub fn humidity_card(sample: Option<&TelemetrySample>) -> CardContent {
    CardContent {
        title: "Humidity",
        icon: "💧",
        value: fixed(sample.and_then(|s| s.humidity), 0),
        unit: "%",
        color: Rgb::MEASUREMENT,
    }
}

pub fn soil_moisture_card(sample: Option<&TelemetrySample>) -> CardContent {
    CardContent {
        title: "Soil Moisture",
        icon: "🌱",
        value: fixed(sample.and_then(|s| s.soil_moisture), 0),
        unit: "%",
        color: Rgb::MEASUREMENT,
    }
}

pub fn motor_card(sample: Option<&TelemetrySample>) -> CardContent {
    let state = sample.and_then(TelemetrySample::motor_state);
    CardContent {
        title: "Motor Status",
        icon: "⚙️",
        value: state
            .map(|s| s.status_str().to_owned())
            .unwrap_or_else(|| PLACEHOLDER.into()),
        unit: "Status",
        color: motor_color(state),
    }
}

pub fn summary_cards(sample: Option<&TelemetrySample>) -> [CardContent; 4] {
    [
        temperature_card(sample),
        humidity_card(sample),
        soil_moisture_card(sample),
        motor_card(sample),
    ]
}

#[derive(Clone, Debug, PartialEq)]
pub struct MotorPanel {
    pub raw_code: String,
    pub activity: &'static str,
    pub predicted: String,
    pub indicator: Rgb,
}

pub fn motor_panel(sample: Option<&TelemetrySample>, predicted: Option<i64>) -> MotorPanel {
    let state = sample.and_then(TelemetrySample::motor_state);
    MotorPanel {
        raw_code: code(sample.and_then(|s| s.motor)),
        activity: state.unwrap_or(MotorState::Off).activity_str(),
        predicted: code(predicted),
        indicator: motor_color(state),
    }
}

/// The single bar in the motor activity chart.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PredictionBar {
    pub value: f64,
    pub color: Rgb,
}

pub fn prediction_bar(sample: Option<&TelemetrySample>, predicted: Option<i64>) -> PredictionBar {
    PredictionBar {
        value: predicted.unwrap_or(0).clamp(0, 1) as f64,
        color: motor_color(sample.and_then(TelemetrySample::motor_state)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example() -> TelemetrySample {
        TelemetrySample {
            temperature: Some(21.7),
            humidity: Some(55.0),
            soil_moisture: Some(40.0),
            motor: Some(1),
            prediction: Some(1),
        }
    }

    #[test]
    fn example_payload_cards() {
        let sample = example();
        let [temp, hum, soil, motor] = summary_cards(Some(&sample));

        assert_eq!(temp.value, "21.7");
        assert_eq!(temp.unit, "°C");
        assert_eq!(hum.value, "55");
        assert_eq!(hum.unit, "%");
        assert_eq!(soil.value, "40");
        assert_eq!(motor.value, "ON");
        assert_eq!(motor.color, Rgb::MOTOR_ON);
    }

    #[test]
    fn example_payload_motor_panel() {
        let sample = example();
        let panel = motor_panel(Some(&sample), Some(1));

        assert_eq!(panel.raw_code, "1");
        assert_eq!(panel.activity, "Running");
        assert_eq!(panel.predicted, "1");
    }

    #[test]
    fn rounding() {
        let sample = TelemetrySample {
            temperature: Some(19.96),
            humidity: Some(55.6),
            soil_moisture: Some(0.0),
            ..Default::default()
        };
        let [temp, hum, soil, _] = summary_cards(Some(&sample));

        assert_eq!(temp.value, "20.0");
        assert_eq!(hum.value, "56");
        assert_eq!(soil.value, "0");
    }

    #[test]
    fn placeholders_without_data() {
        for card in summary_cards(None) {
            assert_eq!(card.value, PLACEHOLDER, "{}", card.title);
        }

        let panel = motor_panel(None, None);
        assert_eq!(panel.raw_code, PLACEHOLDER);
        assert_eq!(panel.activity, "Stopped");
        assert_eq!(panel.predicted, PLACEHOLDER);
    }

    #[test]
    fn motor_off_colors_agree() {
        let sample = TelemetrySample {
            motor: Some(0),
            ..example()
        };

        let card = motor_card(Some(&sample));
        let bar = prediction_bar(Some(&sample), Some(1));
        let panel = motor_panel(Some(&sample), Some(1));

        assert_eq!(card.value, "OFF");
        assert_eq!(card.color, Rgb::MOTOR_OFF);
        assert_eq!(bar.color, card.color);
        assert_eq!(panel.indicator, card.color);
        assert_eq!(panel.activity, "Stopped");
    }

    #[test]
    fn bar_defaults_to_zero() {
        assert_eq!(prediction_bar(None, None).value, 0.0);
        assert_eq!(prediction_bar(None, Some(1)).value, 1.0);
    }

    #[test]
    fn css_hex() {
        assert_eq!(Rgb::MOTOR_ON.to_string(), "#00b894");
        assert_eq!(Rgb::MOTOR_OFF.to_string(), "#636e72");
        assert_eq!(Rgb::MEASUREMENT.to_string(), "#74b9ff");
    }
}
