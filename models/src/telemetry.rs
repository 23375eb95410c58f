use std::fmt;

use serde_json::Value;

/// One reading from the irrigation controller, as served by the backend.
///
/// Every field is optional. A field that is missing, `null`, or of the wrong
/// type decodes to `None` rather than failing the whole payload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TelemetrySample {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    /// Served as `soil_moistu`; `soil_moisture` is accepted when that is absent
    pub soil_moisture: Option<f64>,
    pub motor: Option<i64>,
    pub prediction: Option<i64>,
}

impl TelemetrySample {
    /// Decodes an already parsed response body.
    ///
    /// `null` yields `None`: the backend answered but had nothing to report.
    /// Any other non-object body is treated as a sample with every field absent.
    pub fn from_payload(payload: &Value) -> Option<TelemetrySample> {
        match payload {
            Value::Null => None,
            Value::Object(fields) => {
                let float = |key: &str| fields.get(key).and_then(Value::as_f64);
                let code = |key: &str| fields.get(key).and_then(code_from_value);

                Some(TelemetrySample {
                    temperature: float("temperature"),
                    humidity: float("humidity"),
                    soil_moisture: float("soil_moistu").or_else(|| float("soil_moisture")),
                    motor: code("motor"),
                    prediction: code("prediction"),
                })
            }
            _ => Some(TelemetrySample::default()),
        }
    }

    pub fn motor_state(&self) -> Option<MotorState> {
        self.motor.map(MotorState::from_code)
    }

    pub fn is_motor_on(&self) -> bool {
        self.motor_state() == Some(MotorState::On)
    }
}

/// Extracts only the `prediction` field of a response body.
pub fn prediction_from_payload(payload: &Value) -> Option<i64> {
    payload.get("prediction").and_then(code_from_value)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MotorState {
    Off,
    On,
}

impl MotorState {
    pub fn from_code(code: i64) -> MotorState {
        if code == 1 {
            MotorState::On
        } else {
            MotorState::Off
        }
    }

    pub fn status_str(self) -> &'static str {
        match self {
            MotorState::On => "ON",
            MotorState::Off => "OFF",
        }
    }

    pub fn activity_str(self) -> &'static str {
        match self {
            MotorState::On => "Running",
            MotorState::Off => "Stopped",
        }
    }
}

impl fmt::Display for MotorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.status_str())
    }
}

fn code_from_value(value: &Value) -> Option<i64> {
    if let Some(code) = value.as_i64() {
        return Some(code);
    }

    // Some firmware reports 1.0 instead of 1
    let float = value.as_f64()?;
    (float.fract() == 0.0).then_some(float as i64)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_full_payload() {
        let payload = json!({
            "temperature": 21.7,
            "humidity": 55,
            "soil_moistu": 40,
            "motor": 1,
            "prediction": 1,
        });

        let sample = TelemetrySample::from_payload(&payload).unwrap();
        assert_eq!(sample.temperature, Some(21.7));
        assert_eq!(sample.humidity, Some(55.0));
        assert_eq!(sample.soil_moisture, Some(40.0));
        assert_eq!(sample.motor, Some(1));
        assert_eq!(sample.prediction, Some(1));
        assert!(sample.is_motor_on());
    }

    #[test]
    fn accepts_untruncated_soil_moisture_name() {
        let sample = TelemetrySample::from_payload(&json!({ "soil_moisture": 12.5 })).unwrap();
        assert_eq!(sample.soil_moisture, Some(12.5));
    }

    #[test]
    fn both_soil_moisture_names_keep_the_rest() {
        let payload = json!({
            "temperature": 21.7,
            "humidity": 55,
            "soil_moistu": 40,
            "soil_moisture": 35,
            "motor": 1,
        });

        let sample = TelemetrySample::from_payload(&payload).unwrap();
        assert_eq!(sample.temperature, Some(21.7));
        assert_eq!(sample.humidity, Some(55.0));
        assert_eq!(sample.soil_moisture, Some(40.0));
        assert_eq!(sample.motor, Some(1));
    }

    #[test]
    fn untruncated_name_used_when_backend_name_is_bad() {
        let payload = json!({ "soil_moistu": "wet", "soil_moisture": 35 });
        let sample = TelemetrySample::from_payload(&payload).unwrap();
        assert_eq!(sample.soil_moisture, Some(35.0));
    }

    #[test]
    fn one_bad_field_spares_the_others() {
        let payload = json!({ "temperature": "warm", "humidity": 60, "motor": 0 });
        let sample = TelemetrySample::from_payload(&payload).unwrap();
        assert_eq!(sample.temperature, None);
        assert_eq!(sample.humidity, Some(60.0));
        assert_eq!(sample.motor, Some(0));
    }

    #[test]
    fn wrong_types_become_absent() {
        let payload = json!({
            "temperature": "warm",
            "humidity": null,
            "motor": "1",
            "prediction": 0.5,
        });

        let sample = TelemetrySample::from_payload(&payload).unwrap();
        assert_eq!(sample, TelemetrySample::default());
        assert_eq!(sample.motor_state(), None);
    }

    #[test]
    fn integral_floats_are_codes() {
        let sample = TelemetrySample::from_payload(&json!({ "motor": 1.0, "prediction": 0.0 })).unwrap();
        assert_eq!(sample.motor, Some(1));
        assert_eq!(sample.prediction, Some(0));
    }

    #[test]
    fn null_body_is_no_sample() {
        assert_eq!(TelemetrySample::from_payload(&Value::Null), None);
    }

    #[test]
    fn non_object_body_is_empty_sample() {
        let sample = TelemetrySample::from_payload(&json!([1, 2, 3])).unwrap();
        assert_eq!(sample, TelemetrySample::default());
    }

    #[test]
    fn any_code_but_one_is_off() {
        assert_eq!(MotorState::from_code(1), MotorState::On);
        assert_eq!(MotorState::from_code(0), MotorState::Off);
        assert_eq!(MotorState::from_code(2), MotorState::Off);
        assert_eq!(MotorState::from_code(-1), MotorState::Off);
    }

    #[test]
    fn prediction_extraction() {
        assert_eq!(prediction_from_payload(&json!({ "prediction": 1 })), Some(1));
        assert_eq!(prediction_from_payload(&json!({ "prediction": null })), None);
        assert_eq!(prediction_from_payload(&json!({ "motor": 1 })), None);
        assert_eq!(prediction_from_payload(&Value::Null), None);
    }
}
