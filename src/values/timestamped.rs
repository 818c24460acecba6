use chrono::NaiveDateTime;

use crate::error::AttrError;
use crate::helpers::parse_wire_time;

/// Raw value of an attribute as returned by the service, with its capture time
#[derive(Clone, Debug, PartialEq)]
pub struct TimestampedValue {
    pub value: String,
    pub time: NaiveDateTime,
}

impl TimestampedValue {
    pub fn new(value: impl Into<String>, time: NaiveDateTime) -> Self {
        Self {
            value: value.into(),
            time,
        }
    }

    /// Build from the value and time strings of a service response
    pub fn from_wire(value: impl Into<String>, time: &str) -> Result<Self, AttrError> {
        let time = parse_wire_time(time).ok_or_else(|| AttrError::Parse {
            kind: "date",
            raw: time.to_string(),
        })?;
        Ok(Self::new(value, time))
    }

    /// Numerical value, or 0 if the raw value is not a number.
    ///
    /// "not a number" and "0" are indistinguishable here; use
    /// [`TimestampedValue::try_num`] when that matters.
    pub fn num(&self) -> f64 {
        self.try_num().unwrap_or(0.0)
    }

    pub fn try_num(&self) -> Option<f64> {
        self.value.parse::<f64>().ok()
    }
}
