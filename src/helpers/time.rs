use chrono::{Local, NaiveDateTime};

/// Date-time layout used by the Vitotrol service on the wire, e.g. `2016-09-25 18:30:00`
pub const WIRE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a wire date-time. Only the exact layout is accepted: two-digit
/// fields, single separators, no padding or sign.
pub fn parse_wire_time(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, WIRE_TIME_FORMAT)
        .ok()
        .filter(|time| format_wire_time(time) == raw)
}

pub fn format_wire_time(time: &NaiveDateTime) -> String {
    time.format(WIRE_TIME_FORMAT).to_string()
}

pub fn now_wire() -> NaiveDateTime {
    Local::now().naive_local()
}
