mod load_dotenv;
mod time;

pub use load_dotenv::load_dotenv;
pub use time::{format_wire_time, now_wire, parse_wire_time, WIRE_TIME_FORMAT};
