mod timestamped;
mod value_type;

pub use timestamped::TimestampedValue;
pub use value_type::{TypedValue, ValueType};
