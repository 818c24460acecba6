pub const CONFIG_DIR: &str = "VITO_CONFIG_DIR";
pub const CUSTOM_ATTRS: &str = "VITO_CUSTOM_ATTRS";

pub const LOG_LEVEL: &str = "LOG_LEVEL";
