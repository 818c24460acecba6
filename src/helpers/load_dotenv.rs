use std::env;

use crate::constants::envvars;

/// Load `.env` from the working directory, then `$VITO_CONFIG_DIR/.env` if set.
///
/// Runs before the logger is initialised (it may set `LOG_LEVEL`), so the
/// loaded paths are returned for the caller to log.
pub fn load_dotenv() -> Vec<String> {
    let mut loaded = Vec::new();
    if let Ok(path) = dotenv::dotenv() {
        loaded.push(path.display().to_string());
    }
    if let Ok(config_dir) = env::var(envvars::CONFIG_DIR) {
        let config_dotenv = format!("{config_dir}/.env");
        if dotenv::from_path(&config_dotenv).is_ok() {
            loaded.push(config_dotenv);
        }
    }
    loaded
}
