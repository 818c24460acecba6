mod argsets;
mod command;

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use env_logger::Env;

use vitotrol_attrs::constants::{defaults, envvars};
use vitotrol_attrs::{config, helpers, Registry};

const CMD_LIST: &str = "list";
const CMD_SHOW: &str = "show";
const CMD_DECODE: &str = "decode";
const CMD_ENCODE: &str = "encode";

const OPT_ATTRS: &str = "--attrs";

fn main() -> Result<()> {
    let dotenv_files = helpers::load_dotenv();
    env_logger::Builder::from_env(Env::default().filter_or(envvars::LOG_LEVEL, defaults::LOG_LEVEL))
        .init();
    for path in dotenv_files {
        log::debug!("Loaded {path}");
    }

    let mut args = pico_args::Arguments::from_env();
    let subcommand = args.subcommand()?;

    let registry = Registry::new();
    let attrs_file = args
        .opt_value_from_str::<_, PathBuf>(OPT_ATTRS)?
        .or_else(config::path_from_env);
    if let Some(path) = attrs_file {
        config::from_path(&path)?.apply(&registry);
    }

    match subcommand.as_deref() {
        Some(CMD_LIST) => command::list(&registry),
        Some(CMD_SHOW) => command::show(
            &registry,
            argsets::ShowArgs {
                attr: args.free_from_str()?,
            },
        ),
        Some(CMD_DECODE) => command::decode(
            &registry,
            argsets::DecodeArgs {
                attr: args.free_from_str()?,
                raw: args.free_from_str()?,
            },
        ),
        Some(CMD_ENCODE) => command::encode(
            &registry,
            argsets::EncodeArgs {
                attr: args.free_from_str()?,
                value: args.free_from_str()?,
            },
        ),
        _ => Err(anyhow!(
            "Subcommand must be one of 'list', 'show', 'decode', 'encode'"
        )),
    }
}
