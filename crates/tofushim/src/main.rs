mod cli;

use anyhow::Result;
use colored::Colorize;
use log::debug;
use tofushim_core::{Config, InstallOptions, ensure_installed, exec};

/// Log filter variable; `tofu` has its own `TF_LOG`, so `RUST_LOG` is left alone
const LOG_ENV: &str = "TOFUSHIM_LOG";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV, "warn")).init();

    let code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            1
        }
    };

    std::process::exit(code);
}

fn run() -> Result<i32> {
    let config = Config::from_env(cli::collect_args())?;
    debug!(
        "tofu {} for {}/{} in {}",
        config.version,
        config.os,
        config.arch,
        config.base_dir.display()
    );

    let options = InstallOptions::from_config(&config).with_notify(cli::print_notice);
    let outcome = ensure_installed(&options)?;

    Ok(exec::run(outcome.binary_path(), &config.forwarded_args)?)
}
