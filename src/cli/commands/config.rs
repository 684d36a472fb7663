use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config, init } = cmd {
        let path = Config::config_file();

        // ---- INIT CONFIG ----
        if *init {
            if path.exists() {
                info(format!("Configuration file already exists: {}", path.display()));
            } else {
                let written = Config::init()?;
                success(format!("Configuration file created: {}", written.display()));
            }
        }

        // ---- PRINT CONFIG ----
        if *print_config || !*init {
            println!("📄 Current configuration ({}):\n", path.display());
            print!("{}", cfg.to_yaml()?);
        }
    }

    Ok(())
}
