use crate::config::Config;
use crate::errors::AppResult;

use crate::cli::parser::Commands;
use crate::utils::editor::open_in_editor;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", cfg.to_yaml()?);
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let path = Config::config_file();
            if !path.exists() {
                Config::init_all()?;
            }
            open_in_editor(&path, editor.clone())?;
        }
    }

    Ok(())
}
