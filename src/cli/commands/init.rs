use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This creates:
///  - the config directory (if missing)
///  - the configuration file with defaults (if missing)
pub fn handle(cfg: &Config) -> AppResult<()> {
    println!("⚙️  Initializing worktimer…");

    let path = Config::config_file();
    let existed = path.exists();
    Config::init_all()?;

    println!("📄 Config file : {}", path.display());
    println!("🗒️  Session log : {}", cfg.log_path().display());

    if existed {
        println!("ℹ️  Existing configuration left untouched.");
    }
    println!("🎉 worktimer initialization completed!");
    Ok(())
}
