//! Launch the user's editor on a file.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

/// Editor from `$EDITOR`/`$VISUAL`, else the platform default.
pub fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

/// Try `requested` first, then fall back to the default editor.
pub fn open_in_editor(path: &Path, requested: Option<String>) -> AppResult<()> {
    let default = default_editor();
    let first = requested.unwrap_or_else(|| default.clone());

    if run_editor(&first, path) {
        success(format!("{} edited using '{}'", path.display(), first));
        return Ok(());
    }

    if first == default {
        return Err(AppError::Io(std::io::Error::other(format!(
            "editor '{first}' failed to edit {}",
            path.display()
        ))));
    }

    warning(format!(
        "Editor '{}' not available, falling back to '{}'",
        first, default
    ));
    if run_editor(&default, path) {
        success(format!(
            "{} edited using fallback '{}'",
            path.display(),
            default
        ));
        Ok(())
    } else {
        Err(AppError::Io(std::io::Error::other(format!(
            "fallback editor '{default}' failed to edit {}",
            path.display()
        ))))
    }
}

fn run_editor(editor: &str, path: &Path) -> bool {
    match Command::new(editor).arg(path).status() {
        Ok(s) => s.success(),
        Err(e) => {
            log::debug!("cannot launch '{editor}': {e}");
            false
        }
    }
}
