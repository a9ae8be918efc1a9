//! Path utilities: expand `~/` in configured paths.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_plain_paths_alone() {
        assert_eq!(expand_tilde("/tmp/work_times.csv"), PathBuf::from("/tmp/work_times.csv"));
        assert_eq!(expand_tilde("rel/log.csv"), PathBuf::from("rel/log.csv"));
    }

    #[test]
    fn expands_home_prefix() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/log.csv"), home.join("log.csv"));
        }
    }
}
