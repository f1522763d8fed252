use std::fs::{self, File};
use std::path::{Path, PathBuf};

use log::{LevelFilter, info};
use simplelog::{Config, WriteLogger};

use crate::config::{APP_DIR_NAME, LOG_FILE_NAME};
use crate::error::AppError;

/// Returns the platform-correct log file path.
#[must_use]
pub fn default_log_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(LOG_FILE_NAME);
    base
}

/// Routes the `log` facade into `path`, creating parent directories.
///
/// Logging goes to a file because the terminal is in raw mode while playing.
pub fn init_file_logger(path: &Path, level: LevelFilter) -> Result<(), AppError> {
    let file = create_log_file(path).map_err(|source| AppError::LogFile {
        path: path.display().to_string(),
        source,
    })?;

    WriteLogger::init(level, Config::default(), file)?;
    info!("logging to {}", path.display());
    Ok(())
}

fn create_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    File::create(path)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{create_log_file, default_log_path};
    use crate::config::{APP_DIR_NAME, LOG_FILE_NAME};

    #[test]
    fn default_path_ends_in_app_dir_and_file_name() {
        let path = default_log_path();

        assert!(path.ends_with(format!("{APP_DIR_NAME}/{LOG_FILE_NAME}")));
    }

    #[test]
    fn log_file_creation_makes_parent_directories() {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("grid-snake-log-test-{nanos}"));
        let path = dir.join("nested").join("game.log");

        create_log_file(&path).expect("log file should be creatable");
        assert!(path.exists());

        let _ = fs::remove_dir_all(&dir);
    }
}
