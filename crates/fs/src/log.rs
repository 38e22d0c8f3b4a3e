use crate::{
    exists,
    remove_file,
    write_string,
    FileError,
    WriteMode,
};
use chrono::offset::Local;
use lazy_static::lazy_static;
use std::sync::Mutex;

lazy_static! {
    // `None` means logging is disabled
    static ref LOG_FILE_PATH: Mutex<Option<String>> = Mutex::new(None);
}

pub fn set_log_file_path(path: Option<String>) {
    if let Ok(mut log_file_path) = LOG_FILE_PATH.lock() {
        *log_file_path = path;
    }
}

fn get_log_file_path() -> Option<String> {
    LOG_FILE_PATH.lock().ok().and_then(|path| path.clone())
}

pub fn initialize_log_file(path: &str, remove_existing_file: bool) -> Result<(), FileError> {
    if remove_existing_file && exists(path) {
        remove_file(path)?;
    }

    if !exists(path) {
        write_string(path, "", WriteMode::AlwaysCreate)?;
    }

    Ok(())
}

/// It does nothing if the log file is not set. It never fails: a failure
/// to write a log must not break the command that's being logged.
pub fn write_log(owner: &str, msg: &str) {
    if let Some(path) = get_log_file_path() {
        let _ = write_string(
            &path,
            &format!(
                "{} | {} | {msg}\n",
                Local::now().to_rfc2822(),
                if owner.len() < 32 {
                    format!("{}{owner}", " ".repeat(32 - owner.len()))
                } else {
                    owner.to_string()
                },
            ),
            WriteMode::AppendOrCreate,
        );
    }
}
