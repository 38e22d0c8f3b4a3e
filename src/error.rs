use hangeul_fs::FileError;

#[derive(Debug)]
pub enum Error {
    CliError(String),
    InvalidConfigKey(String),

    /// `days` only knows 1..=30
    InvalidDay(i64),

    /// 0 (Sunday) ..= 6 (Saturday)
    InvalidWeekday(i64),

    /// number of digits in the integer part
    NumberTooLong(usize),

    FileError(FileError),

    /// see <https://docs.rs/serde_json/latest/serde_json/struct.Error.html>
    JsonSerdeError(serde_json::Error),

    StdIoError(std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::JsonSerdeError(e)
    }
}

impl From<FileError> for Error {
    fn from(e: FileError) -> Error {
        Error::FileError(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::StdIoError(e)
    }
}

impl From<hangeul_cli::Error> for Error {
    fn from(e: hangeul_cli::Error) -> Error {
        Error::CliError(e.render())
    }
}
