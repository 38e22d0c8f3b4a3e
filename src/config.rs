use crate::error::Error;
use hangeul_fs::{exists, join4, read_string};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::env;

pub const CONFIG_FILE_ENV_VAR: &str = "HANGEUL_CONFIG_FILE";

// This struct is used for loading partial configurations from ~/.config/hangeul/config.json
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct PartialConfig {
    pub dump_log: Option<bool>,
    pub log_file: Option<String>,
    pub weekday_full: Option<bool>,
    pub json_output: Option<bool>,
}

impl PartialConfig {
    // Apply partial config to a full config
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(dump_log) = self.dump_log {
            config.dump_log = dump_log;
        }
        if let Some(log_file) = &self.log_file {
            config.log_file = log_file.clone();
        }
        if let Some(weekday_full) = self.weekday_full {
            config.weekday_full = weekday_full;
        }
        if let Some(json_output) = self.json_output {
            config.json_output = json_output;
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Config {
    // every command and the size of its result is written to `log_file`
    pub dump_log: bool,
    pub log_file: String,

    // `hangeul weekday` prints "월요일" instead of "월"
    pub weekday_full: bool,

    // `hangeul disassemble` prints json instead of letters
    pub json_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dump_log: false,
            log_file: String::from("hangeul.log"),
            weekday_full: false,
            json_output: false,
        }
    }
}

impl Config {
    /// Defaults, overwritten by the config file if there's one.
    pub fn load() -> Result<Self, Error> {
        let mut config = Config::default();

        if let Some(partial) = load_partial_config()? {
            partial.apply_to(&mut config);
        }

        Ok(config)
    }

    pub fn from_json(s: &str) -> Result<Self, Error> {
        let partial = serde_json::from_str::<PartialConfig>(s)?;
        let mut config = Config::default();
        partial.apply_to(&mut config);
        Ok(config)
    }

    pub fn get_config_by_key(&self, key: &str) -> Result<Value, Error> {
        match serde_json::to_value(self)? {
            Value::Object(obj) => match obj.get(key) {
                Some(v) => Ok(v.clone()),
                None => Err(Error::InvalidConfigKey(key.to_string())),
            },
            _ => Err(Error::InvalidConfigKey(key.to_string())),
        }
    }

    /// It returns `Vec` instead of `HashMap` or `Value` since `Vec` is easier to sort by key.
    /// The keys are sorted.
    pub fn get_all_configs(&self) -> Result<Vec<(String, Value)>, Error> {
        let mut result = match serde_json::to_value(self)? {
            Value::Object(obj) => obj.into_iter().collect::<Vec<_>>(),
            _ => vec![],
        };

        result.sort_by(|(a, _), (b, _)| a.cmp(b));
        Ok(result)
    }
}

/// `$HANGEUL_CONFIG_FILE`, or `$HOME/.config/hangeul/config.json`
pub fn config_file_path() -> Option<String> {
    if let Ok(path) = env::var(CONFIG_FILE_ENV_VAR) {
        return Some(path);
    }

    let home = env::var("HOME").ok()?;
    join4(&home, ".config", "hangeul", "config.json").ok()
}

fn load_partial_config() -> Result<Option<PartialConfig>, Error> {
    let Some(path) = config_file_path() else { return Ok(None); };

    if !exists(&path) {
        return Ok(None);
    }

    let s = read_string(&path)?;
    Ok(Some(serde_json::from_str::<PartialConfig>(&s)?))
}
