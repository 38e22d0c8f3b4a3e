use serde::{Deserialize, Serialize};
use std::collections::HashMap;

mod config;
mod date;
mod error;
mod josa;
mod json;
mod number;
mod romanize;


pub use config::{Config, PartialConfig, CONFIG_FILE_ENV_VAR, config_file_path};
pub use date::{days, weekday, weekday_from_sunday};
pub use error::Error;
pub use josa::{Josa, josa, josa_pick};
pub use json::{EumjeolJson, decomposed_json};
pub use number::{MAX_INTEGER_DIGITS, number_to_hangul};
pub use romanize::romanize;

pub use hangeul_jamo::{
    Daneo,
    Eumjeol,
    Jamo,
    assemble,
    can_be_choseong,
    can_be_jongseong,
    can_be_jungseong,
    combine_character,
    combine_vowels,
    disassemble,
    disassemble_char,
    get_choseong,
    has_batchim,
};

// |                             | Cargo.toml  | this constant  |
// |-----------------------------|-------------|----------------|
// | working on 0.1.1            | 0.1.1       | "0.1.1-dev"    |
// | published version of 0.1.1  | 0.1.1       | "0.1.1"        |
// | after publishing 0.1.1      | 0.1.2       | "0.1.2-dev"    |
pub const VERSION: &str = "0.1.0";

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct BuildOptions {
    pub version: String,
    pub profile: String,  // debug | release | production
    pub features: HashMap<String, bool>,
}

pub fn get_build_options() -> BuildOptions {
    let profile = if cfg!(feature = "production") {
        "production"
    } else if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    };

    BuildOptions {
        version: VERSION.to_string(),
        profile: profile.to_string(),
        features: vec![
            (String::from("production"), cfg!(feature = "production")),
        ].into_iter().collect(),
    }
}
