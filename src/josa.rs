use hangeul_jamo::has_batchim;

/// A pair of particles: the first one follows a 받침, the second one follows a vowel.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Josa {
    이가,
    을를,
    은는,
    으로로,
    와과,
    이나나,
    이란란,
    아야,
    이랑랑,
    이에요예요,
    으로서로서,
    으로써로써,
    으로부터로부터,
    이라라,
}

impl Josa {
    pub fn all() -> [Josa; 14] {
        [
            Josa::이가,
            Josa::을를,
            Josa::은는,
            Josa::으로로,
            Josa::와과,
            Josa::이나나,
            Josa::이란란,
            Josa::아야,
            Josa::이랑랑,
            Josa::이에요예요,
            Josa::으로서로서,
            Josa::으로써로써,
            Josa::으로부터로부터,
            Josa::이라라,
        ]
    }

    /// "이/가" -> `Josa::이가`
    pub fn parse(key: &str) -> Option<Josa> {
        Josa::all().into_iter().find(|josa| josa.key() == key)
    }

    pub fn key(&self) -> &'static str {
        match self {
            Josa::이가 => "이/가",
            Josa::을를 => "을/를",
            Josa::은는 => "은/는",
            Josa::으로로 => "으로/로",
            Josa::와과 => "와/과",
            Josa::이나나 => "이나/나",
            Josa::이란란 => "이란/란",
            Josa::아야 => "아/야",
            Josa::이랑랑 => "이랑/랑",
            Josa::이에요예요 => "이에요/예요",
            Josa::으로서로서 => "으로서/로서",
            Josa::으로써로써 => "으로써/로써",
            Josa::으로부터로부터 => "으로부터/로부터",
            Josa::이라라 => "이라/라",
        }
    }

    // (after a 받침, after a vowel)
    fn forms(&self) -> (&'static str, &'static str) {
        match self {
            // the only pair whose key puts the vowel form first
            Josa::와과 => ("과", "와"),
            _ => match self.key().split_once('/') {
                Some((a, b)) => (a, b),
                None => (self.key(), self.key()),
            },
        }
    }

    pub fn pick(&self, has_batchim: bool) -> &'static str {
        let (after_batchim, after_vowel) = self.forms();

        if has_batchim {
            after_batchim
        }

        else {
            after_vowel
        }
    }
}

/// ("사과", "이/가") -> "가"\
/// ("귤", "이/가") -> "이"
///
/// If `key` is not a known pair, it's returned as it is.
pub fn josa_pick(word: &str, key: &str) -> String {
    match Josa::parse(key) {
        Some(josa) => josa.pick(has_batchim(word, None)).to_string(),
        None => key.to_string(),
    }
}

/// ("사과", "을/를") -> "사과를"
pub fn josa(word: &str, key: &str) -> String {
    format!("{word}{}", josa_pick(word, key))
}
