use std::collections::HashMap;

mod error;
mod span;


pub use error::{Error, ErrorKind};
pub use span::Span;

pub struct ArgParser {
    arg_count: ArgCount,
    arg_type: ArgType,
    flags: Vec<Flag>,

    // `--file=a.txt`, `--file a.txt`
    arg_flags: HashMap<String, ArgFlag>,
}

struct ArgFlag {
    optional: bool,
    default: Option<String>,
    arg_type: ArgType,
}

impl ArgParser {
    pub fn new() -> Self {
        ArgParser {
            arg_count: ArgCount::None,
            arg_type: ArgType::String,
            flags: vec![],
            arg_flags: HashMap::new(),
        }
    }

    pub fn args(&mut self, arg_type: ArgType, arg_count: ArgCount) -> &mut Self {
        self.arg_type = arg_type;
        self.arg_count = arg_count;
        self
    }

    /// Exactly one of `flags` has to be given.
    pub fn flag(&mut self, flags: &[&str]) -> &mut Self {
        self.flags.push(Flag {
            values: flags.iter().map(|flag| flag.to_string()).collect(),
            optional: false,
        });
        self
    }

    /// At most one of `flags` can be given.
    pub fn optional_flag(&mut self, flags: &[&str]) -> &mut Self {
        self.flags.push(Flag {
            values: flags.iter().map(|flag| flag.to_string()).collect(),
            optional: true,
        });
        self
    }

    pub fn arg_flag(&mut self, flag: &str, arg_type: ArgType) -> &mut Self {
        self.arg_flags.insert(flag.to_string(), ArgFlag { optional: false, default: None, arg_type });
        self
    }

    /// If `default` is `None` and the flag is not given, `ParsedArgs::get_arg_flag` returns `None`.
    pub fn optional_arg_flag(&mut self, flag: &str, default: Option<&str>, arg_type: ArgType) -> &mut Self {
        self.arg_flags.insert(
            flag.to_string(),
            ArgFlag {
                optional: true,
                default: default.map(|d| d.to_string()),
                arg_type,
            },
        );
        self
    }

    pub fn parse(&self, raw_args: &[String]) -> Result<ParsedArgs, Error> {
        self.parse_worker(raw_args).map_err(
            |mut e| {
                e.span = e.span.render(raw_args);
                e
            }
        )
    }

    fn parse_worker(&self, raw_args: &[String]) -> Result<ParsedArgs, Error> {
        let mut args = vec![];
        let mut flags = vec![None; self.flags.len()];
        let mut arg_flags = HashMap::new();
        let mut expecting_flag_arg: Option<(String, ArgType)> = None;

        if raw_args.get(0).map(|arg| arg.as_str()) == Some("--help") {
            return Ok(ParsedArgs {
                args,
                flags: vec![],
                arg_flags,
                show_help: true,
            });
        }

        'raw_arg_loop: for (arg_index, raw_arg) in raw_args.iter().enumerate() {
            if let Some((flag, arg_type)) = expecting_flag_arg {
                expecting_flag_arg = None;
                let value = arg_type.parse(raw_arg, Span::Exact(arg_index))?;

                if arg_flags.insert(flag.clone(), value).is_some() {
                    return Err(Error {
                        span: Span::Exact(arg_index),
                        kind: ErrorKind::SameFlagMultipleTimes(flag.clone(), flag.clone()),
                    });
                }

                continue;
            }

            if raw_arg.starts_with("--") {
                for (flag_index, flag) in self.flags.iter().enumerate() {
                    if flag.values.contains(raw_arg) {
                        match &flags[flag_index] {
                            None => {
                                flags[flag_index] = Some(raw_arg.to_string());
                                continue 'raw_arg_loop;
                            },
                            Some(prev) => {
                                return Err(Error {
                                    span: Span::Exact(arg_index),
                                    kind: ErrorKind::SameFlagMultipleTimes(
                                        prev.to_string(),
                                        raw_arg.to_string(),
                                    ),
                                });
                            },
                        }
                    }
                }

                if let Some(ArgFlag { arg_type, .. }) = self.arg_flags.get(raw_arg) {
                    expecting_flag_arg = Some((raw_arg.to_string(), *arg_type));
                    continue;
                }

                if let Some((flag, flag_arg)) = raw_arg.split_once('=') {
                    let Some(ArgFlag { arg_type, .. }) = self.arg_flags.get(flag) else {
                        return Err(Error {
                            span: Span::Exact(arg_index),
                            kind: ErrorKind::UnknownFlag(flag.to_string()),
                        });
                    };

                    let value = arg_type.parse(flag_arg, Span::Exact(arg_index))?;

                    if arg_flags.insert(flag.to_string(), value).is_some() {
                        return Err(Error {
                            span: Span::Exact(arg_index),
                            kind: ErrorKind::SameFlagMultipleTimes(flag.to_string(), flag.to_string()),
                        });
                    }

                    continue;
                }

                return Err(Error {
                    span: Span::Exact(arg_index),
                    kind: ErrorKind::UnknownFlag(raw_arg.to_string()),
                });
            }

            else {
                args.push(self.arg_type.parse(raw_arg, Span::Exact(arg_index))?);
            }
        }

        if let Some((arg, arg_type)) = expecting_flag_arg {
            return Err(Error {
                span: Span::End,
                kind: ErrorKind::MissingArgument(arg.to_string(), arg_type),
            });
        }

        for i in 0..flags.len() {
            if flags[i].is_none() && !self.flags[i].optional {
                return Err(Error {
                    span: Span::End,
                    kind: ErrorKind::MissingFlag(self.flags[i].values.join(" | ")),
                });
            }
        }

        let span = match self.arg_count {
            ArgCount::Geq(n) if args.len() < n => Some(Span::End),
            ArgCount::Leq(n) if args.len() > n => Some(Span::NthArg(n)),
            ArgCount::Exact(n) if args.len() != n => Some(if args.len() < n { Span::End } else { Span::NthArg(n) }),
            ArgCount::None if args.len() > 0 => Some(Span::FirstArg),
            _ => None,
        };

        if let Some(span) = span {
            return Err(Error {
                span,
                kind: ErrorKind::WrongArgCount {
                    expected: self.arg_count,
                    got: args.len(),
                },
            });
        }

        for (flag, ArgFlag { optional, default, .. }) in self.arg_flags.iter() {
            if arg_flags.contains_key(flag) {
                continue;
            }

            else if let Some(default) = default {
                arg_flags.insert(flag.to_string(), default.to_string());
            }

            else if !optional {
                return Err(Error {
                    span: Span::End,
                    kind: ErrorKind::MissingFlag(flag.to_string()),
                });
            }
        }

        Ok(ParsedArgs {
            args,
            flags,
            arg_flags,
            show_help: false,
        })
    }
}

impl Default for ArgParser {
    fn default() -> Self {
        ArgParser::new()
    }
}

#[derive(Clone, Copy, Debug)]
pub enum ArgCount {
    Geq(usize),
    Leq(usize),
    Exact(usize),
    Any,
    None,
}

#[derive(Clone, Copy, Debug)]
pub enum ArgType {
    String,
    Path,
    Command,
    Integer,

    // digits, with at most one `.`: `1234`, `3.14`
    Number,
}

impl ArgType {
    pub fn parse(&self, arg: &str, span: Span) -> Result<String, Error> {
        match self {
            ArgType::Integer => match arg.parse::<i64>() {
                Ok(_) => Ok(arg.to_string()),
                Err(e) => Err(Error {
                    span,
                    kind: ErrorKind::ParseIntError(e),
                }),
            },
            ArgType::Number => {
                let is_number = !arg.is_empty()
                    && arg.chars().all(|c| c.is_ascii_digit() || c == '.')
                    && arg.chars().filter(|c| *c == '.').count() <= 1;

                if is_number {
                    Ok(arg.to_string())
                }

                else {
                    Err(Error {
                        span,
                        kind: ErrorKind::NotANumber(arg.to_string()),
                    })
                }
            },
            ArgType::String
            | ArgType::Path
            | ArgType::Command => Ok(arg.to_string()),
        }
    }
}

pub struct Flag {
    values: Vec<String>,
    optional: bool,
}

pub struct ParsedArgs {
    args: Vec<String>,
    flags: Vec<Option<String>>,
    pub arg_flags: HashMap<String, String>,
    show_help: bool,
}

impl ParsedArgs {
    pub fn get_args(&self) -> Vec<String> {
        self.args.clone()
    }

    pub fn get_args_exact(&self, count: usize) -> Result<Vec<String>, Error> {
        if self.args.len() == count {
            Ok(self.args.clone())
        }

        else {
            Err(Error {
                span: Span::FirstArg,
                kind: ErrorKind::WrongArgCount {
                    expected: ArgCount::Exact(count),
                    got: self.args.len(),
                },
            })
        }
    }

    // if there's an index error, it panics instead of returning None
    // if it returns None, that means Nth flag is optional and its value is None
    pub fn get_flag(&self, index: usize) -> Option<String> {
        self.flags[index].clone()
    }

    pub fn get_arg_flag(&self, flag: &str) -> Option<String> {
        self.arg_flags.get(flag).cloned()
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }
}

pub fn underline_span(prefix: &str, args: &str, start: usize, end: usize) -> String {
    format!(
        "{prefix}{args}\n{}{}{}",
        " ".repeat(prefix.chars().count()),
        " ".repeat(args[..start].chars().count()),
        "^".repeat(args[start..end].chars().count().max(1)),
    )
}
