use hangeul::{
    Config,
    Error,
    MAX_INTEGER_DIGITS,
    assemble,
    can_be_choseong,
    can_be_jongseong,
    can_be_jungseong,
    combine_character,
    combine_vowels,
    days,
    decomposed_json,
    disassemble,
    get_build_options,
    get_choseong,
    has_batchim,
    josa,
    josa_pick,
    number_to_hangul,
    romanize,
    weekday,
    weekday_from_sunday,
};
use hangeul_cli::{
    ArgCount,
    ArgParser,
    ArgType,
    ParsedArgs,
};
use hangeul_fs::{
    initialize_log_file,
    read_string,
    set_log_file_path,
    write_log,
};
use std::env;
use std::io::Read;

fn main() {
    let args = env::args().collect::<Vec<_>>();

    match run(args) {
        Ok(()) => {},
        Err(e) => {
            write_log("error", &format!("{e:?}"));

            match e {
                Error::InvalidConfigKey(s) => {
                    eprintln!("{s:?} is not a valid key for config. Run `hangeul config --get-all` to see the keys.");
                },
                Error::InvalidDay(day) => {
                    eprintln!("{day} is not a valid number of days. It has to be between 1 and 30.");
                },
                Error::InvalidWeekday(day) => {
                    eprintln!("{day} is not a valid weekday. It has to be between 0 (Sunday) and 6 (Saturday).");
                },
                Error::NumberTooLong(digits) => {
                    eprintln!("The number has {digits} digits, but `hangeul number` can read at most {MAX_INTEGER_DIGITS} digits.");
                },
                Error::CliError(e) => {
                    eprintln!("cli error: {e}");
                },
                Error::FileError(e) => {
                    eprintln!("{e}");
                },
                e => {
                    eprintln!("{e:?}");
                },
            }

            std::process::exit(1);
        },
    }
}

fn run(args: Vec<String>) -> Result<(), Error> {
    let config = Config::load()?;

    if config.dump_log {
        initialize_log_file(&config.log_file, false)?;
        set_log_file_path(Some(config.log_file.clone()));
        write_log("run", &format!("{:?}", args.get(1..).unwrap_or(&[])));
    }

    match args.get(1).map(|arg| arg.as_str()) {
        Some("assemble") => {
            let parsed_args = text_arg_parser().parse(&args[2..])?;

            if parsed_args.show_help() {
                println!("{}", include_str!("../docs/commands/assemble.txt"));
                return Ok(());
            }

            let text = read_text(&parsed_args)?;
            print_result("assemble", &assemble(&text));
        },
        Some("disassemble") => {
            let parsed_args = text_arg_parser().optional_flag(&["--json"]).parse(&args[2..])?;

            if parsed_args.show_help() {
                println!("{}", include_str!("../docs/commands/disassemble.txt"));
                return Ok(());
            }

            let text = read_text(&parsed_args)?;

            if parsed_args.get_flag(0).is_some() || config.json_output {
                print_result("disassemble", &serde_json::to_string_pretty(&decomposed_json(&text))?);
            }

            else {
                print_result("disassemble", &disassemble(&text).to_string());
            }
        },
        Some("choseong") => {
            let parsed_args = text_arg_parser().parse(&args[2..])?;

            if parsed_args.show_help() {
                println!("{}", include_str!("../docs/commands/choseong.txt"));
                return Ok(());
            }

            let text = read_text(&parsed_args)?;
            print_result("choseong", &get_choseong(&text));
        },
        Some("romanize") => {
            let parsed_args = text_arg_parser().parse(&args[2..])?;

            if parsed_args.show_help() {
                println!("{}", include_str!("../docs/commands/romanize.txt"));
                return Ok(());
            }

            let text = read_text(&parsed_args)?;
            print_result("romanize", &romanize(&text));
        },
        Some("josa") => {
            let parsed_args = ArgParser::new().optional_flag(&["--pick-only"]).args(ArgType::String, ArgCount::Exact(2)).parse(&args[2..])?;

            if parsed_args.show_help() {
                println!("{}", include_str!("../docs/commands/josa.txt"));
                return Ok(());
            }

            let args = parsed_args.get_args_exact(2)?;
            let pick_only = parsed_args.get_flag(0).is_some();

            if pick_only {
                print_result("josa", &josa_pick(&args[0], &args[1]));
            }

            else {
                print_result("josa", &josa(&args[0], &args[1]));
            }
        },
        Some("number") => {
            let parsed_args = ArgParser::new().args(ArgType::Number, ArgCount::Exact(1)).parse(&args[2..])?;

            if parsed_args.show_help() {
                println!("{}", include_str!("../docs/commands/number.txt"));
                return Ok(());
            }

            let number = parsed_args.get_args_exact(1)?[0].clone();

            match number_to_hangul(&number) {
                Some(s) => { print_result("number", &s); },
                None => {
                    let integer = number.split('.').next().unwrap_or("").trim_start_matches('0');
                    return Err(Error::NumberTooLong(integer.len()));
                },
            }
        },
        Some("days") => {
            let parsed_args = ArgParser::new().args(ArgType::Integer, ArgCount::Exact(1)).parse(&args[2..])?;

            if parsed_args.show_help() {
                println!("{}", include_str!("../docs/commands/days.txt"));
                return Ok(());
            }

            let day = parse_integer(&parsed_args.get_args_exact(1)?[0])?;

            match days(day) {
                Some(s) => { print_result("days", s); },
                None => { return Err(Error::InvalidDay(day)); },
            }
        },
        Some("weekday") => {
            let parsed_args = ArgParser::new().optional_flag(&["--full"]).args(ArgType::Integer, ArgCount::Exact(1)).parse(&args[2..])?;

            if parsed_args.show_help() {
                println!("{}", include_str!("../docs/commands/weekday.txt"));
                return Ok(());
            }

            let n = parse_integer(&parsed_args.get_args_exact(1)?[0])?;
            let full = parsed_args.get_flag(0).is_some() || config.weekday_full;

            match weekday_from_sunday(n) {
                Some(day) => { print_result("weekday", &weekday(day, full)); },
                None => { return Err(Error::InvalidWeekday(n)); },
            }
        },
        Some("has-batchim") => {
            let parsed_args = ArgParser::new().optional_flag(&["--compound", "--simple"]).args(ArgType::String, ArgCount::Exact(1)).parse(&args[2..])?;

            if parsed_args.show_help() {
                println!("{}", include_str!("../docs/commands/has-batchim.txt"));
                return Ok(());
            }

            let word = parsed_args.get_args_exact(1)?[0].clone();
            let only_compound = match parsed_args.get_flag(0).as_deref() {
                Some("--compound") => Some(true),
                Some("--simple") => Some(false),
                _ => None,
            };

            print_result("has-batchim", &has_batchim(&word, only_compound).to_string());
        },
        Some("can-be") => {
            let parsed_args = ArgParser::new().flag(&["--choseong", "--jungseong", "--jongseong"]).args(ArgType::String, ArgCount::Exact(1)).parse(&args[2..])?;

            if parsed_args.show_help() {
                println!("{}", include_str!("../docs/commands/can-be.txt"));
                return Ok(());
            }

            let text = parsed_args.get_args_exact(1)?[0].clone();
            let result = match parsed_args.get_flag(0).as_deref() {
                Some("--choseong") => can_be_choseong(&text),
                Some("--jungseong") => can_be_jungseong(&text),
                Some("--jongseong") => can_be_jongseong(&text),
                _ => unreachable!(),
            };

            print_result("can-be", &result.to_string());
        },
        Some("combine-vowels") => {
            let parsed_args = ArgParser::new().args(ArgType::String, ArgCount::Exact(2)).parse(&args[2..])?;

            if parsed_args.show_help() {
                println!("{}", include_str!("../docs/commands/combine-vowels.txt"));
                return Ok(());
            }

            let args = parsed_args.get_args_exact(2)?;
            print_result("combine-vowels", &combine_vowels(&args[0], &args[1]));
        },
        Some("combine") => {
            let parsed_args = ArgParser::new().args(ArgType::String, ArgCount::Geq(2)).parse(&args[2..])?;

            if parsed_args.show_help() {
                println!("{}", include_str!("../docs/commands/combine.txt"));
                return Ok(());
            }

            let args = parsed_args.get_args();

            if args.len() > 3 {
                return Err(Error::CliError(format!("expected at most 3 arguments, got {} arguments", args.len())));
            }

            print_result(
                "combine",
                &combine_character(&args[0], &args[1], args.get(2).map(|arg| arg.as_str())),
            );
        },
        Some("config") => {
            let parsed_args = ArgParser::new().flag(&["--get", "--get-all"]).args(ArgType::String, ArgCount::Leq(1)).parse(&args[2..])?;

            if parsed_args.show_help() {
                println!("{}", include_str!("../docs/commands/config.txt"));
                return Ok(());
            }

            match parsed_args.get_flag(0).as_deref() {
                Some("--get") => {
                    let args = parsed_args.get_args_exact(1)?;
                    println!("{}", config.get_config_by_key(&args[0])?);
                },
                Some("--get-all") => {
                    parsed_args.get_args_exact(0)?;  // make sure that there's no dangling args
                    let kv = config.get_all_configs()?;

                    println!("{}", '{');

                    for (k, v) in kv.iter() {
                        println!("    {k:?}: {v},");
                    }

                    println!("{}", '}');
                },
                _ => unreachable!(),
            }
        },
        Some("version") => {
            let parsed_args = ArgParser::new().optional_flag(&["--build-options"]).parse(&args[2..])?;

            if parsed_args.show_help() {
                println!("{}", include_str!("../docs/commands/version.txt"));
                return Ok(());
            }

            if parsed_args.get_flag(0).is_some() {
                println!("{}", serde_json::to_string_pretty(&get_build_options())?);
            }

            else {
                println!("hangeul {}", hangeul::VERSION);
            }
        },
        Some("help") => {
            let parsed_args = ArgParser::new().args(ArgType::Command, ArgCount::Leq(1)).parse(&args[2..])?;

            if parsed_args.show_help() {
                println!("{}", include_str!("../docs/commands/help.txt"));
                return Ok(());
            }

            match parsed_args.get_args().get(0).map(|arg| arg.as_str()) {
                Some(command) => {
                    let new_args = vec![
                        args[0].clone(),
                        command.to_string(),
                        String::from("--help"),
                    ];
                    return run(new_args);
                },
                None => {
                    println!("{}", include_str!("../docs/commands/help.txt"));
                },
            }
        },
        Some(invalid_command) => {
            println!("{invalid_command:?} is an invalid command. Run `hangeul help` to get help.");
        },
        None => {
            println!("Run `hangeul help` to get help.");
        },
    }

    Ok(())
}

// text commands read the text from the args, `--file` or stdin, in that order
fn text_arg_parser() -> ArgParser {
    let mut parser = ArgParser::new();
    parser.optional_arg_flag("--file", None, ArgType::Path).args(ArgType::String, ArgCount::Any);
    parser
}

fn read_text(parsed_args: &ParsedArgs) -> Result<String, Error> {
    let args = parsed_args.get_args();

    match parsed_args.get_arg_flag("--file") {
        Some(_) if !args.is_empty() => Err(Error::CliError(String::from("`--file` cannot be used with text arguments"))),
        Some(path) => Ok(read_string(&path)?),
        None if !args.is_empty() => Ok(args.join(" ")),
        None => {
            let mut s = String::new();
            std::io::stdin().read_to_string(&mut s)?;
            Ok(s)
        },
    }
}

// `ArgType::Integer` is already checked by the parser, but the value is still a string
fn parse_integer(s: &str) -> Result<i64, Error> {
    s.parse::<i64>().map_err(|_| Error::CliError(format!("{s:?} is not an integer")))
}

fn print_result(command: &str, result: &str) {
    write_log(command, &format!("{} chars", result.chars().count()));
    println!("{result}");
}
