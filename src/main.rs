mod logger;

use regex_toolkit::RegexFlavor;

fn main() {
    let config = match parse_args(std::env::args().skip(1)) {
        Ok(Parsed::Run(config)) => config,
        Ok(Parsed::Help) => {
            print_help();
            return;
        }
        Ok(Parsed::Version) => {
            println!("rtk {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };
    let debug = config.debug || std::env::var_os("RTK_DEBUG").is_some();

    if debug {
        if let Err(err) = logger::Logger::init(log::LevelFilter::Trace) {
            eprintln!("warning: failed to install logger: {err}");
        }
    }
    log::debug!("command={:?} flavor={:?}", config.command, config.flavor);

    match run(&config.command, config.flavor) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

#[derive(Debug, PartialEq)]
enum Command {
    Escape(String),
    String(String),
    Strings(Vec<String>),
    Make(String),
    Cpoint(String),
    Char(String),
    Range(String, String),
    Nfc(String),
}

#[derive(Debug, PartialEq)]
struct CliConfig {
    command: Command,
    flavor: Option<RegexFlavor>,
    debug: bool,
}

#[derive(Debug, PartialEq)]
enum Parsed {
    Run(CliConfig),
    Help,
    Version,
}

fn run(command: &Command, flavor: Option<RegexFlavor>) -> regex_toolkit::Result<String> {
    match command {
        Command::Escape(c) => regex_toolkit::escape_str(c, flavor),
        Command::String(text) => regex_toolkit::string_as_exp(text, flavor),
        Command::Strings(texts) => regex_toolkit::strings_as_exp(texts, flavor),
        Command::Make(chars) => regex_toolkit::make_exp(chars.chars(), flavor),
        Command::Cpoint(c) => regex_toolkit::single_char(c).map(regex_toolkit::char_to_cpoint),
        Command::Char(cpoint) => regex_toolkit::cpoint_to_char(cpoint).map(String::from),
        Command::Range(first, last) => {
            let (first, last) = (regex_toolkit::single_char(first)?, regex_toolkit::single_char(last)?);
            let range = regex_toolkit::iter_char_range(first, last);
            Ok(range.iter().collect())
        }
        Command::Nfc(text) => Ok(regex_toolkit::to_nfc(text)),
    }
}

/// Options are only recognised before the command name. Everything from the
/// command on is passed to it verbatim, so `rtk escape -` and
/// `rtk string --debug` work on the literal text.
fn parse_args<I>(args: I) -> Result<Parsed, String>
where
    I: IntoIterator<Item = String>,
{
    let mut flavor: Option<RegexFlavor> = None;
    let mut debug = false;
    let mut positional: Vec<String> = Vec::new();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Parsed::Help),
            "-V" | "--version" => return Ok(Parsed::Version),
            "--debug" => debug = true,
            "-f" | "--flavor" => {
                let value = args.next().ok_or_else(|| "error: --flavor expects a value".to_string())?;
                flavor = Some(parse_flavor(&value)?);
            }
            "--" => {
                positional.extend(args.by_ref());
                break;
            }
            _ if arg.starts_with("--flavor=") => {
                flavor = Some(parse_flavor(arg.trim_start_matches("--flavor="))?);
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                positional.push(arg);
                positional.extend(args.by_ref());
                break;
            }
        }
    }

    let command = parse_command(positional)?;
    Ok(Parsed::Run(CliConfig { command, flavor, debug }))
}

fn parse_flavor(value: &str) -> Result<RegexFlavor, String> {
    value.parse::<RegexFlavor>().map_err(|err| format!("error: --flavor: {err}"))
}

fn parse_command(positional: Vec<String>) -> Result<Command, String> {
    let mut iter = positional.into_iter();
    let name = iter.next().ok_or_else(|| format!("error: no command given\n\n{}", help_text()))?;
    let rest: Vec<String> = iter.collect();

    let one = |rest: Vec<String>| -> Result<String, String> {
        match <[String; 1]>::try_from(rest) {
            Ok([value]) => Ok(value),
            Err(rest) => Err(format!("error: '{name}' expects 1 argument, got {}", rest.len())),
        }
    };

    match name.as_str() {
        "escape" => one(rest).map(Command::Escape),
        "string" => one(rest).map(Command::String),
        "strings" => Ok(Command::Strings(rest)),
        "make" => Ok(Command::Make(rest.concat())),
        "cpoint" => one(rest).map(Command::Cpoint),
        "char" => one(rest).map(Command::Char),
        "nfc" => one(rest).map(Command::Nfc),
        "range" => match <[String; 2]>::try_from(rest) {
            Ok([first, last]) => Ok(Command::Range(first, last)),
            Err(rest) => Err(format!("error: 'range' expects 2 arguments, got {}", rest.len())),
        },
        _ => Err(format!("error: unknown command '{name}'\n\n{}", help_text())),
    }
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "rtk {version}

Build regex fragments that match literal text exactly.

Usage:
  rtk [OPTIONS] [--] <command> [args...]

Options must come before the command. Arguments after the command are
taken literally, even when they start with '-'.

Commands:
  escape <char>          Expression matching one character.
  string <text>          Expression matching a string.
  strings <text>...      Alternation matching any of the strings.
  make <chars>...        Character-class body matching the characters.
  cpoint <char>          Codepoint of a character (8 hex digits).
  char <cpoint>          Character for a hex codepoint.
  range <first> <last>   Every character between two characters, inclusive.
  nfc <text>             NFC-normalized text.

Options:
  -f, --flavor <flavor>  re (1) or re2 (2). Default: re.
  --debug                Print diagnostics to stderr (also: RTK_DEBUG=1).
  -h, --help             Show this help message.
  -V, --version          Print version information.

Exit codes:
  0  Success.
  1  The command rejected its input.
  2  Invalid arguments.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
