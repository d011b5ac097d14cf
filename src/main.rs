use std::io::{self, IsTerminal, Read};

use taqwim::{
    CalendarSystem, parse_free_text, parse_marc_008, parse_year_list, project_hijri_text,
    split_mixed_calendar,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(&config) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    FreeText,
    Marc,
    Split,
    Hijri,
    List,
}

struct CliConfig {
    input: String,
    mode: Mode,
}

fn run(config: &CliConfig) -> Result<(), taqwim::RangeOrderError> {
    let input = config.input.as_str();
    match config.mode {
        Mode::FreeText => {
            print_range("years", &parse_free_text(Some(input))?);
        }
        Mode::Marc => {
            print_range("years", &parse_marc_008(input)?);
        }
        Mode::List => {
            print_range("years", &parse_year_list(input));
        }
        Mode::Split => {
            let mixed = split_mixed_calendar(input);
            match mixed.fragment(CalendarSystem::Hijri) {
                Some(fragment) => println!("{}: {fragment}", CalendarSystem::Hijri),
                None => println!("{}: -", CalendarSystem::Hijri),
            }
            println!("{}: {}", CalendarSystem::Gregorian, mixed.gregorian.trim());
        }
        Mode::Hijri => {
            print_range(&CalendarSystem::Gregorian.to_string(), &parse_free_text(Some(input))?);
            print_range(&CalendarSystem::Hijri.to_string(), &project_hijri_text(input)?);
        }
    }
    Ok(())
}

fn print_range(label: &str, years: &[i32]) {
    match (years.first(), years.last()) {
        (Some(first), Some(last)) if first == last => println!("{label}: {first}"),
        (Some(first), Some(last)) => {
            println!("{label}: {first}..{last} ({} years)", years.len());
        }
        _ => println!("{label}: no determinable date"),
    }
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut mode = Mode::FreeText;
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("taqwim {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--marc" => mode = Mode::Marc,
            "--split" => mode = Mode::Split,
            "--hijri" => mode = Mode::Hijri,
            "--list" => mode = Mode::List,
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value.to_string());
            }
            _ if arg.starts_with('-') && arg.len() > 1 && !arg[1..].starts_with(|c: char| c.is_ascii_digit()) => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, mode })
}

fn read_stdin_input() -> Result<String, String> {
    if io::stdin().is_terminal() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "taqwim {version}

Year-range normalization CLI for catalog date statements.

Usage:
  taqwim [OPTIONS] [--] <expression...>
  taqwim [OPTIONS] --input <text>

Options:
  -i, --input <text>   Date expression to normalize. If omitted, reads
                       remaining args, or stdin when piped.
  --marc               Treat input as MARC 008 bytes 06-14 (e.g. \"s1554    \").
  --split              Only split the expression into Hijri/Gregorian sides.
  --hijri              Print the Gregorian range and its Hijri counterpart.
  --list               Treat input as a strict \"yyyy; yyyy; yyyy\" list.
  -h, --help           Show this help message.
  -V, --version        Print version information.

Exit codes:
  0  Success.
  1  Misordered explicit date range in the source data.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION")
    )
}
