use clap::{Arg, ArgAction, Command};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};

use ippcode::language::Status;
use ippcode::{output, parsing, problem};

/// How standard input is referred to in diagnostics.
const STDIN: &str = "<stdin>";

fn command() -> Command {
    Command::new("parse")
        .about("Check an IPPcode22 program and write its XML representation.")
        .override_usage("parse < program.src > program.xml")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("help")
                .long("help")
                .action(ArgAction::SetTrue)
                .help("Print this message and exit. Must be the only argument."),
        )
        .after_help(
            r#"
The program is read from standard input and the XML document is written to
standard output. Set IPPCODE_LOG to one of error, warn, info, debug, or trace
to see diagnostic logging on standard error.

Exit status:
   0  success
  10  invalid command line arguments
  11  standard input could not be read
  12  standard output could not be written
  21  missing or invalid .IPPcode22 header
  22  unknown opcode
  23  wrong number of arguments, or an invalid argument
            "#
            .trim_ascii(),
        )
}

/// Write text to standard output, surfacing a closed or failing stream as an
/// error rather than a panic.
fn emit(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()
}

fn setup_logging() -> LevelFilter {
    let level = std::env::var("IPPCODE_LOG")
        .ok()
        .and_then(|value| {
            value
                .parse::<LevelFilter>()
                .ok()
        })
        .unwrap_or(LevelFilter::OFF);

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    level
}

fn main() -> ExitCode {
    let level = setup_logging();

    let mut command = command();
    let matches = match command.try_get_matches_from_mut(std::env::args_os()) {
        Ok(matches) => matches,
        Err(error) => {
            debug!(?error);
            eprintln!(
                "{}: invalid arguments; try '--help' on its own for usage",
                "error".bright_red()
            );
            return Status::Parameter.into();
        }
    };

    if matches.get_flag("help") {
        if std::env::args_os().len() != 2 {
            eprintln!("{}: '--help' must be given alone", "error".bright_red());
            return Status::Parameter.into();
        }
        let help = format!("{}\n", command.render_help());
        if let Err(error) = emit(&help) {
            eprintln!("{}: {}", "error".bright_red(), error);
            return Status::OutputFile.into();
        }
        return ExitCode::SUCCESS;
    }

    let content = match parsing::load(io::stdin().lock()) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error, STDIN));
            return Status::InputFile.into();
        }
    };

    let document = match parsing::parse(&content) {
        Ok(document) => document,
        Err(error) => {
            if level >= LevelFilter::DEBUG {
                eprintln!("{}", problem::full_parsing_error(&error, STDIN, &content));
            } else {
                eprintln!("{}", problem::concise_parsing_error(&error, STDIN, &content));
            }
            return error
                .status()
                .into();
        }
    };

    let rendered = match output::render(&document) {
        Ok(rendered) => rendered,
        Err(error) => {
            eprintln!("{}: {}", "error".bright_red(), error);
            return Status::Internal.into();
        }
    };

    match emit(&rendered) {
        Ok(()) => {
            info!("Wrote {} instructions", document.len());
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{}: {}", "error".bright_red(), error);
            Status::OutputFile.into()
        }
    }
}
