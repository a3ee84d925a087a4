mod args;

use std::fs::File;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use args::Command;
use solfege_core::config::{Config, OutputFormat};
use solfege_core::dispatch::Engine;
use solfege_core::query::{Query, Response};

fn init_logging(verbose: bool) {
    use simplelog::{LevelFilter, WriteLogger};

    let log_level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };

    let log_path = dirs::config_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("solfege")
        .join("solfege.log");

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let log_file = match File::create(&log_path)
        .or_else(|_| File::create(std::env::temp_dir().join("solfege.log")))
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!("solfege: logging disabled: {}", e);
            return;
        }
    };

    if WriteLogger::init(log_level, simplelog::Config::default(), log_file).is_err() {
        return;
    }

    log::info!("solfege starting (log level: {:?})", log_level);
}

fn main() -> ExitCode {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let args = match args::parse(&argv) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("solfege: {}\n\n{}", msg, args::USAGE);
            return ExitCode::from(2);
        }
    };
    init_logging(args.verbose);

    let mut config = Config::load();
    if let Some(format) = args.format {
        config.set_output_format(format);
    }
    let engine = Engine::new(config);

    match args.command {
        Command::Help => {
            println!("{}", args::USAGE);
            ExitCode::SUCCESS
        }
        Command::JsonLines => run_json_lines(&engine),
        Command::Query(query) => run_once(&engine, &query),
    }
}

fn run_once(engine: &Engine, query: &Query) -> ExitCode {
    let format = engine.config().output_format();
    let (response, code) = match engine.dispatch(query) {
        Ok(answer) => (Response::Ok(answer), ExitCode::SUCCESS),
        Err(e) => (Response::Error(e.to_string()), ExitCode::FAILURE),
    };

    match (format, response) {
        (OutputFormat::Json, response) => match serde_json::to_string(&response) {
            Ok(line) => println!("{}", line),
            Err(e) => {
                eprintln!("solfege: cannot encode response: {}", e);
                return ExitCode::FAILURE;
            }
        },
        (OutputFormat::Text, Response::Ok(answer)) => println!("{}", answer),
        (OutputFormat::Text, Response::Error(msg)) => eprintln!("solfege: {}", msg),
    }
    code
}

/// Answer one JSON query per stdin line until EOF. Bad lines get an error response.
fn run_json_lines(engine: &Engine) -> ExitCode {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("stdin read failed: {}", e);
                return ExitCode::FAILURE;
            }
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Err(e) = writeln!(stdout, "{}", engine.dispatch_line(line)) {
            log::error!("stdout write failed: {}", e);
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}
