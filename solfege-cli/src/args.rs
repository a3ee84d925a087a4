//! Command-line argument parsing.

use solfege_core::config::OutputFormat;
use solfege_core::query::Query;

pub const USAGE: &str = "\
usage: solfege [-v|--verbose] [--format text|json] <command>

commands:
  freq <note>              frequency in Hz (e.g. freq A4, freq Bb3)
  scale <root> [mode]      major or minor scale (mode defaults from config)
  chord <chord>            resolve a chord (e.g. chord Cmaj, chord F#m7)
  notes <chord>            chord note names only
  interval <name...>       semitones in a named interval (e.g. interval perfect 5th)
  flat <note>              respell a sharp as a flat
  sharp <note>             respell a flat as a sharp
  --json                   read one JSON query per stdin line, answer one per line";

#[derive(Debug, PartialEq)]
pub enum Command {
    Query(Query),
    JsonLines,
    Help,
}

#[derive(Debug, PartialEq)]
pub struct Args {
    pub verbose: bool,
    pub format: Option<OutputFormat>,
    pub command: Command,
}

pub fn parse(args: &[String]) -> Result<Args, String> {
    let mut verbose = false;
    let mut format = None;
    let mut json_lines = false;
    let mut positional: Vec<&str> = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-v" | "--verbose" => verbose = true,
            "--json" => json_lines = true,
            "-h" | "--help" => {
                return Ok(Args {
                    verbose,
                    format,
                    command: Command::Help,
                })
            }
            "--format" => {
                let value = iter.next().ok_or("--format needs a value")?;
                format = Some(
                    OutputFormat::parse(value)
                        .ok_or_else(|| format!("unknown output format '{}'", value))?,
                );
            }
            other => positional.push(other),
        }
    }

    let command = if json_lines {
        if !positional.is_empty() {
            return Err("--json takes no command".to_string());
        }
        Command::JsonLines
    } else {
        Command::Query(parse_query(&positional)?)
    };

    Ok(Args {
        verbose,
        format,
        command,
    })
}

fn parse_query(words: &[&str]) -> Result<Query, String> {
    let (command, rest) = words.split_first().ok_or("missing command")?;
    let one = |what: &str| -> Result<String, String> {
        match rest {
            [value] => Ok(value.to_string()),
            _ => Err(format!("{} takes exactly one {}", command, what)),
        }
    };

    let query = match *command {
        "freq" | "frequency" => Query::Frequency {
            note: one("note")?.into(),
        },
        "scale" => match rest {
            [root] => Query::Scale {
                root: root.to_string(),
                mode: None,
            },
            [root, mode] => Query::Scale {
                root: root.to_string(),
                mode: Some(mode.to_string()),
            },
            _ => return Err("scale takes a root and an optional mode".to_string()),
        },
        "chord" => Query::Chord {
            chord: one("chord")?.into(),
        },
        "notes" => Query::ChordNotes {
            chord: one("chord")?.into(),
        },
        "interval" => {
            if rest.is_empty() {
                return Err("interval needs a name".to_string());
            }
            Query::Interval {
                name: rest.join(" "),
            }
        }
        "flat" => Query::SharpToFlat { note: one("note")? },
        "sharp" => Query::FlatToSharp { note: one("note")? },
        other => return Err(format!("unknown command '{}'", other)),
    };
    Ok(query)
}
