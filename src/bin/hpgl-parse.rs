use std::{env, fs, process};
use std::error::Error;
use std::str::FromStr;

use log::LevelFilter;
use hpgl::{ast::Drawing, parse::{self, ParseOptions}, read_polylines_with};

static LOGGER: StderrLogger = StderrLogger;

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

fn init_logging() {
    let level = env::var("HPGL_LOG").ok()
        .and_then(|s| LevelFilter::from_str(&s).ok())
        .unwrap_or(LevelFilter::Warn);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    let mut show_commands = false;
    let mut options = ParseOptions::default();
    let mut filename = None;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--commands" => show_commands = true,
            "--lenient" => options.lenient_numbers = true,
            _ => filename = Some(arg),
        }
    }
    let filename = filename.ok_or("usage: hpgl-parse [--commands] [--lenient] FILE")?;
    let input = fs::read_to_string(&filename)?;

    let result = if show_commands {
        parse::commands(&input).map(|cmd| cmd.map(|cmd| println!("{}", cmd))).collect()
    } else {
        read_polylines_with(&input, &options).map(|lines| println!("{}", Drawing::from(lines)))
    };
    if let Err(e) = result {
        let (line, col) = e.line_col(&input);
        eprintln!("Parse error at line {}, column {}: {}", line, col, e);
        process::exit(1);
    }
    Ok(())
}
