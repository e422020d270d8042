use std::fs;
use std::io::{self, prelude::*};
use std::path::PathBuf;

use anyhow::{bail, ensure, Context};
use structopt::StructOpt;

mod nesting;
use nesting::Scanner;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "jpath-nesting",
    about = "Checks bracket, brace and paren nesting in JSON-path expressions."
)]
struct Opt {
    /// Enables trace log level
    #[structopt(short, long)]
    trace: bool,

    /// Enables info log level
    #[structopt(short, long)]
    info: bool,

    /// Reject expressions nested deeper than this
    #[structopt(short, long)]
    max_depth: Option<usize>,

    /// Read additional expressions from a file, one per line
    #[structopt(short, long, parse(from_os_str))]
    file: Option<PathBuf>,

    /// The expressions to check
    expressions: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();

    let log_level = if opt.trace {
        log::Level::Trace
    } else if opt.info {
        log::Level::Info
    } else {
        log::Level::Warn
    };

    simple_logger::init_with_level(log_level)?;

    let mut expressions = opt.expressions;

    if let Some(path) = opt.file {
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        expressions.extend(
            contents
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(String::from),
        );
    }

    ensure!(!expressions.is_empty(), "no expressions given");

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let mut failures = 0;

    for expr in &expressions {
        let result = match opt.max_depth {
            Some(limit) => Scanner::new(expr).with_max_depth(limit).run(),
            None => nesting::scan(expr),
        };

        match result {
            Ok(n) => {
                log::info!("{}: ok", expr);
                writeln!(handle, "ok depth={} groups={}", n.max_depth, n.groups)?;
            }
            Err(e) => {
                log::warn!("{}: {}", expr, e);
                writeln!(handle, "error: {}", e)?;
                failures += 1;
            }
        }
    }

    handle.flush()?;

    if failures > 0 {
        bail!("{} of {} expressions failed", failures, expressions.len());
    }

    Ok(())
}
