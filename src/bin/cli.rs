//! RelayKV CLI
//!
//! Operator tool for querying the command classifier: answers, for each
//! verb, whether the proxy would handle it locally, send it to a
//! replica, send it to the primary, or reject it.

use std::io::{self, BufRead, Write};

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use relaykv::{classify, Category};

/// RelayKV classifier CLI
#[derive(Parser, Debug)]
#[command(name = "relaykv-cli")]
#[command(about = "Query the RelayKV command classifier")]
#[command(version)]
struct Args {
    /// Verbs to classify; reads one verb per line from stdin when empty
    verbs: Vec<String>,

    /// Emit one JSON object per verb instead of plain text
    #[arg(long)]
    json: bool,
}

/// One classification decision, as emitted with `--json`
#[derive(Serialize)]
struct Decision<'a> {
    verb: &'a str,
    category: Category,
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.verbs.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            let verb = line.trim();
            if verb.is_empty() {
                continue;
            }
            report(&mut out, verb, args.json)?;
        }
    } else {
        for verb in &args.verbs {
            report(&mut out, verb, args.json)?;
        }
    }

    Ok(())
}

/// Print one decision in the selected output format
fn report<W: Write>(out: &mut W, verb: &str, json: bool) -> io::Result<()> {
    let category = classify(verb.as_bytes());

    if json {
        let decision = Decision { verb, category };
        let line = serde_json::to_string(&decision).map_err(io::Error::from)?;
        writeln!(out, "{line}")
    } else {
        writeln!(out, "{verb} -> {category}")
    }
}
