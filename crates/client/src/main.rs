//! Quotefeed Binary
//!
//! Usage: `quotefeed [QUOTES_JSON] [--config PATH]`
//! Reads quotes from the file, or stdin when no file is given.

use std::fs::File;
use std::io;

use anyhow::{Context, bail};
use log::info;
use quotefeed_client::{QuoteReport, config, read_records};

#[derive(Debug, PartialEq)]
struct Args {
    quotes_path: Option<String>,
    config_path: Option<String>,
}

/// Parse command-line arguments, excluding the program name
fn parse_args<I>(argv: I) -> anyhow::Result<Args>
where
    I: IntoIterator<Item = String>,
{
    let mut args = Args {
        quotes_path: None,
        config_path: None,
    };
    let mut iter = argv.into_iter();
    while let Some(arg) = iter.next() {
        if arg == "--config" {
            let path = iter.next().context("--config requires a path")?;
            args.config_path = Some(path);
        } else if arg.starts_with("--") {
            bail!("Unknown option: {}", arg);
        } else if args.quotes_path.is_none() {
            args.quotes_path = Some(arg);
        } else {
            bail!("Unexpected argument: {}", arg);
        }
    }
    Ok(args)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args(std::env::args().skip(1))?;

    let config = match &args.config_path {
        Some(path) => config::load_config(path)
            .with_context(|| format!("loading config from {}", path))?,
        None => config::load_default_config()?,
    };

    let records = match &args.quotes_path {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path))?;
            read_records(file)?
        }
        None => read_records(io::stdin().lock())?,
    };
    info!("Loaded {} record(s)", records.len());

    let report = QuoteReport::from_records(records, &config)?;
    print!("{}", report);

    Ok(())
}
