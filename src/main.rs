mod cli;
mod config;

use bsize::{format_size_with, parse_size};

use crate::config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::parse(std::env::args())?;

    let bytes = match config.size.parse::<u64>() {
        Ok(n) => n,
        Err(_) => parse_size(&config.size)?,
    };

    let output = if config.raw_bytes {
        bytes.to_string()
    } else {
        format_size_with(&config.pattern, bytes, config.unit_system, !config.long_names)
    };

    println!("{output}");
    Ok(())
}
