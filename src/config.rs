use std::ffi::OsString;

use anyhow::anyhow;
use clap::Parser;

use bsize::units::system::UnitSystem;

use crate::cli::Args;

pub struct Config {
    pub size: String,
    pub unit_system: UnitSystem,
    pub long_names: bool,
    pub pattern: String,
    pub raw_bytes: bool,
}

impl Config {
    pub fn parse<I, T>(itr: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Args::try_parse_from(itr) {
            Ok(args) => Ok(args.try_into()?),
            Err(err) => Err(anyhow!("error parsing arguments into Config: {}", err)),
        }
    }
}
