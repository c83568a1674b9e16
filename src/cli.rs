use clap::Parser;

use bsize::units::system::UnitSystem;
use bsize::DEFAULT_PATTERN;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// A size expression ("2.5 GB", "300 kibibytes") or a plain byte count.
    pub size: String,

    #[arg(name = "si", long = "si", conflicts_with = "binary")]
    pub si: bool,
    #[arg(name = "binary", long = "binary", alias = "bin", conflicts_with = "si")]
    pub binary: bool,

    #[arg(name = "long", long = "long", short = 'l')]
    pub long: bool,
    #[arg(
        name = "pattern",
        long = "pattern",
        short = 'p',
        default_value = DEFAULT_PATTERN
    )]
    pub pattern: String,

    #[arg(name = "bytes", long = "bytes", short = 'b')]
    pub bytes: bool,
}

impl TryInto<Config> for Args {
    type Error = anyhow::Error;

    fn try_into(self) -> Result<Config, Self::Error> {
        let unit_system = if self.binary {
            UnitSystem::Binary
        } else {
            UnitSystem::SI
        };

        Ok(Config {
            size: self.size,
            unit_system,
            long_names: self.long,
            pattern: self.pattern,
            raw_bytes: self.bytes,
        })
    }
}
