pub mod system;

use crate::error::SizeError;

const B: &str = "B";

const KB: &str = "KB";
const MB: &str = "MB";
const GB: &str = "GB";
const TB: &str = "TB";

const KIB: &str = "KiB";
const MIB: &str = "MiB";
const GIB: &str = "GiB";
const TIB: &str = "TiB";

/// A named unit of file size and the number of bytes one of it represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Denomination {
    pub scale_factor: u64,
    pub abbreviation: &'static str,
    pub name: &'static str,
}

pub const BYTE: Denomination = Denomination {
    scale_factor: 1,
    abbreviation: B,
    name: "Byte",
};

pub const KILOBYTE: Denomination = Denomination {
    scale_factor: 1000,
    abbreviation: KB,
    name: "Kilobyte",
};

pub const MEGABYTE: Denomination = Denomination {
    scale_factor: 1000u64.pow(2),
    abbreviation: MB,
    name: "Megabyte",
};

pub const GIGABYTE: Denomination = Denomination {
    scale_factor: 1000u64.pow(3),
    abbreviation: GB,
    name: "Gigabyte",
};

pub const TERABYTE: Denomination = Denomination {
    scale_factor: 1000u64.pow(4),
    abbreviation: TB,
    name: "Terabyte",
};

pub const KIBIBYTE: Denomination = Denomination {
    scale_factor: 1024,
    abbreviation: KIB,
    name: "Kibibyte",
};

pub const MEBIBYTE: Denomination = Denomination {
    scale_factor: 1024u64.pow(2),
    abbreviation: MIB,
    name: "Mebibyte",
};

pub const GIBIBYTE: Denomination = Denomination {
    scale_factor: 1024u64.pow(3),
    abbreviation: GIB,
    name: "Gibibyte",
};

pub const TEBIBYTE: Denomination = Denomination {
    scale_factor: 1024u64.pow(4),
    abbreviation: TIB,
    name: "Tebibyte",
};

/// Every recognized denomination, in resolution order.
pub const DENOMINATIONS: [Denomination; 9] = [
    BYTE, KILOBYTE, MEGABYTE, GIGABYTE, TERABYTE, KIBIBYTE, MEBIBYTE, GIBIBYTE, TEBIBYTE,
];

impl Denomination {
    /// Looks up the denomination named by a free-form unit token.
    ///
    /// Matching is case-insensitive and prefix-based, so full names,
    /// plurals, and bare abbreviations ("KB", "kilobytes") all resolve.
    pub fn resolve(token: &str) -> Result<Denomination, SizeError> {
        let normalized = token.trim().to_lowercase();

        for denomination in DENOMINATIONS {
            if normalized.starts_with(&denomination.abbreviation.to_lowercase())
                || normalized.starts_with(&denomination.name.to_lowercase())
            {
                return Ok(denomination);
            }
        }

        Err(SizeError::UnresolvableDenomination(token.to_string()))
    }
}
