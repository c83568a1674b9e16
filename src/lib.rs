//! Convert human-readable file sizes ("45 gigabytes", "2MB") into byte
//! counts, and format byte counts back into human-readable strings using
//! decimal (1000-based) or binary (1024-based) units.

pub mod error;
pub mod format;
pub mod parse;
pub mod units;

pub use error::SizeError;
pub use format::{format_size, format_size_as, format_size_with, DEFAULT_PATTERN};
pub use parse::parse_size;
pub use units::system::UnitSystem;
pub use units::Denomination;
