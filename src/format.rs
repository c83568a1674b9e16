use once_cell::sync::Lazy;
use regex::Regex;

use crate::units::system::UnitSystem;
use crate::units::Denomination;

/// One decimal place, the default everywhere a pattern is not supplied.
pub const DEFAULT_PATTERN: &str = "%.1f";

static CONVERSION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"%(0?)(\d*)(?:\.(\d+))?f").unwrap());

// printf semantics: "%f" with no precision means six decimal places.
fn render_number(pattern: &str, value: f64) -> String {
    match CONVERSION_RE.captures(pattern) {
        Some(caps) => {
            let zero_pad = !caps[1].is_empty();
            let width: usize = caps[2].parse().unwrap_or(0);
            let precision: usize = caps.get(3).map_or(6, |m| m.as_str().parse().unwrap_or(6));

            let rendered = format!("{value:.precision$}");
            if zero_pad {
                format!("{rendered:0>width$}")
            } else {
                format!("{rendered:>width$}")
            }
        }
        None => format!("{value:.1}"),
    }
}

/// Formats `bytes` in the given denomination.
///
/// The numeric pattern is a printf-style `%f` conversion ("%.1f", "%08.2f").
/// With `abbreviate` off, the full unit name is pluralized unless the
/// rendered number is exactly "1".
pub fn format_size_as(
    pattern: &str,
    bytes: u64,
    denomination: Denomination,
    abbreviate: bool,
) -> String {
    let value = bytes as f64 / denomination.scale_factor as f64;
    let number = render_number(pattern, value).trim().to_string();

    let unit = if abbreviate {
        denomination.abbreviation.to_string()
    } else if number == "1" {
        denomination.name.to_string()
    } else {
        format!("{}s", denomination.name)
    };

    format!("{number} {unit}")
}

/// Formats `bytes` in whichever of the system's denominations fits best.
pub fn format_size_with(pattern: &str, bytes: u64, system: UnitSystem, abbreviate: bool) -> String {
    format_size_as(pattern, bytes, system.select(bytes), abbreviate)
}

/// Formats `bytes` with one decimal place in the best-fitting SI unit.
pub fn format_size(bytes: u64) -> String {
    format_size_with(DEFAULT_PATTERN, bytes, UnitSystem::SI, true)
}
