use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::SizeError;
use crate::units::Denomination;

// Longer unit tokens come first so e.g. "kilobyte" is never consumed as "b".
static SIZE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(\d*\.\d+|\d+)\s*(kilobyte|kibibyte|megabyte|mebibyte|gigabyte|gibibyte|terabyte|tebibyte|byte|kb|kib|mb|mib|gb|gib|tb|tib|b)",
    )
    .unwrap()
});

/// Finds the leftmost "number + unit" expression in `input` and returns its
/// value in bytes, truncated toward zero.
pub fn parse_size(input: &str) -> Result<u64, SizeError> {
    let lowered = input.to_lowercase();

    let caps = SIZE_RE
        .captures(&lowered)
        .ok_or_else(|| SizeError::NoFilesizePattern(input.to_string()))?;

    let value: f64 = caps[1]
        .parse()
        .map_err(|_| SizeError::NoFilesizePattern(input.to_string()))?;
    let denomination = Denomination::resolve(&caps[2])?;

    Ok((value * denomination.scale_factor as f64) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integer_sizes() {
        assert_eq!(parse_size("1 b"), Ok(1));
        assert_eq!(parse_size("2 kb"), Ok(2000));
        assert_eq!(parse_size("1 kib"), Ok(1024));
        assert_eq!(parse_size("25gb"), Ok(25_000_000_000));
    }

    #[test]
    fn parses_fractional_sizes() {
        assert_eq!(parse_size("0.5 mb"), Ok(500_000));
        assert_eq!(parse_size("0.125 tib"), Ok(137_438_953_472));
        assert_eq!(parse_size(".5 kb"), Ok(500));
    }

    #[test]
    fn fractional_bytes_truncate_to_zero() {
        assert_eq!(parse_size("0.25 bytes"), Ok(0));
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!(parse_size("2MB"), Ok(2_000_000));
        assert_eq!(parse_size("45 Gigabytes"), Ok(45_000_000_000));
    }

    #[test]
    fn finds_the_leftmost_match_anywhere() {
        assert_eq!(parse_size("about 1.5 gb of data"), Ok(1_500_000_000));
        assert_eq!(parse_size("3 kb then 9 mb"), Ok(3000));
    }

    #[test]
    fn full_names_win_over_their_prefixes() {
        assert_eq!(parse_size("1 kilobyte"), Ok(1000));
        assert_eq!(parse_size("2 tebibytes"), Ok(2_199_023_255_552));
    }

    #[test]
    fn rejects_input_without_a_size() {
        assert_eq!(
            parse_size(""),
            Err(SizeError::NoFilesizePattern(String::new()))
        );
        assert_eq!(
            parse_size("not a filesize"),
            Err(SizeError::NoFilesizePattern("not a filesize".to_string()))
        );
        assert_eq!(
            parse_size("12"),
            Err(SizeError::NoFilesizePattern("12".to_string()))
        );
    }
}
