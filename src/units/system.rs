use crate::format::{format_size_with, DEFAULT_PATTERN};
use crate::units::{
    Denomination, BYTE, GIBIBYTE, GIGABYTE, KIBIBYTE, KILOBYTE, MEBIBYTE, MEGABYTE, TEBIBYTE,
    TERABYTE,
};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum UnitSystem {
    SI,
    Binary,
}

impl UnitSystem {
    pub const fn base(&self) -> u64 {
        match self {
            Self::SI => 1000,
            Self::Binary => 1024,
        }
    }

    pub const fn denominations(&self) -> [Denomination; 5] {
        match self {
            Self::SI => [BYTE, KILOBYTE, MEGABYTE, GIGABYTE, TERABYTE],
            Self::Binary => [BYTE, KIBIBYTE, MEBIBYTE, GIBIBYTE, TEBIBYTE],
        }
    }

    /// Picks the denomination whose scaled value stays below the system
    /// base, saturating at the largest unit.
    pub fn select(&self, bytes: u64) -> Denomination {
        let base = self.base() as f64;
        let units = self.denominations();

        for denomination in units {
            if bytes as f64 / (denomination.scale_factor as f64) < base {
                return denomination;
            }
        }

        units[units.len() - 1]
    }

    pub fn format(&self, bytes: u64) -> String {
        format_size_with(DEFAULT_PATTERN, bytes, *self, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_selects_byte() {
        assert_eq!(UnitSystem::SI.select(0), BYTE);
        assert_eq!(UnitSystem::Binary.select(0), BYTE);
    }

    #[test]
    fn selection_respects_the_system_base() {
        assert_eq!(UnitSystem::SI.select(999), BYTE);
        assert_eq!(UnitSystem::SI.select(1000), KILOBYTE);
        assert_eq!(UnitSystem::Binary.select(1023), BYTE);
        assert_eq!(UnitSystem::Binary.select(1024), KIBIBYTE);

        assert_eq!(UnitSystem::SI.select(2048), KILOBYTE);
        assert_eq!(UnitSystem::Binary.select(2048), KIBIBYTE);
    }

    #[test]
    fn selection_saturates_at_the_largest_unit() {
        assert_eq!(UnitSystem::SI.select(u64::MAX), TERABYTE);
        assert_eq!(UnitSystem::Binary.select(u64::MAX), TEBIBYTE);
    }

    #[test]
    fn format_uses_one_decimal_and_abbreviations() {
        assert_eq!(UnitSystem::SI.format(92874), "92.9 KB");
        assert_eq!(UnitSystem::Binary.format(2048), "2.0 KiB");
    }
}
