use std::str::FromStr;

use crate::RangeError;

/// How a single boundary value is rendered.
///
/// Parsed from .NET-style specifiers with [`FromStr`]:
///
/// | specifier            | format                                  |
/// |----------------------|-----------------------------------------|
/// | `""`, `G`, `R`       | [`NumberFormat::General`]               |
/// | `F`, `F3`, `N`, `N3` | [`NumberFormat::Fixed`] (default 2)     |
/// | `E`, `E3`            | [`NumberFormat::Exponential`] (default 6) |
/// | `0.00`, `0.0#`, `#`  | [`NumberFormat::Custom`]                |
///
/// Letters are case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberFormat {
    /// Shortest representation that round-trips, as [`std::fmt::Display`] prints it.
    #[default]
    General,
    /// Fixed number of digits after the decimal point.
    Fixed(usize),
    /// Scientific notation with the given number of digits after the decimal point.
    Exponential(usize),
    /// At least `min_decimals` and at most `max_decimals` digits after the decimal point.
    Custom {
        /// Number of `0` placeholders after the point.
        min_decimals: usize,
        /// Number of `0` and `#` placeholders after the point.
        max_decimals: usize,
    },
}

const MAX_PRECISION: usize = 99;

fn parse_precision(digits: &str, default: usize) -> Result<usize, RangeError> {
    if digits.is_empty() {
        return Ok(default);
    }
    match digits.parse::<usize>() {
        Ok(p) if p <= MAX_PRECISION => Ok(p),
        _ => Err(RangeError::InvalidPrecision(digits.to_owned())),
    }
}

fn parse_custom(s: &str) -> Result<NumberFormat, RangeError> {
    let invalid = || RangeError::InvalidNumberFormat(s.to_owned());
    let (integral, fraction) = match s.split_once('.') {
        Some((i, f)) => (i, f),
        None => (s, ""),
    };
    if !integral.chars().all(|c| matches!(c, '0' | '#'))
        || !fraction.chars().all(|c| matches!(c, '0' | '#'))
    {
        return Err(invalid());
    }
    // Zeros after a '#' are still optional digits.
    let min_decimals = fraction.chars().take_while(|&c| c == '0').count();
    let max_decimals = fraction.len();
    if max_decimals > MAX_PRECISION {
        return Err(RangeError::InvalidPrecision(fraction.to_owned()));
    }
    Ok(NumberFormat::Custom {
        min_decimals,
        max_decimals,
    })
}

impl FromStr for NumberFormat {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let Some(head) = chars.next() else {
            return Ok(NumberFormat::General);
        };
        let rest = chars.as_str();
        match head.to_ascii_uppercase() {
            'G' | 'R' if rest.is_empty() => Ok(NumberFormat::General),
            'F' | 'N' => Ok(NumberFormat::Fixed(parse_precision(rest, 2)?)),
            'E' => Ok(NumberFormat::Exponential(parse_precision(rest, 6)?)),
            '0' | '#' | '.' => parse_custom(s),
            _ => Err(RangeError::InvalidNumberFormat(s.to_owned())),
        }
    }
}

impl NumberFormat {
    /// Renders `value` in this format.
    pub fn format(&self, value: f32) -> String {
        match *self {
            NumberFormat::General => format!("{value}"),
            NumberFormat::Fixed(precision) => format!("{value:.precision$}"),
            NumberFormat::Exponential(precision) => format!("{value:.precision$e}"),
            NumberFormat::Custom {
                min_decimals,
                max_decimals,
            } => {
                let mut s = format!("{value:.max_decimals$}");
                if !value.is_finite() {
                    return s;
                }
                let mut optional = max_decimals - min_decimals;
                while optional > 0 && s.ends_with('0') {
                    s.pop();
                    optional -= 1;
                }
                if s.ends_with('.') {
                    s.pop();
                }
                s
            }
        }
    }
}

/// Options for [`FloatRange::to_string_in_simple_format`](crate::FloatRange::to_string_in_simple_format).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatOption {
    /// Format of each boundary value.
    pub number_format: NumberFormat,
    /// If true, the maximum is printed first.
    pub reverse_order: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    #[test]
    #[case(NumberFormat::General, "")]
    #[case(NumberFormat::General, "G")]
    #[case(NumberFormat::General, "r")]
    #[case(NumberFormat::Fixed(2), "F")]
    #[case(NumberFormat::Fixed(3), "f3")]
    #[case(NumberFormat::Fixed(0), "N0")]
    #[case(NumberFormat::Exponential(6), "E")]
    #[case(NumberFormat::Exponential(2), "e2")]
    #[case(NumberFormat::Custom { min_decimals: 2, max_decimals: 2 }, "0.00")]
    #[case(NumberFormat::Custom { min_decimals: 1, max_decimals: 3 }, "0.0##")]
    #[case(NumberFormat::Custom { min_decimals: 0, max_decimals: 2 }, "#.#0")]
    #[case(NumberFormat::Custom { min_decimals: 0, max_decimals: 0 }, "0")]
    fn test_parse(#[case] expect: NumberFormat, #[case] s: &str) {
        assert_eq!(Ok(expect), s.parse::<NumberFormat>());
    }

    #[rstest::rstest]
    #[test]
    #[case(RangeError::InvalidNumberFormat("X".to_owned()), "X")]
    #[case(RangeError::InvalidNumberFormat("G5".to_owned()), "G5")]
    #[case(RangeError::InvalidNumberFormat("0.0a".to_owned()), "0.0a")]
    #[case(RangeError::InvalidPrecision("x".to_owned()), "Fx")]
    #[case(RangeError::InvalidPrecision("100".to_owned()), "E100")]
    fn test_parse_err(#[case] expect: RangeError, #[case] s: &str) {
        assert_eq!(Err(expect), s.parse::<NumberFormat>());
    }

    #[rstest::rstest]
    #[test]
    #[case("2", NumberFormat::General, 2.0)]
    #[case("0.1", NumberFormat::General, 0.1)]
    #[case("-1.5", NumberFormat::General, -1.5)]
    #[case("2.00", NumberFormat::Fixed(2), 2.0)]
    #[case("3", NumberFormat::Fixed(0), 3.1)]
    #[case("1.50e3", NumberFormat::Exponential(2), 1500.0)]
    #[case("2.50", NumberFormat::Custom { min_decimals: 2, max_decimals: 2 }, 2.5)]
    #[case("2.5", NumberFormat::Custom { min_decimals: 1, max_decimals: 3 }, 2.5)]
    #[case("2.125", NumberFormat::Custom { min_decimals: 1, max_decimals: 3 }, 2.125)]
    #[case("2", NumberFormat::Custom { min_decimals: 0, max_decimals: 2 }, 2.0)]
    #[case("inf", NumberFormat::Custom { min_decimals: 0, max_decimals: 2 }, f32::INFINITY)]
    fn test_format(#[case] expect: &str, #[case] format: NumberFormat, #[case] value: f32) {
        assert_eq!(expect, format.format(value));
    }

    #[test]
    fn test_default_option() {
        let option = FormatOption::default();
        assert_eq!(NumberFormat::General, option.number_format);
        assert!(!option.reverse_order);
    }
}
