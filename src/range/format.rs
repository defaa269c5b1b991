use std::{fmt, str::FromStr};

use crate::{FormatOption, NumberFormat, RangeError};

use super::FloatRange;

impl FloatRange {
    /// Renders the range as `[min, max]`, or `[max, min]` if `option.reverse_order` is set.
    pub fn to_string_in_simple_format(&self, option: &FormatOption) -> String {
        let min = option.number_format.format(self.min_value());
        let max = option.number_format.format(self.max_value());
        if option.reverse_order {
            format!("[{max}, {min}]")
        } else {
            format!("[{min}, {max}]")
        }
    }

    /// Same as [`to_string_in_simple_format`](Self::to_string_in_simple_format) with the
    /// number format given as a specifier string such as `"F2"` or `"0.0#"`.
    pub fn to_string_with_format(
        &self,
        number_format: Option<&str>,
        reverse_order: bool,
    ) -> Result<String, RangeError> {
        let number_format = match number_format {
            Some(s) => s.parse()?,
            None => NumberFormat::General,
        };
        Ok(self.to_string_in_simple_format(&FormatOption {
            number_format,
            reverse_order,
        }))
    }
}

impl fmt::Display for FloatRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min_value(), self.max_value())
    }
}

impl FromStr for FloatRange {
    type Err = RangeError;

    /// Parses `[a, b]`. The boundaries may be in either order.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (a, b) = s
            .trim()
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .and_then(|s| s.split_once(','))
            .ok_or_else(|| RangeError::Parse(s.to_owned()))?;
        Ok(FloatRange::new(a.trim().parse()?, b.trim().parse()?))
    }
}
