//! Locale-aware number formatting

use serde::Deserialize;

/// Separators used by a locale when rendering numbers
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NumberSymbols {
    pub decimal: String,
    pub group: String,
}

impl Default for NumberSymbols {
    fn default() -> Self {
        Self {
            decimal: ".".to_string(),
            group: ",".to_string(),
        }
    }
}

/// How a number is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberStyle {
    #[default]
    Decimal,
    /// Multiply by 100 and append `%`
    Percent,
}

/// Number formatting options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub style: NumberStyle,
    /// Minimum fraction digits (padded with zeros)
    pub min_fraction: usize,
    /// Maximum fraction digits (rounded)
    pub max_fraction: usize,
    /// Use the group separator
    pub grouping: bool,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            style: NumberStyle::Decimal,
            min_fraction: 0,
            max_fraction: 3,
            grouping: true,
        }
    }
}

impl NumberFormat {
    /// Round to an integer
    pub fn integer() -> Self {
        Self {
            max_fraction: 0,
            ..Self::default()
        }
    }

    pub fn percent() -> Self {
        Self {
            style: NumberStyle::Percent,
            max_fraction: 0,
            ..Self::default()
        }
    }

    /// Parse a fraction skeleton such as `::.##` or `::.00#`
    ///
    /// Zeros set the minimum number of fraction digits, zeros and hashes
    /// together the maximum.
    pub fn from_skeleton(skeleton: &str) -> Option<Self> {
        let digits = skeleton.trim().strip_prefix("::")?.trim().strip_prefix('.')?;
        let zeros = digits.chars().take_while(|c| *c == '0').count();
        let hashes = digits[zeros..].chars().take_while(|c| *c == '#').count();
        if zeros + hashes != digits.len() {
            return None;
        }
        Some(Self {
            min_fraction: zeros,
            max_fraction: zeros + hashes,
            ..Self::default()
        })
    }
}

/// Format a number with the given options and separators
pub fn format_number(value: f64, format: &NumberFormat, symbols: &NumberSymbols) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }

    let value = match format.style {
        NumberStyle::Decimal => value,
        NumberStyle::Percent => value * 100.0,
    };
    let suffix = match format.style {
        NumberStyle::Decimal => "",
        NumberStyle::Percent => "%",
    };

    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{}∞{}", sign, suffix);
    }

    let max_fraction = format.max_fraction.max(format.min_fraction);
    let rounded = format!("{:.prec$}", value.abs(), prec = max_fraction);

    let (int_part, frac_part) = match rounded.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (rounded.as_str(), ""),
    };

    // Trim trailing zeros down to the minimum fraction length
    let mut frac = frac_part.to_string();
    while frac.len() > format.min_fraction && frac.ends_with('0') {
        frac.pop();
    }

    let int_part = if format.grouping {
        add_group_separator(int_part, &symbols.group)
    } else {
        int_part.to_string()
    };

    let is_zero = rounded.chars().all(|c| c == '0' || c == '.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    if frac.is_empty() {
        format!("{}{}{}", sign, int_part, suffix)
    } else {
        format!("{}{}{}{}{}", sign, int_part, symbols.decimal, frac, suffix)
    }
}

/// Add a group separator every 3 digits from the right
fn add_group_separator(digits: &str, separator: &str) -> String {
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            // Separator is reversed back below, push it reversed too
            result.extend(separator.chars().rev());
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
