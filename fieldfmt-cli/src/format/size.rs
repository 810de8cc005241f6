//! Memory size scaling and parsing

use once_cell::sync::Lazy;
use regex::Regex;

static SIZE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([+-]?(?:\d+(?:\.\d*)?|\.\d+))\s*([A-Za-z]*)\s*$")
        .expect("size pattern is valid")
});

/// Units used to display memory sizes, each 1024 times the previous one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoryUnit {
    Bytes,
    Kilobytes,
    Megabytes,
    Gigabytes,
    Terabytes,
    Petabytes,
}

impl MemoryUnit {
    /// All units, smallest first
    pub const ALL: [MemoryUnit; 6] = [
        MemoryUnit::Bytes,
        MemoryUnit::Kilobytes,
        MemoryUnit::Megabytes,
        MemoryUnit::Gigabytes,
        MemoryUnit::Terabytes,
        MemoryUnit::Petabytes,
    ];

    /// Power of 1024 of this unit
    pub fn exponent(&self) -> i32 {
        match self {
            MemoryUnit::Bytes => 0,
            MemoryUnit::Kilobytes => 1,
            MemoryUnit::Megabytes => 2,
            MemoryUnit::Gigabytes => 3,
            MemoryUnit::Terabytes => 4,
            MemoryUnit::Petabytes => 5,
        }
    }

    /// Number of bytes in one unit
    pub fn factor(&self) -> f64 {
        1024f64.powi(self.exponent())
    }

    /// Message key rendering a size in this unit
    pub fn message_key(&self) -> &'static str {
        match self {
            MemoryUnit::Bytes => "msg#system.memorySize.bytes",
            MemoryUnit::Kilobytes => "msg#system.memorySize.kb",
            MemoryUnit::Megabytes => "msg#system.memorySize.mb",
            MemoryUnit::Gigabytes => "msg#system.memorySize.gb",
            MemoryUnit::Terabytes => "msg#system.memorySize.tb",
            MemoryUnit::Petabytes => "msg#system.memorySize.pb",
        }
    }

    /// Parse a unit suffix: `b`, `k`, `kb`, `kib`, ... (case-insensitive).
    /// An empty suffix means bytes.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix.to_lowercase().as_str() {
            "" | "b" | "byte" | "bytes" => Some(MemoryUnit::Bytes),
            "k" | "kb" | "kib" => Some(MemoryUnit::Kilobytes),
            "m" | "mb" | "mib" => Some(MemoryUnit::Megabytes),
            "g" | "gb" | "gib" => Some(MemoryUnit::Gigabytes),
            "t" | "tb" | "tib" => Some(MemoryUnit::Terabytes),
            "p" | "pb" | "pib" => Some(MemoryUnit::Petabytes),
            _ => None,
        }
    }
}

/// Pick the largest unit whose scaled magnitude is at least 1
///
/// Returns the unit and the size expressed in it. Sizes below one kilobyte,
/// zero and NaN stay in bytes.
pub fn memory_size_unit(size: f64) -> (MemoryUnit, f64) {
    MemoryUnit::ALL
        .iter()
        .rev()
        .filter(|unit| **unit != MemoryUnit::Bytes)
        .map(|unit| (*unit, size / unit.factor()))
        .find(|(_, scaled)| scaled.abs() >= 1.0)
        .unwrap_or((MemoryUnit::Bytes, size))
}

/// Parse a human-written size such as `10 KB` or `1.5mb` into bytes
///
/// Returns `default` when the text is not a number with an optional known unit.
pub fn parse_memory_size(text: &str, default: f64) -> f64 {
    let Some(caps) = SIZE_PATTERN.captures(text) else {
        return default;
    };

    let Ok(number) = caps[1].parse::<f64>() else {
        return default;
    };

    match MemoryUnit::from_suffix(&caps[2]) {
        Some(unit) => number * unit.factor(),
        None => default,
    }
}
