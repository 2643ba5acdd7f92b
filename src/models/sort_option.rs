//! Sort keys offered by the catalog screen

use std::fmt;
use std::str::FromStr;

/// Which field the catalog is ordered by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOption {
    /// Ascending price (upstream like count)
    #[default]
    ByPrice,
    /// Ascending name (upstream color label)
    ByName,
}

impl SortOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::ByPrice => "price",
            SortOption::ByName => "name",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "price" | "by_price" => Ok(SortOption::ByPrice),
            "name" | "by_name" => Ok(SortOption::ByName),
            other => Err(format!("unknown sort option '{other}' (expected 'price' or 'name')")),
        }
    }
}
