use std::fmt;

use serde::{Deserialize, Serialize};

/// Stock/ETF symbol. Raw source strings sometimes carry parentheses
/// (e.g. `IOO(AU)`); those are stripped at construction so the same value
/// serves as display label and as the `<ticker>.csv` object key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ticker(String);

impl Ticker {
    pub fn new(raw: &str) -> Self {
        let cleaned: String = raw
            .trim()
            .chars()
            .filter(|c| *c != '(' && *c != ')')
            .collect();
        Ticker(cleaned)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the remotely stored price CSV for this ticker.
    pub fn object_name(&self) -> String {
        format!("{}.csv", self.0)
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_parentheses_from_raw_symbols() {
        assert_eq!(Ticker::new("IOO(AU)").as_str(), "IOOAU");
        assert_eq!(Ticker::new("(ETHI)").as_str(), "ETHI");
        assert_eq!(Ticker::new("VAS").as_str(), "VAS");
    }

    #[test]
    fn object_name_uses_cleaned_symbol() {
        assert_eq!(Ticker::new("IOO(AU)").object_name(), "IOOAU.csv");
    }

    #[test]
    fn label_never_contains_parentheses() {
        for raw in ["A(B)C", "((X))", "plain"] {
            let label = Ticker::new(raw).to_string();
            assert!(!label.contains('(') && !label.contains(')'));
        }
    }
}
