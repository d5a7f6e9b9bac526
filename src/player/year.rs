use std::fmt;
use std::str::FromStr;

/// Eligibility year. Variants are declared in rank order, which is what
/// sorting uses; the labels themselves do not sort correctly as strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Year {
    Freshman,
    FreshmanRedshirt,
    Sophomore,
    SophomoreRedshirt,
    Junior,
    JuniorRedshirt,
    Senior,
    SeniorRedshirt,
}

impl Year {
    pub const ALL: [Year; 8] = [
        Year::Freshman,
        Year::FreshmanRedshirt,
        Year::Sophomore,
        Year::SophomoreRedshirt,
        Year::Junior,
        Year::JuniorRedshirt,
        Year::Senior,
        Year::SeniorRedshirt,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Year::Freshman => "FR",
            Year::FreshmanRedshirt => "FR (RS)",
            Year::Sophomore => "SO",
            Year::SophomoreRedshirt => "SO (RS)",
            Year::Junior => "JR",
            Year::JuniorRedshirt => "JR (RS)",
            Year::Senior => "SR",
            Year::SeniorRedshirt => "SR (RS)",
        }
    }

    /// Position in the rank table, starting at 0 for `FR`.
    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn from_label(label: &str) -> Option<Year> {
        Year::ALL.into_iter().find(|y| y.label() == label)
    }

    pub fn labels() -> impl Iterator<Item = &'static str> {
        Year::ALL.into_iter().map(Year::label)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Year {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Year::from_label(s).ok_or_else(|| format!("unknown year label: {}", s))
    }
}
