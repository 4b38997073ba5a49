use std::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    SalaryHighLow,
    SalaryLowHigh,
    TitleAsc,
    TitleDesc,
}

impl SortKey {
    pub const ALL: [Self; 6] = [
        Self::Newest,
        Self::Oldest,
        Self::SalaryHighLow,
        Self::SalaryLowHigh,
        Self::TitleAsc,
        Self::TitleDesc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::SalaryHighLow => "salary-high-low",
            Self::SalaryLowHigh => "salary-low-high",
            Self::TitleAsc => "title-asc",
            Self::TitleDesc => "title-desc",
        }
    }

    /// Like [`str::parse`], but unknown names select [`SortKey::Newest`].
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown sort order {0:?}")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownSortKey(s.into()))
    }
}
