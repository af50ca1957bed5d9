use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Country {
    #[default]
    India,
    UnitedStates,
    UnitedKingdom,
    Canada,
    Australia,
}

impl Country {
    pub const ALL: [Country; 5] = [
        Country::India,
        Country::UnitedStates,
        Country::UnitedKingdom,
        Country::Canada,
        Country::Australia,
    ];

    /// Two-letter code the news API expects.
    pub fn code(&self) -> &'static str {
        match self {
            Country::India => "in",
            Country::UnitedStates => "us",
            Country::UnitedKingdom => "gb",
            Country::Canada => "ca",
            Country::Australia => "au",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Country {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        Country::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or_else(|| {
                let codes: Vec<&str> = Country::ALL.iter().map(Country::code).collect();
                format!("unknown country '{}', expected one of: {}", s.trim(), codes.join(", "))
            })
    }
}

/// How many headlines one pass checks, always within `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HeadlineCount(u8);

impl HeadlineCount {
    pub const MIN: u8 = 3;
    pub const MAX: u8 = 15;
    pub const DEFAULT: u8 = 8;

    pub fn new(count: u8) -> Result<Self, String> {
        if (Self::MIN..=Self::MAX).contains(&count) {
            Ok(Self(count))
        } else {
            Err(format!(
                "headline count must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                count
            ))
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for HeadlineCount {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for HeadlineCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for HeadlineCount {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let count: u8 = s
            .trim()
            .parse()
            .map_err(|_| format!("'{}' is not a headline count", s.trim()))?;
        Self::new(count)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    pub country: Country,
    pub headline_count: HeadlineCount,
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "country={} count={}", self.country, self.headline_count)
    }
}
