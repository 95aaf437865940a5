//! Supported Python release catalog.
//!
//! The catalog is a hand-maintained table: one [`ReleaseLine`] per
//! `major.minor` series with the newest micro release we track. Nothing is
//! probed from the running system.
//!
//! # Updating
//!
//! 1. Bump `latest_micro` when a series gets a new bugfix release
//! 2. Append a new line when a new minor series ships
//! 3. Keep the table sorted; `release_lines_are_sorted` enforces it

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::version::Version;

/// One `major.minor` series and its newest tracked micro release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseLine {
    pub major: u64,
    pub minor: u64,
    pub latest_micro: u64,
}

/// Every series a generated project may claim support for, oldest first.
pub static RELEASE_LINES: &[ReleaseLine] = &[
    ReleaseLine {
        major: 3,
        minor: 8,
        latest_micro: 20,
    },
    ReleaseLine {
        major: 3,
        minor: 9,
        latest_micro: 23,
    },
    ReleaseLine {
        major: 3,
        minor: 10,
        latest_micro: 18,
    },
    ReleaseLine {
        major: 3,
        minor: 11,
        latest_micro: 13,
    },
    ReleaseLine {
        major: 3,
        minor: 12,
        latest_micro: 11,
    },
];

// ── Precision ────────────────────────────────────────────────────────────────

/// How many release segments catalog entries carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    /// `3`
    Major,
    /// `3.11`
    #[default]
    Minor,
    /// `3.11.4`
    #[serde(alias = "patch")]
    Micro,
}

impl Precision {
    pub const ALL: [Precision; 3] = [Self::Major, Self::Minor, Self::Micro];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Micro => "micro",
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Precision {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "major" => Ok(Self::Major),
            "minor" => Ok(Self::Minor),
            "micro" | "patch" => Ok(Self::Micro),
            other => Err(DomainError::UnknownPrecision(other.to_string())),
        }
    }
}

// ── Enumeration ──────────────────────────────────────────────────────────────

/// Enumerate the catalog at `precision`, oldest first.
///
/// Each call starts a fresh walk over [`RELEASE_LINES`]; the returned
/// iterator is `Clone`, so a caller can also replay it.
pub fn catalog(precision: Precision) -> Releases {
    Releases {
        precision,
        line: 0,
        micro: 0,
        last_major: None,
    }
}

/// Lazy walk over the catalog. See [`catalog`].
#[derive(Debug, Clone)]
pub struct Releases {
    precision: Precision,
    line: usize,
    micro: u64,
    last_major: Option<u64>,
}

impl Iterator for Releases {
    type Item = Version;

    fn next(&mut self) -> Option<Version> {
        loop {
            let line = RELEASE_LINES.get(self.line)?;
            match self.precision {
                Precision::Major => {
                    self.line += 1;
                    if self.last_major == Some(line.major) {
                        continue;
                    }
                    self.last_major = Some(line.major);
                    return Some(Version::from_release(&[line.major]));
                }
                Precision::Minor => {
                    self.line += 1;
                    return Some(Version::from_release(&[line.major, line.minor]));
                }
                Precision::Micro => {
                    if self.micro > line.latest_micro {
                        self.line += 1;
                        self.micro = 0;
                        continue;
                    }
                    let version = Version::from_release(&[line.major, line.minor, self.micro]);
                    self.micro += 1;
                    return Some(version);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(precision: Precision) -> Vec<String> {
        catalog(precision).map(|v| v.to_string()).collect()
    }

    #[test]
    fn release_lines_are_sorted() {
        for pair in RELEASE_LINES.windows(2) {
            assert!(
                (pair[0].major, pair[0].minor) < (pair[1].major, pair[1].minor),
                "{pair:?} out of order"
            );
        }
    }

    #[test]
    fn major_precision_deduplicates() {
        assert_eq!(strings(Precision::Major), ["3"]);
    }

    #[test]
    fn minor_precision_lists_each_series() {
        assert_eq!(
            strings(Precision::Minor),
            ["3.8", "3.9", "3.10", "3.11", "3.12"]
        );
    }

    #[test]
    fn micro_precision_covers_every_bugfix_release() {
        let all = strings(Precision::Micro);
        let expected: u64 = RELEASE_LINES.iter().map(|l| l.latest_micro + 1).sum();
        assert_eq!(all.len() as u64, expected);
        assert_eq!(all.first().map(String::as_str), Some("3.8.0"));
        assert_eq!(all.last().map(String::as_str), Some("3.12.11"));
        assert!(all.contains(&"3.10.0".to_string()));
    }

    #[test]
    fn catalog_is_sorted_by_version() {
        for precision in Precision::ALL {
            let versions: Vec<Version> = catalog(precision).collect();
            assert!(versions.windows(2).all(|w| w[0] < w[1]), "{precision}");
        }
    }

    #[test]
    fn catalog_is_re_enumerable() {
        for precision in Precision::ALL {
            assert_eq!(strings(precision), strings(precision));
            let walk = catalog(precision);
            let replay = walk.clone();
            assert!(walk.eq(replay));
        }
    }

    #[test]
    fn precision_from_str() {
        assert_eq!("minor".parse::<Precision>().unwrap(), Precision::Minor);
        assert_eq!(" MICRO ".parse::<Precision>().unwrap(), Precision::Micro);
        assert_eq!("patch".parse::<Precision>().unwrap(), Precision::Micro);
        assert!(matches!(
            "nano".parse::<Precision>(),
            Err(DomainError::UnknownPrecision(_))
        ));
    }

    #[test]
    fn precision_defaults_to_minor() {
        assert_eq!(Precision::default(), Precision::Minor);
    }
}
