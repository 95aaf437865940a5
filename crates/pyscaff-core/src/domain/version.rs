//! Release versions: `major[.minor[.micro]]` plus an optional pre-release tag.
//!
//! Comparison follows the usual Python convention: release segments compare
//! numerically with missing segments treated as zero (`3.9 == 3.9.0`), then a
//! pre-release sorts before its final release (`3.13rc1 < 3.13`).

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

static VERSION_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<release>[0-9]+(?:\.[0-9]+){0,2})(?:(?P<pre>alpha|beta|rc|a|b)(?:[-_.]?(?P<pre_n>[0-9]+))?)?$",
    )
    .unwrap()
});

/// Maximum number of release segments (major, minor, micro).
pub const MAX_SEGMENTS: usize = 3;

// ── PreRelease ───────────────────────────────────────────────────────────────

/// Pre-release phase. Variant order is sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreReleaseKind {
    Alpha,
    Beta,
    Rc,
}

impl PreReleaseKind {
    /// Normalized spelling (`alpha` → `a`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Alpha => "a",
            Self::Beta => "b",
            Self::Rc => "rc",
        }
    }

    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "a" | "alpha" => Some(Self::Alpha),
            "b" | "beta" => Some(Self::Beta),
            "rc" => Some(Self::Rc),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PreRelease {
    pub kind: PreReleaseKind,
    pub number: u64,
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.as_str(), self.number)
    }
}

// ── Version ──────────────────────────────────────────────────────────────────

/// A release version.
///
/// Equality and hashing agree with ordering, so `3.9` and `3.9.0` are the
/// same version even though they print differently.
#[derive(Debug, Clone)]
pub struct Version {
    release: Vec<u64>,
    pre: Option<PreRelease>,
}

impl Version {
    /// Build a final release from its segments.
    ///
    /// # Panics
    /// Panics if `release` is empty or longer than [`MAX_SEGMENTS`]; the
    /// catalog is the only caller and its table is fixed.
    pub(crate) fn from_release(release: &[u64]) -> Self {
        assert!(
            (1..=MAX_SEGMENTS).contains(&release.len()),
            "release must have 1 to {MAX_SEGMENTS} segments"
        );
        Self {
            release: release.to_vec(),
            pre: None,
        }
    }

    pub fn release(&self) -> &[u64] {
        &self.release
    }

    pub fn major(&self) -> u64 {
        self.release[0]
    }

    pub fn minor(&self) -> Option<u64> {
        self.release.get(1).copied()
    }

    pub fn micro(&self) -> Option<u64> {
        self.release.get(2).copied()
    }

    pub fn pre(&self) -> Option<PreRelease> {
        self.pre
    }

    /// Release segment `index`, zero when absent.
    pub fn segment(&self, index: usize) -> u64 {
        self.release.get(index).copied().unwrap_or(0)
    }

    fn significant_release(&self) -> &[u64] {
        let len = self
            .release
            .iter()
            .rposition(|&n| n != 0)
            .map_or(0, |i| i + 1);
        &self.release[..len]
    }
}

impl FromStr for Version {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = VERSION_GRAMMAR.captures(s).ok_or_else(|| {
            DomainError::invalid_version(s, "expected major[.minor[.micro]] with optional a/b/rc tag")
        })?;

        let release = caps["release"]
            .split('.')
            .map(|seg| {
                seg.parse::<u64>()
                    .map_err(|_| DomainError::invalid_version(s, "release segment out of range"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let pre = match caps.name("pre") {
            Some(tag) => {
                let kind = PreReleaseKind::from_tag(tag.as_str())
                    .ok_or_else(|| DomainError::invalid_version(s, "unknown pre-release tag"))?;
                let number = match caps.name("pre_n") {
                    Some(n) => n.as_str().parse::<u64>().map_err(|_| {
                        DomainError::invalid_version(s, "pre-release number out of range")
                    })?,
                    None => 0,
                };
                Some(PreRelease { kind, number })
            }
            None => None,
        };

        Ok(Self { release, pre })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for seg in &self.release {
            if !first {
                f.write_str(".")?;
            }
            write!(f, "{seg}")?;
            first = false;
        }
        if let Some(pre) = self.pre {
            write!(f, "{pre}")?;
        }
        Ok(())
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let width = self.release.len().max(other.release.len());
        (0..width)
            .map(|i| self.segment(i).cmp(&other.segment(i)))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
            .then_with(|| match (self.pre, other.pre) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.cmp(&b),
            })
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant_release().hash(state);
        self.pre.hash(state);
    }
}

impl Serialize for Version {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
