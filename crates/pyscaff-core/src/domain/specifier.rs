//! Version specifier sets: `>=3.9,<3.13`, `~=3.10`, `!=3.11.2`, ...
//!
//! A set is a conjunction: a version is accepted only if every clause accepts
//! it.
//!
//! The strict grammar ([`FromStr`]) allows whitespace only after a comma:
//! `>=3.9, <3.13` parses, `>= 3.9` and `>=3.9 ,<3.13` do not. The lenient
//! [`SpecifierSet::parse`] used for rendering also tolerates whitespace around
//! clauses and between an operator and its version.
//!
//! # Compatible release
//!
//! `~=V` needs at least two release segments. It accepts versions `>= V` that
//! share every segment of `V` except the last:
//!
//! | Clause      | Equivalent             |
//! |-------------|------------------------|
//! | `~=3.9`     | `>=3.9, ==3.*`         |
//! | `~=3.9.2`   | `>=3.9.2, ==3.9.*`     |
//!
//! # Arbitrary equality
//!
//! `===V` compares the candidate's printed form against the clause text
//! character for character. `===3.10` accepts `3.10` but not `3.10.0`.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;
use crate::domain::version::Version;

// ── Operator ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `~=`
    Compatible,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `===`
    Arbitrary,
}

impl Operator {
    /// Longest tokens first so `===` is never read as `==`.
    const TOKENS: [(&'static str, Operator); 8] = [
        ("===", Operator::Arbitrary),
        ("~=", Operator::Compatible),
        ("==", Operator::Equal),
        ("!=", Operator::NotEqual),
        ("<=", Operator::LessEqual),
        (">=", Operator::GreaterEqual),
        ("<", Operator::Less),
        (">", Operator::Greater),
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Compatible => "~=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Arbitrary => "===",
        }
    }

    /// Split a leading operator token off `clause`.
    fn split_prefix(clause: &str) -> Option<(Self, &str)> {
        Self::TOKENS
            .iter()
            .find_map(|(token, op)| clause.strip_prefix(token).map(|rest| (*op, rest)))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Specifier ────────────────────────────────────────────────────────────────

/// One `(operator, version)` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specifier {
    operator: Operator,
    version: Version,
    /// Version text as written; `===` compares against this.
    literal: String,
}

impl Specifier {
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Whether `candidate` satisfies this clause.
    pub fn contains(&self, candidate: &Version) -> bool {
        let v = &self.version;
        match self.operator {
            Operator::Compatible => {
                let prefix = v.release().len() - 1;
                candidate >= v && (0..prefix).all(|i| candidate.segment(i) == v.segment(i))
            }
            Operator::Equal => candidate == v,
            Operator::NotEqual => candidate != v,
            Operator::LessEqual => candidate <= v,
            Operator::GreaterEqual => candidate >= v,
            Operator::Less => candidate < v,
            Operator::Greater => candidate > v,
            Operator::Arbitrary => candidate.to_string() == self.literal,
        }
    }

    /// Clause from an already-split operator and version text.
    fn build(source: &str, operator: Operator, literal: &str) -> Result<Self, DomainError> {
        let version: Version = literal
            .parse()
            .map_err(|e: DomainError| DomainError::invalid_specifier(source, e.to_string()))?;

        if operator == Operator::Compatible && version.release().len() < 2 {
            return Err(DomainError::invalid_specifier(
                source,
                "~= needs at least major.minor",
            ));
        }

        Ok(Self {
            operator,
            version,
            literal: literal.to_string(),
        })
    }

    /// Clause with whitespace around it and after the operator dropped.
    fn parse_tolerant(clause: &str) -> Result<Self, DomainError> {
        let trimmed = clause.trim();
        let (operator, rest) = Operator::split_prefix(trimmed)
            .ok_or_else(|| DomainError::invalid_specifier(clause, "missing comparison operator"))?;
        Self::build(clause, operator, rest.trim_start())
    }
}

impl FromStr for Specifier {
    type Err = DomainError;

    /// Exact clause text: no whitespace anywhere.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (operator, literal) = Operator::split_prefix(s)
            .ok_or_else(|| DomainError::invalid_specifier(s, "missing comparison operator"))?;
        Self::build(s, operator, literal)
    }
}

impl fmt::Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.literal)
    }
}

// ── SpecifierSet ─────────────────────────────────────────────────────────────

/// A conjunction of clauses. The empty set accepts every version.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecifierSet {
    specifiers: Vec<Specifier>,
}

impl SpecifierSet {
    /// The set with no clauses.
    pub fn unconstrained() -> Self {
        Self::default()
    }

    /// Lenient parse used by the rendering filters.
    ///
    /// Blank input is the unconstrained set. Whitespace around clauses and
    /// after an operator is dropped before the strict grammar applies;
    /// anything that still fails yields `None`. This never panics.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return Some(Self::unconstrained());
        }
        let specifiers = raw
            .split(',')
            .map(Specifier::parse_tolerant)
            .collect::<Result<Vec<_>, _>>()
            .ok()?;
        Some(Self { specifiers })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Specifier> {
        self.specifiers.iter()
    }

    pub fn len(&self) -> usize {
        self.specifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specifiers.is_empty()
    }

    /// Whether `candidate` satisfies every clause.
    pub fn contains(&self, candidate: &Version) -> bool {
        self.specifiers.iter().all(|s| s.contains(candidate))
    }

    /// Keep the versions this set accepts, in their original order.
    pub fn filter<'a, I>(&'a self, versions: I) -> impl Iterator<Item = Version> + 'a
    where
        I: IntoIterator<Item = Version>,
        I::IntoIter: 'a,
    {
        versions.into_iter().filter(move |v| self.contains(v))
    }
}

impl FromStr for SpecifierSet {
    type Err = DomainError;

    /// Strict parse: at least one clause, no empty clauses, and whitespace
    /// only directly after a comma.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(DomainError::invalid_specifier(s, "no clauses"));
        }

        let specifiers = s
            .split(',')
            .enumerate()
            .map(|(i, clause)| {
                let clause = if i == 0 { clause } else { clause.trim_start() };
                if clause.is_empty() {
                    Err(DomainError::invalid_specifier(s, "empty clause"))
                } else {
                    clause.parse::<Specifier>()
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { specifiers })
    }
}

impl fmt::Display for SpecifierSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, spec) in self.specifiers.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{spec}")?;
        }
        Ok(())
    }
}
