//! Scheme selection and cipher configuration.
//!
//! [`CipherConfig`] names a scheme and a strength and builds the matching
//! `Box<dyn Transposition>`. Callers never branch on the scheme
//! themselves; they hold the trait object.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use gyre_core::{Strength, Transposition, TranspositionError};

use crate::gravity::GravitySpiralCipher;

// ── SchemeKind ─────────────────────────────────────────────────────

/// The transposition schemes this build can construct.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SchemeKind {
    /// Inward spiral placement with radial tier permutation.
    #[default]
    GravitySpiral,
}

impl SchemeKind {
    /// Every available scheme.
    pub const ALL: [SchemeKind; 1] = [SchemeKind::GravitySpiral];

    /// Canonical configuration name.
    pub fn name(self) -> &'static str {
        match self {
            Self::GravitySpiral => GravitySpiralCipher::NAME,
        }
    }
}

impl fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SchemeKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gravity-spiral" | "gravity_spiral" | "blackhole" => Ok(Self::GravitySpiral),
            _ => Err(ConfigError::UnknownScheme {
                name: s.trim().to_string(),
            }),
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while parsing a [`CipherConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The scheme name is not recognised.
    UnknownScheme {
        /// The rejected name.
        name: String,
    },
    /// A setting key is not recognised.
    UnknownKey {
        /// The rejected key.
        key: String,
    },
    /// A settings line is not of the form `key = value`.
    MalformedLine {
        /// 1-based line number.
        line: usize,
        /// The offending line, trimmed.
        content: String,
    },
    /// The strength value is invalid.
    Strength(TranspositionError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownScheme { name } => write!(f, "unknown scheme '{name}'"),
            Self::UnknownKey { key } => write!(f, "unknown setting '{key}'"),
            Self::MalformedLine { line, content } => {
                write!(f, "line {line}: expected 'key = value', got '{content}'")
            }
            Self::Strength(e) => write!(f, "strength: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Strength(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TranspositionError> for ConfigError {
    fn from(e: TranspositionError) -> Self {
        Self::Strength(e)
    }
}

// ── CipherConfig ───────────────────────────────────────────────────

/// Which scheme to run and at what strength.
///
/// # Examples
///
/// ```
/// use gyre_cipher::CipherConfig;
/// use gyre_core::Strength;
///
/// let config = CipherConfig::parse("scheme = blackhole\nstrength = extreme\n").unwrap();
/// assert_eq!(config.strength, Strength::Extreme);
///
/// let cipher = config.build();
/// let encoded = cipher.encode("hello world").unwrap();
/// assert_eq!(cipher.decode(&encoded).unwrap(), "HELLOWORLD");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CipherConfig {
    /// Scheme to construct. Default: gravity spiral.
    pub scheme: SchemeKind,
    /// Permutation strength. Default: strong.
    pub strength: Strength,
}

impl CipherConfig {
    /// Start from the defaults and apply `(key, value)` settings in order.
    ///
    /// Recognised keys are `scheme` and `strength`; later settings
    /// override earlier ones.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = Self::default();
        for (key, value) in pairs {
            match key.trim().to_ascii_lowercase().as_str() {
                "scheme" => config.scheme = value.parse()?,
                "strength" => config.strength = value.parse()?,
                _ => {
                    return Err(ConfigError::UnknownKey {
                        key: key.trim().to_string(),
                    })
                }
            }
        }
        Ok(config)
    }

    /// Parse `key = value` lines. Blank lines and `#` comments are skipped.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let mut pairs = Vec::new();
        for (i, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (key, value) = line
                .split_once('=')
                .ok_or_else(|| ConfigError::MalformedLine {
                    line: i + 1,
                    content: line.to_string(),
                })?;
            pairs.push((key, value));
        }
        Self::from_pairs(pairs)
    }

    /// Construct the configured scheme.
    pub fn build(&self) -> Box<dyn Transposition> {
        match self.scheme {
            SchemeKind::GravitySpiral => Box::new(GravitySpiralCipher::new(self.strength)),
        }
    }
}
