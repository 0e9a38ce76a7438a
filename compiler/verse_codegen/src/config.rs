//! Generation Configuration
//!
//! Controls indentation of the printed source, the hash combination
//! strategy, and which methods are generated.

use std::str::FromStr;

use thiserror::Error;

/// Default spaces per indentation level (matches javapoet output).
pub const INDENT_WIDTH: usize = 2;

/// How `hashCode` combines field values.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HashStrategy {
    /// Pass every field as-is to `Objects.hash`.
    ///
    /// Array fields hash by identity here while `equals` compares them by
    /// content, so two equal instances holding distinct but equal arrays can
    /// hash differently. Kept as the default for output compatibility.
    #[default]
    Compatible,

    /// Hash array fields with `Arrays.hashCode`/`Arrays.deepHashCode`,
    /// mirroring the shallow/deep split used by `equals`.
    ArrayAware,
}

impl HashStrategy {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Compatible => "compatible",
            Self::ArrayAware => "array-aware",
        }
    }
}

impl FromStr for HashStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compatible" => Ok(Self::Compatible),
            "array-aware" => Ok(Self::ArrayAware),
            other => Err(ConfigError::UnknownHashStrategy(other.to_string())),
        }
    }
}

/// Configuration for generation and printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenConfig {
    /// Indentation size in spaces.
    pub indent_size: usize,

    /// How `hashCode` treats array fields.
    pub hash_strategy: HashStrategy,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            indent_size: INDENT_WIDTH,
            hash_strategy: HashStrategy::default(),
        }
    }
}

impl GenConfig {
    /// Create a new config with the specified indent size.
    pub fn with_indent_size(indent_size: usize) -> Self {
        Self {
            indent_size,
            ..Default::default()
        }
    }

    /// Create a new config with the specified hash strategy.
    pub fn with_hash_strategy(hash_strategy: HashStrategy) -> Self {
        Self {
            hash_strategy,
            ..Default::default()
        }
    }

    /// Extra indentation for wrapped `&&` chains: two levels.
    #[inline]
    pub fn continuation_indent(&self) -> usize {
        self.indent_size * 2
    }
}

/// Which of the three methods to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MethodSelection {
    pub equals: bool,
    pub hash_code: bool,
    pub to_string: bool,
}

impl Default for MethodSelection {
    fn default() -> Self {
        Self::all()
    }
}

impl MethodSelection {
    /// Generate all three methods.
    pub const fn all() -> Self {
        Self {
            equals: true,
            hash_code: true,
            to_string: true,
        }
    }

    /// Generate nothing; combine with the public flags.
    pub const fn none() -> Self {
        Self {
            equals: false,
            hash_code: false,
            to_string: false,
        }
    }

    pub const fn is_empty(&self) -> bool {
        !(self.equals || self.hash_code || self.to_string)
    }
}

impl FromStr for MethodSelection {
    type Err = ConfigError;

    /// Parse a comma list such as `equals,hashCode`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut selection = Self::none();
        for item in s.split(',').map(str::trim).filter(|item| !item.is_empty()) {
            match item {
                "equals" => selection.equals = true,
                "hashCode" => selection.hash_code = true,
                "toString" => selection.to_string = true,
                other => return Err(ConfigError::UnknownMethod(other.to_string())),
            }
        }
        if selection.is_empty() {
            return Err(ConfigError::EmptySelection);
        }
        Ok(selection)
    }
}

/// Invalid configuration value.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown hash strategy `{0}` (expected `compatible` or `array-aware`)")]
    UnknownHashStrategy(String),

    #[error("unknown method `{0}` (expected `equals`, `hashCode` or `toString`)")]
    UnknownMethod(String),

    #[error("no methods selected")]
    EmptySelection,
}
