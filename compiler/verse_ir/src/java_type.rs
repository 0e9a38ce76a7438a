//! Declared Java Field Types
//!
//! Models the subset of Java types a field can be declared with: the eight
//! primitives, class references, and arrays of either (nested to any depth).
//! Generic types are deliberately absent; [`JavaType::parse`] rejects them.

use std::fmt;

use crate::error::TypeParseError;
use crate::ident::is_identifier;

/// The eight Java primitive types.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
}

impl PrimitiveKind {
    /// All primitive kinds, in JLS order.
    pub const ALL: [Self; 8] = [
        Self::Boolean,
        Self::Byte,
        Self::Short,
        Self::Int,
        Self::Long,
        Self::Char,
        Self::Float,
        Self::Double,
    ];

    /// Parse a primitive keyword (`int`, `boolean`, ...).
    pub fn from_keyword(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.keyword() == word)
    }

    /// The Java keyword for this primitive.
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Char => "char",
            Self::Float => "float",
            Self::Double => "double",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Simple names that resolve into `java.lang` without an import.
const JAVA_LANG: &[&str] = &[
    "Boolean",
    "Byte",
    "CharSequence",
    "Character",
    "Class",
    "Double",
    "Enum",
    "Float",
    "Integer",
    "Long",
    "Number",
    "Object",
    "Short",
    "String",
    "StringBuilder",
    "Void",
];

/// A (possibly package-qualified) class name.
///
/// An empty package means the class is referenced by its simple name, as a
/// class in the same package would be.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ClassName {
    package: String,
    simple_name: String,
}

impl ClassName {
    /// Create a class name from its parts.
    pub fn new(package: impl Into<String>, simple_name: impl Into<String>) -> Self {
        ClassName {
            package: package.into(),
            simple_name: simple_name.into(),
        }
    }

    /// A class in `java.lang`.
    pub fn java_lang(simple_name: &str) -> Self {
        Self::new("java.lang", simple_name)
    }

    /// Parse a dotted class name.
    ///
    /// A bare simple name from `java.lang` (`String`, `Integer`, ...) is
    /// qualified automatically.
    pub fn parse(source: &str) -> Result<Self, TypeParseError> {
        let segments: Vec<&str> = source.split('.').collect();
        if !segments.iter().all(|segment| is_identifier(segment)) {
            return Err(TypeParseError::InvalidName(source.to_string()));
        }

        match segments.split_last() {
            Some((simple, [])) if JAVA_LANG.contains(simple) => Ok(Self::java_lang(simple)),
            Some((simple, package)) => Ok(Self::new(package.join("."), *simple)),
            None => Err(TypeParseError::InvalidName(source.to_string())),
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.package.is_empty() {
            f.write_str(&self.simple_name)
        } else {
            write!(f, "{}.{}", self.package, self.simple_name)
        }
    }
}

/// The declared type of a field.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum JavaType {
    Primitive(PrimitiveKind),
    /// Array of the component type. `int[][]` is `Array(Array(int))`.
    Array(Box<JavaType>),
    Class(ClassName),
}

impl JavaType {
    /// `java.lang.String`
    pub fn string() -> Self {
        JavaType::Class(ClassName::java_lang("String"))
    }

    /// An array of `component`.
    pub fn array_of(component: JavaType) -> Self {
        JavaType::Array(Box::new(component))
    }

    /// Parse a declared field type such as `long`, `byte[]` or
    /// `java.util.UUID[][]`.
    pub fn parse(source: &str) -> Result<Self, TypeParseError> {
        let text = source.trim();
        if text.is_empty() {
            return Err(TypeParseError::Empty);
        }
        if text.contains('<') || text.contains('>') {
            return Err(TypeParseError::Generic(text.to_string()));
        }

        let mut base = text;
        let mut dimensions = 0usize;
        while let Some(rest) = base.strip_suffix("[]") {
            base = rest.trim_end();
            dimensions += 1;
        }
        if base.is_empty() || base.contains('[') || base.contains(']') {
            return Err(TypeParseError::MalformedArray(text.to_string()));
        }

        let mut ty = if base == "void" {
            return Err(TypeParseError::Void);
        } else if let Some(kind) = PrimitiveKind::from_keyword(base) {
            JavaType::Primitive(kind)
        } else {
            JavaType::Class(ClassName::parse(base)?)
        };

        for _ in 0..dimensions {
            ty = JavaType::array_of(ty);
        }
        Ok(ty)
    }
}

impl fmt::Display for JavaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JavaType::Primitive(kind) => write!(f, "{kind}"),
            JavaType::Array(component) => write!(f, "{component}[]"),
            JavaType::Class(name) => write!(f, "{name}"),
        }
    }
}
