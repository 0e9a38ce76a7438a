//! Type Classifier
//!
//! Maps a declared [`JavaType`] to the [`Category`] that decides how the
//! field is compared, hashed and formatted. The mapping is total: every
//! `JavaType` the parser accepts has exactly one category.

use std::fmt;

use crate::java_type::JavaType;

/// Four-way classification of a field's declared type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Category {
    /// `int`, `boolean`, `double`, ... compared with `==`.
    PrimitiveScalar,
    /// Array of a primitive; shallow array semantics.
    PrimitiveArray,
    /// Array of references or of arrays; deep array semantics.
    ObjectArray,
    /// Any other reference (boxed types and `String` included); null-safe.
    ObjectReference,
}

impl Category {
    pub const fn is_array(self) -> bool {
        matches!(self, Self::PrimitiveArray | Self::ObjectArray)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::PrimitiveScalar => "primitive scalar",
            Self::PrimitiveArray => "primitive array",
            Self::ObjectArray => "object array",
            Self::ObjectReference => "object reference",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify a declared type.
///
/// Arrays of arrays are object arrays: their elements are references, and
/// deep semantics are what recurse into the nested level.
pub fn classify(ty: &JavaType) -> Category {
    match ty {
        JavaType::Primitive(_) => Category::PrimitiveScalar,
        JavaType::Array(component) => match **component {
            JavaType::Primitive(_) => Category::PrimitiveArray,
            JavaType::Array(_) | JavaType::Class(_) => Category::ObjectArray,
        },
        JavaType::Class(_) => Category::ObjectReference,
    }
}
