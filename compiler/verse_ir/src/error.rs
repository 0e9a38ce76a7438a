//! Errors raised while describing a target type.
//!
//! These are the only failures in the pipeline: once a [`crate::TargetType`]
//! has been built, generation cannot fail.

use thiserror::Error;

/// A declared field type that cannot be turned into a [`crate::JavaType`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TypeParseError {
    #[error("empty type")]
    Empty,

    #[error("`void` is not a field type")]
    Void,

    #[error("generic type `{0}` is not supported")]
    Generic(String),

    #[error("malformed array type `{0}`")]
    MalformedArray(String),

    #[error("invalid type name `{0}`")]
    InvalidName(String),
}

/// A target type description that violates the caller contract.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TargetTypeError {
    #[error("invalid type name `{0}`")]
    InvalidTypeName(String),

    #[error("invalid field name `{name}` in `{type_name}`")]
    InvalidFieldName { type_name: String, name: String },

    #[error("duplicate field `{name}` in `{type_name}`")]
    DuplicateField { type_name: String, name: String },

    /// Generated code names its helpers as `java.util.Objects` and so on; a
    /// class or field named `java` obscures that package inside the class.
    #[error("type name `{0}` obscures the `java` package")]
    TypeObscuresPackage(String),

    #[error("field `{name}` in `{type_name}` obscures the `java` package")]
    FieldObscuresPackage { type_name: String, name: String },
}
