//! Verse IR - Field and Type Descriptions
//!
//! This crate contains the input model for the Verse method synthesizer:
//! - [`JavaType`]: the declared type of a field (primitive, array, or class)
//! - [`Category`]: the four-way classification that drives code generation
//! - [`Field`] and [`TargetType`]: the ordered field list of a class
//!
//! # Boundary
//!
//! Everything fallible lives here. [`JavaType::parse`] rejects declared types
//! the synthesizer cannot handle (`void`, generics), and
//! [`TargetTypeBuilder::build`] rejects invalid or duplicate names and names
//! that would obscure the `java` package. Once a [`TargetType`] exists,
//! classification and generation are total.

mod category;
mod error;
mod ident;
mod java_type;
mod target;

pub use category::{classify, Category};
pub use error::{TargetTypeError, TypeParseError};
pub use ident::{is_identifier, is_keyword};
pub use java_type::{ClassName, JavaType, PrimitiveKind};
pub use target::{check_field_name, Field, TargetType, TargetTypeBuilder};
