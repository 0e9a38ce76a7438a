//! Fields and Target Types
//!
//! A [`TargetType`] is the class whose structural methods are generated: a
//! name plus its fields in declaration order. Declaration order is the
//! emission order of every generated method, so it is preserved exactly.

use rustc_hash::FxHashSet;

use crate::category::{classify, Category};
use crate::error::TargetTypeError;
use crate::ident::{is_identifier, obscures_java_package};
use crate::java_type::JavaType;

/// A classified field. The category is computed once, on construction.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Field {
    name: String,
    ty: JavaType,
    category: Category,
}

impl Field {
    pub fn new(ty: JavaType, name: impl Into<String>) -> Self {
        let category = classify(&ty);
        Field {
            name: name.into(),
            ty,
            category,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &JavaType {
        &self.ty
    }

    pub fn category(&self) -> Category {
        self.category
    }
}

/// The class being generated for.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TargetType {
    name: String,
    fields: Vec<Field>,
}

impl TargetType {
    /// Start describing a class named `name`.
    pub fn builder(name: impl Into<String>) -> TargetTypeBuilder {
        TargetTypeBuilder {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Builder for [`TargetType`].
///
/// [`build`](Self::build) is where the caller contract is enforced: names
/// must be valid Java identifiers, must not be `java`, and field names must
/// be unique.
#[derive(Clone, Debug)]
pub struct TargetTypeBuilder {
    name: String,
    fields: Vec<Field>,
}

impl TargetTypeBuilder {
    /// Append a field.
    #[must_use]
    pub fn field(mut self, ty: JavaType, name: impl Into<String>) -> Self {
        self.fields.push(Field::new(ty, name));
        self
    }

    /// Append a field in place.
    pub fn add_field(&mut self, ty: JavaType, name: impl Into<String>) -> &mut Self {
        self.fields.push(Field::new(ty, name));
        self
    }

    /// Validate and finish the description.
    pub fn build(self) -> Result<TargetType, TargetTypeError> {
        if !is_identifier(&self.name) {
            return Err(TargetTypeError::InvalidTypeName(self.name));
        }
        if obscures_java_package(&self.name) {
            return Err(TargetTypeError::TypeObscuresPackage(self.name));
        }

        {
            let mut seen = FxHashSet::default();
            for field in &self.fields {
                check_field_name(&self.name, field.name())?;
                if !seen.insert(field.name()) {
                    return Err(TargetTypeError::DuplicateField {
                        type_name: self.name.clone(),
                        name: field.name().to_string(),
                    });
                }
            }
        }

        Ok(TargetType {
            name: self.name,
            fields: self.fields,
        })
    }
}

/// Check that `name` can be declared as a field of `type_name`.
///
/// Uniqueness is checked by [`TargetTypeBuilder::build`]; this covers the
/// per-name rules for callers that declare fields the builder never sees.
pub fn check_field_name(type_name: &str, name: &str) -> Result<(), TargetTypeError> {
    if !is_identifier(name) {
        return Err(TargetTypeError::InvalidFieldName {
            type_name: type_name.to_string(),
            name: name.to_string(),
        });
    }
    if obscures_java_package(name) {
        return Err(TargetTypeError::FieldObscuresPackage {
            type_name: type_name.to_string(),
            name: name.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests;
