//! Class Specifications
//!
//! [`ClassBuilder`] is the sink generated methods are attached to. It carries
//! the class name and field declarations so a whole class can be printed.

use std::fmt;

use verse_ir::{JavaType, TargetType};

use crate::config::GenConfig;
use crate::method::{MethodSpec, Modifier};
use crate::printer::render_class;

/// A field declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FieldSpec {
    pub modifiers: Vec<Modifier>,
    pub ty: JavaType,
    pub name: String,
}

impl FieldSpec {
    pub fn new(ty: JavaType, name: impl Into<String>) -> Self {
        FieldSpec {
            modifiers: Vec::new(),
            ty,
            name: name.into(),
        }
    }

    #[must_use]
    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }
}

/// A complete class declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ClassSpec {
    name: String,
    modifiers: Vec<Modifier>,
    fields: Vec<FieldSpec>,
    methods: Vec<MethodSpec>,
}

impl ClassSpec {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn methods(&self) -> &[MethodSpec] {
        &self.methods
    }
}

impl fmt::Display for ClassSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_class(self, &GenConfig::default()))
    }
}

/// Builder for [`ClassSpec`].
#[derive(Clone, Debug)]
pub struct ClassBuilder {
    spec: ClassSpec,
}

impl ClassBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        ClassBuilder {
            spec: ClassSpec {
                name: name.into(),
                modifiers: Vec::new(),
                fields: Vec::new(),
                methods: Vec::new(),
            },
        }
    }

    /// A class declaring exactly the fields of `target`, without modifiers.
    pub fn from_target(target: &TargetType) -> Self {
        let mut builder = Self::new(target.name());
        for field in target.fields() {
            builder.add_field(FieldSpec::new(field.ty().clone(), field.name()));
        }
        builder
    }

    #[must_use]
    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.spec.modifiers.push(modifier);
        self
    }

    pub fn add_field(&mut self, field: FieldSpec) -> &mut Self {
        self.spec.fields.push(field);
        self
    }

    /// Attach a finished method.
    pub fn add_method(&mut self, method: MethodSpec) -> &mut Self {
        self.spec.methods.push(method);
        self
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    pub fn build(self) -> ClassSpec {
        self.spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::MethodBuilder;
    use verse_ir::PrimitiveKind;

    #[test]
    fn from_target_copies_fields_in_order() {
        let target = TargetType::builder("Foo")
            .field(JavaType::Primitive(PrimitiveKind::Long), "foo")
            .field(JavaType::string(), "baz")
            .build()
            .unwrap_or_else(|e| panic!("{e}"));

        let class = ClassBuilder::from_target(&target).build();
        let names: Vec<&str> = class.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["foo", "baz"]);
        assert_eq!(class.name(), "Foo");
        assert!(class.fields().iter().all(|f| f.modifiers.is_empty()));
    }

    #[test]
    fn add_method_appends() {
        let mut builder = ClassBuilder::new("Foo").modifier(Modifier::Final);
        builder
            .add_method(MethodBuilder::new("a").build())
            .add_method(MethodBuilder::new("b").build());
        assert_eq!(builder.name(), "Foo");

        let class = builder.build();
        let names: Vec<&str> = class.methods().iter().map(MethodSpec::name).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(class.modifiers(), [Modifier::Final]);
    }
}
