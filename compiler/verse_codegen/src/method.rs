//! Method Specifications
//!
//! [`MethodSpec`] is a finished method: annotations, modifiers, signature and
//! body statements. [`MethodBuilder`] assembles one step by step.

use std::fmt;

use verse_ir::{ClassName, JavaType};

use crate::ast::Stmt;
use crate::config::GenConfig;
use crate::printer::render_method;

/// Java modifiers for methods, fields and classes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    Static,
    Final,
    Transient,
    Volatile,
}

impl Modifier {
    /// All modifiers, in canonical declaration order.
    pub const ALL: [Self; 8] = [
        Self::Public,
        Self::Protected,
        Self::Private,
        Self::Abstract,
        Self::Static,
        Self::Final,
        Self::Transient,
        Self::Volatile,
    ];

    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::Abstract => "abstract",
            Self::Static => "static",
            Self::Final => "final",
            Self::Transient => "transient",
            Self::Volatile => "volatile",
        }
    }

    pub fn from_keyword(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|modifier| modifier.keyword() == word)
    }
}

/// A method parameter.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Param {
    pub ty: JavaType,
    pub name: String,
}

/// A complete method.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct MethodSpec {
    name: String,
    annotations: Vec<ClassName>,
    modifiers: Vec<Modifier>,
    /// `None` is `void`.
    returns: Option<JavaType>,
    params: Vec<Param>,
    body: Vec<Stmt>,
}

impl MethodSpec {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn annotations(&self) -> &[ClassName] {
        &self.annotations
    }

    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    pub fn returns(&self) -> Option<&JavaType> {
        self.returns.as_ref()
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    pub fn body(&self) -> &[Stmt] {
        &self.body
    }
}

impl fmt::Display for MethodSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_method(self, &GenConfig::default()))
    }
}

/// Builder for [`MethodSpec`].
#[derive(Clone, Debug)]
pub struct MethodBuilder {
    spec: MethodSpec,
}

impl MethodBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        MethodBuilder {
            spec: MethodSpec {
                name: name.into(),
                annotations: Vec::new(),
                modifiers: Vec::new(),
                returns: None,
                params: Vec::new(),
                body: Vec::new(),
            },
        }
    }

    #[must_use]
    pub fn annotation(mut self, annotation: ClassName) -> Self {
        self.spec.annotations.push(annotation);
        self
    }

    #[must_use]
    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.spec.modifiers.push(modifier);
        self
    }

    #[must_use]
    pub fn returns(mut self, ty: JavaType) -> Self {
        self.spec.returns = Some(ty);
        self
    }

    #[must_use]
    pub fn param(mut self, ty: JavaType, name: impl Into<String>) -> Self {
        self.spec.params.push(Param {
            ty,
            name: name.into(),
        });
        self
    }

    #[must_use]
    pub fn statement(mut self, stmt: Stmt) -> Self {
        self.spec.body.push(stmt);
        self
    }

    #[must_use]
    pub fn statements(mut self, stmts: impl IntoIterator<Item = Stmt>) -> Self {
        self.spec.body.extend(stmts);
        self
    }

    pub fn build(self) -> MethodSpec {
        self.spec
    }
}
