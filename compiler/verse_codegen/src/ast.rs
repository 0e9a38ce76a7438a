//! Java Syntax Tree
//!
//! The small slice of Java syntax that generated methods are made of.
//! Assemblers build these nodes; the printer turns them into text, adding
//! parentheses where precedence requires them.

use verse_ir::{ClassName, JavaType, PrimitiveKind};

/// Library classes referenced by generated code.
pub mod known {
    use verse_ir::{ClassName, JavaType};

    /// `java.util.Arrays`
    pub fn arrays() -> ClassName {
        ClassName::new("java.util", "Arrays")
    }

    /// `java.util.Objects`
    pub fn objects() -> ClassName {
        ClassName::new("java.util", "Objects")
    }

    /// `java.lang.Override`
    pub fn override_annotation() -> ClassName {
        ClassName::java_lang("Override")
    }

    /// `java.lang.StringBuilder`
    pub fn string_builder() -> ClassName {
        ClassName::java_lang("StringBuilder")
    }

    /// `java.lang.Object` as a type.
    pub fn object_type() -> JavaType {
        JavaType::Class(ClassName::java_lang("Object"))
    }
}

/// Binary operators used by generated code.
///
/// `&&` chains are usually [`Expr::And`]; the variant here supplies their
/// symbol and precedence.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Eq,
    And,
}

impl BinaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::And => "&&",
        }
    }

    /// Java precedence level. Higher number = binds less tightly.
    ///
    /// - 8: `==`
    /// - 12: `&&`
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Eq => 8,
            Self::And => 12,
        }
    }
}

/// Precedence of primary expressions (names, literals, calls, field access).
pub const PRIMARY: u8 = 0;
/// Precedence of a cast.
pub const CAST: u8 = 2;
/// Precedence of `instanceof` (relational level).
pub const INSTANCEOF: u8 = 7;

/// A Java expression.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Expr {
    This,
    Ident(String),
    /// `receiver.name`
    Field {
        receiver: Box<Expr>,
        name: String,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// Short-circuit conjunction, evaluated left to right.
    ///
    /// Empty is `true`; a single operand prints as itself.
    And(Vec<Expr>),
    /// `Class.method(args)`
    StaticCall {
        class: ClassName,
        method: String,
        args: Vec<Expr>,
    },
    /// `receiver.method(args)`
    MethodCall {
        receiver: Box<Expr>,
        method: String,
        args: Vec<Expr>,
    },
    InstanceOf {
        expr: Box<Expr>,
        ty: JavaType,
    },
    Cast {
        ty: JavaType,
        expr: Box<Expr>,
    },
    /// `new Class(args)`
    New {
        class: ClassName,
        args: Vec<Expr>,
    },
    StringLit(String),
    CharLit(char),
    BoolLit(bool),
    IntLit(i64),
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(name.into())
    }

    /// `this.name`
    pub fn this_field(name: &str) -> Self {
        Expr::This.field(name)
    }

    /// `self.name`
    #[must_use]
    pub fn field(self, name: &str) -> Self {
        Expr::Field {
            receiver: Box::new(self),
            name: name.to_string(),
        }
    }

    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn static_call(class: ClassName, method: &str, args: Vec<Expr>) -> Self {
        Expr::StaticCall {
            class,
            method: method.to_string(),
            args,
        }
    }

    /// `self.method(args)`
    #[must_use]
    pub fn call(self, method: &str, args: Vec<Expr>) -> Self {
        Expr::MethodCall {
            receiver: Box::new(self),
            method: method.to_string(),
            args,
        }
    }

    pub fn instance_of(expr: Expr, ty: JavaType) -> Self {
        Expr::InstanceOf {
            expr: Box::new(expr),
            ty,
        }
    }

    pub fn cast(ty: JavaType, expr: Expr) -> Self {
        Expr::Cast {
            ty,
            expr: Box::new(expr),
        }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expr::StringLit(value.into())
    }

    /// Precedence level of this expression, on the [`BinaryOp::precedence`]
    /// scale.
    pub fn precedence(&self) -> u8 {
        match self {
            Expr::Binary { op, .. } => op.precedence(),
            Expr::And(operands) => match operands.as_slice() {
                [] => PRIMARY,
                [single] => single.precedence(),
                _ => BinaryOp::And.precedence(),
            },
            Expr::InstanceOf { .. } => INSTANCEOF,
            Expr::Cast { .. } => CAST,
            Expr::This
            | Expr::Ident(_)
            | Expr::Field { .. }
            | Expr::StaticCall { .. }
            | Expr::MethodCall { .. }
            | Expr::New { .. }
            | Expr::StringLit(_)
            | Expr::CharLit(_)
            | Expr::BoolLit(_)
            | Expr::IntLit(_) => PRIMARY,
        }
    }
}

/// A Java statement.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Stmt {
    Return(Expr),
    /// Single-line guard: `if (cond) return value;`
    IfReturn { cond: Expr, value: Expr },
    If { cond: Expr, body: Vec<Stmt> },
    /// `Type name = init;`
    Local {
        ty: JavaType,
        name: String,
        init: Expr,
    },
    Expr(Expr),
}

/// `boolean`
pub const BOOLEAN: JavaType = JavaType::Primitive(PrimitiveKind::Boolean);
/// `int`
pub const INT: JavaType = JavaType::Primitive(PrimitiveKind::Int);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_ordering() {
        let eq = Expr::binary(BinaryOp::Eq, Expr::ident("a"), Expr::ident("b"));
        let and = Expr::And(vec![eq.clone(), eq.clone()]);
        assert!(eq.precedence() < and.precedence());
        assert_eq!(Expr::this_field("x").precedence(), PRIMARY);
        assert!(Expr::cast(BOOLEAN, Expr::ident("o")).precedence() < eq.precedence());
    }

    #[test]
    fn degenerate_and_chains() {
        assert_eq!(Expr::And(Vec::new()).precedence(), PRIMARY);
        let single = Expr::binary(BinaryOp::Eq, Expr::ident("a"), Expr::ident("b"));
        assert_eq!(
            Expr::And(vec![single.clone()]).precedence(),
            single.precedence()
        );
    }

    #[test]
    fn field_and_call_builders() {
        let expr = Expr::ident("sb").call("append", vec![Expr::string("x")]);
        let Expr::MethodCall { receiver, method, args } = expr else {
            panic!("expected method call");
        };
        assert_eq!(*receiver, Expr::ident("sb"));
        assert_eq!(method, "append");
        assert_eq!(args, vec![Expr::string("x")]);

        assert_eq!(
            Expr::this_field("foo"),
            Expr::Field {
                receiver: Box::new(Expr::This),
                name: "foo".to_string(),
            }
        );
    }

    #[test]
    fn operator_symbols() {
        assert_eq!(BinaryOp::Eq.as_symbol(), "==");
        assert_eq!(BinaryOp::And.as_symbol(), "&&");
        assert!(BinaryOp::Eq.precedence() < BinaryOp::And.precedence());
        assert!(INSTANCEOF < BinaryOp::Eq.precedence());
    }
}
