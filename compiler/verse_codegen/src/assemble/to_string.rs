//! `toString()`

use tracing::trace;
use verse_ir::{JavaType, TargetType};

use super::override_method;
use crate::ast::{known, Expr, Stmt};
use crate::fragments::string_fragment;
use crate::method::MethodSpec;

const BUILDER: &str = "sb";
const SEPARATOR: &str = ", ";

fn append(arg: Expr) -> Stmt {
    Stmt::Expr(Expr::ident(BUILDER).call("append", vec![arg]))
}

/// Build `toString`, rendering `T{a=1, b=[2, 3]}`.
///
/// Appends run through a `StringBuilder` seeded with `T{`; the separator is
/// appended between fields only, never before the first or after the last.
pub fn build_to_string(target: &TargetType) -> MethodSpec {
    let method = override_method("toString", JavaType::string());
    if target.is_empty() {
        return method
            .statement(Stmt::Return(Expr::string(format!("{}{{}}", target.name()))))
            .build();
    }

    let mut body = vec![Stmt::Local {
        ty: JavaType::Class(known::string_builder()),
        name: BUILDER.to_string(),
        init: Expr::New {
            class: known::string_builder(),
            args: vec![Expr::string(format!("{}{{", target.name()))],
        },
    }];

    for (index, field) in target.fields().iter().enumerate() {
        trace!(field = field.name(), category = %field.category(), "string fragment");
        if index > 0 {
            body.push(append(Expr::string(SEPARATOR)));
        }
        body.push(append(Expr::string(format!("{}=", field.name()))));
        body.push(append(string_fragment(field)));
    }

    let closed = Expr::ident(BUILDER).call("append", vec![Expr::CharLit('}')]);
    body.push(Stmt::Return(closed.call("toString", Vec::new())));

    method.statements(body).build()
}
