//! `equals(Object)`

use tracing::trace;
use verse_ir::TargetType;

use super::{override_method, self_type};
use crate::ast::{known, BinaryOp, Expr, Stmt, BOOLEAN};
use crate::fragments::{equality_fragment, THAT};
use crate::method::MethodSpec;

const PARAM: &str = "obj";

/// Build `equals`.
///
/// ```text
/// if (this == obj) return true;
/// if (obj instanceof T) {
///   T that = (T) obj;
///   return <field comparisons joined by &&>;
/// }
/// return false;
/// ```
///
/// A type without fields returns `true` straight from the type check.
pub fn build_equals(target: &TargetType) -> MethodSpec {
    let ty = self_type(target);
    let param = || Expr::ident(PARAM);

    let body = if target.is_empty() {
        vec![Stmt::Return(Expr::BoolLit(true))]
    } else {
        let comparisons = target
            .fields()
            .iter()
            .map(|field| {
                trace!(field = field.name(), category = %field.category(), "equality fragment");
                equality_fragment(field)
            })
            .collect();
        vec![
            Stmt::Local {
                ty: ty.clone(),
                name: THAT.to_string(),
                init: Expr::cast(ty.clone(), param()),
            },
            Stmt::Return(Expr::And(comparisons)),
        ]
    };

    override_method("equals", BOOLEAN)
        .param(known::object_type(), PARAM)
        .statement(Stmt::IfReturn {
            cond: Expr::binary(BinaryOp::Eq, Expr::This, param()),
            value: Expr::BoolLit(true),
        })
        .statement(Stmt::If {
            cond: Expr::instance_of(param(), ty),
            body,
        })
        .statement(Stmt::Return(Expr::BoolLit(false)))
        .build()
}
