//! `hashCode()`

use tracing::trace;
use verse_ir::{Category, TargetType};

use super::override_method;
use crate::ast::{known, Expr, Stmt, INT};
use crate::config::HashStrategy;
use crate::fragments::hash_fragment;
use crate::method::MethodSpec;

/// Build `hashCode`: one `Objects.hash` call over every field.
///
/// Under [`HashStrategy::Compatible`] a type without fields hashes to
/// `Objects.hash()`, a constant. A lone object-array field is cast to
/// `Object` so it is hashed as one value rather than spread into the varargs
/// array.
///
/// Under [`HashStrategy::ArrayAware`] the degenerate shapes skip the varargs
/// call: no fields returns `0`, a single field returns its own hash.
pub fn build_hash_code(target: &TargetType, strategy: HashStrategy) -> MethodSpec {
    let fields = target.fields();
    let value = match (strategy, fields) {
        (HashStrategy::ArrayAware, []) => Expr::IntLit(0),
        (HashStrategy::ArrayAware, [field]) => {
            let fragment = hash_fragment(field, strategy);
            if field.category().is_array() {
                fragment
            } else {
                Expr::static_call(known::objects(), "hashCode", vec![fragment])
            }
        }
        (HashStrategy::Compatible, [field]) if field.category() == Category::ObjectArray => {
            let fragment = Expr::cast(known::object_type(), hash_fragment(field, strategy));
            Expr::static_call(known::objects(), "hash", vec![fragment])
        }
        _ => {
            let args = fields
                .iter()
                .map(|field| {
                    trace!(field = field.name(), category = %field.category(), "hash fragment");
                    hash_fragment(field, strategy)
                })
                .collect();
            Expr::static_call(known::objects(), "hash", args)
        }
    };

    override_method("hashCode", INT)
        .statement(Stmt::Return(value))
        .build()
}
