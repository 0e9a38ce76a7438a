//! Fragment Emitters
//!
//! Per-field sub-expressions consumed by the method assemblers. Each emitter
//! is a closed match over [`Category`], so adding a category is a compile
//! error until every emitter handles it.
//!
//! | Category           | equals               | toString               |
//! |--------------------|----------------------|------------------------|
//! | `PrimitiveScalar`  | `this.f == that.f`   | `this.f`               |
//! | `PrimitiveArray`   | `Arrays.equals`      | `Arrays.toString`      |
//! | `ObjectArray`      | `Arrays.deepEquals`  | `Arrays.deepToString`  |
//! | `ObjectReference`  | `Objects.equals`     | `this.f`               |

use verse_ir::{Category, Field};

use crate::ast::{known, BinaryOp, Expr};
use crate::config::HashStrategy;

/// Name of the cast local holding the other instance in `equals`.
pub const THAT: &str = "that";

/// `that.name`
fn that_field(name: &str) -> Expr {
    Expr::ident(THAT).field(name)
}

/// Comparison of `this.f` against `that.f`.
pub fn equality_fragment(field: &Field) -> Expr {
    let name = field.name();
    let pair = || vec![Expr::this_field(name), that_field(name)];
    match field.category() {
        Category::PrimitiveScalar => {
            Expr::binary(BinaryOp::Eq, Expr::this_field(name), that_field(name))
        }
        Category::PrimitiveArray => Expr::static_call(known::arrays(), "equals", pair()),
        Category::ObjectArray => Expr::static_call(known::arrays(), "deepEquals", pair()),
        Category::ObjectReference => Expr::static_call(known::objects(), "equals", pair()),
    }
}

/// The value `field` contributes to the combined hash call.
pub fn hash_fragment(field: &Field, strategy: HashStrategy) -> Expr {
    let value = Expr::this_field(field.name());
    match (strategy, field.category()) {
        (HashStrategy::ArrayAware, Category::PrimitiveArray) => {
            Expr::static_call(known::arrays(), "hashCode", vec![value])
        }
        (HashStrategy::ArrayAware, Category::ObjectArray) => {
            Expr::static_call(known::arrays(), "deepHashCode", vec![value])
        }
        (HashStrategy::Compatible, _)
        | (
            HashStrategy::ArrayAware,
            Category::PrimitiveScalar | Category::ObjectReference,
        ) => value,
    }
}

/// The value appended for `field` in `toString`.
pub fn string_fragment(field: &Field) -> Expr {
    let value = Expr::this_field(field.name());
    match field.category() {
        Category::PrimitiveScalar | Category::ObjectReference => value,
        Category::PrimitiveArray => Expr::static_call(known::arrays(), "toString", vec![value]),
        Category::ObjectArray => Expr::static_call(known::arrays(), "deepToString", vec![value]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printer::render_expr;
    use verse_ir::{JavaType, PrimitiveKind};

    fn field(source: &str, name: &str) -> Field {
        let ty = JavaType::parse(source).unwrap_or_else(|e| panic!("{source}: {e}"));
        Field::new(ty, name)
    }

    #[test]
    fn equality_per_category() {
        let cases = [
            ("long", "this.f == that.f"),
            ("byte[]", "java.util.Arrays.equals(this.f, that.f)"),
            ("String[]", "java.util.Arrays.deepEquals(this.f, that.f)"),
            ("int[][]", "java.util.Arrays.deepEquals(this.f, that.f)"),
            ("String", "java.util.Objects.equals(this.f, that.f)"),
            ("Integer", "java.util.Objects.equals(this.f, that.f)"),
        ];
        for (source, expected) in cases {
            assert_eq!(render_expr(&equality_fragment(&field(source, "f"))), expected);
        }
    }

    #[test]
    fn string_per_category() {
        let cases = [
            ("boolean", "this.f"),
            ("char[]", "java.util.Arrays.toString(this.f)"),
            ("Object[]", "java.util.Arrays.deepToString(this.f)"),
            ("java.util.UUID", "this.f"),
        ];
        for (source, expected) in cases {
            assert_eq!(render_expr(&string_fragment(&field(source, "f"))), expected);
        }
    }

    #[test]
    fn compatible_hash_passes_raw_fields() {
        for source in ["int", "byte[]", "String[]", "String"] {
            assert_eq!(
                render_expr(&hash_fragment(&field(source, "f"), HashStrategy::Compatible)),
                "this.f"
            );
        }
    }

    #[test]
    fn array_aware_hash_wraps_arrays() {
        let hash = |source: &str| render_expr(&hash_fragment(&field(source, "f"), HashStrategy::ArrayAware));
        assert_eq!(hash("int"), "this.f");
        assert_eq!(hash("String"), "this.f");
        assert_eq!(hash("byte[]"), "java.util.Arrays.hashCode(this.f)");
        assert_eq!(hash("String[]"), "java.util.Arrays.deepHashCode(this.f)");
    }

    #[test]
    fn scalar_equality_is_a_binary_node() {
        let fragment = equality_fragment(&Field::new(
            JavaType::Primitive(PrimitiveKind::Double),
            "ratio",
        ));
        assert!(matches!(
            fragment,
            Expr::Binary {
                op: BinaryOp::Eq,
                ..
            }
        ));
    }
}
