//! Method Assemblers
//!
//! Each assembler walks the target's fields in declaration order, asks the
//! fragment emitters for one sub-expression per field, and wraps the result
//! in the method's fixed skeleton. All three walk the same list with the same
//! classification, which is what keeps `equals` and `hashCode` consistent.
//!
//! Assemblers never fail: a [`TargetType`] is already validated.

mod equals;
mod hash;
mod to_string;

use tracing::debug;
use verse_ir::{ClassName, JavaType, TargetType};

use crate::ast::known;
use crate::class::ClassBuilder;
use crate::config::{GenConfig, MethodSelection};
use crate::method::{MethodBuilder, MethodSpec, Modifier};

pub use equals::build_equals;
pub use hash::build_hash_code;
pub use to_string::build_to_string;

/// The target class as a type, referenced by its simple name.
fn self_type(target: &TargetType) -> JavaType {
    JavaType::Class(ClassName::new("", target.name()))
}

/// `@Override public <returns> <name>()`
fn override_method(name: &str, returns: JavaType) -> MethodBuilder {
    MethodBuilder::new(name)
        .annotation(known::override_annotation())
        .modifier(Modifier::Public)
        .returns(returns)
}

/// Generate the selected methods, in the order `equals`, `hashCode`,
/// `toString`.
pub fn generate(
    target: &TargetType,
    config: &GenConfig,
    selection: MethodSelection,
) -> Vec<MethodSpec> {
    debug!(
        type_name = target.name(),
        fields = target.len(),
        hash = config.hash_strategy.name(),
        "generating structural methods"
    );

    let mut methods = Vec::with_capacity(3);
    if selection.equals {
        methods.push(build_equals(target));
    }
    if selection.hash_code {
        methods.push(build_hash_code(target, config.hash_strategy));
    }
    if selection.to_string {
        methods.push(build_to_string(target));
    }
    methods
}

/// Generate the selected methods and attach them to `class`.
pub fn attach(
    class: &mut ClassBuilder,
    target: &TargetType,
    config: &GenConfig,
    selection: MethodSelection,
) {
    for method in generate(target, config, selection) {
        class.add_method(method);
    }
}
