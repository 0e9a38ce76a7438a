//! Structural Method Synthesis for Java
//!
//! Generates `equals`, `hashCode` and `toString` for a class from its field
//! list.
//!
//! # Architecture
//!
//! ```text
//! TargetType (verse_ir)
//!        ↓
//!   fragments     (one sub-expression per field, chosen by Category)
//!        ↓
//!   assemble      (fragments joined into a method skeleton)
//!        ↓
//!   MethodSpec    (attached to a ClassBuilder or printed directly)
//!        ↓
//!   printer       (Java source through an Emitter)
//! ```
//!
//! # Example
//!
//! ```
//! use verse_codegen::{build_equals, render_method, GenConfig};
//! use verse_ir::{JavaType, PrimitiveKind, TargetType};
//!
//! let target = TargetType::builder("Point")
//!     .field(JavaType::Primitive(PrimitiveKind::Int), "x")
//!     .field(JavaType::Primitive(PrimitiveKind::Int), "y")
//!     .build()
//!     .unwrap();
//!
//! let source = render_method(&build_equals(&target), &GenConfig::default());
//! assert!(source.contains("return this.x == that.x\n        && this.y == that.y;"));
//! ```

pub mod assemble;
pub mod ast;
pub mod class;
pub mod config;
pub mod emitter;
pub mod fragments;
pub mod method;
pub mod printer;

pub use assemble::{attach, build_equals, build_hash_code, build_to_string, generate};
pub use class::{ClassBuilder, ClassSpec, FieldSpec};
pub use config::{ConfigError, GenConfig, HashStrategy, MethodSelection, INDENT_WIDTH};
pub use emitter::{Emitter, FileEmitter, StringEmitter};
pub use method::{MethodBuilder, MethodSpec, Modifier, Param};
pub use printer::{render_class, render_expr, render_method, Printer};
