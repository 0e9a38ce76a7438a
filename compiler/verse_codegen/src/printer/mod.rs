//! Java Source Printer
//!
//! Renders [`MethodSpec`] and [`ClassSpec`] trees as Java source through an
//! [`Emitter`]. Output follows javapoet conventions: one statement per line,
//! `&&` chains in a `return` broken one operand per line at a double
//! continuation indent, qualified library names.

mod parens;

use std::fmt::Write;

use crate::ast::{BinaryOp, Expr, Stmt, INSTANCEOF};
use crate::class::ClassSpec;
use crate::config::GenConfig;
use crate::emitter::{Emitter, StringEmitter};
use crate::method::MethodSpec;

pub use parens::{needs_parens, ParenPosition};

/// Render a method to a string.
pub fn render_method(method: &MethodSpec, config: &GenConfig) -> String {
    let mut emitter = StringEmitter::with_capacity(512);
    Printer::new(&mut emitter, config).print_method(method);
    emitter.output()
}

/// Render a class to a string.
pub fn render_class(class: &ClassSpec, config: &GenConfig) -> String {
    let mut emitter = StringEmitter::with_capacity(2048);
    Printer::new(&mut emitter, config).print_class(class);
    emitter.output()
}

/// Render an expression on a single line.
pub fn render_expr(expr: &Expr) -> String {
    let mut out = String::new();
    write_expr(&mut out, expr);
    out
}

/// Statement-level printer tracking the indentation level.
pub struct Printer<'a, E: Emitter> {
    emitter: &'a mut E,
    config: &'a GenConfig,
    level: usize,
}

impl<'a, E: Emitter> Printer<'a, E> {
    pub fn new(emitter: &'a mut E, config: &'a GenConfig) -> Self {
        Self {
            emitter,
            config,
            level: 0,
        }
    }

    /// Print annotations, signature and body of `method`.
    pub fn print_method(&mut self, method: &MethodSpec) {
        for annotation in method.annotations() {
            self.line(&format!("@{annotation}"));
        }

        let mut signature = String::new();
        for modifier in method.modifiers() {
            signature.push_str(modifier.keyword());
            signature.push(' ');
        }
        match method.returns() {
            Some(ty) => {
                let _ = write!(signature, "{ty}");
            }
            None => signature.push_str("void"),
        }
        let params: Vec<String> = method
            .params()
            .iter()
            .map(|param| format!("{} {}", param.ty, param.name))
            .collect();
        let _ = write!(signature, " {}({}) {{", method.name(), params.join(", "));
        self.line(&signature);

        self.level += 1;
        for stmt in method.body() {
            self.print_stmt(stmt);
        }
        self.level -= 1;
        self.line("}");
    }

    /// Print a class: header, fields, then methods separated by blank lines.
    pub fn print_class(&mut self, class: &ClassSpec) {
        let mut header = String::new();
        for modifier in class.modifiers() {
            header.push_str(modifier.keyword());
            header.push(' ');
        }
        let _ = write!(header, "class {} {{", class.name());
        self.line(&header);

        self.level += 1;
        for field in class.fields() {
            let mut decl = String::new();
            for modifier in &field.modifiers {
                decl.push_str(modifier.keyword());
                decl.push(' ');
            }
            let _ = write!(decl, "{} {};", field.ty, field.name);
            self.line(&decl);
        }
        for (index, method) in class.methods().iter().enumerate() {
            if index > 0 || !class.fields().is_empty() {
                self.emitter.emit_newline();
            }
            self.print_method(method);
        }
        self.level -= 1;
        self.line("}");
    }

    fn indent_spaces(&self) -> usize {
        self.level * self.config.indent_size
    }

    fn line(&mut self, text: &str) {
        self.emitter.emit_indent(self.indent_spaces());
        self.emitter.emit(text);
        self.emitter.emit_newline();
    }

    fn print_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Return(value) => self.wrapped_line("return ", value, ";"),
            Stmt::IfReturn { cond, value } => {
                self.line(&format!(
                    "if ({}) return {};",
                    render_expr(cond),
                    render_expr(value)
                ));
            }
            Stmt::If { cond, body } => {
                self.line(&format!("if ({}) {{", render_expr(cond)));
                self.level += 1;
                for inner in body {
                    self.print_stmt(inner);
                }
                self.level -= 1;
                self.line("}");
            }
            Stmt::Local { ty, name, init } => {
                self.wrapped_line(&format!("{ty} {name} = "), init, ";");
            }
            Stmt::Expr(expr) => self.wrapped_line("", expr, ";"),
        }
    }

    /// Print `prefix expr suffix`, breaking a top-level `&&` chain one
    /// operand per line.
    fn wrapped_line(&mut self, prefix: &str, expr: &Expr, suffix: &str) {
        let Expr::And(operands) = expr else {
            self.line(&format!("{prefix}{}{suffix}", render_expr(expr)));
            return;
        };
        if operands.len() < 2 {
            self.line(&format!("{prefix}{}{suffix}", render_expr(expr)));
            return;
        }

        let precedence = BinaryOp::And.precedence();
        let continuation = self.indent_spaces() + self.config.continuation_indent();
        self.emitter.emit_indent(self.indent_spaces());
        self.emitter.emit(prefix);
        for (index, operand) in operands.iter().enumerate() {
            let mut text = String::new();
            if index == 0 {
                write_operand(&mut text, operand, ParenPosition::BinaryLeft(precedence));
            } else {
                self.emitter.emit_newline();
                self.emitter.emit_indent(continuation);
                text.push_str("&& ");
                write_operand(&mut text, operand, ParenPosition::BinaryRight(precedence));
            }
            self.emitter.emit(&text);
        }
        self.emitter.emit(suffix);
        self.emitter.emit_newline();
    }
}

fn write_operand(out: &mut String, expr: &Expr, position: ParenPosition) {
    if needs_parens(expr, position) {
        out.push('(');
        write_expr(out, expr);
        out.push(')');
    } else {
        write_expr(out, expr);
    }
}

fn write_args(out: &mut String, args: &[Expr]) {
    out.push('(');
    for (index, arg) in args.iter().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        write_operand(out, arg, ParenPosition::Argument);
    }
    out.push(')');
}

fn write_expr(out: &mut String, expr: &Expr) {
    match expr {
        Expr::This => out.push_str("this"),
        Expr::Ident(name) => out.push_str(name),
        Expr::Field { receiver, name } => {
            write_operand(out, receiver, ParenPosition::Receiver);
            out.push('.');
            out.push_str(name);
        }
        Expr::Binary { op, lhs, rhs } => {
            let precedence = op.precedence();
            write_operand(out, lhs, ParenPosition::BinaryLeft(precedence));
            let _ = write!(out, " {} ", op.as_symbol());
            write_operand(out, rhs, ParenPosition::BinaryRight(precedence));
        }
        Expr::And(operands) => match operands.as_slice() {
            [] => out.push_str("true"),
            [single] => write_expr(out, single),
            [first, rest @ ..] => {
                let precedence = BinaryOp::And.precedence();
                write_operand(out, first, ParenPosition::BinaryLeft(precedence));
                for operand in rest {
                    out.push_str(" && ");
                    write_operand(out, operand, ParenPosition::BinaryRight(precedence));
                }
            }
        },
        Expr::StaticCall {
            class,
            method,
            args,
        } => {
            let _ = write!(out, "{class}.{method}");
            write_args(out, args);
        }
        Expr::MethodCall {
            receiver,
            method,
            args,
        } => {
            write_operand(out, receiver, ParenPosition::Receiver);
            out.push('.');
            out.push_str(method);
            write_args(out, args);
        }
        Expr::InstanceOf { expr, ty } => {
            write_operand(out, expr, ParenPosition::BinaryLeft(INSTANCEOF));
            let _ = write!(out, " instanceof {ty}");
        }
        Expr::Cast { ty, expr } => {
            let _ = write!(out, "({ty}) ");
            write_operand(out, expr, ParenPosition::CastOperand);
        }
        Expr::New { class, args } => {
            let _ = write!(out, "new {class}");
            write_args(out, args);
        }
        Expr::StringLit(value) => {
            out.push('"');
            for c in value.chars() {
                write_escaped(out, c, '"');
            }
            out.push('"');
        }
        Expr::CharLit(c) => {
            out.push('\'');
            write_escaped(out, *c, '\'');
            out.push('\'');
        }
        Expr::BoolLit(value) => {
            let _ = write!(out, "{value}");
        }
        Expr::IntLit(value) => {
            let _ = write!(out, "{value}");
        }
    }
}

/// Escape `c` for a Java literal delimited by `quote`.
fn write_escaped(out: &mut String, c: char, quote: char) {
    match c {
        '\\' => out.push_str("\\\\"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        c if c == quote => {
            out.push('\\');
            out.push(c);
        }
        c if c.is_control() => {
            let _ = write!(out, "\\u{:04x}", u32::from(c));
        }
        c => out.push(c),
    }
}
