//! Class Skeleton Input
//!
//! The `verse gen` input format: Java-like class declarations that list
//! fields and nothing else.
//!
//! ```text
//! public final class Foo {
//!     private final long foo;   // trailing comments are fine
//!     boolean bar;
//!     String[] names;
//!     static int instances;
//! }
//! ```
//!
//! Modifiers are kept for printing the whole class but never affect
//! classification. `static` fields are declared on the printed class and
//! excluded from the generated methods.

use std::iter::Peekable;
use std::vec::IntoIter;

use logos::Logos;
use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::debug;
use verse_codegen::{ClassBuilder, FieldSpec, Modifier};
use verse_ir::{check_field_name, JavaType, TargetType, TargetTypeError, TypeParseError};

/// Printed skeletons are top-level classes.
const CLASS_MODIFIERS: &[Modifier] = &[Modifier::Public, Modifier::Abstract, Modifier::Final];

const FIELD_MODIFIERS: &[Modifier] = &[
    Modifier::Public,
    Modifier::Protected,
    Modifier::Private,
    Modifier::Static,
    Modifier::Final,
    Modifier::Transient,
    Modifier::Volatile,
];

/// Modifier pairs javac rejects on one declaration.
const CONFLICTS: &[(Modifier, Modifier)] = &[
    (Modifier::Public, Modifier::Protected),
    (Modifier::Public, Modifier::Private),
    (Modifier::Protected, Modifier::Private),
    (Modifier::Abstract, Modifier::Final),
    (Modifier::Final, Modifier::Volatile),
];

/// Malformed skeleton input. Line numbers are 1-based.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("no class declarations found")]
    NoClasses,

    #[error("line {line}: unexpected character `{ch}`")]
    UnexpectedChar { line: usize, ch: char },

    #[error("line {line}: expected {expected}, found `{found}`")]
    Expected {
        line: usize,
        expected: &'static str,
        found: String,
    },

    #[error("line {line}: unexpected end of input, expected {expected}")]
    UnexpectedEof { line: usize, expected: &'static str },

    #[error("line {line}: `{modifier}` is not allowed on a {place}")]
    InvalidModifier {
        line: usize,
        modifier: &'static str,
        place: &'static str,
    },

    #[error("line {line}: repeated modifier `{modifier}`")]
    RepeatedModifier { line: usize, modifier: &'static str },

    #[error("line {line}: `{first}` cannot be combined with `{second}`")]
    ConflictingModifiers {
        line: usize,
        first: &'static str,
        second: &'static str,
    },

    #[error("line {line}: duplicate class `{name}`")]
    DuplicateClass { line: usize, name: String },

    #[error("line {line}: {source}")]
    Type {
        line: usize,
        #[source]
        source: TypeParseError,
    },

    #[error("line {line}: {source}")]
    Target {
        line: usize,
        #[source]
        source: TargetTypeError,
    },
}

/// One parsed class skeleton.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassDecl {
    line: usize,
    modifiers: Vec<Modifier>,
    fields: Vec<FieldSpec>,
    target: TargetType,
}

impl ClassDecl {
    pub fn name(&self) -> &str {
        self.target.name()
    }

    /// Line of the `class` keyword.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    /// Every declared field, `static` ones included, with modifiers.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// The instance fields the structural methods are generated from.
    pub fn target(&self) -> &TargetType {
        &self.target
    }

    /// A class builder declaring this skeleton, ready for generated methods.
    pub fn class_builder(&self) -> ClassBuilder {
        let mut builder = self
            .modifiers
            .iter()
            .fold(ClassBuilder::new(self.name()), |builder, &modifier| {
                builder.modifier(modifier)
            });
        for field in &self.fields {
            builder.add_field(field.clone());
        }
        builder
    }
}

/// Parse every class skeleton in `source`.
pub fn parse_classes(source: &str) -> Result<Vec<ClassDecl>, InputError> {
    let mut parser = Parser {
        tokens: tokenize(source)?.into_iter().peekable(),
        eof_line: source.lines().count().max(1),
    };

    let mut classes = Vec::new();
    let mut seen = FxHashSet::default();
    while parser.has_more() {
        let class = parser.class()?;
        if !seen.insert(class.name().to_string()) {
            return Err(InputError::DuplicateClass {
                line: class.line,
                name: class.name().to_string(),
            });
        }
        debug!(
            class = class.name(),
            line = class.line,
            fields = class.fields.len(),
            instance_fields = class.target.len(),
            "parsed class skeleton"
        );
        classes.push(class);
    }

    if classes.is_empty() {
        return Err(InputError::NoClasses);
    }
    Ok(classes)
}

// -- Tokens --

#[derive(Clone, Debug, PartialEq, Eq)]
enum TokenKind {
    /// Keyword, modifier, name or declared type (`java.lang.String[]`).
    Word(String),
    OpenBrace,
    CloseBrace,
    Semi,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Token {
    kind: TokenKind,
    line: usize,
}

impl Token {
    fn unexpected(self, expected: &'static str) -> InputError {
        let found = match self.kind {
            TokenKind::Word(word) => word,
            TokenKind::OpenBrace => "{".to_string(),
            TokenKind::CloseBrace => "}".to_string(),
            TokenKind::Semi => ";".to_string(),
        };
        InputError::Expected {
            line: self.line,
            expected,
            found,
        }
    }
}

/// Raw token from logos.
///
/// `<` and `>` are word characters so generic types reach `JavaType::parse`
/// and get its error.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\f]+")]
enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("\n")]
    Newline,

    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token(";")]
    Semi,

    #[regex(r"[A-Za-z0-9_$.\[\]<>]+")]
    Word,
}

fn tokenize(source: &str) -> Result<Vec<Token>, InputError> {
    let mut tokens = Vec::new();
    let mut line = 1;
    let mut lexer = RawToken::lexer(source);

    while let Some(result) = lexer.next() {
        let kind = match result {
            Ok(RawToken::LineComment) => continue,
            Ok(RawToken::Newline) => {
                line += 1;
                continue;
            }
            Ok(RawToken::OpenBrace) => TokenKind::OpenBrace,
            Ok(RawToken::CloseBrace) => TokenKind::CloseBrace,
            Ok(RawToken::Semi) => TokenKind::Semi,
            Ok(RawToken::Word) => TokenKind::Word(lexer.slice().to_string()),
            Err(()) => {
                let ch = lexer
                    .slice()
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(InputError::UnexpectedChar { line, ch });
            }
        };
        tokens.push(Token { kind, line });
    }
    Ok(tokens)
}

// -- Parser --

fn conflicts(a: Modifier, b: Modifier) -> bool {
    CONFLICTS
        .iter()
        .any(|&(x, y)| (x, y) == (a, b) || (x, y) == (b, a))
}

struct Parser {
    tokens: Peekable<IntoIter<Token>>,
    eof_line: usize,
}

impl Parser {
    fn has_more(&mut self) -> bool {
        self.tokens.peek().is_some()
    }

    fn next(&mut self, expected: &'static str) -> Result<Token, InputError> {
        self.tokens.next().ok_or(InputError::UnexpectedEof {
            line: self.eof_line,
            expected,
        })
    }

    fn word(&mut self, expected: &'static str) -> Result<(String, usize), InputError> {
        match self.next(expected)? {
            Token {
                kind: TokenKind::Word(word),
                line,
            } => Ok((word, line)),
            token => Err(token.unexpected(expected)),
        }
    }

    fn punct(&mut self, kind: &TokenKind, expected: &'static str) -> Result<(), InputError> {
        let token = self.next(expected)?;
        if token.kind == *kind {
            Ok(())
        } else {
            Err(token.unexpected(expected))
        }
    }

    /// Consume `}` if it is next.
    fn close_brace(&mut self) -> bool {
        self.tokens
            .next_if(|token| token.kind == TokenKind::CloseBrace)
            .is_some()
    }

    /// Leading modifiers, each allowed at `place`, given once, and free of
    /// conflicts with the others.
    fn modifiers(
        &mut self,
        allowed: &[Modifier],
        place: &'static str,
    ) -> Result<Vec<Modifier>, InputError> {
        let mut modifiers = Vec::new();
        while let Some(Token {
            kind: TokenKind::Word(word),
            line,
        }) = self.tokens.peek()
        {
            let Some(modifier) = Modifier::from_keyword(word) else {
                break;
            };
            let line = *line;
            if !allowed.contains(&modifier) {
                return Err(InputError::InvalidModifier {
                    line,
                    modifier: modifier.keyword(),
                    place,
                });
            }
            if modifiers.contains(&modifier) {
                return Err(InputError::RepeatedModifier {
                    line,
                    modifier: modifier.keyword(),
                });
            }
            if let Some(&earlier) = modifiers
                .iter()
                .find(|&&earlier| conflicts(earlier, modifier))
            {
                return Err(InputError::ConflictingModifiers {
                    line,
                    first: earlier.keyword(),
                    second: modifier.keyword(),
                });
            }
            modifiers.push(modifier);
            self.tokens.next();
        }
        Ok(modifiers)
    }

    /// A declared type; `int []` is accepted as `int[]`.
    fn declared_type(&mut self) -> Result<(JavaType, usize), InputError> {
        let (mut declared, line) = self.word("a field or `}`")?;
        while let Some(Token {
            kind: TokenKind::Word(suffix),
            ..
        }) = self.tokens.peek()
        {
            if !suffix.starts_with('[') {
                break;
            }
            declared.push_str(suffix);
            self.tokens.next();
        }
        let ty = JavaType::parse(&declared).map_err(|source| InputError::Type { line, source })?;
        Ok((ty, line))
    }

    fn class(&mut self) -> Result<ClassDecl, InputError> {
        let modifiers = self.modifiers(CLASS_MODIFIERS, "class")?;
        let (keyword, line) = self.word("`class`")?;
        if keyword != "class" {
            return Err(InputError::Expected {
                line,
                expected: "`class`",
                found: keyword,
            });
        }
        let (name, _) = self.word("a class name")?;
        self.punct(&TokenKind::OpenBrace, "`{`")?;

        let mut builder = TargetType::builder(name.as_str());
        let mut fields = Vec::new();
        let mut names = FxHashSet::default();
        while !self.close_brace() {
            let field_modifiers = self.modifiers(FIELD_MODIFIERS, "field")?;
            let (ty, field_line) = self.declared_type()?;
            let (field_name, _) = self.word("a field name")?;
            self.punct(&TokenKind::Semi, "`;`")?;

            // `static` fields never reach the builder, so names are checked here.
            let field_error = |source| InputError::Target {
                line: field_line,
                source,
            };
            check_field_name(&name, &field_name).map_err(field_error)?;
            if !names.insert(field_name.clone()) {
                return Err(field_error(TargetTypeError::DuplicateField {
                    type_name: name.clone(),
                    name: field_name,
                }));
            }

            if !field_modifiers.contains(&Modifier::Static) {
                builder.add_field(ty.clone(), field_name.as_str());
            }
            fields.push(FieldSpec {
                modifiers: field_modifiers,
                ty,
                name: field_name,
            });
        }

        let target = builder
            .build()
            .map_err(|source| InputError::Target { line, source })?;
        Ok(ClassDecl {
            line,
            modifiers,
            fields,
            target,
        })
    }
}

#[cfg(test)]
mod tests;
