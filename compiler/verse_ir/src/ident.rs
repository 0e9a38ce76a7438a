//! Java identifier rules.

/// Reserved words, including the `true`/`false`/`null` literals.
const KEYWORDS: &[&str] = &[
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "false",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "true",
    "try",
    "void",
    "volatile",
    "while",
];

/// Check if `word` is a reserved Java word.
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

/// Check if `word` is the root package of the fully qualified names in
/// generated code. Declaring a class or field with this name obscures it.
pub fn obscures_java_package(word: &str) -> bool {
    word == "java"
}

/// Check if `word` is usable as a Java identifier.
///
/// ASCII-only: a letter, `_` or `$`, followed by letters, digits, `_` or `$`,
/// and not a reserved word. A lone `_` is reserved since Java 9.
pub fn is_identifier(word: &str) -> bool {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_' || first == '$') {
        return false;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') {
        return false;
    }
    word != "_" && !is_keyword(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_identifiers() {
        assert!(is_identifier("foo"));
        assert!(is_identifier("_bar"));
        assert!(is_identifier("$baz1"));
        assert!(is_identifier("Foo"));
    }

    #[test]
    fn rejects_keywords_and_literals() {
        assert!(!is_identifier("class"));
        assert!(!is_identifier("null"));
        assert!(!is_identifier("true"));
        assert!(!is_identifier("_"));
    }

    #[test]
    fn rejects_malformed_identifiers() {
        assert!(!is_identifier(""));
        assert!(!is_identifier("1abc"));
        assert!(!is_identifier("a-b"));
        assert!(!is_identifier("a b"));
    }

    #[test]
    fn only_java_obscures_the_package() {
        assert!(is_identifier("java"));
        assert!(obscures_java_package("java"));
        assert!(!obscures_java_package("Java"));
        assert!(!obscures_java_package("javax"));
    }
}
