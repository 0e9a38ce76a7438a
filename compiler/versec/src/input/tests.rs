use super::*;
use pretty_assertions::assert_eq;
use verse_ir::{Category, PrimitiveKind};

fn parse_one(source: &str) -> ClassDecl {
    let mut classes = parse_classes(source).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(classes.len(), 1);
    classes.remove(0)
}

fn parse_err(source: &str) -> InputError {
    match parse_classes(source) {
        Ok(classes) => panic!("expected an error, parsed {classes:?}"),
        Err(e) => e,
    }
}

#[test]
fn parses_fields_in_declaration_order() {
    let class = parse_one(
        "\
class Foo {
    long foo;
    boolean bar;
    String baz;
}
",
    );
    assert_eq!(class.name(), "Foo");
    assert_eq!(class.line(), 1);

    let fields: Vec<(&str, Category)> = class
        .target()
        .fields()
        .iter()
        .map(|field| (field.name(), field.category()))
        .collect();
    assert_eq!(
        fields,
        [
            ("foo", Category::PrimitiveScalar),
            ("bar", Category::PrimitiveScalar),
            ("baz", Category::ObjectReference),
        ]
    );
}

#[test]
fn single_line_class() {
    let class = parse_one("class Foo { long foo; }");
    assert_eq!(class.target().len(), 1);
    assert_eq!(
        class.target().fields()[0].ty(),
        &JavaType::Primitive(PrimitiveKind::Long)
    );
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    let class = parse_one(
        "\
// leading comment

class Blob { // trailing
    // byte[] skipped;
    byte[] data;

    String[] names; // deep
}
",
    );
    let categories: Vec<Category> = class
        .target()
        .fields()
        .iter()
        .map(verse_ir::Field::category)
        .collect();
    assert_eq!(categories, [Category::PrimitiveArray, Category::ObjectArray]);
}

#[test]
fn spaced_array_brackets_join_the_type() {
    let class = parse_one("class Grid { int [] [] cells; }");
    assert_eq!(
        class.target().fields()[0].ty().to_string(),
        "int[][]"
    );
}

#[test]
fn modifiers_are_kept_for_printing() {
    let class = parse_one(
        "\
public final class Point {
    private final int x;
    private final int y;
}
",
    );
    assert_eq!(class.modifiers(), [Modifier::Public, Modifier::Final]);
    assert_eq!(
        class.fields()[0].modifiers,
        [Modifier::Private, Modifier::Final]
    );

    let printed = class.class_builder().build().to_string();
    assert_eq!(
        printed,
        "\
public final class Point {
  private final int x;
  private final int y;
}
"
    );
}

#[test]
fn static_fields_are_declared_but_not_generated() {
    let class = parse_one(
        "\
class Counter {
    static int instances;
    int value;
}
",
    );
    assert_eq!(class.fields().len(), 2);
    let names: Vec<&str> = class.target().fields().iter().map(|f| f.name()).collect();
    assert_eq!(names, ["value"]);
}

#[test]
fn several_classes() {
    let classes = parse_classes("class A { int a; }\nclass B { String b; }")
        .unwrap_or_else(|e| panic!("{e}"));
    let names: Vec<&str> = classes.iter().map(ClassDecl::name).collect();
    assert_eq!(names, ["A", "B"]);
    assert_eq!(classes[1].line(), 2);
}

#[test]
fn class_without_fields() {
    let class = parse_one("class Unit {}");
    assert!(class.target().is_empty());
}

// -- Errors --

#[test]
fn empty_input() {
    assert_eq!(parse_err(""), InputError::NoClasses);
    assert_eq!(parse_err("// nothing here\n\n"), InputError::NoClasses);
}

#[test]
fn unexpected_character_reports_line() {
    assert_eq!(
        parse_err("class Foo {\n  int x = 1;\n}"),
        InputError::UnexpectedChar { line: 2, ch: '=' }
    );
}

#[test]
fn missing_class_keyword() {
    assert_eq!(
        parse_err("interface Foo { }"),
        InputError::Expected {
            line: 1,
            expected: "`class`",
            found: "interface".to_string(),
        }
    );
}

#[test]
fn missing_semicolon() {
    assert_eq!(
        parse_err("class Foo {\n  int x\n}"),
        InputError::Expected {
            line: 3,
            expected: "`;`",
            found: "}".to_string(),
        }
    );
}

#[test]
fn unterminated_class() {
    assert_eq!(
        parse_err("class Foo {\n  int x;\n"),
        InputError::UnexpectedEof {
            line: 2,
            expected: "a field or `}`",
        }
    );
}

#[test]
fn bad_field_type_reports_its_line() {
    assert_eq!(
        parse_err("class Foo {\n  int x;\n  void y;\n}"),
        InputError::Type {
            line: 3,
            source: TypeParseError::Void,
        }
    );
    assert_eq!(
        parse_err("class Foo {\n  List<String> names;\n}"),
        InputError::Type {
            line: 2,
            source: TypeParseError::Generic("List<String>".to_string()),
        }
    );
}

#[test]
fn duplicate_field_reports_second_declaration() {
    let err = parse_err("class Foo {\n  int x;\n  long x;\n}");
    assert_eq!(err.to_string(), "line 3: duplicate field `x` in `Foo`");
}

#[test]
fn keyword_field_name() {
    let err = parse_err("class Foo {\n  int class;\n}");
    assert_eq!(err.to_string(), "line 2: invalid field name `class` in `Foo`");
}

#[test]
fn java_field_name_obscures_package() {
    let err = parse_err("class Foo {\n  String s;\n  int java;\n}");
    assert_eq!(
        err.to_string(),
        "line 3: field `java` in `Foo` obscures the `java` package"
    );

    assert_eq!(
        parse_err("class Foo {\n  static long java;\n}"),
        InputError::Target {
            line: 2,
            source: TargetTypeError::FieldObscuresPackage {
                type_name: "Foo".to_string(),
                name: "java".to_string(),
            },
        }
    );
}

#[test]
fn java_class_name_obscures_package() {
    assert_eq!(
        parse_err("\n\nclass java {\n  int x;\n}"),
        InputError::Target {
            line: 3,
            source: TargetTypeError::TypeObscuresPackage("java".to_string()),
        }
    );
}

#[test]
fn invalid_class_name() {
    let err = parse_err("class 9Lives {\n}");
    assert_eq!(err.to_string(), "line 1: invalid type name `9Lives`");
}

#[test]
fn duplicate_class() {
    assert_eq!(
        parse_err("class A {}\n\nclass A {}"),
        InputError::DuplicateClass {
            line: 3,
            name: "A".to_string(),
        }
    );
}

#[test]
fn modifier_placement() {
    assert_eq!(
        parse_err("transient class Foo {}"),
        InputError::InvalidModifier {
            line: 1,
            modifier: "transient",
            place: "class",
        }
    );
    assert_eq!(
        parse_err("class Foo {\n  abstract int x;\n}"),
        InputError::InvalidModifier {
            line: 2,
            modifier: "abstract",
            place: "field",
        }
    );
    assert_eq!(
        parse_err("class Foo {\n  final final int x;\n}"),
        InputError::RepeatedModifier {
            line: 2,
            modifier: "final",
        }
    );
}

#[test]
fn class_modifiers_are_top_level_only() {
    for modifier in ["private", "protected", "static"] {
        assert_eq!(
            parse_err(&format!("{modifier} class Foo {{}}")),
            InputError::InvalidModifier {
                line: 1,
                modifier,
                place: "class",
            }
        );
    }
    let class = parse_one("public abstract class Shape { int sides; }");
    assert_eq!(class.modifiers(), [Modifier::Public, Modifier::Abstract]);
}

#[test]
fn conflicting_modifiers() {
    assert_eq!(
        parse_err("abstract final class Foo {}"),
        InputError::ConflictingModifiers {
            line: 1,
            first: "abstract",
            second: "final",
        }
    );
    assert_eq!(
        parse_err("class Foo {\n  volatile final int x;\n}"),
        InputError::ConflictingModifiers {
            line: 2,
            first: "volatile",
            second: "final",
        }
    );
    assert_eq!(
        parse_err("class Foo {\n  private public int x;\n}").to_string(),
        "line 2: `private` cannot be combined with `public`"
    );
}
