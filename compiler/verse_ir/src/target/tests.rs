use super::*;
use crate::java_type::PrimitiveKind;
use pretty_assertions::assert_eq;

fn long() -> JavaType {
    JavaType::Primitive(PrimitiveKind::Long)
}

#[test]
fn builder_preserves_declaration_order() {
    let ty = TargetType::builder("Foo")
        .field(long(), "foo")
        .field(JavaType::Primitive(PrimitiveKind::Boolean), "bar")
        .field(JavaType::string(), "baz")
        .build()
        .unwrap_or_else(|e| panic!("{e}"));

    let names: Vec<&str> = ty.fields().iter().map(Field::name).collect();
    assert_eq!(names, ["foo", "bar", "baz"]);
    assert_eq!(ty.name(), "Foo");
    assert_eq!(ty.len(), 3);
}

#[test]
fn fields_are_classified_on_construction() {
    let field = Field::new(JavaType::array_of(JavaType::string()), "names");
    assert_eq!(field.category(), Category::ObjectArray);
    assert_eq!(field.ty().to_string(), "java.lang.String[]");
}

#[test]
fn empty_type_is_valid() {
    let ty = TargetType::builder("Empty")
        .build()
        .unwrap_or_else(|e| panic!("{e}"));
    assert!(ty.is_empty());
}

#[test]
fn add_field_in_place() {
    let mut builder = TargetType::builder("Foo");
    builder.add_field(long(), "a").add_field(long(), "b");
    let ty = builder.build().unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(ty.len(), 2);
}

#[test]
fn rejects_duplicate_fields() {
    let result = TargetType::builder("Foo")
        .field(long(), "foo")
        .field(JavaType::string(), "foo")
        .build();
    assert_eq!(
        result,
        Err(TargetTypeError::DuplicateField {
            type_name: "Foo".to_string(),
            name: "foo".to_string(),
        })
    );
}

#[test]
fn rejects_invalid_names() {
    assert_eq!(
        TargetType::builder("2Foo").build(),
        Err(TargetTypeError::InvalidTypeName("2Foo".to_string()))
    );
    assert_eq!(
        TargetType::builder("Foo").field(long(), "int").build(),
        Err(TargetTypeError::InvalidFieldName {
            type_name: "Foo".to_string(),
            name: "int".to_string(),
        })
    );
}

#[test]
fn rejects_names_that_obscure_the_java_package() {
    assert_eq!(
        TargetType::builder("Foo")
            .field(long(), "id")
            .field(long(), "java")
            .build(),
        Err(TargetTypeError::FieldObscuresPackage {
            type_name: "Foo".to_string(),
            name: "java".to_string(),
        })
    );
    assert_eq!(
        TargetType::builder("java").build(),
        Err(TargetTypeError::TypeObscuresPackage("java".to_string()))
    );
    assert!(TargetType::builder("Foo")
        .field(long(), "javax")
        .field(long(), "Java")
        .build()
        .is_ok());
}

#[test]
fn check_field_name_matches_build() {
    assert_eq!(check_field_name("Foo", "bar"), Ok(()));
    assert_eq!(
        check_field_name("Foo", "int"),
        Err(TargetTypeError::InvalidFieldName {
            type_name: "Foo".to_string(),
            name: "int".to_string(),
        })
    );
    assert_eq!(
        check_field_name("Foo", "java"),
        Err(TargetTypeError::FieldObscuresPackage {
            type_name: "Foo".to_string(),
            name: "java".to_string(),
        })
    );
}

#[test]
fn error_messages() {
    let err = TargetTypeError::DuplicateField {
        type_name: "Foo".to_string(),
        name: "bar".to_string(),
    };
    assert_eq!(err.to_string(), "duplicate field `bar` in `Foo`");

    let err = TargetTypeError::FieldObscuresPackage {
        type_name: "Foo".to_string(),
        name: "java".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "field `java` in `Foo` obscures the `java` package"
    );
}
