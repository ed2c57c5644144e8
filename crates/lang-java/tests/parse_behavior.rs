use tsmapper_api::TypeDescriptor;
use tsmapper_core::TypeClassifier;
use tsmapper_java::{JavaTypeParser, ParseError};

fn parse(text: &str) -> TypeDescriptor {
    JavaTypeParser::new()
        .parse(text)
        .unwrap_or_else(|e| panic!("failed to parse `{text}`: {e}"))
}

fn classify(text: &str) -> String {
    TypeClassifier::new().classify(&parse(text)).unwrap()
}

#[test]
fn test_primitives_and_java_lang_names() {
    assert_eq!(parse("int"), TypeDescriptor::nominal("int"));
    assert_eq!(parse("boolean"), TypeDescriptor::nominal("boolean"));
    assert_eq!(parse("double"), TypeDescriptor::nominal("double"));
    assert_eq!(parse("String"), TypeDescriptor::nominal("java.lang.String"));
    assert_eq!(parse("Integer"), TypeDescriptor::nominal("java.lang.Integer"));
    assert_eq!(parse("VmType"), TypeDescriptor::nominal("VmType"));
}

#[test]
fn test_qualified_names_are_kept() {
    assert_eq!(
        parse("javax.xml.datatype.XMLGregorianCalendar"),
        TypeDescriptor::nominal("javax.xml.datatype.XMLGregorianCalendar")
    );
    assert_eq!(
        parse(" java.util.Map.Entry "),
        TypeDescriptor::nominal("java.util.Map.Entry")
    );
}

#[test]
fn test_generic_types() {
    assert_eq!(
        parse("java.util.Map<String, java.util.List<Integer>>"),
        TypeDescriptor::parameterized(
            "java.util.Map",
            vec![
                TypeDescriptor::nominal("java.lang.String"),
                TypeDescriptor::parameterized(
                    "java.util.List",
                    vec![TypeDescriptor::nominal("java.lang.Integer")]
                ),
            ]
        )
    );
}

#[test]
fn test_wildcards() {
    assert_eq!(
        parse("List<?>"),
        TypeDescriptor::parameterized("List", vec![TypeDescriptor::unbounded_wildcard()])
    );
    assert_eq!(
        parse("List<? extends Number>"),
        TypeDescriptor::parameterized(
            "List",
            vec![TypeDescriptor::wildcard_extends(TypeDescriptor::nominal(
                "java.lang.Number"
            ))]
        )
    );
    assert_eq!(
        parse("List<? super com.acme.Foo>"),
        TypeDescriptor::parameterized(
            "List",
            vec![TypeDescriptor::wildcard_super(TypeDescriptor::nominal(
                "com.acme.Foo"
            ))]
        )
    );
}

#[test]
fn test_arrays() {
    assert_eq!(parse("char[]"), TypeDescriptor::nominal("char[]"));
    assert_eq!(parse("byte[][]"), TypeDescriptor::nominal("byte[][]"));
    assert_eq!(parse("String[]"), TypeDescriptor::nominal("java.lang.String[]"));
    assert!(matches!(
        parse("java.util.List<String>[]"),
        TypeDescriptor::GenericArray { .. }
    ));
}

#[test]
fn test_leading_annotations_are_dropped() {
    assert_eq!(
        parse("@Deprecated String"),
        TypeDescriptor::nominal("java.lang.String")
    );
    assert_eq!(
        parse("@javax.annotation.Nullable java.util.List<Integer>"),
        TypeDescriptor::parameterized(
            "java.util.List",
            vec![TypeDescriptor::nominal("java.lang.Integer")]
        )
    );
    assert_eq!(classify("@Deprecated Boolean"), "boolean");

    // Non-annotation modifiers are not part of a type.
    let parser = JavaTypeParser::new();
    assert!(matches!(
        parser.parse("final String"),
        Err(ParseError::Syntax(_))
    ));
    assert!(matches!(
        parser.parse("@Deprecated final String"),
        Err(ParseError::Syntax(_))
    ));
}

#[test]
fn test_unqualified_jdk_names_outside_java_lang_stay_as_written() {
    assert_eq!(parse("BigDecimal"), TypeDescriptor::nominal("BigDecimal"));
    assert_eq!(classify("BigDecimal"), "BigDecimal");
    assert_eq!(classify("java.math.BigDecimal"), "number");
    assert_eq!(
        classify("java.util.concurrent.atomic.LongAccumulator"),
        "number"
    );
}

#[test]
fn test_invalid_input() {
    let parser = JavaTypeParser::new();
    assert_eq!(parser.parse("   "), Err(ParseError::Empty));
    assert!(matches!(
        parser.parse("List<String"),
        Err(ParseError::Syntax(_))
    ));
    assert!(parser.parse("List<String> extra").is_err());
    assert!(parser.parse("List<>").is_err());
}

#[test]
fn test_classify_parsed_types() {
    assert_eq!(classify("java.util.List<java.lang.Boolean>"), "boolean");
    assert_eq!(classify("java.util.List<java.sql.Timestamp>"), "Date");
    assert_eq!(classify("Character"), "number");
    assert_eq!(classify("char[]"), "string");
    assert_eq!(classify("int[]"), "int[]");
    assert_eq!(classify("javax.xml.namespace.QName"), "object");
    assert_eq!(classify("Object"), "object");
    assert_eq!(classify("java.util.List<? extends com.acme.VmType>"), "VmType");
    assert_eq!(classify("java.util.List<?>"), "Object");
}

#[test]
fn test_classify_wildcard_with_generic_bound_fails() {
    let ty = parse("java.util.List<? extends java.util.List<com.acme.Foo>>");
    assert!(TypeClassifier::new().classify(&ty).is_err());
}
