//! Reference sets for the built-in categories and the JDK assignment catalog.
//!
//! A nominal type belongs to a category when it is assignable to one of the
//! category's reference types. Assignability is the closure of the type itself,
//! the supertypes the caller declared, and the well-known edges in
//! [`JDK_ASSIGNMENTS`] (subclassing, unboxing and primitive widening).

use std::collections::{HashSet, VecDeque};
use tsmapper_api::{BuiltInCategory, NominalType, OBJECT_TYPE};

pub const QNAME_TYPE: &str = "javax.xml.namespace.QName";

/// Types emitted as the structural `object` marker when seen as a bare class.
pub const OBJECT_MARKERS: &[&str] = &[OBJECT_TYPE, QNAME_TYPE];

pub const BOOLEAN_REFERENCES: &[&str] = &["boolean", "java.lang.Boolean"];

pub const DATE_REFERENCES: &[&str] = &["javax.xml.datatype.XMLGregorianCalendar", "java.util.Date"];

pub const NUMBER_REFERENCES: &[&str] = &[
    "java.lang.Number",
    "byte",
    "short",
    "int",
    "long",
    "float",
    "double",
];

pub const STRING_REFERENCES: &[&str] = &[
    "java.lang.String",
    "char[]",
    "byte[]",
    "javax.xml.datatype.Duration",
];

/// Direct assignment edges of well-known runtime types.
pub const JDK_ASSIGNMENTS: &[(&str, &[&str])] = &[
    // Boxing and unboxing
    ("java.lang.Boolean", &["boolean"]),
    ("java.lang.Character", &["char"]),
    ("java.lang.Byte", &["java.lang.Number", "byte"]),
    ("java.lang.Short", &["java.lang.Number", "short"]),
    ("java.lang.Integer", &["java.lang.Number", "int"]),
    ("java.lang.Long", &["java.lang.Number", "long"]),
    ("java.lang.Float", &["java.lang.Number", "float"]),
    ("java.lang.Double", &["java.lang.Number", "double"]),
    // Primitive widening
    ("byte", &["short"]),
    ("short", &["int"]),
    ("char", &["int"]),
    ("int", &["long"]),
    ("long", &["float"]),
    ("float", &["double"]),
    // Number subclasses
    ("java.math.BigDecimal", &["java.lang.Number"]),
    ("java.math.BigInteger", &["java.lang.Number"]),
    ("java.util.concurrent.atomic.AtomicInteger", &["java.lang.Number"]),
    ("java.util.concurrent.atomic.AtomicLong", &["java.lang.Number"]),
    ("java.util.concurrent.atomic.DoubleAccumulator", &["java.lang.Number"]),
    ("java.util.concurrent.atomic.DoubleAdder", &["java.lang.Number"]),
    ("java.util.concurrent.atomic.LongAccumulator", &["java.lang.Number"]),
    ("java.util.concurrent.atomic.LongAdder", &["java.lang.Number"]),
    // Date/time
    ("java.sql.Date", &["java.util.Date"]),
    ("java.sql.Time", &["java.util.Date"]),
    ("java.sql.Timestamp", &["java.util.Date"]),
    (
        "com.sun.org.apache.xerces.internal.jaxp.datatype.XMLGregorianCalendarImpl",
        &["javax.xml.datatype.XMLGregorianCalendar"],
    ),
    (
        "com.sun.org.apache.xerces.internal.jaxp.datatype.DurationImpl",
        &["javax.xml.datatype.Duration"],
    ),
];

/// Simple names resolvable without an import (the `java.lang` package).
pub const JAVA_LANG_TYPES: &[&str] = &[
    "Boolean",
    "Byte",
    "Character",
    "Double",
    "Float",
    "Integer",
    "Long",
    "Number",
    "Object",
    "Short",
    "String",
    "Void",
];

fn direct_assignments(name: &str) -> &'static [&'static str] {
    JDK_ASSIGNMENTS
        .iter()
        .find(|(ty, _)| *ty == name)
        .map(|(_, targets)| *targets)
        .unwrap_or(&[])
}

fn references(category: BuiltInCategory) -> &'static [&'static str] {
    match category {
        BuiltInCategory::Boolean => BOOLEAN_REFERENCES,
        BuiltInCategory::Date => DATE_REFERENCES,
        BuiltInCategory::Number => NUMBER_REFERENCES,
        BuiltInCategory::String => STRING_REFERENCES,
    }
}

/// Every name `ty` is assignable to, itself first.
pub fn assignable_names(ty: &NominalType) -> Vec<String> {
    let mut queue: VecDeque<&str> = VecDeque::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut out = Vec::new();

    queue.push_back(&ty.name);
    for parent in &ty.supertypes {
        queue.push_back(parent);
    }

    while let Some(curr) = queue.pop_front() {
        if !visited.insert(curr) {
            continue;
        }
        out.push(curr.to_string());
        for parent in direct_assignments(curr) {
            queue.push_back(*parent);
        }
    }

    out
}

/// True when `ty` is assignable to a reference type of `category`.
pub fn is_member(ty: &NominalType, category: BuiltInCategory) -> bool {
    let refs = references(category);
    assignable_names(ty)
        .iter()
        .any(|name| refs.contains(&name.as_str()))
}

/// First category, in [`BuiltInCategory::ALL`] order, that `ty` belongs to.
pub fn category_of(ty: &NominalType) -> Option<BuiltInCategory> {
    let names = assignable_names(ty);
    BuiltInCategory::ALL.into_iter().find(|category| {
        let refs = references(*category);
        names.iter().any(|name| refs.contains(&name.as_str()))
    })
}

/// Exact identity check against the `object` marker types.
pub fn is_object_marker(ty: &NominalType) -> bool {
    OBJECT_MARKERS.contains(&ty.name.as_str())
}

/// Qualifies a bare `java.lang` simple name (`Integer` -> `java.lang.Integer`).
pub fn qualify_java_lang(simple_name: &str) -> Option<String> {
    JAVA_LANG_TYPES
        .contains(&simple_name)
        .then(|| format!("java.lang.{simple_name}"))
}
