use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Root of every reference type; the implicit upper bound of `?` and `? super X`.
pub const OBJECT_TYPE: &str = "java.lang.Object";

/// A named, concrete type (class, interface, primitive or array class).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash, JsonSchema)]
pub struct NominalType {
    /// Qualified name, e.g. `java.lang.Integer`, `int`, `char[]`, `com.acme.Outer$Inner`.
    pub name: String,

    /// Qualified names this type is assignable to, as resolved by the schema walker.
    /// Well-known JDK relationships are filled in by the classifier, so this may be empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supertypes: Vec<String>,
}

impl NominalType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            supertypes: Vec::new(),
        }
    }

    pub fn with_supertypes<I, S>(mut self, supertypes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supertypes.extend(supertypes.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for NominalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A type as handed over by the reflection layer.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash, JsonSchema)]
#[serde(tag = "kind", content = "data")]
pub enum TypeDescriptor {
    /// Concrete named type (e.g., `java.lang.String`)
    Nominal(NominalType),

    /// Generic instantiation (e.g., `List<String>`)
    Parameterized {
        raw: NominalType,
        args: Vec<TypeDescriptor>,
    },

    /// Wildcard type argument (e.g., `? extends Number`)
    Wildcard {
        upper_bounds: Vec<TypeDescriptor>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        lower_bounds: Vec<TypeDescriptor>,
    },

    /// Type variable (e.g., `T extends Comparable<T>`)
    Variable {
        name: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        bounds: Vec<TypeDescriptor>,
    },

    /// Array whose component is not a plain class (e.g., `List<String>[]`)
    GenericArray { component: Box<TypeDescriptor> },
}

impl TypeDescriptor {
    /// Helper to create a Nominal type without supertypes
    pub fn nominal(name: impl Into<String>) -> Self {
        TypeDescriptor::Nominal(NominalType::new(name))
    }

    pub fn parameterized(raw: impl Into<String>, args: Vec<TypeDescriptor>) -> Self {
        TypeDescriptor::Parameterized {
            raw: NominalType::new(raw),
            args,
        }
    }

    /// `?`
    pub fn unbounded_wildcard() -> Self {
        TypeDescriptor::Wildcard {
            upper_bounds: vec![TypeDescriptor::nominal(OBJECT_TYPE)],
            lower_bounds: Vec::new(),
        }
    }

    /// `? extends bound`
    pub fn wildcard_extends(bound: TypeDescriptor) -> Self {
        TypeDescriptor::Wildcard {
            upper_bounds: vec![bound],
            lower_bounds: Vec::new(),
        }
    }

    /// `? super bound`
    pub fn wildcard_super(bound: TypeDescriptor) -> Self {
        TypeDescriptor::Wildcard {
            upper_bounds: vec![TypeDescriptor::nominal(OBJECT_TYPE)],
            lower_bounds: vec![bound],
        }
    }

    pub fn as_nominal(&self) -> Option<&NominalType> {
        match self {
            TypeDescriptor::Nominal(nominal) => Some(nominal),
            _ => None,
        }
    }
}

impl From<NominalType> for TypeDescriptor {
    fn from(nominal: NominalType) -> Self {
        TypeDescriptor::Nominal(nominal)
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[TypeDescriptor], sep: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// Renders Java source syntax, which is what diagnostics show.
impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Nominal(nominal) => write!(f, "{nominal}"),
            TypeDescriptor::Parameterized { raw, args } => {
                write!(f, "{raw}<")?;
                write_joined(f, args, ", ")?;
                f.write_str(">")
            }
            TypeDescriptor::Wildcard {
                upper_bounds,
                lower_bounds,
            } => {
                if !lower_bounds.is_empty() {
                    f.write_str("? super ")?;
                    return write_joined(f, lower_bounds, " & ");
                }
                let implicit = match upper_bounds.as_slice() {
                    [] => true,
                    [only] => only.as_nominal().is_some_and(|n| n.name == OBJECT_TYPE),
                    _ => false,
                };
                if implicit {
                    f.write_str("?")
                } else {
                    f.write_str("? extends ")?;
                    write_joined(f, upper_bounds, " & ")
                }
            }
            TypeDescriptor::Variable { name, .. } => f.write_str(name),
            TypeDescriptor::GenericArray { component } => write!(f, "{component}[]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_java_syntax() {
        let ty = TypeDescriptor::parameterized(
            "java.util.Map",
            vec![
                TypeDescriptor::nominal("java.lang.String"),
                TypeDescriptor::wildcard_extends(TypeDescriptor::nominal("java.lang.Number")),
            ],
        );
        assert_eq!(
            ty.to_string(),
            "java.util.Map<java.lang.String, ? extends java.lang.Number>"
        );

        assert_eq!(TypeDescriptor::unbounded_wildcard().to_string(), "?");
        assert_eq!(
            TypeDescriptor::wildcard_super(TypeDescriptor::nominal("com.acme.Foo")).to_string(),
            "? super com.acme.Foo"
        );

        let array = TypeDescriptor::GenericArray {
            component: Box::new(TypeDescriptor::parameterized(
                "java.util.List",
                vec![TypeDescriptor::Variable {
                    name: "T".to_string(),
                    bounds: vec![],
                }],
            )),
        };
        assert_eq!(array.to_string(), "java.util.List<T>[]");
    }

    #[test]
    fn test_json_shape() {
        let ty = TypeDescriptor::parameterized(
            "java.util.List",
            vec![TypeDescriptor::Nominal(
                NominalType::new("com.acme.Vm").with_supertypes(["com.acme.Entity"]),
            )],
        );
        let json = serde_json::to_value(&ty).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "kind": "Parameterized",
                "data": {
                    "raw": { "name": "java.util.List" },
                    "args": [
                        {
                            "kind": "Nominal",
                            "data": { "name": "com.acme.Vm", "supertypes": ["com.acme.Entity"] }
                        }
                    ]
                }
            })
        );

        let back: TypeDescriptor = serde_json::from_value(json).unwrap();
        assert_eq!(back, ty);
    }
}
