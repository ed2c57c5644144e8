//! Java type syntax (`java.util.List<? extends Number>`) to [`TypeDescriptor`].
//!
//! The expression is embedded as the type of a field in a synthetic class and
//! parsed with tree-sitter-java; the field's type node is then converted.
//! Names are kept as written, except that bare `java.lang` names are
//! qualified. There is no import context, so other unqualified JDK names
//! (`BigDecimal`, `Date`) stay unqualified and fall back to their simple name
//! when classified; write them fully qualified. Type variables cannot be told
//! apart from classes at this level and come out as nominal types.
//!
//! Leading annotations (`@Deprecated String`) are accepted and dropped.

use crate::error::{ParseError, Result};
use tree_sitter::{Node, Parser};
use tsmapper_api::{NominalType, TypeDescriptor};
use tsmapper_core::reference::qualify_java_lang;

const PROBE_PREFIX: &str = "class TsMapperProbe { ";
const PROBE_SUFFIX: &str = " probe; }";

#[derive(Clone)]
pub struct JavaTypeParser {
    language: tree_sitter::Language,
}

impl Default for JavaTypeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl JavaTypeParser {
    pub fn new() -> Self {
        Self {
            language: tree_sitter_java::LANGUAGE.into(),
        }
    }

    pub fn parse(&self, text: &str) -> Result<TypeDescriptor> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ParseError::Empty);
        }

        let source = format!("{PROBE_PREFIX}{text}{PROBE_SUFFIX}");
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| ParseError::Language(e.to_string()))?;
        let tree = parser
            .parse(&source, None)
            .ok_or_else(|| ParseError::Syntax(text.to_string()))?;

        let root = tree.root_node();
        if root.has_error() {
            return Err(ParseError::Syntax(text.to_string()));
        }

        // The type node must end exactly where the user's text ends and start
        // where it starts, or right after leading annotations. Anything else means
        // part of the text was taken as a declarator or a modifier.
        let start = PROBE_PREFIX.len();
        let end = start + text.len();
        let type_node = find_probe_field(root)
            .filter(|(field, ty)| {
                ty.end_byte() == end
                    && (ty.start_byte() == start || only_annotations_before(*field, start, *ty))
            })
            .map(|(_, ty)| ty)
            .ok_or_else(|| ParseError::Syntax(text.to_string()))?;

        let descriptor = self.parse_type_node(type_node, &source)?;
        tracing::trace!(input = text, %descriptor, "parsed type expression");
        Ok(descriptor)
    }

    fn parse_type_node(&self, node: Node, source: &str) -> Result<TypeDescriptor> {
        match node.kind() {
            "integral_type" | "floating_point_type" | "boolean_type" | "void_type" => {
                Ok(TypeDescriptor::nominal(node_text(node, source)))
            }
            "type_identifier" | "scoped_type_identifier" => {
                Ok(TypeDescriptor::Nominal(self.parse_class_name(node, source)?))
            }
            "generic_type" => {
                let mut raw = None;
                let mut args = Vec::new();

                let mut cursor = node.walk();
                for child in node.named_children(&mut cursor) {
                    match child.kind() {
                        "type_identifier" | "scoped_type_identifier" => {
                            raw = Some(self.parse_class_name(child, source)?);
                        }
                        "type_arguments" => {
                            let mut args_cursor = child.walk();
                            for arg in child.named_children(&mut args_cursor) {
                                args.push(self.parse_type_node(arg, source)?);
                            }
                        }
                        _ => {}
                    }
                }

                let Some(raw) = raw else {
                    return Err(unsupported(node, source));
                };
                if args.is_empty() {
                    // Diamond `<>` carries no argument to classify by.
                    return Err(ParseError::Syntax(node_text(node, source)));
                }
                Ok(TypeDescriptor::Parameterized { raw, args })
            }
            "wildcard" => {
                let mut bound = None;
                let mut is_upper = true;

                let mut cursor = node.walk();
                for child in node.children(&mut cursor) {
                    match child.kind() {
                        "super" => is_upper = false,
                        "extends" | "?" | "annotation" | "marker_annotation" => {}
                        _ if child.is_named() => {
                            bound = Some(self.parse_type_node(child, source)?);
                        }
                        _ => {}
                    }
                }

                Ok(match (bound, is_upper) {
                    (None, _) => TypeDescriptor::unbounded_wildcard(),
                    (Some(bound), true) => TypeDescriptor::wildcard_extends(bound),
                    (Some(bound), false) => TypeDescriptor::wildcard_super(bound),
                })
            }
            "array_type" => {
                let element = node
                    .child_by_field_name("element")
                    .ok_or_else(|| unsupported(node, source))?;
                let dimensions = node
                    .child_by_field_name("dimensions")
                    .map(|d| node_text(d, source).matches('[').count())
                    .unwrap_or(1);

                let element = self.parse_type_node(element, source)?;
                Ok(array_of(element, dimensions))
            }
            "annotated_type" => {
                let mut cursor = node.walk();
                let inner = node
                    .named_children(&mut cursor)
                    .filter(|c| !matches!(c.kind(), "annotation" | "marker_annotation"))
                    .last()
                    .ok_or_else(|| unsupported(node, source))?;
                self.parse_type_node(inner, source)
            }
            _ => Err(unsupported(node, source)),
        }
    }

    fn parse_class_name(&self, node: Node, source: &str) -> Result<NominalType> {
        let text: String = node_text(node, source)
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if text.contains(['<', '@']) {
            // `Outer<String>.Inner` or annotations inside a qualified name
            return Err(unsupported(node, source));
        }
        let name = qualify_java_lang(&text).unwrap_or(text);
        Ok(NominalType::new(name))
    }
}

/// `component` with `dimensions` levels of `[]`. Arrays of classes are classes
/// themselves (`char[]`); arrays of anything else are generic arrays.
fn array_of(component: TypeDescriptor, dimensions: usize) -> TypeDescriptor {
    (0..dimensions).fold(component, |ty, _| match ty {
        TypeDescriptor::Nominal(nominal) => TypeDescriptor::nominal(format!("{}[]", nominal.name)),
        other => TypeDescriptor::GenericArray {
            component: Box::new(other),
        },
    })
}

/// The probe's field declaration and its type node.
fn find_probe_field(root: Node) -> Option<(Node, Node)> {
    let mut cursor = root.walk();
    let class = root
        .named_children(&mut cursor)
        .find(|n| n.kind() == "class_declaration")?;
    let body = class.child_by_field_name("body")?;

    let mut body_cursor = body.walk();
    let field = body
        .named_children(&mut body_cursor)
        .find(|n| n.kind() == "field_declaration")?;
    let ty = field.child_by_field_name("type")?;
    Some((field, ty))
}

/// Annotations written before a type parse as field modifiers. True when the
/// field's modifiers start at `start`, hold nothing but annotations and end
/// before `ty`.
fn only_annotations_before(field: Node, start: usize, ty: Node) -> bool {
    let mut cursor = field.walk();
    let Some(modifiers) = field
        .children(&mut cursor)
        .find(|n| n.kind() == "modifiers")
    else {
        return false;
    };

    let mut modifier_cursor = modifiers.walk();
    let all_annotations = modifiers
        .children(&mut modifier_cursor)
        .all(|m| matches!(m.kind(), "annotation" | "marker_annotation"));

    all_annotations && modifiers.start_byte() == start && modifiers.end_byte() <= ty.start_byte()
}

fn node_text(node: Node, source: &str) -> String {
    node.utf8_text(source.as_bytes())
        .unwrap_or_default()
        .to_string()
}

fn unsupported(node: Node, source: &str) -> ParseError {
    ParseError::Unsupported {
        kind: node.kind().to_string(),
        text: node_text(node, source),
    }
}
