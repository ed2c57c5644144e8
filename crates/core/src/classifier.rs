//! Maps reflected Java types to the names used in generated TypeScript bindings.

use crate::naming::simple_name;
use crate::reference;
use serde::{Deserialize, Serialize};
use tsmapper_api::{ClassifyError, ClassifyResult, NominalType, OBJECT_TYPE_NAME, TypeDescriptor};

/// How the first upper bound of a wildcard is resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WildcardBounds {
    /// Only a plain class bound resolves, and it is never mapped to `object`.
    /// Matches the output of earlier generator releases.
    #[default]
    Compatible,
    /// The bound goes through the full algorithm, so `? extends Object` maps
    /// to `object` and `? extends List<Foo>` to `Foo`.
    Recursive,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub wildcard_bounds: WildcardBounds,
}

/// Stateless classifier; every call is a pure function of its argument.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeClassifier {
    config: ClassifierConfig,
}

impl TypeClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Whether `ty` maps onto one of the four TypeScript primitives.
    ///
    /// A parameterized type is judged by its raw class. Wildcards, type
    /// variables and generic arrays are never built in.
    pub fn is_built_in(&self, ty: &TypeDescriptor) -> bool {
        match ty {
            TypeDescriptor::Nominal(nominal) => is_built_in_nominal(nominal),
            TypeDescriptor::Parameterized { raw, .. } => is_built_in_nominal(raw),
            _ => false,
        }
    }

    /// The TypeScript type name for `ty`.
    ///
    /// Generic wrappers are dropped in favour of their first type argument,
    /// `Object` and `QName` become `object`, scalar types become one of
    /// `boolean`, `Date`, `number`, `string`, and any other class keeps its
    /// simple name.
    pub fn classify(&self, ty: &TypeDescriptor) -> ClassifyResult<String> {
        match ty {
            TypeDescriptor::Parameterized { args, .. } => match args.first() {
                Some(first) => self.classify(first),
                None => Err(unresolvable(ty)),
            },
            TypeDescriptor::Nominal(nominal) => Ok(classify_nominal(nominal)),
            TypeDescriptor::Wildcard { upper_bounds, .. } => match upper_bounds.first() {
                Some(bound) => self.classify_bound(ty, bound),
                None => Err(unresolvable(ty)),
            },
            TypeDescriptor::Variable { .. } | TypeDescriptor::GenericArray { .. } => {
                Err(unresolvable(ty))
            }
        }
    }

    fn classify_bound(
        &self,
        wildcard: &TypeDescriptor,
        bound: &TypeDescriptor,
    ) -> ClassifyResult<String> {
        match self.config.wildcard_bounds {
            WildcardBounds::Recursive => self.classify(bound),
            WildcardBounds::Compatible => match bound {
                TypeDescriptor::Nominal(nominal) => {
                    let name = match reference::category_of(nominal) {
                        Some(category) => category.type_name().to_string(),
                        None => simple_name(&nominal.name).to_string(),
                    };
                    tracing::trace!(%wildcard, %name, "wildcard resolved through first bound");
                    Ok(name)
                }
                _ => Err(unresolvable(wildcard)),
            },
        }
    }
}

fn is_built_in_nominal(nominal: &NominalType) -> bool {
    reference::category_of(nominal).is_some()
}

fn classify_nominal(nominal: &NominalType) -> String {
    if reference::is_object_marker(nominal) {
        return OBJECT_TYPE_NAME.to_string();
    }

    match reference::category_of(nominal) {
        Some(category) => category.type_name().to_string(),
        None => {
            tracing::trace!(ty = %nominal, "no built-in match, using simple name");
            simple_name(&nominal.name).to_string()
        }
    }
}

fn unresolvable(ty: &TypeDescriptor) -> ClassifyError {
    tracing::debug!(%ty, "unresolvable type");
    ClassifyError::unresolvable(ty)
}
