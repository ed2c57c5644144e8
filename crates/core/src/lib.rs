pub mod classifier;
pub mod logging;
pub mod naming;
pub mod reference;

pub use classifier::{ClassifierConfig, TypeClassifier, WildcardBounds};
pub use tsmapper_api::{
    BuiltInCategory, ClassifyError, ClassifyResult, NominalType, OBJECT_TYPE_NAME, TypeDescriptor,
};
