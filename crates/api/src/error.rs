use crate::models::TypeDescriptor;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    /// The descriptor has a shape the classifier has no rule for, or a wildcard
    /// whose first upper bound is not a nominal type.
    #[error("Unable to determine type name for {0}")]
    UnresolvableType(Box<TypeDescriptor>),
}

impl ClassifyError {
    pub fn unresolvable(descriptor: &TypeDescriptor) -> Self {
        ClassifyError::UnresolvableType(Box::new(descriptor.clone()))
    }

    /// The descriptor that could not be classified.
    pub fn descriptor(&self) -> &TypeDescriptor {
        match self {
            ClassifyError::UnresolvableType(descriptor) => descriptor,
        }
    }
}

pub type ClassifyResult<T> = std::result::Result<T, ClassifyError>;
