use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name emitted for structural types (`Object`, `QName`).
pub const OBJECT_TYPE_NAME: &str = "object";

/// The scalar categories the TypeScript side has a primitive for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum BuiltInCategory {
    Boolean,
    Date,
    Number,
    String,
}

impl BuiltInCategory {
    /// All categories in the order membership is tested.
    pub const ALL: [BuiltInCategory; 4] = [
        BuiltInCategory::Boolean,
        BuiltInCategory::Date,
        BuiltInCategory::Number,
        BuiltInCategory::String,
    ];

    /// The TypeScript type name emitted for this category.
    pub fn type_name(self) -> &'static str {
        match self {
            BuiltInCategory::Boolean => "boolean",
            BuiltInCategory::Date => "Date",
            BuiltInCategory::Number => "number",
            BuiltInCategory::String => "string",
        }
    }
}

impl fmt::Display for BuiltInCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        let names: Vec<&str> = BuiltInCategory::ALL.iter().map(|c| c.type_name()).collect();
        assert_eq!(names, vec!["boolean", "Date", "number", "string"]);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&BuiltInCategory::Date).unwrap();
        assert_eq!(json, "\"date\"");
    }
}
