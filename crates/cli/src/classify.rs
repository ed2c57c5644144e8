use crate::OutputFormat;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tsmapper_api::TypeDescriptor;
use tsmapper_core::{ClassifierConfig, TypeClassifier};
use tsmapper_java::JavaTypeParser;

pub struct ClassifyOptions {
    pub types: Vec<String>,
    pub json: Option<PathBuf>,
    pub format: OutputFormat,
    pub config: ClassifierConfig,
    pub keep_going: bool,
}

/// Result for one input, as printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub built_in: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Outcome {
    fn failed(ty: String, error: impl ToString) -> Self {
        Self {
            ty,
            name: None,
            built_in: None,
            error: Some(error.to_string()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    fn to_line(&self) -> String {
        match (&self.name, &self.error) {
            (Some(name), _) => format!("{} -> {}", self.ty, name),
            (None, Some(error)) => format!("{} !! {}", self.ty, error),
            (None, None) => self.ty.clone(),
        }
    }
}

/// Reads a JSON file holding either a single descriptor or an array of them.
pub fn load_descriptors(path: &Path) -> Result<Vec<TypeDescriptor>, Box<dyn std::error::Error>> {
    let source = std::fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&source)?;
    let descriptors = if value.is_array() {
        serde_json::from_value::<Vec<TypeDescriptor>>(value)?
    } else {
        vec![serde_json::from_value::<TypeDescriptor>(value)?]
    };
    info!(
        "Loaded {} descriptor(s) from {}",
        descriptors.len(),
        path.display()
    );
    Ok(descriptors)
}

pub fn classify_descriptor(classifier: &TypeClassifier, ty: &TypeDescriptor) -> Outcome {
    match classifier.classify(ty) {
        Ok(name) => Outcome {
            ty: ty.to_string(),
            name: Some(name),
            built_in: Some(classifier.is_built_in(ty)),
            error: None,
        },
        Err(e) => {
            warn!("{}", e);
            Outcome::failed(ty.to_string(), e)
        }
    }
}

/// Parses and classifies each Java type expression; syntax errors become
/// failed outcomes labelled with the input text.
pub fn classify_expressions(
    classifier: &TypeClassifier,
    parser: &JavaTypeParser,
    types: &[String],
) -> Vec<Outcome> {
    types
        .iter()
        .map(|text| match parser.parse(text) {
            Ok(ty) => classify_descriptor(classifier, &ty),
            Err(e) => {
                warn!("Failed to parse `{}`: {}", text, e);
                Outcome::failed(text.clone(), e)
            }
        })
        .collect()
}

pub fn run(options: ClassifyOptions) -> Result<(), Box<dyn std::error::Error>> {
    let classifier = TypeClassifier::with_config(options.config);
    let parser = JavaTypeParser::new();

    let mut outcomes = classify_expressions(&classifier, &parser, &options.types);
    if let Some(path) = &options.json {
        for ty in load_descriptors(path)? {
            outcomes.push(classify_descriptor(&classifier, &ty));
        }
    }

    if outcomes.is_empty() {
        return Err("nothing to classify: pass TYPE arguments or --json FILE".into());
    }

    match options.format {
        OutputFormat::Text => {
            for outcome in &outcomes {
                println!("{}", outcome.to_line());
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcomes)?),
    }

    let failures = outcomes.iter().filter(|o| o.is_error()).count();
    if failures > 0 && !options.keep_going {
        return Err(format!("{failures} type(s) could not be classified").into());
    }
    Ok(())
}
