//! BinderHub config template document.
//!
//! The template is kept as a generic YAML mapping so that every field the
//! generator does not know about passes through untouched and in order. Only
//! `config.BinderHub.image_prefix` and the top-level `hub` are typed accessors.

use serde_yaml::{Mapping, Value};

use super::AppError;

/// Key path of the string holding the placeholder tokens.
pub const IMAGE_PREFIX_PATH: [&str; 3] = ["config", "BinderHub", "image_prefix"];

const HUB_KEY: &str = "hub";
const HUB_URL_KEY: &str = "url";

/// Parsed template, mutated in place into the output document.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateDocument {
    source: String,
    root: Mapping,
}

impl TemplateDocument {
    /// Parse YAML text read from `source` (used only for error messages).
    pub fn parse(source: impl Into<String>, text: &str) -> Result<Self, AppError> {
        let source = source.into();
        match serde_yaml::from_str::<Value>(text) {
            Ok(Value::Mapping(root)) => Ok(Self { source, root }),
            Ok(_) => Err(AppError::TemplateLoad {
                path: source,
                details: "YAML root is not a mapping".to_string(),
            }),
            Err(err) => Err(AppError::TemplateLoad { path: source, details: err.to_string() }),
        }
    }

    pub fn root(&self) -> &Mapping {
        &self.root
    }

    /// Current value of `config.BinderHub.image_prefix`.
    pub fn image_prefix(&self) -> Result<&str, AppError> {
        let (parents, leaf) = (&IMAGE_PREFIX_PATH[..2], IMAGE_PREFIX_PATH[2]);
        let mut current = &self.root;
        for (depth, key) in parents.iter().enumerate() {
            current = match current.get(*key) {
                Some(Value::Mapping(child)) => child,
                _ => return Err(self.shape_error(depth)),
            };
        }

        match current.get(leaf) {
            Some(Value::String(value)) => Ok(value.as_str()),
            _ => Err(self.shape_error(parents.len())),
        }
    }

    /// Replace `config.BinderHub.image_prefix`, which must already be a string.
    pub fn set_image_prefix(&mut self, value: String) -> Result<(), AppError> {
        self.image_prefix()?;
        let leaf_error = self.shape_error(IMAGE_PREFIX_PATH.len() - 1);
        let slot = image_prefix_slot(&mut self.root).ok_or(leaf_error)?;
        *slot = value;
        Ok(())
    }

    /// Value of `hub.url`, if the document has one.
    pub fn hub_url(&self) -> Option<&str> {
        match self.root.get(HUB_KEY) {
            Some(Value::Mapping(hub)) => hub.get(HUB_URL_KEY).and_then(Value::as_str),
            _ => None,
        }
    }

    /// Set the top-level `hub` to a mapping holding only `url`.
    ///
    /// An existing `hub` is replaced wholesale and keeps its position.
    pub fn set_hub_url(&mut self, url: String) {
        let mut hub = Mapping::new();
        hub.insert(Value::from(HUB_URL_KEY), Value::from(url));
        self.root.insert(Value::from(HUB_KEY), Value::Mapping(hub));
    }

    /// Render as block-style YAML, preserving key order.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&self.root)
    }

    fn shape_error(&self, depth: usize) -> AppError {
        AppError::TemplateShape {
            path: self.source.clone(),
            field: IMAGE_PREFIX_PATH[..=depth].join("."),
        }
    }
}

fn image_prefix_slot(root: &mut Mapping) -> Option<&mut String> {
    let mut current = root;
    for key in &IMAGE_PREFIX_PATH[..2] {
        current = current.get_mut(*key)?.as_mapping_mut()?;
    }
    match current.get_mut(IMAGE_PREFIX_PATH[2])? {
        Value::String(value) => Some(value),
        _ => None,
    }
}
