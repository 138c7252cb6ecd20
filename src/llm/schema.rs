use std::collections::BTreeMap;

use serde::Serialize;

/// Response shape requested from the model, serialized in the
/// `{"type": "OBJECT", "properties": {...}}` form the endpoint accepts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum SchemaDescriptor {
    Object {
        properties: BTreeMap<String, SchemaDescriptor>,
    },
    Array {
        items: Box<SchemaDescriptor>,
    },
    String,
    Number,
}

impl SchemaDescriptor {
    pub fn object<I, K>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, SchemaDescriptor)>,
        K: Into<String>,
    {
        SchemaDescriptor::Object {
            properties: properties
                .into_iter()
                .map(|(k, v)| (k.into(), v))
                .collect(),
        }
    }

    pub fn array_of(items: SchemaDescriptor) -> Self {
        SchemaDescriptor::Array {
            items: Box::new(items),
        }
    }

    /// Looks up a nested property by dotted path, e.g. `atsScore.score`.
    pub fn property(&self, path: &str) -> Option<&SchemaDescriptor> {
        path.split('.').try_fold(self, |schema, key| match schema {
            SchemaDescriptor::Object { properties } => properties.get(key),
            _ => None,
        })
    }
}
