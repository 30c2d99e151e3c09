//! Response documents — the JSON shapes returned by each use-case.
//!
//! Field order is significant: it is the order keys appear in the serialized
//! output, which keeps repeated responses byte-identical.

use serde::Serialize;

use quickstart_domain::item::{Item, ItemId};
use quickstart_domain::model_name::ModelName;
use quickstart_domain::param::non_empty;

/// Text attached to items when the long form is requested.
pub const LONG_DESCRIPTION: &str = "This is an amazing item that has a long description";

/// Static welcome message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Greeting {
    pub message: &'static str,
}

impl Default for Greeting {
    fn default() -> Self {
        Self {
            message: "Hello World",
        }
    }
}

/// A model name together with its tagline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelInfo {
    pub model_name: ModelName,
    pub message: &'static str,
}

impl From<ModelName> for ModelInfo {
    fn from(model_name: ModelName) -> Self {
        Self {
            model_name,
            message: model_name.message(),
        }
    }
}

/// Echo of a captured file path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileInfo {
    pub file_path: String,
}

/// Item looked up by free-form id, optionally with a long description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemDetails {
    pub item_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

impl ItemDetails {
    /// An empty `q` is dropped; the description is attached unless `short`.
    #[must_use]
    pub fn new(item_id: String, q: Option<String>, short: bool) -> Self {
        Self {
            item_id,
            q: non_empty(q),
            description: (!short).then_some(LONG_DESCRIPTION),
        }
    }
}

/// Item echoed back after creation, with its fields merged at the top level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatedItem {
    pub item_id: i64,
    #[serde(flatten)]
    pub item: Item,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

impl CreatedItem {
    #[must_use]
    pub fn new(item_id: i64, item: Item, q: Option<String>) -> Self {
        Self {
            item_id,
            item,
            q: non_empty(q),
        }
    }
}

/// Item looked up by bounded id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemSummary {
    pub item_id: ItemId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

impl ItemSummary {
    #[must_use]
    pub fn new(item_id: ItemId, q: Option<String>) -> Self {
        Self {
            item_id,
            q: non_empty(q),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string(value).unwrap()
    }

    #[test]
    fn should_greet_the_world() {
        assert_eq!(
            to_json(&Greeting::default()),
            r#"{"message":"Hello World"}"#
        );
    }

    #[test]
    fn should_describe_model() {
        assert_eq!(
            to_json(&ModelInfo::from(ModelName::Lenet)),
            r#"{"model_name":"lenet","message":"LeCNN all the images"}"#
        );
    }

    #[test]
    fn should_include_long_description_unless_short() {
        let long = ItemDetails::new("42".to_string(), None, false);
        assert_eq!(
            to_json(&long),
            format!(r#"{{"item_id":"42","description":"{LONG_DESCRIPTION}"}}"#)
        );

        let short = ItemDetails::new("42".to_string(), Some("x".to_string()), true);
        assert_eq!(to_json(&short), r#"{"item_id":"42","q":"x"}"#);
    }

    #[test]
    fn should_drop_empty_query() {
        let details = ItemDetails::new("42".to_string(), Some(String::new()), true);
        assert!(details.q.is_none());
    }

    #[test]
    fn should_merge_item_fields_into_created_item() {
        let item = Item {
            name: "a".to_string(),
            description: None,
            price: 1.0,
            tax: None,
        };
        let created = CreatedItem::new(5, item, Some("x".to_string()));
        assert_eq!(
            to_json(&created),
            r#"{"item_id":5,"name":"a","description":null,"price":1.0,"tax":null,"q":"x"}"#
        );
    }

    #[test]
    fn should_serialize_item_summary_without_query() {
        let summary = ItemSummary::new(ItemId::new(500).unwrap(), None);
        assert_eq!(to_json(&summary), r#"{"item_id":500}"#);
    }
}
