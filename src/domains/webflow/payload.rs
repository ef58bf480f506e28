//! Request bodies sent to the collection item endpoints.

use serde::Serialize;
use serde_json::{Map, Value};

/// Open-ended item content, keyed by the collection's field slugs.
pub type FieldData = Map<String, Value>;

/// Body of a create-item call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionItemPayload {
    pub field_data: FieldData,
    pub is_draft: bool,
    pub is_archived: bool,
}

impl CollectionItemPayload {
    /// Build a create payload.
    ///
    /// `name` and `slug` are written into `fieldData` first and the caller's
    /// `field_data` is spread over them afterwards, so a `name` or `slug` key
    /// inside `field_data` wins over the top-level values. A missing or empty
    /// `slug` is derived from `name` with [`slugify`].
    pub fn new(
        name: &str,
        slug: Option<&str>,
        field_data: Option<FieldData>,
        is_draft: bool,
        is_archived: bool,
    ) -> Self {
        let slug = slug
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| slugify(name));

        let mut merged = FieldData::new();
        merged.insert("name".to_string(), Value::String(name.to_string()));
        merged.insert("slug".to_string(), Value::String(slug));
        if let Some(extra) = field_data {
            merged.extend(extra);
        }

        Self {
            field_data: merged,
            is_draft,
            is_archived,
        }
    }
}

/// Body of an update-item call. Absent fields are left out of the JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_data: Option<FieldData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_draft: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_archived: Option<bool>,
}

/// Body of a publish call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishItemsRequest<'a> {
    pub item_ids: &'a [String],
}

/// Query string of a list-items call.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Pagination {
    pub limit: u32,
    pub offset: u32,
}

/// Derive a URL slug from an item name.
///
/// Lowercases the name, collapses every run of characters outside `[a-z0-9]`
/// into one hyphen and trims hyphens from both ends.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}
