//! Tool catalog.
//!
//! [`ToolName`] is the closed set of tools this server exposes. The catalog
//! returned by `tools/list` and the dispatch in the registry both match on it
//! exhaustively, so a tool cannot be listed without being callable or the
//! other way round.

use std::fmt;
use std::str::FromStr;

use rmcp::model::Tool;

use super::definitions::{
    CreateCollectionItemTool, DeleteCollectionItemTool, GetCollectionItemsTool,
    GetCollectionsTool, GetSiteTool, GetSitesTool, PublishCollectionItemsTool,
    UpdateCollectionItemTool,
};
use super::error::ToolError;

/// Every tool exposed by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    GetSites,
    GetSite,
    GetCollections,
    GetCollectionItems,
    CreateCollectionItem,
    UpdateCollectionItem,
    DeleteCollectionItem,
    PublishCollectionItems,
}

impl ToolName {
    /// All tools, in catalog order.
    pub const ALL: [ToolName; 8] = [
        ToolName::GetSites,
        ToolName::GetSite,
        ToolName::GetCollections,
        ToolName::GetCollectionItems,
        ToolName::CreateCollectionItem,
        ToolName::UpdateCollectionItem,
        ToolName::DeleteCollectionItem,
        ToolName::PublishCollectionItems,
    ];

    /// Wire name of the tool.
    pub fn as_str(self) -> &'static str {
        match self {
            ToolName::GetSites => GetSitesTool::NAME,
            ToolName::GetSite => GetSiteTool::NAME,
            ToolName::GetCollections => GetCollectionsTool::NAME,
            ToolName::GetCollectionItems => GetCollectionItemsTool::NAME,
            ToolName::CreateCollectionItem => CreateCollectionItemTool::NAME,
            ToolName::UpdateCollectionItem => UpdateCollectionItemTool::NAME,
            ToolName::DeleteCollectionItem => DeleteCollectionItemTool::NAME,
            ToolName::PublishCollectionItems => PublishCollectionItemsTool::NAME,
        }
    }

    /// Descriptor advertised in `tools/list`.
    pub fn descriptor(self) -> Tool {
        match self {
            ToolName::GetSites => GetSitesTool::to_tool(),
            ToolName::GetSite => GetSiteTool::to_tool(),
            ToolName::GetCollections => GetCollectionsTool::to_tool(),
            ToolName::GetCollectionItems => GetCollectionItemsTool::to_tool(),
            ToolName::CreateCollectionItem => CreateCollectionItemTool::to_tool(),
            ToolName::UpdateCollectionItem => UpdateCollectionItemTool::to_tool(),
            ToolName::DeleteCollectionItem => DeleteCollectionItemTool::to_tool(),
            ToolName::PublishCollectionItems => PublishCollectionItemsTool::to_tool(),
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = ToolError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        ToolName::ALL
            .into_iter()
            .find(|tool| tool.as_str() == name)
            .ok_or_else(|| ToolError::not_found(name))
    }
}

/// The full tool catalog, in order.
pub fn catalog() -> Vec<Tool> {
    ToolName::ALL.into_iter().map(ToolName::descriptor).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn required(tool: &Tool) -> BTreeSet<String> {
        tool.input_schema
            .get("required")
            .and_then(|v| v.as_array())
            .map(|fields| {
                fields
                    .iter()
                    .filter_map(|f| f.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn set(fields: &[&str]) -> BTreeSet<String> {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn test_catalog_names_match_enum() {
        let names: Vec<String> = catalog().iter().map(|t| t.name.to_string()).collect();
        let expected: Vec<String> = ToolName::ALL.iter().map(|t| t.as_str().to_string()).collect();
        assert_eq!(names, expected);
        assert_eq!(
            names,
            vec![
                "get_sites",
                "get_site",
                "get_collections",
                "get_collection_items",
                "create_collection_item",
                "update_collection_item",
                "delete_collection_item",
                "publish_collection_items",
            ]
        );
    }

    #[test]
    fn test_names_are_unique_and_round_trip() {
        let unique: BTreeSet<_> = ToolName::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(unique.len(), ToolName::ALL.len());
        for tool in ToolName::ALL {
            assert_eq!(tool.as_str().parse::<ToolName>().unwrap(), tool);
        }
    }

    #[test]
    fn test_unknown_name_is_not_found() {
        assert!(matches!(
            "get_everything".parse::<ToolName>(),
            Err(ToolError::NotFound(name)) if name == "get_everything"
        ));
    }

    #[test]
    fn test_required_fields_per_tool() {
        let cases: [(ToolName, &[&str]); 8] = [
            (ToolName::GetSites, &[]),
            (ToolName::GetSite, &["siteId"]),
            (ToolName::GetCollections, &["siteId"]),
            (ToolName::GetCollectionItems, &["collectionId"]),
            (ToolName::CreateCollectionItem, &["collectionId", "name"]),
            (ToolName::UpdateCollectionItem, &["collectionId", "itemId"]),
            (ToolName::DeleteCollectionItem, &["collectionId", "itemId"]),
            (ToolName::PublishCollectionItems, &["collectionId", "itemIds"]),
        ];
        for (tool, fields) in cases {
            assert_eq!(required(&tool.descriptor()), set(fields), "{tool}");
        }
    }

    #[test]
    fn test_every_descriptor_has_description_and_object_schema() {
        for tool in catalog() {
            assert!(tool.description.is_some_and(|d| !d.is_empty()));
            assert_eq!(tool.input_schema.get("type").and_then(|t| t.as_str()), Some("object"));
        }
    }

    #[test]
    fn test_create_schema_lists_optional_fields() {
        let tool = ToolName::CreateCollectionItem.descriptor();
        let properties = tool.input_schema["properties"].as_object().unwrap();
        for field in ["collectionId", "name", "slug", "fieldData", "isDraft", "isArchived"] {
            assert!(properties.contains_key(field), "missing {field}");
        }
    }
}
