//! Filter documents emitted to the host query engine
//!
//! Two document kinds exist:
//! - hierarchy identity filter: carries the forest as `hierarchyData`
//! - basic filter: `In` match on one column, used by the default-fallback
//!   policy when an empty selection must mean "unselect everything"

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::UnselectAllConfig;
use crate::error::{HierselError, Result};
use crate::tree::Forest;

pub const HIERARCHY_IDENTITY_SCHEMA: &str =
    "https://powerbi.com/product/schema#hierarchyIdentity";
pub const BASIC_SCHEMA: &str = "http://powerbi.com/product/schema#basic";

/// `filterType` discriminant of a basic filter
pub const FILTER_TYPE_BASIC: u8 = 1;
/// `filterType` discriminant of a hierarchy identity filter
pub const FILTER_TYPE_HIERARCHY_IDENTITY: u8 = 10;

/// One hierarchy level addressed by its query name (`Table.Column`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryNameTarget {
    #[serde(rename = "queryName")]
    pub query_name: String,
}

impl QueryNameTarget {
    pub fn new(query_name: impl Into<String>) -> Self {
        Self {
            query_name: query_name.into(),
        }
    }
}

/// Column addressed by table and column name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicTarget {
    pub table: String,
    pub column: String,
}

impl BasicTarget {
    /// Split `Table.Column` at its last dot; table names may contain dots.
    pub fn from_query_name(query_name: &str) -> Result<Self> {
        match query_name.rsplit_once('.') {
            Some((table, column)) if !table.is_empty() && !column.is_empty() => Ok(Self {
                table: table.to_string(),
                column: column.to_string(),
            }),
            _ => Err(HierselError::invalid_value("query name", query_name)),
        }
    }
}

/// Filter over a hierarchy expressed as a sparse tri-state tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchyIdentityFilter<I> {
    #[serde(rename = "$schema")]
    pub schema: String,
    #[serde(rename = "filterType")]
    pub filter_type: u8,
    #[serde(default)]
    pub target: Vec<QueryNameTarget>,
    #[serde(rename = "hierarchyData", default = "Vec::new")]
    pub hierarchy_data: Forest<I>,
}

impl<I> HierarchyIdentityFilter<I> {
    pub fn new(target: Vec<QueryNameTarget>, hierarchy_data: Forest<I>) -> Self {
        Self {
            schema: HIERARCHY_IDENTITY_SCHEMA.to_string(),
            filter_type: FILTER_TYPE_HIERARCHY_IDENTITY,
            target,
            hierarchy_data,
        }
    }
}

/// Simple `In` filter against a single column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicFilter {
    #[serde(rename = "$schema")]
    pub schema: String,
    #[serde(rename = "filterType")]
    pub filter_type: u8,
    pub operator: String,
    pub target: BasicTarget,
    pub values: Vec<String>,
}

impl BasicFilter {
    pub fn new(target: BasicTarget, values: Vec<String>) -> Self {
        Self {
            schema: BASIC_SCHEMA.to_string(),
            filter_type: FILTER_TYPE_BASIC,
            operator: "In".to_string(),
            target,
            values,
        }
    }
}

/// Filter document handed to the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterPayload<I> {
    Basic(BasicFilter),
    HierarchyIdentity(HierarchyIdentityFilter<I>),
}

impl<I> FilterPayload<I> {
    /// Short name of the document kind
    pub fn kind(&self) -> &'static str {
        match self {
            FilterPayload::Basic(_) => "Basic",
            FilterPayload::HierarchyIdentity(_) => "HierarchyIdentity",
        }
    }

    /// The carried forest; a basic filter always stands for an empty one.
    pub fn hierarchy_data(&self) -> &[crate::tree::FilterNode<I>] {
        match self {
            FilterPayload::Basic(_) => &[],
            FilterPayload::HierarchyIdentity(filter) => &filter.hierarchy_data,
        }
    }

    pub fn into_hierarchy_data(self) -> Forest<I> {
        match self {
            FilterPayload::Basic(_) => Vec::new(),
            FilterPayload::HierarchyIdentity(filter) => filter.hierarchy_data,
        }
    }

    /// Check that the `filterType` discriminant matches the document shape.
    pub fn check_filter_type(&self) -> Result<()> {
        let (expected, actual) = match self {
            FilterPayload::Basic(filter) => (FILTER_TYPE_BASIC, filter.filter_type),
            FilterPayload::HierarchyIdentity(filter) => {
                (FILTER_TYPE_HIERARCHY_IDENTITY, filter.filter_type)
            }
        };
        if expected != actual {
            return Err(HierselError::invalid_value("filterType", actual));
        }
        Ok(())
    }
}

impl<I: serde::de::DeserializeOwned> FilterPayload<I> {
    /// Read a filter document from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| HierselError::io_operation("read filter", path.display(), e))?;
        let payload: Self =
            serde_json::from_str(&content).map_err(|e| HierselError::InvalidFilter {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        payload
            .check_filter_type()
            .map_err(|e| HierselError::InvalidFilter {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        Ok(payload)
    }
}

/// Basic fallback filter matching `placeholder` on the first target column.
pub fn default_basic_filter(columns: &[String], placeholder: &str) -> Result<BasicFilter> {
    let first = columns.first().ok_or(HierselError::MissingTarget)?;
    let target = BasicTarget::from_query_name(first)?;
    Ok(BasicFilter::new(target, vec![placeholder.to_string()]))
}

/// Build the payload for `forest`, applying the default-fallback policy.
///
/// Under unselect-all mode an empty forest would read as "everything
/// selected", so the basic fallback filter is emitted instead.
pub fn build_payload<I: Clone>(
    forest: &Forest<I>,
    target: Vec<QueryNameTarget>,
    unselect_all: &UnselectAllConfig,
    columns: &[String],
) -> Result<FilterPayload<I>> {
    if unselect_all.enabled && forest.is_empty() {
        let basic = default_basic_filter(columns, &unselect_all.placeholder)?;
        return Ok(FilterPayload::Basic(basic));
    }

    Ok(FilterPayload::HierarchyIdentity(HierarchyIdentityFilter::new(
        target,
        forest.clone(),
    )))
}
