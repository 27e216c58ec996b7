use serde::Deserialize;

/// One element of an `os_list` array, either a category (has `subitems`) or
/// an image (a leaf). Every field is optional here; `OsEntry` decides which
/// ones an image must carry.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CatalogNode {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub extract_size: Option<u64>,

    #[serde(default)]
    pub extract_sha256: Option<String>,

    #[serde(default)]
    pub image_download_size: Option<u64>,

    #[serde(default)]
    pub image_download_sha256: Option<String>,

    #[serde(default)]
    pub release_date: Option<String>,

    #[serde(default)]
    pub contains_multiple_files: Option<bool>,

    /// Link to another document whose `os_list` becomes `subitems`.
    #[serde(default)]
    pub subitems_url: Option<String>,

    #[serde(default)]
    pub subitems: Option<Vec<CatalogNode>>,
}

/// Top-level shape of every catalog document.
#[derive(Debug, Deserialize)]
pub(crate) struct CatalogDocument {
    pub(crate) os_list: Option<Vec<CatalogNode>>,
}

/// A leaf node after normalization, annotated with the names of its
/// ancestors, root-most first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogRecord {
    pub node: CatalogNode,
    pub item_parents: Vec<String>,
}
