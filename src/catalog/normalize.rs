use tracing::warn;

use super::{CatalogError, CatalogNode, CatalogRecord};

/// Flatten a fetched catalog tree into its leaves, depth-first and left to
/// right. Each leaf carries the names of the categories above it.
///
/// A category with an empty `subitems` array yields nothing: it is neither a
/// leaf nor a parent of anything.
pub fn normalize(nodes: Vec<CatalogNode>) -> Result<Vec<CatalogRecord>, CatalogError> {
    let mut results = Vec::new();

    for mut node in nodes {
        match node.subitems.take() {
            Some(subitems) => {
                let category = node.name.ok_or(CatalogError::MissingField("name"))?;
                if subitems.is_empty() {
                    warn!(category = %category, "catalog category has no subitems, skipping");
                    continue;
                }

                for mut record in normalize(subitems)? {
                    record.item_parents.insert(0, category.clone());
                    results.push(record);
                }
            }
            None => results.push(CatalogRecord {
                node,
                item_parents: Vec::new(),
            }),
        }
    }

    Ok(results)
}
