mod error;
mod node;
mod normalize;
mod source;

pub use error::{CatalogError, LookupKind};
pub use node::{CatalogNode, CatalogRecord};
pub use normalize::normalize;
pub use source::{CatalogSource, HttpSource};

use futures::future::{BoxFuture, FutureExt};
use tracing::debug;

use node::CatalogDocument;

/// Parse one catalog document and return its `os_list` array.
pub fn parse_document(url: &str, text: &str) -> Result<Vec<CatalogNode>, CatalogError> {
    let document: CatalogDocument =
        serde_json::from_str(text).map_err(|source| CatalogError::Json {
            url: url.to_string(),
            source,
        })?;
    document.os_list.ok_or(CatalogError::MissingField("os_list"))
}

/// Fetch the catalog rooted at `url`, following every `subitems_url` and
/// attaching the linked list as the node's `subitems`.
///
/// The root document counts as depth 1; a link that would load a document
/// deeper than `max_depth` fails with [`CatalogError::TooDeep`].
pub async fn fetch_tree(
    source: &dyn CatalogSource,
    url: &str,
    max_depth: usize,
) -> Result<Vec<CatalogNode>, CatalogError> {
    fetch_level(source, url, 1, max_depth).await
}

fn fetch_level<'a>(
    source: &'a dyn CatalogSource,
    url: &'a str,
    depth: usize,
    max_depth: usize,
) -> BoxFuture<'a, Result<Vec<CatalogNode>, CatalogError>> {
    async move {
        if depth > max_depth {
            return Err(CatalogError::TooDeep {
                url: url.to_string(),
                max_depth,
            });
        }

        let text = source.fetch_text(url).await?;
        let mut os_list = parse_document(url, &text)?;
        debug!(%url, depth, items = os_list.len(), "parsed catalog document");

        for item in os_list.iter_mut() {
            if let Some(subitems_url) = item.subitems_url.clone() {
                let subitems = fetch_level(source, &subitems_url, depth + 1, max_depth).await?;
                item.subitems = Some(subitems);
            }
        }

        Ok(os_list)
    }
    .boxed()
}
