mod entry;

pub use entry::{FieldAccessor, OsEntry};

use tracing::info;

use crate::catalog::{self, CatalogError, CatalogSource, LookupKind};
use crate::settings::Settings;

/// Fetch, flatten and validate the whole catalog. Nothing is cached: every
/// call goes back to the source.
pub async fn list_os(source: &dyn CatalogSource, settings: &Settings) -> Result<Vec<OsEntry>, CatalogError> {
    let tree = catalog::fetch_tree(source, settings.catalog_url(), settings.max_depth()).await?;
    let entries = catalog::normalize(tree)?
        .into_iter()
        .map(OsEntry::from_record)
        .collect::<Result<Vec<_>, _>>()?;

    info!(count = entries.len(), url = settings.catalog_url(), "catalog loaded");
    Ok(entries)
}

/// First entry whose normalized URL equals `url` exactly.
pub fn find_by_url<'a>(entries: &'a [OsEntry], url: &str) -> Result<&'a OsEntry, CatalogError> {
    entries
        .iter()
        .find(|e| e.url() == url)
        .ok_or_else(|| CatalogError::NotFound {
            kind: LookupKind::Url,
            key: url.to_string(),
        })
}

/// First entry named `name`.
pub fn find_by_name<'a>(entries: &'a [OsEntry], name: &str) -> Result<&'a OsEntry, CatalogError> {
    entries
        .iter()
        .find(|e| e.name() == name)
        .ok_or_else(|| CatalogError::NotFound {
            kind: LookupKind::Name,
            key: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::{find_by_name, find_by_url, list_os};
    use crate::catalog::testing::StaticSource;
    use crate::catalog::{CatalogError, LookupKind};
    use crate::settings::Settings;
    use pretty_assertions::assert_eq;

    const ROOT: &str = "https://catalog.test/os_list_imagingutility.json";

    fn source() -> StaticSource {
        StaticSource::default()
            .with(
                ROOT,
                r#"{"os_list": [
                    {
                        "name": "Raspberry Pi OS (32-bit)",
                        "description": "A port of Debian Bookworm with the Raspberry Pi Desktop",
                        "url": "https://downloads.raspberrypi.org/raspios_armhf/images/2024-03-15-raspios-bookworm-armhf.img.xz",
                        "extract_size": 5234491392,
                        "extract_sha256": "aaaa",
                        "image_download_size": 1211936052,
                        "image_download_sha256": "bbbb",
                        "release_date": "2024-03-15"
                    },
                    {
                        "name": "Raspberry Pi OS (other)",
                        "description": "Other Raspberry Pi OS based images",
                        "subitems_url": "https://catalog.test/other.json"
                    },
                    {
                        "name": "Empty category",
                        "description": "Nothing in here",
                        "subitems": []
                    }
                ]}"#,
            )
            .with(
                "https://catalog.test/other.json",
                r#"{"os_list": [
                    {
                        "name": "Raspberry Pi OS Lite (32-bit)",
                        "description": "No desktop environment",
                        "url": "HTTPS://DOWNLOADS.raspberrypi.org/raspios_lite_armhf/images/lite.img.xz",
                        "extract_size": 2000000
                    },
                    {
                        "name": "Raspberry Pi OS (32-bit)",
                        "description": "Shadowed by the first entry of the same name",
                        "url": "https://downloads.raspberrypi.org/dup.zip",
                        "extract_size": 1
                    }
                ]}"#,
            )
    }

    fn settings() -> Settings {
        Settings::default().with_catalog_url(ROOT)
    }

    #[tokio::test]
    async fn lists_every_leaf_in_traversal_order() {
        let entries = list_os(&source(), &settings()).await.expect("list");

        let names: Vec<&str> = entries.iter().map(|e| e.name()).collect();
        assert_eq!(
            names,
            vec![
                "Raspberry Pi OS (32-bit)",
                "Raspberry Pi OS Lite (32-bit)",
                "Raspberry Pi OS (32-bit)",
            ]
        );
        assert!(entries[0].item_parents().is_empty());
        assert_eq!(entries[1].item_parents(), ["Raspberry Pi OS (other)".to_string()]);
    }

    #[tokio::test]
    async fn find_by_name_returns_first_match() {
        let entries = list_os(&source(), &settings()).await.expect("list");

        let found = find_by_name(&entries, "Raspberry Pi OS (32-bit)").expect("found");
        assert_eq!(found.image_name(), "2024-03-15-raspios-bookworm-armhf");
        assert_eq!(found.extract_sha256(), Some("aaaa"));
    }

    #[tokio::test]
    async fn find_by_name_reports_missing_name() {
        let entries = list_os(&source(), &settings()).await.expect("list");

        let err = find_by_name(&entries, "Ubuntu Desktop").unwrap_err();
        match err {
            CatalogError::NotFound { kind, key } => {
                assert_eq!(kind, LookupKind::Name);
                assert_eq!(key, "Ubuntu Desktop");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn find_by_url_matches_normalized_form_only() {
        let entries = list_os(&source(), &settings()).await.expect("list");

        let normalized = "https://downloads.raspberrypi.org/raspios_lite_armhf/images/lite.img.xz";
        let found = find_by_url(&entries, normalized).expect("found");
        assert_eq!(found.name(), "Raspberry Pi OS Lite (32-bit)");

        let raw = "HTTPS://DOWNLOADS.raspberrypi.org/raspios_lite_armhf/images/lite.img.xz";
        let err = find_by_url(&entries, raw).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::NotFound {
                kind: LookupKind::Url,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn invalid_leaf_fails_the_whole_listing() {
        let source = StaticSource::default().with(
            ROOT,
            r#"{"os_list": [{"name": "broken", "description": "no url", "extract_size": 1}]}"#,
        );

        let err = list_os(&source, &settings()).await.unwrap_err();
        assert!(matches!(err, CatalogError::MissingField("url")));
    }
}
