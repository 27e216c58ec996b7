use std::path::Path;

use chrono::NaiveDate;
use url::Url;

use crate::catalog::{CatalogError, CatalogRecord};

/// Archive extension that wraps the image directly (`image.zip`), as opposed
/// to compressed images that carry two extensions (`image.img.xz`).
const ARCHIVE_EXTENSION: &str = "zip";

const ABSENT: &str = "<none>";

/// Renders one field of an [`OsEntry`] for display.
pub type FieldAccessor = fn(&OsEntry) -> String;

/// A single installable Raspberry Pi OS image from the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct OsEntry {
    name: String,
    description: String,
    url: Url,
    image_name: String,
    release_date: Option<NaiveDate>,
    extract_size: u64,
    extract_sha256: Option<String>,
    image_download_size: Option<u64>,
    image_download_sha256: Option<String>,
    contains_multiple_files: Option<bool>,
    item_parents: Vec<String>,
}

impl OsEntry {
    /// Every displayable field, in display order.
    pub const FIELDS: &'static [(&'static str, FieldAccessor)] = &[
        ("name", |e: &OsEntry| e.name().to_string()),
        ("description", |e: &OsEntry| e.description().to_string()),
        ("url", |e: &OsEntry| e.url().to_string()),
        ("image_name", |e: &OsEntry| e.image_name().to_string()),
        ("release_date", |e: &OsEntry| display_or_absent(e.release_date())),
        ("extract_size", |e: &OsEntry| e.extract_size().to_string()),
        ("extract_sha256", |e: &OsEntry| display_or_absent(e.extract_sha256())),
        ("image_download_size", |e: &OsEntry| display_or_absent(e.image_download_size())),
        ("image_download_sha256", |e: &OsEntry| {
            display_or_absent(e.image_download_sha256())
        }),
        ("contains_multiple_files", |e: &OsEntry| {
            display_or_absent(e.contains_multiple_files())
        }),
        ("item_parents", |e: &OsEntry| {
            if e.item_parents().is_empty() {
                ABSENT.to_string()
            } else {
                e.item_parents().join(" > ")
            }
        }),
    ];

    /// Build an entry from a normalized catalog leaf.
    ///
    /// `name`, `description`, `url` and `extract_size` must be present. The
    /// URL is parsed once here, and `image_name` is derived from it at the
    /// same time.
    pub fn from_record(record: CatalogRecord) -> Result<Self, CatalogError> {
        let CatalogRecord { node, item_parents } = record;

        let name = node.name.ok_or(CatalogError::MissingField("name"))?;
        let description = node
            .description
            .ok_or(CatalogError::MissingField("description"))?;
        let raw_url = node.url.ok_or(CatalogError::MissingField("url"))?;
        let extract_size = node
            .extract_size
            .ok_or(CatalogError::MissingField("extract_size"))?;

        let (url, image_name) = parse_url(&raw_url)?;

        let release_date = node
            .release_date
            .map(|value| {
                NaiveDate::parse_from_str(&value, "%Y-%m-%d")
                    .map_err(|source| CatalogError::InvalidDate { value, source })
            })
            .transpose()?;

        Ok(Self {
            name,
            description,
            url,
            image_name,
            release_date,
            extract_size,
            extract_sha256: node.extract_sha256,
            image_download_size: node.image_download_size,
            image_download_sha256: node.image_download_sha256,
            contains_multiple_files: node.contains_multiple_files,
            item_parents,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Normalized form of the catalog URL.
    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// File name of the image with its extensions stripped,
    /// eg. `2024-03-15-raspios-bookworm-arm64`
    pub fn image_name(&self) -> &str {
        &self.image_name
    }

    pub fn release_date(&self) -> Option<NaiveDate> {
        self.release_date
    }

    pub fn extract_size(&self) -> u64 {
        self.extract_size
    }

    pub fn extract_sha256(&self) -> Option<&str> {
        self.extract_sha256.as_deref()
    }

    pub fn image_download_size(&self) -> Option<u64> {
        self.image_download_size
    }

    pub fn image_download_sha256(&self) -> Option<&str> {
        self.image_download_sha256.as_deref()
    }

    pub fn contains_multiple_files(&self) -> Option<bool> {
        self.contains_multiple_files
    }

    /// Category names above this entry, root-most first.
    pub fn item_parents(&self) -> &[String] {
        &self.item_parents
    }

    /// Look up the accessor registered under `label`.
    pub fn field(label: &str) -> Option<FieldAccessor> {
        Self::FIELDS
            .iter()
            .find(|(name, _)| *name == label)
            .map(|(_, accessor)| *accessor)
    }
}

fn display_or_absent<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| ABSENT.to_string(), |v| v.to_string())
}

fn parse_url(raw: &str) -> Result<(Url, String), CatalogError> {
    let url = Url::parse(raw).map_err(|source| CatalogError::InvalidUrl {
        value: raw.to_string(),
        source,
    })?;
    let image_name = image_name_from_url(&url);
    Ok((url, image_name))
}

/// Last non-empty path segment with its extension removed, and a second one
/// too unless the first was the archive extension.
fn image_name_from_url(url: &Url) -> String {
    let base = url
        .path_segments()
        .and_then(|mut segments| segments.rfind(|s| !s.is_empty()))
        .unwrap_or_default();

    let (stem, ext) = split_extension(base);
    if ext == Some(ARCHIVE_EXTENSION) {
        return stem.to_string();
    }
    split_extension(stem).0.to_string()
}

fn split_extension(file_name: &str) -> (&str, Option<&str>) {
    let path = Path::new(file_name);
    match (path.file_stem(), path.extension()) {
        (Some(stem), Some(ext)) => (stem.to_str().unwrap_or(file_name), ext.to_str()),
        _ => (file_name, None),
    }
}
