use anyhow::Result;
use tracing::debug;

use crate::catalog::CatalogSource;
use crate::cli::{OsCommands, ShowArgs};
use crate::helpers::{columns, progress::catalog_spinner, render_record, render_table};
use crate::raspi_os::{self, OsEntry};
use crate::settings::Settings;

/// Run an `os` subcommand and return what should go to stdout.
pub async fn run(command: OsCommands, source: &dyn CatalogSource, settings: &Settings) -> Result<String> {
    match command {
        OsCommands::List { url } => list(source, settings, url).await,
        OsCommands::Show(args) => show(source, settings, &args).await,
    }
}

async fn load(source: &dyn CatalogSource, settings: &Settings) -> Result<Vec<OsEntry>> {
    let spinner = catalog_spinner(settings.catalog_url());
    let entries = raspi_os::list_os(source, settings).await;
    spinner.finish_and_clear();
    Ok(entries?)
}

async fn list(source: &dyn CatalogSource, settings: &Settings, urls_only: bool) -> Result<String> {
    let entries = load(source, settings).await?;

    Ok(if urls_only {
        render_table(&entries, &columns(&["url"]), false)
    } else {
        render_table(&entries, &columns(&["name", "url"]), true)
    })
}

async fn show(source: &dyn CatalogSource, settings: &Settings, args: &ShowArgs) -> Result<String> {
    let entries = load(source, settings).await?;

    let entry = match (&args.url, &args.name) {
        (Some(url), _) => raspi_os::find_by_url(&entries, url)?,
        (None, Some(name)) => raspi_os::find_by_name(&entries, name)?,
        (None, None) => anyhow::bail!("either --name or --url is required"),
    };
    debug!(name = entry.name(), url = entry.url(), "matched catalog entry");

    Ok(render_record(entry, "name"))
}

#[cfg(test)]
mod tests {
    use super::run;
    use crate::catalog::testing::StaticSource;
    use crate::catalog::{CatalogError, LookupKind};
    use crate::cli::{OsCommands, ShowArgs};
    use crate::settings::Settings;
    use pretty_assertions::assert_eq;

    const ROOT: &str = "https://catalog.test/os_list.json";

    fn source() -> StaticSource {
        StaticSource::default()
            .with(
                ROOT,
                r#"{"os_list": [
                    {"name": "A", "subitems_url": "https://catalog.test/a.json"},
                    {"name": "Lite", "description": "headless", "url": "http://h/lite.img.xz", "extract_size": 7}
                ]}"#,
            )
            .with(
                "https://catalog.test/a.json",
                r#"{"os_list": [{"name": "B", "url": "http://h/b.zip", "description": "d", "extract_size": 1}]}"#,
            )
    }

    fn settings() -> Settings {
        Settings::default().with_catalog_url(ROOT)
    }

    #[tokio::test]
    async fn list_prints_name_and_url_table() {
        let out = run(OsCommands::List { url: false }, &source(), &settings())
            .await
            .expect("list");

        assert_eq!(
            out,
            "---- --------------------\n\
             name url\n\
             ---- --------------------\n\
             B    http://h/b.zip\n\
             Lite http://h/lite.img.xz\n"
        );
    }

    #[tokio::test]
    async fn list_urls_only() {
        let out = run(OsCommands::List { url: true }, &source(), &settings())
            .await
            .expect("list");
        assert_eq!(out, "http://h/b.zip\nhttp://h/lite.img.xz\n");
    }

    #[tokio::test]
    async fn show_by_url() {
        let args = ShowArgs {
            name: None,
            url: Some("http://h/b.zip".to_string()),
        };
        let out = run(OsCommands::Show(args), &source(), &settings())
            .await
            .expect("show");

        assert!(out.starts_with("name: B\n"));
        assert!(out.contains("    - image_name             : b\n"));
        assert!(out.contains("    - item_parents           : A\n"));
    }

    #[tokio::test]
    async fn show_unknown_name_is_not_found() {
        let args = ShowArgs {
            name: Some("Nope".to_string()),
            url: None,
        };
        let err = run(OsCommands::Show(args), &source(), &settings())
            .await
            .unwrap_err();

        match err.downcast_ref::<CatalogError>() {
            Some(CatalogError::NotFound { kind, key }) => {
                assert_eq!(*kind, LookupKind::Name);
                assert_eq!(key, "Nope");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.to_string(), "no raspberry pi os found with name 'Nope'");
    }
}
