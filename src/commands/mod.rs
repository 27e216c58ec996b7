mod device;
mod os;

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::catalog::HttpSource;
use crate::cli::{Cli, Commands, GlobalArgs};
use crate::settings::{self, Settings};

/// Resolve settings with precedence defaults < file < environment < flags.
pub fn resolve_settings(args: &GlobalArgs) -> Result<Settings> {
    let base = match &args.config {
        Some(path) => settings::from_file(path)
            .with_context(|| format!("load settings from {}", path.display()))?,
        None => Settings::default(),
    };

    let mut resolved = settings::apply_env(base).context("read settings from environment")?;
    if let Some(url) = &args.catalog_url {
        resolved = resolved.with_catalog_url(url.clone());
    }
    if let Some(secs) = args.timeout {
        resolved = resolved.with_timeout_secs(secs);
    }

    debug!(?resolved, "settings resolved");
    Ok(resolved)
}

/// Dispatch a parsed command line and print its output.
pub async fn run(cli: Cli) -> Result<()> {
    let settings = resolve_settings(&cli.global)?;
    info!(command = cli.command.name(), "running");

    let output = match cli.command {
        Commands::Os { command } => {
            let source = HttpSource::new(settings.user_agent(), settings.timeout())
                .context("build HTTP client")?;
            os::run(command, &source, &settings).await?
        }
        Commands::Device { command } => device::run(command)?,
    };

    write_output(&mut std::io::stdout().lock(), &output).context("write to stdout")
}

/// Write command output. A reader that went away (`os list | head`) is not
/// an error.
fn write_output<W: Write>(out: &mut W, output: &str) -> io::Result<()> {
    match out.write_all(output.as_bytes()).and_then(|()| out.flush()) {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
            debug!("stdout closed early, output truncated");
            Ok(())
        }
        res => res,
    }
}

#[cfg(test)]
mod tests {
    use super::{resolve_settings, write_output};
    use crate::cli::Cli;
    use clap::Parser;
    use std::io::{self, Write};
    use std::time::Duration;

    /// Writer whose every call fails with `kind`.
    struct FailingWriter(io::ErrorKind);

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(self.0))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(self.0))
        }
    }

    #[test]
    fn writes_output_verbatim() {
        let mut out = Vec::new();
        write_output(&mut out, "name url\n").expect("write");
        assert_eq!(out, b"name url\n");
    }

    #[test]
    fn closed_pipe_is_not_an_error() {
        let mut out = FailingWriter(io::ErrorKind::BrokenPipe);
        assert!(write_output(&mut out, "http://h/b.zip\n").is_ok());
    }

    #[test]
    fn other_write_failures_propagate() {
        let mut out = FailingWriter(io::ErrorKind::PermissionDenied);
        let err = write_output(&mut out, "http://h/b.zip\n").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn flags_override_settings_file() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        write!(file, r#"{{"catalog_url": "http://file.local/a.json", "timeout_secs": 9}}"#)
            .expect("write");
        let config = file.path().to_string_lossy().to_string();

        let cli = Cli::try_parse_from([
            "imagine-pi",
            "--config",
            config.as_str(),
            "--catalog-url",
            "http://flag.local/b.json",
            "os",
            "list",
        ])
        .expect("parse");

        let settings = resolve_settings(&cli.global).expect("settings");
        assert_eq!(settings.catalog_url(), "http://flag.local/b.json");
        assert_eq!(settings.timeout(), Duration::from_secs(9));
    }

    #[test]
    fn missing_settings_file_is_reported() {
        let cli = Cli::try_parse_from([
            "imagine-pi",
            "--config",
            "/nonexistent/imagine-pi.json",
            "device",
            "list",
        ])
        .expect("parse");

        let err = resolve_settings(&cli.global).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/imagine-pi.json"));
    }
}
