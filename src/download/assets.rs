//! Asset downloading.

use std::path::{Path, PathBuf};

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::api::SvgRepoClient;
use crate::catalog::AssetLink;
use crate::download::state::DownloadState;
use crate::error::{AssetError, Error};
use crate::fs::destination_entry;
use crate::output::ProgressReporter;

/// What happened to an asset that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetOutcome {
    Downloaded(PathBuf),
    /// The destination was already present; nothing was fetched.
    AlreadyExists(PathBuf),
}

/// Download one asset into `output_dir`.
///
/// Existing files are never refetched or overwritten. Only responses declaring exactly
/// `image/svg+xml` are written.
pub async fn download_asset(
    client: &SvgRepoClient,
    link: &AssetLink,
    output_dir: &Path,
) -> Result<AssetOutcome, AssetError> {
    let dest = destination_entry(output_dir, link)?;

    if dest.exists() {
        return Ok(AssetOutcome::AlreadyExists(dest));
    }

    let response = client.fetch(link.as_str()).await.map_err(|e| AssetError::Fetch {
        url: link.to_string(),
        message: match e {
            Error::Fetch { message, .. } => message,
            other => other.to_string(),
        },
    })?;

    if !response.is_svg() {
        return Err(AssetError::NotSvg {
            url: link.to_string(),
            content_type: response.content_type().unwrap_or("<none>").to_string(),
        });
    }

    if let Err(source) = write_new_file(&dest, &response.body).await {
        // Drop partial output so the next run does not treat it as complete.
        if dest.exists() && source.kind() != std::io::ErrorKind::AlreadyExists {
            if let Err(e) = tokio::fs::remove_file(&dest).await {
                tracing::debug!("Failed to remove partial file {}: {}", dest.display(), e);
            }
        }
        return Err(AssetError::Write {
            url: link.to_string(),
            path: dest,
            source,
        });
    }

    Ok(AssetOutcome::Downloaded(dest))
}

async fn write_new_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await?;
    file.write_all(bytes).await?;
    file.flush().await?;
    Ok(())
}

/// Download a batch of assets sequentially.
///
/// Failures are logged and counted; they never stop the batch. `progress` advances once
/// per file written.
pub async fn download_all(
    client: &SvgRepoClient,
    links: &[AssetLink],
    output_dir: &Path,
    progress: &dyn ProgressReporter,
    show_skipped: bool,
    state: &mut DownloadState,
) {
    for link in links {
        match download_asset(client, link, output_dir).await {
            Ok(AssetOutcome::Downloaded(path)) => {
                state.increment_downloaded();
                progress.advance();
                tracing::debug!("Downloaded: {}", path.display());
            }
            Ok(AssetOutcome::AlreadyExists(path)) => {
                state.increment_skipped();
                if show_skipped {
                    progress.suspend(&mut || {
                        tracing::info!("Skipping existing file: {}", path.display())
                    });
                } else {
                    tracing::debug!("Skipping existing file: {}", path.display());
                }
            }
            Err(e) => {
                state.increment_failed();
                progress.suspend(&mut || tracing::warn!("{}", e));
            }
        }
    }

    progress.finish();
}
