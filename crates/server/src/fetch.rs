use std::{error::Error, path::PathBuf};

use futures_util::StreamExt;
use tokio::io::AsyncWriteExt;
use tracing::info;

/// Streams a feed archive from an HTTP(S) url into the temp directory and
/// returns the local path.
pub async fn download_feed(url: &str) -> Result<PathBuf, Box<dyn Error>> {
    info!("Downloading feed from {url}");
    let response = reqwest::get(url).await?.error_for_status()?;
    let path = std::env::temp_dir().join("metroscope-feed.zip");
    let mut file = tokio::fs::File::create(&path).await?;
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        file.write_all(&chunk?).await?;
    }
    file.flush().await?;
    Ok(path)
}
