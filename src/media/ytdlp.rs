use super::{downloader::Downloader, types::DownloadRequest};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info, warn};

pub struct YtDlpDownloader {
    binary: String,
}

impl YtDlpDownloader {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }
}

impl Default for YtDlpDownloader {
    fn default() -> Self {
        Self::new("yt-dlp")
    }
}

#[async_trait]
impl Downloader for YtDlpDownloader {
    fn name(&self) -> &'static str {
        "yt-dlp"
    }

    async fn download(&self, request: DownloadRequest) -> Result<()> {
        let args = request.to_args();
        info!(
            "Downloading {} with yt-dlp (format: {}, output: {})",
            request.urls.join(", "),
            request.options.format,
            request.options.output_template
        );
        debug!("Running {} {:?}", self.binary(), args);

        // yt-dlp prints its own progress, so stdout and stderr are inherited
        let status = Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .status()
            .await
            .with_context(|| format!("Failed to run {}", self.binary))?;

        if !status.success() {
            return Err(anyhow::anyhow!(
                "Media download failed: {} exited with {}",
                self.binary,
                status
            ));
        }

        Ok(())
    }

    async fn test_availability(&self) -> bool {
        match Command::new(&self.binary).arg("--version").output().await {
            Ok(output) => {
                if output.status.success() {
                    let version = String::from_utf8_lossy(&output.stdout);
                    info!(
                        "✅ {} is available, version: {}",
                        self.binary,
                        version.trim()
                    );
                    true
                } else {
                    warn!("❌ {} --version failed", self.binary);
                    false
                }
            }
            Err(e) => {
                warn!("❌ {} not found: {}", self.binary, e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_binary() {
        assert_eq!(YtDlpDownloader::default().binary(), "yt-dlp");
        assert_eq!(YtDlpDownloader::default().name(), "yt-dlp");
    }

    #[tokio::test]
    async fn test_missing_binary_fails() {
        let downloader = YtDlpDownloader::new("/nonexistent/ytmp3-test/yt-dlp");
        let err = downloader
            .download(DownloadRequest::new())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to run"));
        assert!(!downloader.test_availability().await);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_zero_exit_propagates() {
        let downloader = YtDlpDownloader::new("false");
        let err = downloader
            .download(DownloadRequest::new())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Media download failed"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_zero_exit_succeeds() {
        let downloader = YtDlpDownloader::new("true");
        assert!(downloader.download(DownloadRequest::new()).await.is_ok());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_availability_with_custom_binary() {
        assert!(!YtDlpDownloader::new("false").test_availability().await);
        assert!(YtDlpDownloader::new("true").test_availability().await);
    }

    #[tokio::test]
    #[ignore] // Requires yt-dlp to be installed
    async fn test_availability() {
        assert!(YtDlpDownloader::default().test_availability().await);
    }
}
