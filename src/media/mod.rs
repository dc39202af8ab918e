mod downloader;
mod types;
mod ytdlp;

pub use downloader::Downloader;
pub use types::DownloadRequest;

use crate::{config::Config, utils};
use anyhow::Result;
use std::path::Path;
use tracing::{debug, info};
use ytdlp::YtDlpDownloader;

pub struct MediaDownloader {
    downloader: Box<dyn Downloader>,
}

impl MediaDownloader {
    pub fn new(config: &Config) -> Self {
        info!(
            "Media downloader initialized - using {}",
            config.get_downloader_binary()
        );

        Self::with_downloader(Box::new(YtDlpDownloader::new(
            config.get_downloader_binary(),
        )))
    }

    pub fn with_downloader(downloader: Box<dyn Downloader>) -> Self {
        Self { downloader }
    }

    pub async fn download(&self, request: DownloadRequest) -> Result<()> {
        info!("Starting download for URL: {}", request.urls.join(", "));

        let expected: Vec<String> = request
            .urls
            .iter()
            .filter_map(|url| {
                utils::expected_output_name(&request.options.output_template, url)
            })
            .collect();

        self.downloader.download(request).await?;
        info!("Successfully downloaded with {}", self.downloader.name());

        for name in expected {
            report_output(Path::new(&name));
        }

        Ok(())
    }

    pub async fn test_setup(&self) -> Result<()> {
        info!("Testing media downloader setup...");

        if self.downloader.test_availability().await {
            Ok(())
        } else {
            Err(anyhow::anyhow!(
                "{} is not available. Please install it or set downloader.binary in the config.",
                self.downloader.name()
            ))
        }
    }
}

fn report_output(path: &Path) {
    match std::fs::metadata(path) {
        Ok(meta) => info!("Saved {} ({} bytes)", path.display(), meta.len()),
        Err(e) => debug!("Expected output {} not found: {}", path.display(), e),
    }
}
