use super::types::DownloadRequest;
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait Downloader: Send + Sync {
    /// Human-readable name of the downloader
    fn name(&self) -> &'static str;

    /// Run the download, files are written by the downloader itself
    async fn download(&self, request: DownloadRequest) -> Result<()>;

    /// Test if this downloader is available on the system
    async fn test_availability(&self) -> bool;
}
