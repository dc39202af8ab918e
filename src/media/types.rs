/// Output filename template, `%(id)s` is replaced with the media id by yt-dlp.
pub const OUTPUT_TEMPLATE: &str = "%(id)s_.mp3";
pub const FORMAT_SELECTOR: &str = "bestaudio";
pub const TARGET_URL: &str = "https://www.youtube.com/watch?v=enE-Z2GZXZs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOptions {
    pub output_template: String,
    pub format: String,
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self {
            output_template: OUTPUT_TEMPLATE.to_string(),
            format: FORMAT_SELECTOR.to_string(),
        }
    }
}

/// A single download: built once, handed to a downloader by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub options: DownloadOptions,
    pub urls: Vec<String>,
}

impl Default for DownloadRequest {
    fn default() -> Self {
        Self {
            options: DownloadOptions::default(),
            urls: vec![TARGET_URL.to_string()],
        }
    }
}

impl DownloadRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Command-line arguments for yt-dlp. Config files yt-dlp would otherwise
    /// pick up are ignored so only these options apply.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            "--output".to_string(),
            self.options.output_template.clone(),
            "--format".to_string(),
            self.options.format.clone(),
            "--ignore-config".to_string(),
            "--".to_string(),
        ];
        args.extend(self.urls.iter().cloned());
        args
    }
}
