use crate::scrapers::parse::SITE_ORIGIN;
use crate::scrapers::types::USER_AGENT;
use anyhow::{Context, Result};
use reqwest::header::{ACCEPT, CONTENT_TYPE, REFERER};
use reqwest::{Client, Url};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

/// Public URL prefix the static image directory is served under
pub const STATIC_IMAGES_URL: &str = "/static/images";

/// Downloads listing photos into the static image directory
pub struct ImageDownloader {
    client: Client,
    dir: PathBuf,
}

/// Keep only characters that are safe in a file name
pub fn safe_file_stem(car_id: &str) -> String {
    car_id
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

/// File extension for an image URL, `.jpg` unless the path says otherwise
pub fn image_extension(image_url: &str) -> &'static str {
    let path = Url::parse(image_url)
        .map(|url| url.path().to_lowercase())
        .unwrap_or_default();

    if path.ends_with(".png") {
        ".png"
    } else if path.ends_with(".webp") {
        ".webp"
    } else {
        ".jpg"
    }
}

impl ImageDownloader {
    pub fn new(dir: impl Into<PathBuf>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            dir: dir.into(),
        })
    }

    /// Save the image for `car_id` and return its public URL.
    ///
    /// Returns `None` for an empty URL or when the download fails; an image
    /// that is already on disk is not fetched again.
    pub async fn download(&self, image_url: &str, car_id: &str) -> Option<String> {
        if image_url.is_empty() {
            return None;
        }

        match self.try_download(image_url, car_id).await {
            Ok(url) => Some(url),
            Err(err) => {
                warn!("Failed to download image {}: {:#}", image_url, err);
                None
            }
        }
    }

    async fn try_download(&self, image_url: &str, car_id: &str) -> Result<String> {
        let filename = format!("{}{}", safe_file_stem(car_id), image_extension(image_url));
        let path = self.dir.join(&filename);
        let public_url = format!("{STATIC_IMAGES_URL}/{filename}");

        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            return Ok(public_url);
        }

        let response = self
            .client
            .get(image_url)
            .header(REFERER, format!("{SITE_ORIGIN}/"))
            .header(ACCEPT, "image/webp,image/apng,image/*,*/*;q=0.8")
            .send()
            .await
            .context("Failed to fetch image")?
            .error_for_status()?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("")
            .to_lowercase();
        if !content_type.starts_with("image/") {
            anyhow::bail!("not an image (content-type: {content_type})");
        }

        let bytes = response.bytes().await.context("Failed to read image body")?;
        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(&path, &bytes)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;

        info!("Image saved: {}", filename);
        Ok(public_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Answer a single HTTP request on a local port; returns the base URL
    async fn serve_once(
        status: &'static str,
        content_type: &'static str,
        body: &'static [u8],
    ) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 4096];
            let _ = socket.read(&mut request).await;

            let head = format!(
                "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            socket.write_all(head.as_bytes()).await.unwrap();
            socket.write_all(body).await.unwrap();
            let _ = socket.shutdown().await;
        });

        format!("http://{addr}")
    }

    fn local_downloader(dir: &std::path::Path) -> ImageDownloader {
        ImageDownloader {
            client: Client::builder()
                .no_proxy()
                .timeout(Duration::from_secs(5))
                .build()
                .unwrap(),
            dir: dir.to_path_buf(),
        }
    }

    #[tokio::test]
    async fn image_response_is_written_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let base = serve_once("200 OK", "image/jpeg", b"\xff\xd8\xff\xe0jpeg").await;

        let url = local_downloader(dir.path())
            .download(&format!("{base}/photos/car.jpg"), "che168_1_7")
            .await;

        assert_eq!(url.as_deref(), Some("/static/images/che168_1_7.jpg"));
        let saved = std::fs::read(dir.path().join("che168_1_7.jpg")).unwrap();
        assert_eq!(saved, b"\xff\xd8\xff\xe0jpeg");
    }

    #[tokio::test]
    async fn non_image_response_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let base = serve_once("200 OK", "text/html; charset=utf-8", b"<html>blocked</html>")
            .await;

        let url = local_downloader(dir.path())
            .download(&format!("{base}/photos/car.png"), "che168_2_9")
            .await;

        assert_eq!(url, None);
        assert!(!dir.path().join("che168_2_9.png").exists());
    }

    #[tokio::test]
    async fn error_status_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let base = serve_once("404 Not Found", "image/jpeg", b"").await;

        let url = local_downloader(dir.path())
            .download(&format!("{base}/photos/gone.jpg"), "che168_3_1")
            .await;

        assert_eq!(url, None);
        assert!(!dir.path().join("che168_3_1.jpg").exists());
    }

    #[test]
    fn file_stem_drops_unsafe_characters() {
        assert_eq!(safe_file_stem("che168_3_1234"), "che168_3_1234");
        assert_eq!(safe_file_stem("../etc/passwd"), "etcpasswd");
        assert_eq!(safe_file_stem("a b-c"), "ab-c");
    }

    #[test]
    fn extension_follows_url_path() {
        assert_eq!(image_extension("https://a.cn/x/car.JPEG"), ".jpg");
        assert_eq!(image_extension("https://a.cn/x/car.png?w=400"), ".png");
        assert_eq!(image_extension("https://a.cn/x/car.webp"), ".webp");
        assert_eq!(image_extension("https://picsum.photos/seed/1/800/600"), ".jpg");
        assert_eq!(image_extension("not a url"), ".jpg");
    }

    #[tokio::test]
    async fn existing_file_is_reused() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("car_1.png"), b"png").unwrap();

        let downloader = ImageDownloader::new(dir.path(), Duration::from_secs(1)).unwrap();
        let url = downloader
            .download("https://img.invalid/car.png", "car_1")
            .await;
        assert_eq!(url.as_deref(), Some("/static/images/car_1.png"));
    }

    #[tokio::test]
    async fn empty_url_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let downloader = ImageDownloader::new(dir.path(), Duration::from_secs(1)).unwrap();
        assert_eq!(downloader.download("", "car_1").await, None);
    }
}
