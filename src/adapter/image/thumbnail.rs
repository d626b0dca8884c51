use std::io::{BufWriter, Write};
use std::path::Path;

use async_trait::async_trait;
use image::{DynamicImage, ImageFormat, ImageReader};
use tempfile::NamedTempFile;

use crate::application::app_error::{AppError, AppResult};
use crate::application::interface::image::{ImageNormalizer, NormalizeOutcome};
use crate::domain::entities::profile::AVATAR_MAX_DIMENSION;

/// Downscales images that exceed a bounding box, keeping the aspect ratio.
/// Smaller images are never upscaled and never rewritten.
#[derive(Debug, Clone, Copy)]
pub struct ThumbnailNormalizer {
    max_width: u32,
    max_height: u32,
}

impl Default for ThumbnailNormalizer {
    fn default() -> Self {
        Self::new(AVATAR_MAX_DIMENSION, AVATAR_MAX_DIMENSION)
    }
}

impl ThumbnailNormalizer {
    pub fn new(max_width: u32, max_height: u32) -> Self {
        Self { max_width, max_height }
    }

    pub fn normalize_file(&self, path: &Path) -> AppResult<NormalizeOutcome> {
        let decode_err = |e: &dyn std::fmt::Display| AppError::ImageDecodeError(format!("{}: {}", path.display(), e));

        let reader = ImageReader::open(path)
            .map_err(|e| decode_err(&e))?
            .with_guessed_format()
            .map_err(|e| decode_err(&e))?;
        let format = reader
            .format()
            .ok_or_else(|| decode_err(&"unrecognized image format"))?;
        let image = reader.decode().map_err(|e| decode_err(&e))?;

        let (width, height) = (image.width(), image.height());
        if !self.exceeds(width, height) {
            return Ok(NormalizeOutcome::Unchanged { width, height });
        }

        let resized = image.thumbnail(self.max_width, self.max_height);
        let to = (resized.width(), resized.height());
        replace_file(path, &resized, format)?;

        Ok(NormalizeOutcome::Resized {
            from: (width, height),
            to,
        })
    }

    // Strict comparison: an image exactly at the limit stays as is.
    fn exceeds(&self, width: u32, height: u32) -> bool {
        width > self.max_width || height > self.max_height
    }
}

/// Encodes into a temp file next to `path` and renames it over the original,
/// so a failed write never leaves a truncated image behind.
fn replace_file(path: &Path, image: &DynamicImage, format: ImageFormat) -> AppResult<()> {
    let write_err = |e: &dyn std::fmt::Display| AppError::ImageWriteError(format!("{}: {}", path.display(), e));

    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let permissions = std::fs::metadata(path).map_err(|e| write_err(&e))?.permissions();
    let tmp = NamedTempFile::new_in(dir).map_err(|e| write_err(&e))?;

    // JPEG has no alpha channel.
    let rgb;
    let image = if format == ImageFormat::Jpeg && image.color().has_alpha() {
        rgb = DynamicImage::ImageRgb8(image.to_rgb8());
        &rgb
    } else {
        image
    };

    {
        let mut writer = BufWriter::new(tmp.as_file());
        image.write_to(&mut writer, format).map_err(|e| write_err(&e))?;
        writer.flush().map_err(|e| write_err(&e))?;
    }
    tmp.as_file().set_permissions(permissions).map_err(|e| write_err(&e))?;
    tmp.as_file().sync_all().map_err(|e| write_err(&e))?;
    tmp.persist(path).map_err(|e| write_err(&e.error))?;
    Ok(())
}

#[async_trait]
impl ImageNormalizer for ThumbnailNormalizer {
    async fn normalize(&self, path: &Path) -> AppResult<NormalizeOutcome> {
        let normalizer = *self;
        let path = path.to_path_buf();
        tokio::task::spawn_blocking(move || normalizer.normalize_file(&path))
            .await
            .map_err(|e| AppError::TaskError(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use image::{ImageFormat, ImageReader};
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    use crate::adapter::image::thumbnail::ThumbnailNormalizer;
    use crate::application::app_error::AppError;
    use crate::application::interface::image::{ImageNormalizer, NormalizeOutcome};
    use crate::tests::helpers::{encode_image, write_image};

    #[fixture]
    fn media_dir() -> TempDir {
        TempDir::new().expect("create temp dir")
    }

    fn dimensions(path: &Path) -> (u32, u32) {
        let image = ImageReader::open(path)
            .unwrap()
            .with_guessed_format()
            .unwrap()
            .decode()
            .unwrap();
        (image.width(), image.height())
    }

    fn stored_format(path: &Path) -> Option<ImageFormat> {
        ImageReader::open(path).unwrap().with_guessed_format().unwrap().format()
    }

    #[rstest]
    #[case(150, 150)]
    #[case(300, 300)]
    #[case(300, 1)]
    #[case(1, 1)]
    fn test_fitting_image_is_left_untouched(media_dir: TempDir, #[case] width: u32, #[case] height: u32) {
        let path = write_image(media_dir.path(), "avatar.png", width, height, ImageFormat::Png);
        let before = fs::read(&path).unwrap();

        let outcome = ThumbnailNormalizer::default().normalize_file(&path).unwrap();

        assert_eq!(outcome, NormalizeOutcome::Unchanged { width, height });
        assert_eq!(fs::read(&path).unwrap(), before, "file bytes must not change");
    }

    #[rstest]
    #[case((301, 300), (300, 299))]
    #[case((300, 301), (299, 300))]
    #[case((600, 900), (200, 300))]
    #[case((900, 600), (300, 200))]
    #[case((640, 480), (300, 225))]
    #[case((1000, 10), (300, 3))]
    fn test_oversized_image_is_shrunk_in_place(
        media_dir: TempDir,
        #[case] from: (u32, u32),
        #[case] to: (u32, u32),
    ) {
        let path = write_image(media_dir.path(), "avatar.png", from.0, from.1, ImageFormat::Png);

        let outcome = ThumbnailNormalizer::default().normalize_file(&path).unwrap();

        assert_eq!(outcome, NormalizeOutcome::Resized { from, to });
        assert_eq!(dimensions(&path), to);
        assert!(to.0 <= 300 && to.1 <= 300);

        let original_ratio = from.0 as f64 / from.1 as f64;
        let new_ratio = to.0 as f64 / to.1 as f64;
        assert!(
            (original_ratio - new_ratio).abs() / original_ratio < 0.02,
            "aspect ratio drifted: {} -> {}",
            original_ratio,
            new_ratio
        );
    }

    #[rstest]
    fn test_normalization_is_idempotent(media_dir: TempDir) {
        let path = write_image(media_dir.path(), "avatar.png", 1200, 800, ImageFormat::Png);
        let normalizer = ThumbnailNormalizer::default();

        normalizer.normalize_file(&path).unwrap();
        let after_first = fs::read(&path).unwrap();
        let second = normalizer.normalize_file(&path).unwrap();

        assert_eq!(second, NormalizeOutcome::Unchanged { width: 300, height: 200 });
        assert_eq!(fs::read(&path).unwrap(), after_first);
    }

    #[rstest]
    fn test_jpeg_keeps_format(media_dir: TempDir) {
        let path = write_image(media_dir.path(), "avatar.jpg", 800, 600, ImageFormat::Jpeg);

        ThumbnailNormalizer::default().normalize_file(&path).unwrap();

        assert_eq!(stored_format(&path), Some(ImageFormat::Jpeg));
        assert_eq!(dimensions(&path), (300, 225));
    }

    #[rstest]
    fn test_png_keeps_format(media_dir: TempDir) {
        let path = write_image(media_dir.path(), "avatar.png", 500, 500, ImageFormat::Png);

        ThumbnailNormalizer::default().normalize_file(&path).unwrap();

        assert_eq!(stored_format(&path), Some(ImageFormat::Png));
        assert_eq!(dimensions(&path), (300, 300));
    }

    #[rstest]
    fn test_format_is_sniffed_not_taken_from_extension(media_dir: TempDir) {
        // PNG bytes behind a .jpg name
        let path = media_dir.path().join("avatar.jpg");
        fs::write(&path, encode_image(400, 400, ImageFormat::Png)).unwrap();

        ThumbnailNormalizer::default().normalize_file(&path).unwrap();

        assert_eq!(stored_format(&path), Some(ImageFormat::Png));
        assert_eq!(dimensions(&path), (300, 300));
    }

    #[rstest]
    fn test_resize_leaves_no_temp_files(media_dir: TempDir) {
        let path = write_image(media_dir.path(), "avatar.png", 700, 700, ImageFormat::Png);

        ThumbnailNormalizer::default().normalize_file(&path).unwrap();

        let entries: Vec<_> = fs::read_dir(media_dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[rstest]
    fn test_corrupt_file_fails_with_decode_error(media_dir: TempDir) {
        let path = media_dir.path().join("avatar.png");
        fs::write(&path, b"definitely not an image").unwrap();

        let result = ThumbnailNormalizer::default().normalize_file(&path);

        assert!(matches!(result, Err(AppError::ImageDecodeError(_))));
        assert_eq!(fs::read(&path).unwrap(), b"definitely not an image");
    }

    #[rstest]
    fn test_truncated_image_fails_with_decode_error(media_dir: TempDir) {
        let bytes = encode_image(400, 400, ImageFormat::Png);
        let path = media_dir.path().join("avatar.png");
        fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();

        let result = ThumbnailNormalizer::default().normalize_file(&path);

        assert!(matches!(result, Err(AppError::ImageDecodeError(_))));
    }

    #[rstest]
    fn test_missing_file_fails_with_decode_error(media_dir: TempDir) {
        let result = ThumbnailNormalizer::default().normalize_file(&media_dir.path().join("missing.png"));

        assert!(matches!(result, Err(AppError::ImageDecodeError(_))));
    }

    #[rstest]
    fn test_custom_bounds(media_dir: TempDir) {
        let path = write_image(media_dir.path(), "banner.png", 400, 100, ImageFormat::Png);

        let outcome = ThumbnailNormalizer::new(200, 200).normalize_file(&path).unwrap();

        assert_eq!(
            outcome,
            NormalizeOutcome::Resized {
                from: (400, 100),
                to: (200, 50)
            }
        );
    }

    #[rstest]
    #[tokio::test]
    async fn test_normalize_runs_on_blocking_pool(media_dir: TempDir) {
        let path = write_image(media_dir.path(), "avatar.png", 600, 900, ImageFormat::Png);

        let outcome = ThumbnailNormalizer::default().normalize(&path).await.unwrap();

        assert_eq!(
            outcome,
            NormalizeOutcome::Resized {
                from: (600, 900),
                to: (200, 300)
            }
        );
    }
}
