//! Visual regression testing via PNG snapshot comparison.

use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Snapshot I/O failures.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Directory or file access failed.
    #[error("snapshot I/O: {0}")]
    Io(#[from] std::io::Error),

    /// PNG encode or decode failed.
    #[error("snapshot image: {0}")]
    Image(#[from] image::ImageError),
}

/// Outcome of comparing an image against its baseline.
#[derive(Debug, Clone, PartialEq)]
pub enum Comparison {
    /// Within the threshold.
    Match {
        /// Fraction of differing bytes
        diff: f64,
    },
    /// Over the threshold.
    Mismatch {
        /// Fraction of differing bytes
        diff: f64,
    },
    /// No baseline exists yet.
    Missing,
}

/// Baselines stored as `<dir>/<name>.png`.
#[derive(Debug, Clone)]
pub struct Snapshot {
    dir: PathBuf,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::new("tests/snapshots")
    }
}

impl Snapshot {
    /// Snapshot store rooted at `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Root directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Baseline path for `name`.
    #[must_use]
    pub fn baseline_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.png"))
    }

    fn actual_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.actual.png"))
    }

    fn diff_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.diff.png"))
    }

    /// Write `image` as the baseline for `name`.
    pub fn save(&self, name: &str, image: &RgbaImage) -> Result<PathBuf, SnapshotError> {
        let path = self.baseline_path(name);
        save_png(&path, image)?;
        Ok(path)
    }

    /// Read the baseline for `name`, if one exists.
    pub fn load(&self, name: &str) -> Result<Option<RgbaImage>, SnapshotError> {
        let path = self.baseline_path(name);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(image::open(&path)?.into_rgba8()))
    }

    /// Compare `actual` with the stored baseline.
    pub fn compare(
        &self,
        name: &str,
        actual: &RgbaImage,
        threshold: f64,
    ) -> Result<Comparison, SnapshotError> {
        let Some(baseline) = self.load(name)? else {
            return Ok(Comparison::Missing);
        };
        let diff = Self::diff(&baseline, actual);
        if diff > threshold {
            Ok(Comparison::Mismatch { diff })
        } else {
            Ok(Comparison::Match { diff })
        }
    }

    /// Assert `actual` matches the baseline for `name`.
    ///
    /// With `SNAPSHOT_UPDATE` set, a missing baseline is created instead of
    /// failing.
    ///
    /// # Panics
    ///
    /// Panics on I/O errors, a missing baseline, or a difference above
    /// `threshold`.
    pub fn assert_match(&self, name: &str, actual: &RgbaImage, threshold: f64) {
        let baseline_path = self.baseline_path(name);
        match self.compare(name, actual, threshold) {
            Ok(Comparison::Match { .. }) => {}
            Ok(Comparison::Mismatch { diff }) => {
                let actual_path = self.actual_path(name);
                let diff_path = self.diff_path(name);
                let written = save_png(&actual_path, actual).and_then(|()| {
                    let baseline = self.load(name)?.unwrap_or_else(|| actual.clone());
                    save_png(&diff_path, &diff_image(&baseline, actual))
                });
                if let Err(e) = written {
                    eprintln!("could not write snapshot artifacts: {e}");
                }
                panic!(
                    "Visual regression '{}': {:.2}% diff (threshold: {:.2}%)\n\
                     Baseline: {}\n\
                     Actual: {}\n\
                     Diff: {}",
                    name,
                    diff * 100.0,
                    threshold * 100.0,
                    baseline_path.display(),
                    actual_path.display(),
                    diff_path.display()
                );
            }
            Ok(Comparison::Missing) if std::env::var("SNAPSHOT_UPDATE").is_ok() => {
                if let Err(e) = self.save(name, actual) {
                    panic!("Failed to create baseline '{name}': {e}");
                }
                println!("Created new baseline: {}", baseline_path.display());
            }
            Ok(Comparison::Missing) => panic!(
                "No baseline found for '{}'. Run with SNAPSHOT_UPDATE=1 to create.\n\
                 Expected path: {}",
                name,
                baseline_path.display()
            ),
            Err(e) => panic!("Snapshot '{name}' failed: {e}"),
        }
    }

    /// Fraction of differing bytes; 1.0 when sizes differ.
    #[must_use]
    pub fn diff(a: &RgbaImage, b: &RgbaImage) -> f64 {
        if a.dimensions() != b.dimensions() {
            return 1.0;
        }
        let total = a.as_raw().len();
        if total == 0 {
            return 0.0;
        }
        let differing = a
            .as_raw()
            .iter()
            .zip(b.as_raw())
            .filter(|(x, y)| x != y)
            .count();
        differing as f64 / total as f64
    }
}

fn save_png(path: &Path, image: &RgbaImage) -> Result<(), SnapshotError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    image.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

/// Red where pixels differ, faded baseline elsewhere.
fn diff_image(baseline: &RgbaImage, actual: &RgbaImage) -> RgbaImage {
    let (w, h) = actual.dimensions();
    RgbaImage::from_fn(w, h, |x, y| {
        let a = actual.get_pixel(x, y);
        match baseline.get_pixel_checked(x, y) {
            Some(b) if b == a => {
                let [r, g, bl, _] = b.0;
                Rgba([r / 4 + 191, g / 4 + 191, bl / 4 + 191, 255])
            }
            _ => Rgba([255, 0, 0, 255]),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(w: u32, h: u32, rgba: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(w, h, Rgba(rgba))
    }

    // ===== Diff Tests =====

    #[test]
    fn test_diff_identical() {
        let a = filled(10, 10, [255, 0, 0, 255]);
        assert_eq!(Snapshot::diff(&a, &a.clone()), 0.0);
    }

    #[test]
    fn test_diff_different_sizes() {
        let a = filled(10, 10, [0, 0, 0, 255]);
        let b = filled(20, 20, [0, 0, 0, 255]);
        assert_eq!(Snapshot::diff(&a, &b), 1.0);
    }

    #[test]
    fn test_diff_partial() {
        let a = filled(10, 10, [255, 0, 0, 255]);
        let mut b = a.clone();
        b.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
        // One byte of 400
        assert!((Snapshot::diff(&a, &b) - 0.0025).abs() < 1e-9);
    }

    #[test]
    fn test_diff_image_marks_changes() {
        let a = filled(2, 1, [0, 0, 0, 255]);
        let mut b = a.clone();
        b.put_pixel(1, 0, Rgba([9, 9, 9, 255]));
        let d = diff_image(&a, &b);
        assert_eq!(d.get_pixel(1, 0).0, [255, 0, 0, 255]);
        assert_ne!(d.get_pixel(0, 0).0, [255, 0, 0, 255]);
    }

    // ===== Store Tests =====

    #[test]
    fn test_default_dir() {
        assert_eq!(Snapshot::default().dir(), Path::new("tests/snapshots"));
    }

    #[test]
    fn test_save_load_compare() {
        let tmp = tempfile::tempdir().unwrap();
        let store = Snapshot::new(tmp.path().join("snaps"));
        let image = filled(4, 3, [10, 20, 30, 255]);

        assert!(store.load("off").unwrap().is_none());
        assert_eq!(
            store.compare("off", &image, 0.0).unwrap(),
            Comparison::Missing
        );

        let path = store.save("off", &image).unwrap();
        assert!(path.ends_with("off.png"));
        assert_eq!(store.load("off").unwrap().unwrap(), image);
        assert_eq!(
            store.compare("off", &image, 0.0).unwrap(),
            Comparison::Match { diff: 0.0 }
        );

        let other = filled(4, 3, [0, 0, 0, 255]);
        assert!(matches!(
            store.compare("off", &other, 0.01).unwrap(),
            Comparison::Mismatch { .. }
        ));
    }

    #[test]
    fn test_assert_match_passes() {
        let tmp = tempfile::tempdir().unwrap();
        let store = Snapshot::new(tmp.path());
        let image = filled(2, 2, [1, 2, 3, 255]);
        store.save("on", &image).unwrap();
        store.assert_match("on", &image, 0.0);
    }

    #[test]
    #[should_panic(expected = "Visual regression 'on'")]
    fn test_assert_match_panics_on_mismatch() {
        let tmp = tempfile::tempdir().unwrap();
        let store = Snapshot::new(tmp.path());
        store.save("on", &filled(2, 2, [1, 2, 3, 255])).unwrap();
        store.assert_match("on", &filled(2, 2, [200, 2, 3, 255]), 0.0);
    }

    #[test]
    fn test_corrupt_baseline_is_image_error() {
        let tmp = tempfile::tempdir().unwrap();
        let store = Snapshot::new(tmp.path());
        std::fs::write(store.baseline_path("bad"), b"not a png").unwrap();
        assert!(matches!(store.load("bad"), Err(SnapshotError::Image(_))));
    }
}
