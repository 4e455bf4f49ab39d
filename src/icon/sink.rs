//! Destinations for rendered icons.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};
use tracing::debug;

use super::IconError;

pub const LAUNCHER_FILE: &str = "ic_launcher.png";
pub const LAUNCHER_ROUND_FILE: &str = "ic_launcher_round.png";

/// Where one density's icon was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedIcon {
    pub label: String,
    pub dir: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Persists one rendered icon under a density label.
pub trait IconSink {
    fn save(&mut self, label: &str, image: &RgbaImage) -> Result<SavedIcon, IconError>;
}

/// Writes Android launcher icons into `<res>/mipmap-<label>/`.
///
/// The regular and round variants share the same encoded bytes.
pub struct MipmapSink {
    res_dir: PathBuf,
}

impl MipmapSink {
    pub fn new(res_dir: impl Into<PathBuf>) -> Self {
        Self {
            res_dir: res_dir.into(),
        }
    }

    pub fn mipmap_dir(&self, label: &str) -> PathBuf {
        self.res_dir.join(format!("mipmap-{label}"))
    }
}

pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, IconError> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), IconError> {
    fs::write(path, bytes).map_err(|source| IconError::Io {
        path: path.to_path_buf(),
        source,
    })
}

impl IconSink for MipmapSink {
    fn save(&mut self, label: &str, image: &RgbaImage) -> Result<SavedIcon, IconError> {
        let dir = self.mipmap_dir(label);
        fs::create_dir_all(&dir).map_err(|source| IconError::Io {
            path: dir.clone(),
            source,
        })?;

        let bytes = encode_png(image)?;
        let mut files = Vec::with_capacity(2);
        for name in [LAUNCHER_FILE, LAUNCHER_ROUND_FILE] {
            let path = dir.join(name);
            write_file(&path, &bytes)?;
            debug!("Wrote {} ({} bytes)", path.display(), bytes.len());
            files.push(path);
        }

        Ok(SavedIcon {
            label: label.to_string(),
            dir,
            files,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_identical_regular_and_round_icons() {
        let tmp = tempfile::tempdir().unwrap();
        let mut sink = MipmapSink::new(tmp.path());
        let image = crate::icon::render(48).unwrap();

        let saved = sink.save("mdpi", &image).unwrap();
        assert_eq!(saved.dir, tmp.path().join("mipmap-mdpi"));
        assert_eq!(saved.files.len(), 2);

        let regular = fs::read(saved.dir.join(LAUNCHER_FILE)).unwrap();
        let round = fs::read(saved.dir.join(LAUNCHER_ROUND_FILE)).unwrap();
        assert_eq!(regular, round);

        let decoded = image::load_from_memory(&regular).unwrap().into_rgba8();
        assert_eq!(decoded, image);
    }

    #[test]
    fn existing_directory_is_reused() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("mipmap-hdpi")).unwrap();
        let mut sink = MipmapSink::new(tmp.path());
        let image = crate::icon::render(72).unwrap();
        sink.save("hdpi", &image).unwrap();
        sink.save("hdpi", &image).unwrap();
        assert_eq!(fs::read_dir(tmp.path().join("mipmap-hdpi")).unwrap().count(), 2);
    }

    #[test]
    fn unwritable_location_reports_path() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("res");
        fs::write(&blocker, b"not a directory").unwrap();
        let mut sink = MipmapSink::new(&blocker);
        let image = crate::icon::render(48).unwrap();
        match sink.save("mdpi", &image) {
            Err(IconError::Io { path, .. }) => assert_eq!(path, blocker.join("mipmap-mdpi")),
            other => panic!("expected I/O error, got {other:?}"),
        }
    }
}
