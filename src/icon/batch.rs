//! Batch driver: one render and one save per density, in table order.

use std::collections::HashSet;

use tracing::info;

use super::sink::{IconSink, SavedIcon};
use super::{render_with, IconError};
use crate::config::{Density, Palette};

#[derive(Debug, Default)]
pub struct BatchReport {
    pub saved: Vec<SavedIcon>,
}

impl BatchReport {
    pub fn file_count(&self) -> usize {
        self.saved.iter().map(|s| s.files.len()).sum()
    }
}

fn validate(densities: &[Density]) -> Result<(), IconError> {
    let mut seen = HashSet::new();
    for density in densities {
        if density.label.trim().is_empty() {
            return Err(IconError::InvalidDensity("empty density label".into()));
        }
        if !seen.insert(density.label.as_str()) {
            return Err(IconError::InvalidDensity(format!(
                "duplicate density label '{}'",
                density.label
            )));
        }
    }
    Ok(())
}

/// Render every density and hand it to `sink`. Stops at the first failure.
pub fn generate(
    densities: &[Density],
    palette: &Palette,
    sink: &mut dyn IconSink,
) -> Result<BatchReport, IconError> {
    validate(densities)?;

    let mut report = BatchReport::default();
    for density in densities {
        info!(
            "Generating {} icon ({}x{})...",
            density.label, density.size, density.size
        );
        let image = render_with(density.size, palette)?;
        let saved = sink.save(&density.label, &image)?;
        info!("Saved to {}", saved.dir.display());
        report.saved.push(saved);
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;
    use std::path::PathBuf;

    #[derive(Default)]
    struct MemorySink {
        images: Vec<(String, RgbaImage)>,
    }

    impl IconSink for MemorySink {
        fn save(&mut self, label: &str, image: &RgbaImage) -> Result<SavedIcon, IconError> {
            self.images.push((label.to_string(), image.clone()));
            Ok(SavedIcon {
                label: label.to_string(),
                dir: PathBuf::from(label),
                files: vec![PathBuf::from(label).join("icon.png")],
            })
        }
    }

    #[test]
    fn renders_each_density_in_order() {
        let mut sink = MemorySink::default();
        let report =
            generate(&Density::launcher_defaults(), &Palette::default(), &mut sink).unwrap();

        let labels: Vec<_> = sink.images.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, ["mdpi", "hdpi", "xhdpi", "xxhdpi", "xxxhdpi"]);
        let sizes: Vec<_> = sink.images.iter().map(|(_, i)| i.width()).collect();
        assert_eq!(sizes, [48, 72, 96, 144, 192]);
        assert_eq!(report.saved.len(), 5);
    }

    #[test]
    fn empty_table_does_nothing() {
        let mut sink = MemorySink::default();
        let report = generate(&[], &Palette::default(), &mut sink).unwrap();
        assert_eq!(report.file_count(), 0);
        assert!(sink.images.is_empty());
    }

    #[test]
    fn duplicate_labels_are_rejected_before_rendering() {
        let mut sink = MemorySink::default();
        let table = [Density::new("mdpi", 48), Density::new("mdpi", 96)];
        let err = generate(&table, &Palette::default(), &mut sink).unwrap_err();
        assert!(matches!(err, IconError::InvalidDensity(_)));
        assert!(sink.images.is_empty());
    }

    #[test]
    fn failure_stops_the_batch() {
        let mut sink = MemorySink::default();
        let table = [
            Density::new("mdpi", 48),
            Density::new("tiny", 8),
            Density::new("xhdpi", 96),
        ];
        let err = generate(&table, &Palette::default(), &mut sink).unwrap_err();
        assert!(matches!(err, IconError::TooSmall { edge: 8, .. }));
        assert_eq!(sink.images.len(), 1);
    }

    #[test]
    fn oversized_density_is_rejected_without_rendering() {
        let mut sink = MemorySink::default();
        let table = [Density::new("huge", 100_000)];
        let err = generate(&table, &Palette::default(), &mut sink).unwrap_err();
        assert!(matches!(err, IconError::TooLarge { edge: 100_000, .. }));
        assert!(sink.images.is_empty());
    }
}
