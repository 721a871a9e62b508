//! Icon reference resolution.
//!
//! A reference string is tried as a filesystem path first and as a symbolic
//! freedesktop icon name second. Neither succeeding is a soft failure: the
//! caller logs a notice and proceeds without an icon.

use std::io::Cursor;
use std::path::Path;

/// Resolves an icon reference to something the tray can display.
///
/// Empty references short-circuit to `None` without attempting resolution.
/// Callers are responsible for logging a failure notice when a non-empty
/// reference resolves to `None`.
pub fn resolve(reference: &str) -> Option<crate::menu::NodeIcon> {
    if reference.is_empty() {
        return None;
    }
    if let Some(icon) = load_file(reference) {
        return Some(icon);
    }
    if is_symbolic_name(reference) {
        return Some(crate::menu::NodeIcon::Named(reference.to_string()));
    }
    None
}

/// Loads an image file and converts it into both forms the
/// StatusNotifierItem protocol wants: an ARGB pixmap for the tray button
/// pixmap property and PNG bytes for menu item icon data.
fn load_file(path: &str) -> Option<crate::menu::NodeIcon> {
    if !Path::new(path).is_file() {
        return None;
    }
    let image = image::open(path).ok()?.into_rgba8();
    let (width, height) = image.dimensions();

    let mut png = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
        .ok()?;

    // RGBA -> ARGB (network byte order)
    let mut data = image.into_raw();
    for pixel in data.chunks_exact_mut(4) {
        pixel.rotate_right(1);
    }

    Some(crate::menu::NodeIcon::Loaded {
        pixmap: ksni::Icon {
            width: width as i32,
            height: height as i32,
            data,
        },
        png,
    })
}

/// Whether a reference is shaped like a freedesktop icon-theme name.
///
/// The host toolkit performs the actual theme lookup; this only rules out
/// strings that are clearly paths or free text.
fn is_symbolic_name(reference: &str) -> bool {
    !reference.contains(['/', '\\']) && !reference.contains(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::NodeIcon;

    #[test]
    fn empty_reference_short_circuits() {
        assert!(resolve("").is_none());
    }

    #[test]
    fn name_shaped_reference_falls_back_to_symbolic() {
        match resolve("application-exit") {
            Some(NodeIcon::Named(name)) => assert_eq!(name, "application-exit"),
            other => panic!("expected symbolic icon, got {other:?}"),
        }
    }

    #[test]
    fn missing_path_resolves_to_nothing() {
        assert!(resolve("/nonexistent/dir/icon.png").is_none());
        assert!(resolve("not an icon name").is_none());
    }

    #[test]
    fn file_reference_loads_pixmap_and_png() {
        let path = std::env::temp_dir().join(format!("configtray-icon-{}.png", std::process::id()));
        image::RgbaImage::from_pixel(2, 2, image::Rgba([1, 2, 3, 4]))
            .save(&path)
            .unwrap();

        let icon = resolve(path.to_str().unwrap());
        std::fs::remove_file(&path).unwrap();

        match icon {
            Some(NodeIcon::Loaded { pixmap, png }) => {
                assert_eq!((pixmap.width, pixmap.height), (2, 2));
                // RGBA [1,2,3,4] becomes ARGB [4,1,2,3]
                assert_eq!(&pixmap.data[..4], &[4, 1, 2, 3]);
                assert!(!png.is_empty());
            }
            other => panic!("expected loaded icon, got {other:?}"),
        }
    }

    #[test]
    fn unreadable_image_file_is_not_an_icon() {
        let path = std::env::temp_dir().join(format!("configtray-text-{}.png", std::process::id()));
        std::fs::write(&path, b"not an image").unwrap();

        let icon = resolve(path.to_str().unwrap());
        std::fs::remove_file(&path).unwrap();

        // The path exists but decoding fails, and an absolute path is not a
        // valid symbolic name either.
        assert!(icon.is_none());
    }
}
