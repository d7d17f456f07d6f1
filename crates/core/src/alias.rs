/// Import names whose installable package is spelled differently on PyPI.
///
/// Keys are lowercase import names; values are the canonical PyPI spelling
/// (which may be mixed case, e.g. `Pillow`).
const ALIASES: &[(&str, &str)] = &[
    ("bs4", "beautifulsoup4"),
    ("cv2", "opencv-python"),
    ("dateutil", "python-dateutil"),
    ("dotenv", "python-dotenv"),
    ("pil", "Pillow"),
    ("skimage", "scikit-image"),
    ("sklearn", "scikit-learn"),
    ("yaml", "PyYAML"),
];

/// Look up the canonical package name for a lowercase import name.
pub fn canonical_package(lower_import: &str) -> Option<&'static str> {
    ALIASES
        .iter()
        .find(|(import, _)| *import == lower_import)
        .map(|(_, package)| *package)
}
