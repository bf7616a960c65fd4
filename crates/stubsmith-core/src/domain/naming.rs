//! File-name rewriting.
//!
//! A stub file name is split into stem and extension at the last dot. A name
//! with a single leading dot (`.gitignore`) is all extension and has an
//! empty stem, so it renders as `Bar.gitignore`. The stem is replaced by the
//! base name plus the longest matching preserve suffix.

use std::path::Path;

use crate::domain::suffix::PreserveSuffixes;

/// Derive the generated file name for a stub.
///
/// ```
/// use stubsmith_core::domain::{PreserveSuffixes, derive_file_name};
///
/// let suffixes = PreserveSuffixes::normalize(["Controller", "Service"]);
/// assert_eq!(derive_file_name("FooController.php", "Bar", &suffixes), "BarController.php");
/// assert_eq!(derive_file_name("Foo.php", "Bar", &suffixes), "Bar.php");
/// ```
pub fn derive_file_name(stub_file_name: &str, base_name: &str, suffixes: &PreserveSuffixes) -> String {
    let (stem, extension) = split_file_name(stub_file_name);
    let new_stem = suffixes.apply(stem, base_name);

    match extension {
        Some(ext) if !ext.is_empty() => format!("{new_stem}.{ext}"),
        _ => new_stem,
    }
}

/// Split a file name into `(stem, extension)`.
///
/// ```
/// use stubsmith_core::domain::split_file_name;
///
/// assert_eq!(split_file_name("Foo.blade.php"), ("Foo.blade", Some("php")));
/// assert_eq!(split_file_name(".gitignore"), ("", Some("gitignore")));
/// assert_eq!(split_file_name(".env.local"), (".env", Some("local")));
/// ```
pub fn split_file_name(file_name: &str) -> (&str, Option<&str>) {
    if let Some(rest) = file_name.strip_prefix('.') {
        if !rest.is_empty() && !rest.contains('.') {
            return ("", Some(rest));
        }
    }

    let path = Path::new(file_name);
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or(file_name);
    let extension = path.extension().and_then(|e| e.to_str());
    (stem, extension)
}
