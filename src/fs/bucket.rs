//! Extension buckets
//!
//! A bucket is the destination subdirectory a file is sorted into. Its name is
//! the file's extension without the leading dot. Files without an extension,
//! including dotfiles such as `.gitignore`, use the empty bucket, which is the
//! destination root itself.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Name of the bucket for `path`, or an empty string when it has no extension.
///
/// ```
/// use sortcopy::fs::bucket_name;
/// use std::path::Path;
///
/// assert_eq!(bucket_name(Path::new("photos/cat.jpeg")), "jpeg");
/// assert_eq!(bucket_name(Path::new("archive.tar.gz")), "gz");
/// assert_eq!(bucket_name(Path::new("README")), "");
/// assert_eq!(bucket_name(Path::new(".gitignore")), "");
/// ```
pub fn bucket_name(path: &Path) -> &OsStr {
    path.extension().unwrap_or_else(|| OsStr::new(""))
}

/// Directory under `destination_root` that receives `source`.
pub fn bucket_dir(destination_root: &Path, source: &Path) -> PathBuf {
    let bucket = bucket_name(source);
    if bucket.is_empty() {
        destination_root.to_path_buf()
    } else {
        destination_root.join(bucket)
    }
}

/// Full target path for `source`, or `None` if the path has no file name.
pub fn target_path(destination_root: &Path, source: &Path) -> Option<PathBuf> {
    let name = source.file_name()?;
    Some(bucket_dir(destination_root, source).join(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_plain_extension() {
        assert_eq!(bucket_name(Path::new("/a/b/report.pdf")), "pdf");
        assert_eq!(bucket_name(Path::new("notes.TXT")), "TXT");
    }

    #[test]
    fn test_last_dot_wins() {
        assert_eq!(bucket_name(Path::new("backup.tar.gz")), "gz");
        assert_eq!(bucket_name(Path::new(".config.toml")), "toml");
    }

    #[test]
    fn test_no_extension() {
        assert_eq!(bucket_name(Path::new("README")), "");
        assert_eq!(bucket_name(Path::new(".gitignore")), "");
        assert_eq!(bucket_name(Path::new("trailing.")), "");
    }

    #[test]
    fn test_bucket_dir_for_empty_bucket_is_root() {
        let root = Path::new("/dst");
        assert_eq!(bucket_dir(root, Path::new("src/README")), PathBuf::from("/dst"));
        assert_eq!(bucket_dir(root, Path::new("src/x.rs")), PathBuf::from("/dst/rs"));
    }

    #[test]
    fn test_target_path() {
        let root = Path::new("/dst");
        assert_eq!(
            target_path(root, Path::new("/src/a/report.pdf")),
            Some(PathBuf::from("/dst/pdf/report.pdf"))
        );
        assert_eq!(
            target_path(root, Path::new("/src/.gitignore")),
            Some(PathBuf::from("/dst/.gitignore"))
        );
        assert_eq!(target_path(root, Path::new("/")), None);
    }

    proptest! {
        #[test]
        fn prop_dotless_names_use_empty_bucket(name in "[a-zA-Z0-9_-]{1,16}") {
            prop_assert_eq!(bucket_name(Path::new(&name)), "");
            let hidden = format!(".{}", name);
            prop_assert_eq!(bucket_name(Path::new(&hidden)), "");
        }

        #[test]
        fn prop_bucket_is_text_after_last_dot(
            stem in "[a-zA-Z0-9_]{1,12}",
            ext in "[a-zA-Z0-9]{1,6}",
        ) {
            let name = format!("{}.{}", stem, ext);
            prop_assert_eq!(bucket_name(Path::new(&name)), ext.as_str());
            let target = target_path(Path::new("/dst"), Path::new(&name)).unwrap();
            prop_assert_eq!(target, Path::new("/dst").join(&ext).join(&name));
        }
    }
}
