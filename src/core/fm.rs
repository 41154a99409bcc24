//! File entries and file type classification for filebox.
//!
//! Provides the [FileEntry] struct which is used throughout filebox,
//! the [FileType] classification derived from a filename's extension,
//! and [browse_dir] which builds entries from a directory on disk.

use crate::utils::with_lowered_stack;

use phf::phf_map;
use tracing::debug;

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Classification of a file, derived from its extension.
///
/// The declaration order is the order used when sorting by type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FileType {
    Code,
    Image,
    Music,
    Video,
    Pdf,
    Text,
    Unknown,
}

impl FileType {
    /// Human-readable label used by listings.
    pub fn label(self) -> &'static str {
        match self {
            FileType::Code => "Code",
            FileType::Image => "Image",
            FileType::Music => "Music",
            FileType::Video => "Video",
            FileType::Pdf => "PDF",
            FileType::Text => "Text",
            FileType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lower-case extension to file type mapping.
static EXT_TYPE_MAP: phf::Map<&'static str, FileType> = phf_map! {
    "c" => FileType::Code,
    "cpp" => FileType::Code,
    "js" => FileType::Code,
    "ts" => FileType::Code,
    "rs" => FileType::Code,
    "py" => FileType::Code,
    "java" => FileType::Code,
    "html" => FileType::Code,
    "css" => FileType::Code,
    "sh" => FileType::Code,
    "png" => FileType::Image,
    "gif" => FileType::Image,
    "jpg" => FileType::Image,
    "jpeg" => FileType::Image,
    "mp3" => FileType::Music,
    "ogg" => FileType::Music,
    "flac" => FileType::Music,
    "aac" => FileType::Music,
    "wav" => FileType::Music,
    "mp4" => FileType::Video,
    "webm" => FileType::Video,
    "mkv" => FileType::Video,
    "avi" => FileType::Video,
    "mov" => FileType::Video,
    "flv" => FileType::Video,
    "wmv" => FileType::Video,
    "pdf" => FileType::Pdf,
    "txt" => FileType::Text,
    "srt" => FileType::Text,
    "vtt" => FileType::Text,
    "md" => FileType::Text,
    "json" => FileType::Text,
    "yml" => FileType::Text,
    "ini" => FileType::Text,
    "conf" => FileType::Text,
};

/// Returns the text after the last `.` of the filename.
///
/// `None` for an empty filename or a filename without any dot.
/// A trailing dot gives `Some("")`, a leading dot (`.bashrc`) gives `Some("bashrc")`.
pub fn file_extension(filename: &str) -> Option<&str> {
    filename.rfind('.').map(|idx| &filename[idx + 1..])
}

/// Classifies a filename by its extension, case-insensitively.
///
/// Unknown or missing extensions give [FileType::Unknown].
pub fn infer_file_type(filename: &str) -> FileType {
    let Some(ext) = file_extension(filename) else {
        return FileType::Unknown;
    };
    with_lowered_stack(ext, |lowered| {
        EXT_TYPE_MAP
            .get(lowered)
            .copied()
            .unwrap_or(FileType::Unknown)
    })
}

/// A single entry of a file listing.
///
/// Entries are built by callers (or by [browse_dir]) and are only read by the
/// sorting and formatting helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    filename: String,
    size: u64,
    file_type: FileType,
    is_dir: bool,
    is_broken_link: bool,
    modified: Option<i64>,
}

impl FileEntry {
    /// Creates a file entry, classifying it from its filename.
    pub fn new(filename: impl Into<String>, size: u64) -> Self {
        let filename = filename.into();
        let file_type = infer_file_type(&filename);
        FileEntry {
            filename,
            size,
            file_type,
            is_dir: false,
            is_broken_link: false,
            modified: None,
        }
    }

    /// Creates a directory entry. Directories have no size and are never classified.
    pub fn directory(filename: impl Into<String>) -> Self {
        FileEntry {
            filename: filename.into(),
            size: 0,
            file_type: FileType::Unknown,
            is_dir: true,
            is_broken_link: false,
            modified: None,
        }
    }

    /// Sets the modification time in milliseconds since the Unix epoch.
    pub fn with_modified(mut self, millis: i64) -> Self {
        self.modified = Some(millis);
        self
    }

    /// Marks the entry as a symlink whose target does not exist.
    pub fn broken_link(mut self) -> Self {
        self.is_broken_link = true;
        self
    }

    // Accessors

    #[inline]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }

    #[inline]
    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    #[inline]
    pub fn is_broken_link(&self) -> bool {
        self.is_broken_link
    }

    #[inline]
    pub fn modified(&self) -> Option<i64> {
        self.modified
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.filename.starts_with('.')
    }
}

fn system_time_millis(time: SystemTime) -> Option<i64> {
    let millis = time.duration_since(UNIX_EPOCH).ok()?.as_millis();
    i64::try_from(millis).ok()
}

/// Reads the contents of the provided directory into a vector of [FileEntry].
///
/// Symlinks are followed, so a link to a directory is listed as a directory.
/// A link whose target is missing is still listed, as an empty file marked broken.
/// Names that are not valid UTF-8 are converted lossily.
pub fn browse_dir(path: &Path) -> io::Result<Vec<FileEntry>> {
    let mut entries = Vec::with_capacity(256);

    for entry in fs::read_dir(path)? {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                debug!(dir = %path.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().into_owned();

        let file_entry = match fs::metadata(entry.path()) {
            Ok(meta) => {
                let file_entry = if meta.is_dir() {
                    FileEntry::directory(name)
                } else {
                    FileEntry::new(name, meta.len())
                };
                match meta.modified().ok().and_then(system_time_millis) {
                    Some(millis) => file_entry.with_modified(millis),
                    None => file_entry,
                }
            }
            Err(e) => match entry.metadata() {
                Ok(link_meta) if link_meta.file_type().is_symlink() => {
                    debug!(entry = %name, error = %e, "listing broken symlink");
                    let file_entry = FileEntry::new(name, 0).broken_link();
                    match link_meta.modified().ok().and_then(system_time_millis) {
                        Some(millis) => file_entry.with_modified(millis),
                        None => file_entry,
                    }
                }
                _ => {
                    debug!(entry = %name, error = %e, "skipping entry without metadata");
                    continue;
                }
            },
        };
        entries.push(file_entry);
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn classify_known_extensions() {
        let cases = [
            ("main.rs", FileType::Code),
            ("index.HTML", FileType::Code),
            ("photo.JPeG", FileType::Image),
            ("song.flac", FileType::Music),
            ("movie.mkv", FileType::Video),
            ("paper.pdf", FileType::Pdf),
            ("notes.md", FileType::Text),
            ("subs.srt", FileType::Text),
            ("archive.tar.gz", FileType::Unknown),
        ];
        for (name, expected) in cases {
            assert_eq!(infer_file_type(name), expected, "wrong type for {}", name);
        }
    }

    #[test]
    fn classify_without_extension() {
        assert_eq!(infer_file_type(""), FileType::Unknown);
        assert_eq!(infer_file_type("Makefile"), FileType::Unknown);
        assert_eq!(infer_file_type("trailing."), FileType::Unknown);
    }

    #[test]
    fn extension_extraction() {
        assert_eq!(file_extension(""), None);
        assert_eq!(file_extension("README"), None);
        assert_eq!(file_extension("a.b.c"), Some("c"));
        assert_eq!(file_extension("trailing."), Some(""));
        assert_eq!(file_extension(".bashrc"), Some("bashrc"));
    }

    #[test]
    fn file_entry_accessors() {
        let file = FileEntry::new("clip.MP4", 42).with_modified(1000);
        assert_eq!(file.filename(), "clip.MP4");
        assert_eq!(file.size(), 42);
        assert_eq!(file.file_type(), FileType::Video);
        assert_eq!(file.modified(), Some(1000));
        assert!(!file.is_dir());

        let dir = FileEntry::directory(".config");
        assert!(dir.is_dir());
        assert!(dir.is_hidden());
        assert_eq!(dir.size(), 0);
    }

    #[test]
    fn browse_classifies_entries() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let mut file = File::create(tmp.path().join("hello.txt"))?;
        writeln!(file, "abc123")?;
        fs::create_dir(tmp.path().join("music.mp3"))?;

        let mut entries = browse_dir(tmp.path())?;
        entries.sort_by(|a, b| a.filename().cmp(b.filename()));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].filename(), "hello.txt");
        assert_eq!(entries[0].file_type(), FileType::Text);
        assert_eq!(entries[0].size(), 7);
        assert!(entries[0].modified().is_some());

        assert!(entries[1].is_dir());
        assert_eq!(entries[1].file_type(), FileType::Unknown);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn browse_lists_dangling_symlink() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        File::create(tmp.path().join("real.txt"))?;
        std::os::unix::fs::symlink(tmp.path().join("missing.txt"), tmp.path().join("dangling.txt"))?;

        let mut entries = browse_dir(tmp.path())?;
        entries.sort_by(|a, b| a.filename().cmp(b.filename()));

        assert_eq!(entries.len(), 2, "got {:?}", entries);
        assert_eq!(entries[0].filename(), "dangling.txt");
        assert!(entries[0].is_broken_link());
        assert!(!entries[0].is_dir());
        assert_eq!(entries[0].size(), 0);
        assert_eq!(entries[0].file_type(), FileType::Text);
        assert!(!entries[1].is_broken_link());
        Ok(())
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn browse_keeps_non_utf8_names() -> Result<(), Box<dyn std::error::Error>> {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let tmp = TempDir::new()?;
        File::create(tmp.path().join(OsStr::from_bytes(b"caf\xe9.md")))?;

        let entries = browse_dir(tmp.path())?;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].filename(), "caf\u{FFFD}.md");
        assert_eq!(entries[0].file_type(), FileType::Text);
        Ok(())
    }

    #[test]
    fn browse_nonexistent() {
        let path = PathBuf::from("/path/does/not/exist");
        assert!(browse_dir(&path).is_err());
    }
}
