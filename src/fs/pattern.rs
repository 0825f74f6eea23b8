//! Shell-style glob matching for frame files.
//!
//! Only the file-name component of a pattern is treated as a glob. The
//! directory part is taken literally, so target names containing `[` or `*`
//! still resolve to their own temp directory.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::{Error, Result};

/// A compiled file-name glob anchored in one directory.
#[derive(Debug, Clone)]
pub struct FilePattern {
    directory: PathBuf,
    glob: String,
    /// `None` when the glob can never match (a class with only reversed ranges).
    regex: Option<Regex>,
}

impl FilePattern {
    /// Compile a pattern such as `/tmp/facefusion/clip/*.png`.
    pub fn new(pattern: &Path) -> Result<Self> {
        let glob = pattern
            .file_name()
            .ok_or_else(|| {
                Error::InvalidPattern(format!("No file name in pattern: {}", pattern.display()))
            })?
            .to_str()
            .ok_or_else(|| {
                Error::InvalidPattern(format!("Pattern is not UTF-8: {}", pattern.display()))
            })?
            .to_string();

        let directory = pattern.parent().map(Path::to_path_buf).unwrap_or_default();
        let regex = translate(&glob).map(|re| Regex::new(&re)).transpose()?;

        Ok(Self {
            directory,
            glob,
            regex,
        })
    }

    /// Check whether a bare file name matches.
    ///
    /// Like shell globbing, names starting with `.` only match patterns that
    /// also start with `.`.
    pub fn is_match(&self, file_name: &str) -> bool {
        if file_name.starts_with('.') && !self.glob.starts_with('.') {
            return false;
        }
        self.regex
            .as_ref()
            .is_some_and(|regex| regex.is_match(file_name))
    }

    /// Directory the pattern is anchored in.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn has_magic(&self) -> bool {
        self.glob.contains(['*', '?', '['])
    }
}

/// Return every existing path matching `pattern`, sorted ascending.
///
/// A missing or unreadable directory yields an empty list.
pub fn matching_paths(pattern: &Path) -> Result<Vec<PathBuf>> {
    let file_pattern = FilePattern::new(pattern)?;

    if !file_pattern.has_magic() {
        let exists = fs::symlink_metadata(pattern).is_ok();
        return Ok(if exists { vec![pattern.to_path_buf()] } else { Vec::new() });
    }

    let directory = file_pattern.directory();
    let read_from = if directory.as_os_str().is_empty() {
        Path::new(".")
    } else {
        directory
    };

    let entries = match fs::read_dir(read_from) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!("Cannot read {}: {}", read_from.display(), e);
            return Ok(Vec::new());
        }
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            // Non-UTF-8 names are matched on their lossy form but returned as-is
            let file_name = entry.file_name();
            file_pattern
                .is_match(&file_name.to_string_lossy())
                .then(|| directory.join(&file_name))
        })
        .collect();

    paths.sort();
    Ok(paths)
}

/// Translate a glob into an anchored regex.
///
/// Supports `*`, `?`, and `[...]` / `[!...]` character classes. An unclosed
/// `[` is matched literally. Reversed ranges such as `z-a` match nothing;
/// returns `None` when that leaves a class, and so the glob, unmatchable.
fn translate(glob: &str) -> Option<String> {
    let chars: Vec<char> = glob.chars().collect();
    let mut out = String::from("(?s)^");
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '*' => out.push_str(".*"),
            '?' => out.push('.'),
            '[' => match class_end(&chars, i + 1) {
                Some(end) => {
                    out.push_str(&translate_class(&chars[i + 1..end])?);
                    i = end;
                }
                None => out.push_str(r"\["),
            },
            c => out.push_str(&regex::escape(c.encode_utf8(&mut [0u8; 4]))),
        }
        i += 1;
    }

    out.push('$');
    Some(out)
}

/// Find the index of the `]` closing a class that starts at `start`.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start;
    if chars.get(j) == Some(&'!') {
        j += 1;
    }
    // A leading `]` is a member, not the terminator
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    (j..chars.len()).find(|&k| chars[k] == ']')
}

fn translate_class(members: &[char]) -> Option<String> {
    let (negated, members) = match members.split_first() {
        Some(('!', rest)) => (true, rest),
        _ => (false, members),
    };

    let mut body = String::new();
    let mut i = 0;
    while i < members.len() {
        let c = members[i];
        if members.get(i + 1) == Some(&'-') && i + 2 < members.len() {
            let last = members[i + 2];
            if c <= last {
                push_class_char(&mut body, c);
                body.push('-');
                push_class_char(&mut body, last);
            }
            i += 3;
        } else {
            push_class_char(&mut body, c);
            i += 1;
        }
    }

    match (body.is_empty(), negated) {
        // Nothing left to exclude: any single character
        (true, true) => Some(".".to_string()),
        (true, false) => None,
        (false, true) => Some(format!("[^{}]", body)),
        (false, false) => Some(format!("[{}]", body)),
    }
}

fn push_class_char(body: &mut String, c: char) {
    if matches!(c, '\\' | '[' | ']' | '^' | '-' | '&' | '~') {
        body.push('\\');
    }
    body.push(c);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn pattern(glob: &str) -> FilePattern {
        FilePattern::new(&Path::new("/frames").join(glob)).unwrap()
    }

    #[test]
    fn test_wildcards() {
        let p = pattern("*.png");
        assert!(p.is_match("0001.png"));
        assert!(!p.is_match("0001.jpg"));
        assert!(!p.is_match("0001.png.bak"));

        let p = pattern("frame_?.png");
        assert!(p.is_match("frame_1.png"));
        assert!(!p.is_match("frame_10.png"));
    }

    #[test]
    fn test_hidden_files_skipped() {
        let p = pattern("*.png");
        assert!(!p.is_match(".0001.png"));

        let p = pattern(".*.png");
        assert!(p.is_match(".0001.png"));
    }

    #[test]
    fn test_character_classes() {
        let p = pattern("[0-4].png");
        assert!(p.is_match("3.png"));
        assert!(!p.is_match("7.png"));

        let p = pattern("[!0-4].png");
        assert!(p.is_match("7.png"));
        assert!(!p.is_match("3.png"));

        // Unclosed bracket is literal
        let p = pattern("[abc.png");
        assert!(p.is_match("[abc.png"));
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let p = pattern("clip(1)+.png");
        assert!(p.is_match("clip(1)+.png"));
        assert!(!p.is_match("clip1.png"));
    }

    #[test]
    fn test_matching_paths() {
        let dir = tempdir().unwrap();
        for name in ["b.png", "a.png", "c.txt"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        fs::create_dir(dir.path().join("d.png")).unwrap();

        let paths = matching_paths(&dir.path().join("*.png")).unwrap();
        assert_eq!(
            paths,
            vec![
                dir.path().join("a.png"),
                dir.path().join("b.png"),
                dir.path().join("d.png"),
            ]
        );
    }

    #[test]
    fn test_matching_paths_literal() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.png"), b"x").unwrap();

        assert_eq!(
            matching_paths(&dir.path().join("a.png")).unwrap(),
            vec![dir.path().join("a.png")]
        );
        assert!(matching_paths(&dir.path().join("b.png")).unwrap().is_empty());
    }

    #[test]
    fn test_literal_directory_with_brackets() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("clip[1]");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("0001.png"), b"x").unwrap();

        let paths = matching_paths(&nested.join("*.png")).unwrap();
        assert_eq!(paths, vec![nested.join("0001.png")]);
    }

    #[test]
    fn test_reversed_ranges_match_nothing() {
        let p = pattern("[z-a].png");
        assert!(!p.is_match("a.png"));
        assert!(!p.is_match("z.png"));

        // Valid members alongside a reversed range still count
        let p = pattern("[z-ax].png");
        assert!(p.is_match("x.png"));
        assert!(!p.is_match("b.png"));

        // Excluding nothing matches any single character
        let p = pattern("[!z-a].png");
        assert!(p.is_match("q.png"));

        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.png"), b"x").unwrap();
        assert!(matching_paths(&dir.path().join("[z-a].png")).unwrap().is_empty());
    }

    #[test]
    fn test_dash_members_are_literal() {
        let p = pattern("[-x].png");
        assert!(p.is_match("-.png"));
        assert!(p.is_match("x.png"));

        let p = pattern("[a-].png");
        assert!(p.is_match("-.png"));
        assert!(!p.is_match("b.png"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_names_are_returned() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().unwrap();
        let name = OsStr::from_bytes(b"frame\xff.png");
        if fs::write(dir.path().join(name), b"x").is_err() {
            // Some filesystems refuse invalid UTF-8 names
            return;
        }
        fs::write(dir.path().join("frame1.png"), b"x").unwrap();

        let paths = matching_paths(&dir.path().join("*.png")).unwrap();
        assert_eq!(paths.len(), 2);
        assert!(paths.contains(&dir.path().join(name)));
    }
}
