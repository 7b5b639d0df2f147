/*!
 * Delivery of the aggregated document to the clipboard and to files
 */

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::clipboard::Clipboard;
use crate::config::FALLBACK_OUTPUT_FILE;

/// Write `text` to `path`, replacing any existing file
pub fn write_document(path: &Path, text: &str) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(text.as_bytes())?;
    writer.flush()
}

/// What happened at one sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// Document is on the clipboard
    Copied,
    /// Clipboard copy failed
    ClipboardFailed(String),
    /// Document was written to the file
    Written(PathBuf),
    /// Writing the file failed
    WriteFailed(PathBuf, String),
}

impl DeliveryOutcome {
    /// True for the failure variants
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::ClipboardFailed(_) | Self::WriteFailed(..))
    }
}

impl fmt::Display for DeliveryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Copied => write!(f, "Contents copied to clipboard"),
            Self::ClipboardFailed(reason) => {
                write!(f, "Failed to copy contents to clipboard: {}", reason)
            }
            Self::Written(path) => write!(f, "Output written to {}", path.display()),
            Self::WriteFailed(path, reason) => {
                write!(f, "Failed to write to {}: {}", path.display(), reason)
            }
        }
    }
}

/// Hand the document to its sinks.
///
/// The clipboard is always tried first. An explicit output path is always
/// written; without one, `output.promptify` in the working directory is
/// written only when the clipboard failed.
pub fn deliver(
    document: &str,
    clipboard: &dyn Clipboard,
    explicit_output: Option<&Path>,
) -> Vec<DeliveryOutcome> {
    deliver_with_fallback(
        document,
        clipboard,
        explicit_output,
        Path::new(FALLBACK_OUTPUT_FILE),
    )
}

/// [`deliver`] with a custom fallback path
pub fn deliver_with_fallback(
    document: &str,
    clipboard: &dyn Clipboard,
    explicit_output: Option<&Path>,
    fallback: &Path,
) -> Vec<DeliveryOutcome> {
    let mut outcomes = Vec::new();

    let clipboard_ok = match clipboard.copy(document) {
        Ok(()) => {
            outcomes.push(DeliveryOutcome::Copied);
            true
        }
        Err(e) => {
            outcomes.push(DeliveryOutcome::ClipboardFailed(e.to_string()));
            false
        }
    };

    let target = match explicit_output {
        Some(path) => Some(path.to_path_buf()),
        None if !clipboard_ok => Some(fallback.to_path_buf()),
        None => None,
    };

    if let Some(path) = target {
        let outcome = match write_document(&path, document) {
            Ok(()) => DeliveryOutcome::Written(path),
            Err(e) => DeliveryOutcome::WriteFailed(path, e.to_string()),
        };
        outcomes.push(outcome);
    }

    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::{self, ClipboardError};
    use std::cell::RefCell;
    use std::fs;
    use tempfile::tempdir;

    #[derive(Default)]
    struct RecordingClipboard {
        copied: RefCell<Option<String>>,
    }

    impl Clipboard for RecordingClipboard {
        fn copy(&self, text: &str) -> clipboard::Result<()> {
            *self.copied.borrow_mut() = Some(text.to_string());
            Ok(())
        }
    }

    struct BrokenClipboard;

    impl Clipboard for BrokenClipboard {
        fn copy(&self, _text: &str) -> clipboard::Result<()> {
            Err(ClipboardError::NoClipboardFound)
        }
    }

    #[test]
    fn test_clipboard_only_when_it_works() {
        let clipboard = RecordingClipboard::default();
        let outcomes = deliver("doc", &clipboard, None);
        assert_eq!(outcomes, vec![DeliveryOutcome::Copied]);
        assert_eq!(clipboard.copied.borrow().as_deref(), Some("doc"));
    }

    #[test]
    fn test_explicit_output_written_alongside_clipboard() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.md");
        let outcomes = deliver("doc", &RecordingClipboard::default(), Some(&path));

        assert_eq!(
            outcomes,
            vec![DeliveryOutcome::Copied, DeliveryOutcome::Written(path.clone())]
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "doc");
    }

    #[test]
    fn test_fallback_file_when_clipboard_fails() {
        let dir = tempdir().unwrap();
        let fallback = dir.path().join(FALLBACK_OUTPUT_FILE);
        let outcomes = deliver_with_fallback("doc", &BrokenClipboard, None, &fallback);

        assert_eq!(outcomes.len(), 2);
        assert!(outcomes[0].is_failure());
        assert_eq!(outcomes[1], DeliveryOutcome::Written(fallback.clone()));
        assert_eq!(fs::read_to_string(&fallback).unwrap(), "doc");
    }

    #[test]
    fn test_no_fallback_file_when_clipboard_works() {
        let dir = tempdir().unwrap();
        let fallback = dir.path().join(FALLBACK_OUTPUT_FILE);
        let outcomes =
            deliver_with_fallback("doc", &RecordingClipboard::default(), None, &fallback);

        assert_eq!(outcomes, vec![DeliveryOutcome::Copied]);
        assert!(!fallback.exists());
    }

    #[test]
    fn test_explicit_output_used_when_clipboard_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.md");
        let fallback = dir.path().join(FALLBACK_OUTPUT_FILE);
        let outcomes = deliver_with_fallback("doc", &BrokenClipboard, Some(&path), &fallback);

        assert!(outcomes[0].is_failure());
        assert_eq!(outcomes[1], DeliveryOutcome::Written(path.clone()));
        assert!(!fallback.exists());
    }

    #[test]
    fn test_write_failure_is_reported_not_raised() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.md");
        let outcomes = deliver("doc", &BrokenClipboard, Some(&path));

        assert_eq!(outcomes.len(), 2);
        assert!(matches!(&outcomes[1], DeliveryOutcome::WriteFailed(p, _) if *p == path));
        assert!(outcomes[1].to_string().starts_with("Failed to write to"));
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(
            DeliveryOutcome::Copied.to_string(),
            "Contents copied to clipboard"
        );
        assert_eq!(
            DeliveryOutcome::ClipboardFailed("no clipboard".into()).to_string(),
            "Failed to copy contents to clipboard: no clipboard"
        );
        assert!(!DeliveryOutcome::Written(PathBuf::from("x")).is_failure());
    }
}
