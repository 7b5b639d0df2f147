/*!
 * Formatting of file blocks in the aggregated document
 */

use std::collections::HashSet;
use std::path::Path;

use once_cell::sync::Lazy;

/// Extensions whose content is wrapped in a code fence
pub static CODE_EXTENSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "py", "json", "js", "html", "css", "java", "cpp", "c", "h", "yaml", "yml",
    ]
    .into_iter()
    .collect()
});

/// How a file's content is laid out in its block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStyle {
    /// Wrapped in a ``` fence
    Fenced,
    /// Emitted verbatim
    Raw,
}

impl RenderStyle {
    /// Pick the style from the file extension
    pub fn for_path(path: &str) -> Self {
        let is_code = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| CODE_EXTENSIONS.contains(ext));

        if is_code {
            Self::Fenced
        } else {
            Self::Raw
        }
    }

    fn apply(&self, content: &str) -> String {
        match self {
            Self::Fenced => format!("```\n{}\n```", content),
            Self::Raw => content.to_string(),
        }
    }
}

/// Render one file block: separator, header, body and a trailing newline.
///
/// Blocks are joined with a blank line by [`join_blocks`].
pub fn render_block(relative_path: &str, content: &str) -> String {
    let body = RenderStyle::for_path(relative_path).apply(content);
    format!("---\nFile: `{}`\n\n{}\n", relative_path, body)
}

/// Join rendered blocks into the final document
pub fn join_blocks(blocks: &[String]) -> String {
    blocks.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_by_extension() {
        assert_eq!(RenderStyle::for_path("app.py"), RenderStyle::Fenced);
        assert_eq!(RenderStyle::for_path("web/index.html"), RenderStyle::Fenced);
        assert_eq!(RenderStyle::for_path("include/x.h"), RenderStyle::Fenced);
        assert_eq!(RenderStyle::for_path("README.md"), RenderStyle::Raw);
        assert_eq!(RenderStyle::for_path("notes.txt"), RenderStyle::Raw);
        assert_eq!(RenderStyle::for_path("Makefile"), RenderStyle::Raw);
    }

    #[test]
    fn test_fenced_block() {
        assert_eq!(
            render_block("src/app.py", "print(1)"),
            "---\nFile: `src/app.py`\n\n```\nprint(1)\n```\n"
        );
    }

    #[test]
    fn test_raw_block() {
        assert_eq!(
            render_block("README.md", "# Title"),
            "---\nFile: `README.md`\n\n# Title\n"
        );
    }

    #[test]
    fn test_join_separates_with_blank_line() {
        let blocks = vec![render_block("a.txt", "A"), render_block("b.txt", "B")];
        assert_eq!(
            join_blocks(&blocks),
            "---\nFile: `a.txt`\n\nA\n\n---\nFile: `b.txt`\n\nB\n"
        );
        assert_eq!(join_blocks(&[]), "");
    }
}
