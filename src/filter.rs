/*!
 * Include/exclude glob filtering of relative paths
 */

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

use crate::error::Result;

/// Compiled include and exclude pattern sets.
///
/// Patterns follow shell wildcard rules against the whole relative path:
/// `*` and `?` also match `/`, so `*.py` selects `pkg/mod.py`. Braces,
/// backslashes and an unclosed `[` are plain characters.
#[derive(Debug, Clone)]
pub struct PathFilter {
    include: GlobSet,
    exclude: GlobSet,
}

impl PathFilter {
    /// Build a filter; `excludes` is the merged user + default exclude set.
    pub fn new<S: AsRef<str>>(includes: &[S], excludes: &[S]) -> Result<Self> {
        Ok(Self {
            include: build_glob_set(includes)?,
            exclude: build_glob_set(excludes)?,
        })
    }

    /// True iff the path matches an include pattern and no exclude pattern
    pub fn qualifies(&self, relative_path: &str) -> bool {
        self.include.is_match(relative_path) && !self.exclude.is_match(relative_path)
    }
}

fn build_glob_set<S: AsRef<str>>(patterns: &[S]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let pattern = pattern.as_ref();
        let translated = translate_wildcards(pattern);
        log::trace!("Adding glob pattern: {} (as {})", pattern, translated);
        let glob = GlobBuilder::new(&translated)
            .literal_separator(false)
            .backslash_escape(false)
            .build()?;
        builder.add(glob);
    }
    Ok(builder.build()?)
}

/// Rewrite a shell wildcard pattern so globset reads it the same way.
///
/// Only `*`, `?` and closed `[...]` classes keep a special meaning; `{`, `}`
/// and a `[` without a closing `]` are wrapped in one-character classes.
fn translate_wildcards(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len());
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    out.extend(&chars[i..=end]);
                    i = end;
                }
                None => out.push_str("[[]"),
            },
            '{' => out.push_str("[{]"),
            '}' => out.push_str("[}]"),
            c => out.push(c),
        }
        i += 1;
    }

    out
}

/// Index of the `]` closing the class opened at `start`, if any.
///
/// A `]` right after `[` or `[!` belongs to the class.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start + 1;
    if chars.get(j) == Some(&'!') {
        j += 1;
    }
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    (j..chars.len()).find(|&k| chars[k] == ']')
}
