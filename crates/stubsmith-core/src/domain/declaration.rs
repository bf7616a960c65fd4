//! Declaration scanning and rewriting.
//!
//! Stub content is treated as raw bytes. A declaration is a keyword (by
//! default `class`) that starts at a word boundary, is followed by at least
//! one ASCII whitespace byte, and then by an identifier made of
//! `[A-Za-z0-9_]`. Only the identifier of the *first* declaration in the file
//! is rewritten; everything else passes through byte-for-byte.
//!
//! The scanner does not understand comments or string literals, so a
//! `class Foo` inside a doc comment counts as a declaration if it comes
//! first.

use std::ops::Range;

use crate::domain::{error::DomainError, suffix::PreserveSuffixes};

/// Keyword recognised when a profile does not configure any.
pub const DEFAULT_KEYWORD: &str = "class";

/// A located declaration identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration<'a> {
    /// The keyword that introduced the declaration.
    pub keyword: &'a str,
    /// Byte range of the identifier inside the scanned content.
    pub span: Range<usize>,
    /// The identifier bytes (`content[span]`).
    pub identifier: &'a [u8],
}

impl Declaration<'_> {
    /// Identifier as text. Identifiers are ASCII by construction.
    pub fn name(&self) -> &str {
        std::str::from_utf8(self.identifier).unwrap_or_default()
    }
}

/// Finds the first declaration introduced by any of a set of keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationScanner {
    keywords: Vec<String>,
}

impl DeclarationScanner {
    /// Build a scanner for the given keywords.
    ///
    /// An empty list falls back to [`DEFAULT_KEYWORD`]. Keywords must be
    /// non-empty identifiers, otherwise the word-boundary rule is meaningless.
    pub fn new<I, S>(keywords: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list: Vec<String> = Vec::new();
        for keyword in keywords {
            let keyword = keyword.into();
            if keyword.is_empty() || !keyword.bytes().all(is_word_byte) {
                return Err(DomainError::InvalidKeyword { keyword });
            }
            if !list.contains(&keyword) {
                list.push(keyword);
            }
        }
        if list.is_empty() {
            list.push(DEFAULT_KEYWORD.to_owned());
        }
        Ok(Self { keywords: list })
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Locate the earliest declaration in `content`.
    pub fn find_first<'a>(&'a self, content: &'a [u8]) -> Option<Declaration<'a>> {
        let mut pos = 0;
        while pos < content.len() {
            if let Some(found) = self.declaration_at(content, pos) {
                return Some(found);
            }
            pos += 1;
        }
        None
    }

    /// Try every keyword at `pos`; the longest keyword that yields a full
    /// declaration wins, so `interface` is not shadowed by a shorter keyword.
    fn declaration_at<'a>(&'a self, content: &'a [u8], pos: usize) -> Option<Declaration<'a>> {
        if pos > 0 && is_word_byte(content[pos - 1]) {
            return None;
        }

        self.keywords
            .iter()
            .filter_map(|keyword| match_at(content, pos, keyword))
            .max_by_key(|decl| decl.keyword.len())
    }

    /// Rewrite the first declaration's identifier using the suffix rule.
    ///
    /// Returns the content unchanged when no declaration is present.
    pub fn rewrite(&self, content: &[u8], base_name: &str, suffixes: &PreserveSuffixes) -> Vec<u8> {
        let Some(decl) = self.find_first(content) else {
            return content.to_vec();
        };

        let suffix = suffixes.match_suffix_bytes(decl.identifier).unwrap_or("");
        let mut out = Vec::with_capacity(content.len() + base_name.len() + suffix.len());
        out.extend_from_slice(&content[..decl.span.start]);
        out.extend_from_slice(base_name.as_bytes());
        out.extend_from_slice(suffix.as_bytes());
        out.extend_from_slice(&content[decl.span.end..]);
        out
    }
}

impl Default for DeclarationScanner {
    fn default() -> Self {
        Self {
            keywords: vec![DEFAULT_KEYWORD.to_owned()],
        }
    }
}

/// Rewrite the first `class` declaration in `content`.
///
/// Convenience wrapper around [`DeclarationScanner::default`].
pub fn rewrite_declaration(content: &[u8], base_name: &str, suffixes: &PreserveSuffixes) -> Vec<u8> {
    DeclarationScanner::default().rewrite(content, base_name, suffixes)
}

fn match_at<'a>(content: &'a [u8], pos: usize, keyword: &'a str) -> Option<Declaration<'a>> {
    let rest = content.get(pos..)?;
    if !rest.starts_with(keyword.as_bytes()) {
        return None;
    }

    let mut cursor = pos + keyword.len();
    let whitespace_start = cursor;
    while cursor < content.len() && is_space_byte(content[cursor]) {
        cursor += 1;
    }
    if cursor == whitespace_start {
        return None;
    }

    let ident_start = cursor;
    while cursor < content.len() && is_word_byte(content[cursor]) {
        cursor += 1;
    }
    if cursor == ident_start {
        return None;
    }

    Some(Declaration {
        keyword,
        span: ident_start..cursor,
        identifier: &content[ident_start..cursor],
    })
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

// ASCII whitespace plus vertical tab.
fn is_space_byte(b: u8) -> bool {
    b.is_ascii_whitespace() || b == 0x0b
}
