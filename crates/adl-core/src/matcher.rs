//! Name and glob matching for artifact selection.

use globset::{GlobBuilder, GlobMatcher};

/// True if `candidate` equals one of `names` exactly (no normalization).
pub fn matches_name<'a, I>(names: I, candidate: &str) -> bool
where
    I: IntoIterator<Item = &'a String>,
{
    names.into_iter().any(|n| n == candidate)
}

/// True if `candidate` matches at least one of `patterns`.
///
/// A malformed pattern never matches; it does not stop the remaining patterns
/// from being tried.
pub fn matches_pattern<'a, I>(patterns: I, candidate: &str) -> bool
where
    I: IntoIterator<Item = &'a String>,
{
    patterns.into_iter().any(|p| match compile(p) {
        Ok(matcher) => matcher.is_match(candidate),
        Err(e) => {
            tracing::debug!(pattern = %p, "ignoring malformed pattern: {}", e);
            false
        }
    })
}

/// Shell-glob semantics: `*`, `?` and classes never match `/`, `\` escapes the
/// next character, and both `[!..]` and `[^..]` negate a class.
fn compile(pattern: &str) -> Result<GlobMatcher, globset::Error> {
    let glob = GlobBuilder::new(&shell_to_globset(pattern))
        .literal_separator(true)
        .backslash_escape(true)
        .build()?;
    Ok(glob.compile_matcher())
}

/// Rewrites the parts of shell-glob syntax globset reads differently.
///
/// A run of `*` outside a class is one wildcard (no `**` recursion), and `{`,
/// `}` are literal characters rather than alternation.
fn shell_to_globset(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();
    let mut in_class = false;
    let mut prev_star = false;
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                out.push(c);
                if let Some(next) = chars.next() {
                    out.push(next);
                }
                prev_star = false;
                continue;
            }
            '*' if !in_class => {
                if !prev_star {
                    out.push('*');
                }
                prev_star = true;
                continue;
            }
            '[' if !in_class => {
                in_class = true;
                out.push(c);
                if let Some(&first) = chars.peek() {
                    if first == '!' || first == '^' {
                        out.push(first);
                        chars.next();
                    }
                }
            }
            ']' if in_class => {
                in_class = false;
                out.push(c);
            }
            '{' | '}' if !in_class => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
        prev_star = false;
    }
    out
}
