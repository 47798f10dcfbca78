//! logos-based class-string tokenizer.
//!
//! A class string is a whitespace-separated list of utility tokens. The
//! lexer only splits; deciding what a token means is the parser's job.
//! Every character is either whitespace or part of a token.
//!
//! Both token kinds match at most [`CHUNK`] characters, so each lexer call
//! does bounded work. A long class is lexed as several adjacent chunks and
//! stitched back together.

use std::ops::Range;

use logos::Logos;

/// Longest run, in characters, a single lexer match covers.
pub const CHUNK: usize = 16;

/// Token produced by the class lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Up to [`CHUNK`] whitespace characters.
    #[regex(r"\s{1,16}")]
    Space,

    /// Up to [`CHUNK`] characters of a utility class such as `px-4`.
    #[regex(r"[^\s]{1,16}")]
    Chunk,
}

/// Split a class string into its tokens, in input order.
pub fn tokenize(input: &str) -> Vec<&str> {
    let mut classes = Vec::new();
    let mut current: Option<Range<usize>> = None;

    for (result, span) in Token::lexer(input).spanned() {
        match result {
            Ok(Token::Space) => {
                if let Some(range) = current.take() {
                    classes.push(&input[range]);
                }
            }
            Ok(Token::Chunk) | Err(_) => {
                current = Some(match current {
                    Some(range) => range.start..span.end,
                    None => span,
                });
            }
        }
    }
    if let Some(range) = current {
        classes.push(&input[range]);
    }

    classes
}

/// Join non-empty class strings with a single space, like `clsx`.
///
/// Inner whitespace of each part is left untouched; only empty parts are
/// dropped.
pub fn class_names<S: AsRef<str>>(classes: &[S]) -> String {
    classes
        .iter()
        .map(AsRef::as_ref)
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_spaces() {
        assert_eq!(tokenize("px-4 py-2 bg-white"), vec!["px-4", "py-2", "bg-white"]);
    }

    #[test]
    fn test_mixed_whitespace() {
        assert_eq!(tokenize("  p-4\t\tm-2\n rounded \r\n"), vec!["p-4", "m-2", "rounded"]);
    }

    #[test]
    fn test_unicode_whitespace() {
        // U+00A0 (no-break space) and U+3000 (ideographic space) separate tokens.
        assert_eq!(tokenize("p-4\u{a0}m-2\u{3000}border"), vec!["p-4", "m-2", "border"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_whitespace_only() {
        assert!(tokenize("   \t\n  ").is_empty());
    }

    #[test]
    fn test_non_ascii_token_kept_whole() {
        assert_eq!(tokenize("bg-rouge-é ✓"), vec!["bg-rouge-é", "✓"]);
    }

    #[test]
    fn test_tokens_longer_than_a_chunk() {
        let sixteen = "a".repeat(CHUNK);
        let seventeen = "b".repeat(CHUNK + 1);
        let long = "c".repeat(CHUNK * 3 + 5);
        let input = format!("{sixteen} {seventeen}\t{long}");
        assert_eq!(tokenize(&input), vec![sixteen.as_str(), seventeen.as_str(), long.as_str()]);
    }

    #[test]
    fn test_multibyte_token_longer_than_a_chunk() {
        let wide = "中".repeat(CHUNK * 2 + 3);
        let input = format!("p-4 {wide} m-2");
        assert_eq!(tokenize(&input), vec!["p-4", wide.as_str(), "m-2"]);
    }

    #[test]
    fn test_long_whitespace_run() {
        let input = format!("p-4{}m-2", " ".repeat(CHUNK * 4 + 1));
        assert_eq!(tokenize(&input), vec!["p-4", "m-2"]);
    }

    #[test]
    fn test_huge_token_on_small_stack() {
        let handle = std::thread::Builder::new()
            .stack_size(2 * 1024 * 1024)
            .spawn(|| {
                let token = "a".repeat(200_000);
                let input = format!(" {token} ");
                tokenize(&input).iter().map(|t| t.len()).collect::<Vec<_>>()
            })
            .unwrap();
        assert_eq!(handle.join().unwrap(), vec![200_000]);
    }

    #[test]
    fn test_class_names_skips_empty() {
        assert_eq!(class_names(&["btn", "", "btn-primary", ""]), "btn btn-primary");
    }

    #[test]
    fn test_class_names_empty() {
        let none: [&str; 0] = [];
        assert_eq!(class_names(&none), "");
        assert_eq!(class_names(&["", ""]), "");
    }

    #[test]
    fn test_class_names_owned() {
        let parts = vec![String::from("p-4"), String::new(), String::from("rounded")];
        assert_eq!(class_names(&parts), "p-4 rounded");
    }
}
