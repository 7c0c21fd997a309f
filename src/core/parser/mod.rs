//! # Parser Module
//!
//! Splits cover image file names of the form `"<Title> by <Author>.<ext>"`.
//!
//! The separator is matched case-insensitively and the first occurrence wins,
//! so `"Stand By Me by Ann Lee.jpg"` yields the title `"Stand"`.

use regex::Regex;
use std::sync::OnceLock;

/// Suffixes removed from the author, exact lowercase match only
const AUTHOR_SUFFIXES: [&str; 3] = [".jpeg", ".jpg", ".png"];

fn separator() -> &'static Regex {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    SEPARATOR.get_or_init(|| Regex::new(r"(?i) by ").expect("separator pattern is valid"))
}

/// Title and author recovered from a file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    /// Text before the separator, original case
    pub title: String,
    /// Text after the separator with a lowercase image extension removed
    pub author: String,
}

/// Split a file name into title and author.
///
/// Returns `None` when the name has no `" by "` separator.
pub fn parse_filename(name: &str) -> Option<ParsedName> {
    let found = separator().find(name)?;
    let title = &name[..found.start()];
    let raw_author = &name[found.end()..];

    Some(ParsedName {
        title: title.to_string(),
        author: strip_image_extension(raw_author).to_string(),
    })
}

/// Remove one trailing `.jpg`, `.jpeg` or `.png`.
///
/// Uppercase or mixed-case extensions (`.JPG`, `.Png`) are left in place.
pub fn strip_image_extension(author: &str) -> &str {
    AUTHOR_SUFFIXES
        .iter()
        .find_map(|suffix| author.strip_suffix(suffix))
        .unwrap_or(author)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(title: &str, author: &str) -> Option<ParsedName> {
        Some(ParsedName {
            title: title.to_string(),
            author: author.to_string(),
        })
    }

    #[test]
    fn parses_title_and_author() {
        assert_eq!(
            parse_filename("Mathematics Form 2 by Jane Doe.jpg"),
            parsed("Mathematics Form 2", "Jane Doe")
        );
    }

    #[test]
    fn separator_is_case_insensitive() {
        assert_eq!(
            parse_filename("Geography BY Mutasa.png"),
            parsed("Geography", "Mutasa")
        );
        assert_eq!(
            parse_filename("Geography By Mutasa.png"),
            parsed("Geography", "Mutasa")
        );
    }

    #[test]
    fn first_separator_is_the_split_point() {
        assert_eq!(
            parse_filename("Stand by Me by Ann Lee.jpeg"),
            parsed("Stand", "Me by Ann Lee")
        );
    }

    #[test]
    fn missing_separator_yields_none() {
        assert_eq!(parse_filename("Mathematics Form 2.jpg"), None);
        assert_eq!(parse_filename("Standby Guide.jpg"), None);
        assert_eq!(parse_filename("readme.txt"), None);
    }

    #[test]
    fn empty_title_or_author_is_kept() {
        assert_eq!(parse_filename(" by Anonymous.jpg"), parsed("", "Anonymous"));
        assert_eq!(parse_filename("Untitled by .png"), parsed("Untitled", ""));
    }

    #[test]
    fn strips_lowercase_extensions() {
        assert_eq!(strip_image_extension("Jane Doe.jpg"), "Jane Doe");
        assert_eq!(strip_image_extension("Jane Doe.jpeg"), "Jane Doe");
        assert_eq!(strip_image_extension("Jane Doe.png"), "Jane Doe");
        assert_eq!(strip_image_extension("Jane Doe"), "Jane Doe");
    }

    #[test]
    fn strips_only_one_trailing_extension() {
        assert_eq!(strip_image_extension("Jane.png Doe.jpg"), "Jane.png Doe");
        assert_eq!(strip_image_extension("Jane Doe.png.jpg"), "Jane Doe.png");
    }

    // Known quirk: the author suffix match is case-sensitive even though the
    // extension filter is not.
    #[test]
    fn uppercase_extension_is_not_stripped() {
        assert_eq!(
            parse_filename("Algebra Basics by J. Smith.PNG"),
            parsed("Algebra Basics", "J. Smith.PNG")
        );
        assert_eq!(strip_image_extension("J. Smith.Jpg"), "J. Smith.Jpg");
    }
}
