use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    /// Characters that are not allowed to reach an on-disk file name
    /// - Kept: ASCII letters, digits, `_`, `.`, `-`
    pub static ref UNSAFE_FILENAME_CHARS: Regex = Regex::new(r"[^A-Za-z0-9_.-]").unwrap();
}

/// Turn a client-supplied file name into one that is safe to join onto the
/// upload directory.
///
/// Accented letters are decomposed to their ASCII base (`é` becomes `e`) and
/// any other non-ASCII character is dropped. Path separators become word
/// breaks, whitespace runs collapse to `_`, anything outside `[A-Za-z0-9_.-]`
/// is dropped and leading/trailing `.`/`_` are stripped, so `../../etc/passwd`
/// becomes `etc_passwd`. May return an empty string.
pub fn sanitize_filename(filename: &str) -> String {
    let ascii: String = filename
        .nfkd()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = ascii.split_whitespace().collect::<Vec<_>>().join("_");

    UNSAFE_FILENAME_CHARS
        .replace_all(&joined, "")
        .trim_matches(|c| c == '.' || c == '_')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename_plain() {
        assert_eq!(sanitize_filename("bench.png"), "bench.png");
        assert_eq!(sanitize_filename("My cat.PNG"), "My_cat.PNG");
        assert_eq!(sanitize_filename("  spaced   out .jpg "), "spaced_out_.jpg");
    }

    #[test]
    fn test_sanitize_filename_path_traversal() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "etc_passwd");
        assert_eq!(sanitize_filename("..\\..\\boot.ini"), "boot.ini");
        assert_eq!(sanitize_filename("/abs/path/photo.gif"), "abs_path_photo.gif");
    }

    #[test]
    fn test_sanitize_filename_unsafe_chars() {
        assert_eq!(sanitize_filename("wall;rm -rf.jpeg"), "wallrm_-rf.jpeg");
        assert_eq!(sanitize_filename("grafitti$(id).png"), "grafittiid.png");
    }

    #[test]
    fn test_sanitize_filename_folds_accents() {
        assert_eq!(sanitize_filename("héllo.png"), "hello.png");
        assert_eq!(sanitize_filename("Café Mural.JPG"), "Cafe_Mural.JPG");
        assert_eq!(sanitize_filename("ﬁle.gif"), "file.gif");
    }

    #[test]
    fn test_sanitize_filename_can_be_empty() {
        assert_eq!(sanitize_filename("../"), "");
        assert_eq!(sanitize_filename("..."), "");
        assert_eq!(sanitize_filename("日本"), "");
    }
}
