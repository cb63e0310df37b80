// WHY: standalone line filter so the collector and benches share one predicate
// Diacritics are stripped through NFD decomposition, then the line must consist of letters only

use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_normalization::char::canonical_combining_class;
use unicode_normalization::UnicodeNormalization;

/// Outcome of filtering a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineVerdict {
    /// Every character is a letter after stripping. The cleaned line may be empty.
    Accepted,
    /// At least one character is not a letter
    Rejected,
}

impl LineVerdict {
    pub fn is_accepted(self) -> bool {
        matches!(self, LineVerdict::Accepted)
    }
}

/// Whether `ch` is a combining mark (non-zero canonical combining class)
pub fn is_combining(ch: char) -> bool {
    canonical_combining_class(ch) != 0
}

/// Whether `ch` is in one of the letter categories (Lu, Ll, Lt, Lm, Lo)
///
/// Narrower than `char::is_alphabetic`: letter numbers such as `Ⅻ` and vowel
/// signs such as U+0947 are not letters.
pub fn is_letter(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Decompose to NFD and drop every combining mark, keeping base characters
pub fn strip_diacritics(line: &str) -> String {
    let mut result = String::with_capacity(line.len());
    strip_diacritics_into(line, &mut result);
    result
}

/// Strip diacritics into supplied buffer to avoid allocation
pub fn strip_diacritics_into(line: &str, buffer: &mut String) {
    buffer.clear();
    buffer.reserve(line.len());
    buffer.extend(line.nfd().filter(|&ch| !is_combining(ch)));
}

/// True when every character is a letter. Vacuously true for the empty string.
pub fn is_alphabetic_line(line: &str) -> bool {
    line.chars().all(is_letter)
}

/// Strip diacritics into `buffer` and classify the result
///
/// An empty input (or one made only of combining marks) is `Accepted` with an
/// empty buffer; dropping empty lines is the collector's job, not the predicate's.
/// On rejection the buffer keeps the stripped text.
pub fn filter_line_into(line: &str, buffer: &mut String) -> LineVerdict {
    strip_diacritics_into(line, buffer);
    if is_alphabetic_line(buffer) {
        LineVerdict::Accepted
    } else {
        LineVerdict::Rejected
    }
}

/// Normalize a line, returning the empty string when it is rejected
pub fn transform(line: &str) -> String {
    let mut result = String::with_capacity(line.len());
    transform_into(line, &mut result);
    result
}

/// Normalize into supplied buffer; the buffer is left empty on rejection
pub fn transform_into(line: &str, buffer: &mut String) {
    if !filter_line_into(line, buffer).is_accepted() {
        buffer.clear();
    }
}
