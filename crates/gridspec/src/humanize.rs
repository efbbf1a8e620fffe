//! Header labels from field identifiers.
//!
//! Identifiers are split into words at case and letter/non-letter boundaries
//! and rejoined in sentence case:
//!
//! ```rust
//! use gridspec::humanize;
//!
//! assert_eq!(humanize("firstName"), "First name");
//! assert_eq!(humanize("HTMLParser"), "HTML parser");
//! assert_eq!(humanize("created_at"), "Created at");
//! assert_eq!(humanize("address2"), "Address 2");
//! ```

/// Splits an identifier into words.
///
/// A word break is placed:
///
/// 1. between two uppercase letters when the second is followed by a
///    lowercase letter (`HTMLParser` → `HTML`, `Parser`)
/// 2. before an uppercase letter that follows a non-uppercase character
///    (`firstName` → `first`, `Name`)
/// 3. between a letter and a non-letter, in either direction
///    (`address2` → `address`, `2`)
///
/// `_`, `-` and whitespace separate words and are dropped.
pub fn split_words(identifier: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = identifier.char_indices().collect();
    let mut words = Vec::new();
    let mut start: Option<usize> = None;

    for (i, &(pos, c)) in chars.iter().enumerate() {
        if is_separator(c) {
            if let Some(s) = start.take() {
                words.push(&identifier[s..pos]);
            }
            continue;
        }

        match start {
            None => start = Some(pos),
            Some(s) => {
                // start is only set while the previous char belongs to the word
                let prev = chars[i - 1].1;
                let next = chars.get(i + 1).map(|&(_, n)| n);
                if is_boundary(prev, c, next) {
                    words.push(&identifier[s..pos]);
                    start = Some(pos);
                }
            }
        }
    }

    if let Some(s) = start {
        words.push(&identifier[s..]);
    }

    words
}

/// Converts an identifier into a human readable label.
///
/// The first letter is upper-cased. Later words that are ordinary
/// capitalized words get a lowercase initial; acronyms and single letters
/// keep their case. An empty identifier yields an empty label.
pub fn humanize(identifier: &str) -> String {
    let words = split_words(identifier);
    let mut label = String::with_capacity(identifier.len() + words.len());

    for (i, word) in words.iter().enumerate() {
        let mut chars = word.chars();
        let Some(first) = chars.next() else {
            continue;
        };

        if i == 0 {
            label.extend(first.to_uppercase());
        } else {
            label.push(' ');
            if is_capitalized_word(word) {
                label.extend(first.to_lowercase());
            } else {
                label.push(first);
            }
        }
        label.push_str(chars.as_str());
    }

    label
}

fn is_separator(c: char) -> bool {
    c == '_' || c == '-' || c.is_whitespace()
}

fn is_boundary(prev: char, cur: char, next: Option<char>) -> bool {
    let acronym_end =
        prev.is_uppercase() && cur.is_uppercase() && next.is_some_and(char::is_lowercase);
    let word_start = !prev.is_uppercase() && cur.is_uppercase();
    let letter_change = prev.is_alphabetic() != cur.is_alphabetic();

    acronym_end || word_start || letter_change
}

/// `Name` is a capitalized word, `ID` and `X` are not.
fn is_capitalized_word(word: &str) -> bool {
    let mut chars = word.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(first), Some(second)) if first.is_uppercase() && second.is_lowercase()
    )
}
