//! Transcript normalization ahead of alignment.
//!
//! The aligner compares tokens verbatim, so case folding and punctuation
//! stripping happen here, before the sequences are built.

/// Which characters survive normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalizationMode {
    /// Keep ASCII letters only.
    #[default]
    Letters,
    /// Keep ASCII letters and digits, for transcripts with spoken numbers
    /// rendered as figures.
    Alphanumeric,
}

impl NormalizationMode {
    fn keeps(self, c: char) -> bool {
        match self {
            NormalizationMode::Letters => c.is_ascii_alphabetic(),
            NormalizationMode::Alphanumeric => c.is_ascii_alphanumeric(),
        }
    }
}

/// Lowercase `text` and drop everything outside the mode's character set.
/// Whitespace is kept as plain spaces so word boundaries survive.
pub fn normalize(text: &str, mode: NormalizationMode) -> String {
    let mut cleaned = String::with_capacity(text.len());
    for c in text.chars() {
        if mode.keeps(c) {
            cleaned.push(c.to_ascii_lowercase());
        } else if c.is_whitespace() {
            cleaned.push(' ');
        }
    }
    cleaned
}

/// Normalize and split into the whitespace-delimited tokens the aligner
/// expects.
pub fn tokenize(text: &str, mode: NormalizationMode) -> Vec<String> {
    normalize(text, mode)
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_lowercases() {
        assert_eq!(
            normalize("The blacksmith's door!", NormalizationMode::Letters),
            "the blacksmiths door"
        );
    }

    #[test]
    fn letters_mode_drops_digits() {
        assert_eq!(
            tokenize("route 66 ahead", NormalizationMode::Letters),
            ["route", "ahead"]
        );
    }

    #[test]
    fn alphanumeric_mode_keeps_digits() {
        assert_eq!(
            tokenize("route 66 ahead", NormalizationMode::Alphanumeric),
            ["route", "66", "ahead"]
        );
    }

    #[test]
    fn collapses_runs_of_separators() {
        assert_eq!(
            tokenize("you  must\tstay\nthe path", NormalizationMode::Letters),
            ["you", "must", "stay", "the", "path"]
        );
    }

    #[test]
    fn empty_and_symbol_only_input_yield_no_tokens() {
        assert!(tokenize("", NormalizationMode::Letters).is_empty());
        assert!(tokenize("?! ... 123", NormalizationMode::Letters).is_empty());
    }

    #[test]
    fn default_mode_is_letters() {
        assert_eq!(NormalizationMode::default(), NormalizationMode::Letters);
    }
}
