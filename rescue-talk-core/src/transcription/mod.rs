//! English text → bracketed pseudo-phonetic transcription.
//!
//! ## Algorithm
//!
//! ```text
//! "Follow the EXIT!"
//!   └─► lowercase + trim          "follow the exit!"
//!       └─► split on whitespace   ["follow", "the", "exit!"]
//!           └─► strip punctuation ["follow", "the", "exit"]
//!               └─► per word: stress exception, else substitution passes
//!                   └─► "[ˈfɒləʊ θe ˈɛɡzɪt]"
//! ```
//!
//! Substitution is a sequence of whole-string replace passes, longest pattern
//! first. A pass may rewrite symbols produced by an earlier pass when they
//! contain an ASCII vowel (`"ow"` → `"aʊ"` → `"æʊ"`); that output is kept
//! as-is because stored transcriptions depend on it.

pub mod draft;
pub mod tables;

pub use draft::TranscriptionDraft;

use std::time::Duration;

use tracing::trace;

use self::tables::{stress_exception, substitution_passes, STRESS_MARK};

/// Artificial latency of [`generate_delayed`], long enough for a caller to
/// render a "generating…" state.
pub const SUGGESTION_DELAY: Duration = Duration::from_millis(300);

/// Rule-generated words longer than this many characters get a stress mark.
const STRESS_MIN_EXCLUSIVE_LEN: usize = 5;

/// Transcribe `text` into `"[word1 word2 ...]"`.
///
/// Total and deterministic. Returns an empty string (no brackets) when the
/// input is empty or whitespace-only.
pub fn generate(text: &str) -> String {
    let normalized = text.to_lowercase();
    let normalized = normalized.trim_matches(is_separator);
    if normalized.is_empty() {
        return String::new();
    }

    let words: Vec<String> = normalized
        .split(is_separator)
        .filter(|w| !w.is_empty())
        .map(transcribe_word)
        .collect();
    format!("[{}]", words.join(" "))
}

/// [`generate`] resolved after [`SUGGESTION_DELAY`]. Never fails.
pub async fn generate_delayed(text: &str) -> String {
    generate_after(text, SUGGESTION_DELAY).await
}

/// [`generate`] resolved after `delay`.
///
/// The result is computed before the timer starts, so it is identical to the
/// synchronous form regardless of the delay.
pub async fn generate_after(text: &str, delay: Duration) -> String {
    let transcription = generate(text);
    tokio::time::sleep(delay).await;
    transcription
}

/// Unicode whitespace plus the byte-order mark, which pasted text often carries.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Keep ASCII word characters (`[A-Za-z0-9_]`) and whitespace.
fn clean_word(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect()
}

fn transcribe_word(word: &str) -> String {
    let clean = clean_word(word);

    if let Some(exact) = stress_exception(&clean) {
        trace!(word = %clean, "stress exception hit");
        return exact.to_string();
    }

    let mut out = clean.clone();
    for &(pattern, symbol) in substitution_passes() {
        if out.contains(pattern) {
            out = out.replace(pattern, symbol);
        }
    }

    if clean.chars().count() > STRESS_MIN_EXCLUSIVE_LEN {
        out.insert(0, STRESS_MARK);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_blank_input_yield_empty_string() {
        assert_eq!(generate(""), "");
        assert_eq!(generate("   \t\n "), "");
    }

    #[test]
    fn exception_words_are_used_verbatim() {
        assert_eq!(generate("help"), "[help]");
        assert_eq!(generate("emergency"), "[ɪˈmɜːrdʒənsi]");
        // "coming" is longer than five letters but carries its own stress mark.
        assert_eq!(generate("coming"), "[ˈkʌmɪŋ]");
    }

    #[test]
    fn two_words_are_transcribed_independently() {
        assert_eq!(generate("Hello World"), "[hellɒ wɔːld]");
    }

    #[test]
    fn stress_mark_only_above_five_letters() {
        assert_eq!(generate("chair"), "[tʃæɪr]");
        assert_eq!(generate("window"), "[ˈwɪndæʊ]");
        assert_eq!(generate("station"), "[ˈstætɪɒn]");
    }

    #[test]
    fn stress_length_uses_clean_word() {
        // Six characters before cleaning, five after.
        assert_eq!(generate("chair!"), "[tʃæɪr]");
    }

    #[test]
    fn normalization_is_idempotent() {
        assert_eq!(generate(" HELP  "), generate("help"));
        assert_eq!(generate("help!"), generate("help"));
        assert_eq!(generate("Help  is\tcoming"), "[help ɪs ˈkʌmɪŋ]");
    }

    #[test]
    fn digraphs_apply_before_vowels() {
        assert_eq!(generate("the"), "[θe]");
        assert_eq!(generate("ring"), "[rɪŋ]");
        assert_eq!(generate("stay"), "[steɪ]");
        assert_eq!(generate("weather"), "[ˈweæθɜː]");
    }

    #[test]
    fn later_passes_rewrite_earlier_symbols() {
        // "oo" → "uː", then the "u" pass → "ʌː".
        assert_eq!(generate("pool"), "[pʌːl]");
        // "ow" → "aʊ", then the "a" pass → "æʊ".
        assert_eq!(generate("town"), "[tæʊn]");
    }

    #[test]
    fn non_word_characters_degrade_to_empty_tokens() {
        assert_eq!(generate("!!!"), "[]");
        assert_eq!(generate("помощь"), "[]");
        assert_eq!(generate("don't"), "[dɒnt]");
        assert_eq!(generate("room_1"), "[ˈrʌːm_1]");
        assert_eq!(generate("go_12!"), "[gɒ_12]");
    }

    #[test]
    fn byte_order_mark_separates_words() {
        assert_eq!(generate("help\u{feff}water"), generate("help water"));
        assert_eq!(generate("\u{feff}help\u{a0}\u{feff}"), "[help]");
        assert_eq!(generate("\u{feff}"), "");
    }
}
