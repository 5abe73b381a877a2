//! Static lookup tables for the transcription generator.
//!
//! Both tables are fixed at build time and materialized once on first use.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Stress glyph prepended to rule-generated words longer than five letters.
pub const STRESS_MARK: char = '\u{02c8}'; // "ˈ"

/// Grapheme → phonetic symbol, in declaration order.
///
/// Declaration order only breaks ties between patterns of equal length; see
/// [`substitution_passes`].
pub const PHONEME_MAP: &[(&str, &str)] = &[
    ("a", "æ"),
    ("e", "e"),
    ("i", "ɪ"),
    ("o", "ɒ"),
    ("u", "ʌ"),
    ("th", "θ"),
    ("sh", "ʃ"),
    ("ch", "tʃ"),
    ("ng", "ŋ"),
    ("er", "ɜː"),
    ("ar", "ɑː"),
    ("or", "ɔː"),
    ("oo", "uː"),
    ("ee", "iː"),
    ("ay", "eɪ"),
    ("ow", "aʊ"),
    ("oy", "ɔɪ"),
];

/// Whole lowercase word → hand-authored transcription.
pub const STRESS_EXCEPTIONS: &[(&str, &str)] = &[
    ("help", "help"),
    ("coming", "ˈkʌmɪŋ"),
    ("safe", "seɪf"),
    ("calm", "kɑːm"),
    ("follow", "ˈfɒləʊ"),
    ("move", "muːv"),
    ("hurt", "hɜːrt"),
    ("allergies", "ˈælədʒiz"),
    ("medication", "ˌmɛdɪˈkeɪʃən"),
    ("breathe", "briːð"),
    ("ambulance", "ˈæmbjʊləns"),
    ("exit", "ˈɛɡzɪt"),
    ("dangerous", "ˈdeɪndʒərəs"),
    ("essentials", "ɪˈsɛnʃəlz"),
    ("gather", "ˈɡæðər"),
    ("understand", "ˌʌndəˈstænd"),
    ("okay", "ˌəʊˈkeɪ"),
    ("emergency", "ɪˈmɜːrdʒənsi"),
    ("rescue", "ˈrɛskjuː"),
    ("evacuate", "ɪˈvækjueɪt"),
    ("shelter", "ˈʃɛltər"),
    ("water", "ˈwɔːtər"),
    ("food", "fuːd"),
    ("injury", "ˈɪndʒəri"),
    ("hospital", "ˈhɒspɪtəl"),
    ("doctor", "ˈdɒktər"),
];

/// Substitution passes ordered by descending pattern length.
///
/// The sort is stable, so patterns of equal length keep declaration order.
pub fn substitution_passes() -> &'static [(&'static str, &'static str)] {
    static PASSES: OnceLock<Vec<(&'static str, &'static str)>> = OnceLock::new();
    PASSES.get_or_init(|| {
        let mut passes = PHONEME_MAP.to_vec();
        passes.sort_by_key(|(pattern, _)| std::cmp::Reverse(pattern.len()));
        passes
    })
}

/// Exact transcription for `word`, if it is one of the authored exceptions.
pub fn stress_exception(word: &str) -> Option<&'static str> {
    static EXCEPTIONS: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    EXCEPTIONS
        .get_or_init(|| STRESS_EXCEPTIONS.iter().copied().collect())
        .get(word)
        .copied()
}
