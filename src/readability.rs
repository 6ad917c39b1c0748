//! Flesch Reading Ease scoring.
//!
//! `206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words)`
//!
//! Syllables are estimated from vowel groups, which is close enough for a
//! coarse readability band. Empty text (no words) scores `0.0`.

/// Raw counts the score is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStats {
    pub words: usize,
    pub sentences: usize,
    pub syllables: usize,
}

/// Count words, sentences and syllables in `text`.
///
/// A word is a whitespace-separated token with at least one alphanumeric
/// character. A sentence ends at a token whose last non-closing character is
/// `.`, `!` or `?`; text with words but no terminator counts as one sentence.
pub fn text_stats(text: &str) -> TextStats {
    let mut stats = TextStats::default();

    for token in text.split_whitespace() {
        if !token.chars().any(char::is_alphanumeric) {
            continue;
        }
        stats.words += 1;
        stats.syllables += count_syllables(token);

        let trimmed = token.trim_end_matches(['"', '\'', ')', ']', '”', '’']);
        if trimmed.ends_with(['.', '!', '?']) {
            stats.sentences += 1;
        }
    }

    if stats.words > 0 && stats.sentences == 0 {
        stats.sentences = 1;
    }
    stats
}

/// Flesch Reading Ease of `text`. Higher is easier; typical prose lands in 0..100
/// but the formula is unbounded.
pub fn flesch_reading_ease(text: &str) -> f64 {
    let stats = text_stats(text);
    if stats.words == 0 {
        return 0.0;
    }

    let words = stats.words as f64;
    let sentences = stats.sentences as f64;
    let syllables = stats.syllables as f64;

    206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words)
}

/// Short label for the band a score falls into. The legend in the report
/// names four bands; scores in its gaps (70-90, 50-60) get the in-between
/// labels "fairly easy" and "fairly difficult".
pub fn band(score: f64) -> &'static str {
    match score {
        s if s >= 90.0 => "very easy",
        s if s >= 70.0 => "fairly easy",
        s if s >= 60.0 => "standard",
        s if s >= 50.0 => "fairly difficult",
        s if s >= 30.0 => "difficult",
        _ => "very complex",
    }
}

/// Estimate syllables in one word from its vowel groups (minimum 1).
fn count_syllables(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();

    if letters.is_empty() {
        return 1;
    }

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');

    let mut groups = 0;
    let mut prev_vowel = false;
    for &c in &letters {
        let vowel = is_vowel(c);
        if vowel && !prev_vowel {
            groups += 1;
        }
        prev_vowel = vowel;
    }

    // silent trailing "e" ("scope", "rate") but not "-le" ("able", "table")
    let n = letters.len();
    if groups > 1 && letters[n - 1] == 'e' && !(n >= 2 && letters[n - 2] == 'l') {
        groups -= 1;
    }

    groups.max(1)
}
