/// Flesch reading ease: higher is easier, roughly 0-100 for prose.
///
/// Sentences are counted by terminal punctuation (at least one); syllables
/// by vowel groups.
pub fn flesch_reading_ease(text: &str) -> f64 {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return 0.0;
    }
    let sentences = text
        .chars()
        .filter(|c| matches!(c, '.' | '!' | '?'))
        .count()
        .max(1);
    let syllables: usize = words.iter().map(|w| syllables_in_word(w)).sum();

    let words_per_sentence = words.len() as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words.len() as f64;
    206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word
}

/// Vowel-group syllable estimate with a silent trailing `e`; at least 1.
pub fn syllables_in_word(word: &str) -> usize {
    let word: String = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();

    let mut count = 0;
    let mut last_was_vowel = false;
    for ch in word.chars() {
        let is_vowel = matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if is_vowel && !last_was_vowel {
            count += 1;
        }
        last_was_vowel = is_vowel;
    }

    if word.ends_with('e') && count > 1 {
        count -= 1;
    }
    count.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("cat", 1)]
    #[case("Table.", 1)]
    #[case("happy", 2)]
    #[case("readability", 5)]
    #[case("42", 1)]
    fn syllable_estimates(#[case] word: &str, #[case] expected: usize) {
        assert_eq!(syllables_in_word(word), expected);
    }

    #[test]
    fn short_words_read_easily() {
        assert!(flesch_reading_ease("The cat sat. The dog ran.") > 90.0);
        assert_eq!(flesch_reading_ease(""), 0.0);
    }
}
