use rand::seq::SliceRandom;
use rand::thread_rng;

/// The fixed pool of secret words
pub const WORD_LIST: [&str; 4] = ["Banana", "Canine", "Unosquare", "Airport"];

/// Placeholder for letters not yet revealed
pub const MASK_CHAR: char = '_';

/// Source of secret words for new sessions.
///
/// Production uses [`RandomWordSource`]; tests inject [`FixedWordSource`]
/// to pin the word without touching global RNG state.
pub trait WordSource: Send + Sync {
    fn pick_word(&self) -> String;
}

/// Picks uniformly at random from [`WORD_LIST`]
#[derive(Debug, Default)]
pub struct RandomWordSource;

impl WordSource for RandomWordSource {
    fn pick_word(&self) -> String {
        let mut rng = thread_rng();
        WORD_LIST
            .choose(&mut rng)
            .copied()
            .unwrap_or(WORD_LIST[0])
            .to_string()
    }
}

/// Always returns the same word
#[derive(Debug, Clone)]
pub struct FixedWordSource(pub String);

impl WordSource for FixedWordSource {
    fn pick_word(&self) -> String {
        self.0.clone()
    }
}

/// A secret word held in two representations: the display characters with
/// their original casing, and a lowercase comparison key per character.
/// Matching always goes through the keys, rendering through the display
/// characters.
#[derive(Debug, Clone)]
pub struct SecretWord {
    display: Vec<char>,
    keys: Vec<char>,
}

impl SecretWord {
    pub fn new(word: &str) -> Self {
        let display: Vec<char> = word.chars().collect();
        let keys = display.iter().map(|&c| lowercase_key(c)).collect();
        Self { display, keys }
    }

    /// Whether the word contains `letter` (a lowercase comparison key)
    pub fn contains(&self, letter: char) -> bool {
        self.keys.contains(&letter)
    }

    /// Whether every letter of the word appears in `guessed`
    pub fn is_fully_revealed(&self, guessed: &[char]) -> bool {
        self.keys.iter().all(|key| guessed.contains(key))
    }

    /// Render the word with unguessed letters masked out.
    ///
    /// Revealed letters keep their original casing.
    pub fn masked(&self, guessed: &[char]) -> String {
        self.display
            .iter()
            .zip(&self.keys)
            .map(|(&shown, key)| {
                if guessed.contains(key) {
                    shown
                } else {
                    MASK_CHAR
                }
            })
            .collect()
    }
}

/// Lowercase comparison key for a single character
pub fn lowercase_key(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_source_picks_from_list() {
        let source = RandomWordSource;

        for _ in 0..20 {
            let word = source.pick_word();
            assert!(WORD_LIST.contains(&word.as_str()));
        }
    }

    #[test]
    fn test_fixed_source_is_deterministic() {
        let source = FixedWordSource("Banana".to_string());

        assert_eq!(source.pick_word(), "Banana");
        assert_eq!(source.pick_word(), "Banana");
    }

    #[test]
    fn test_masked_with_no_guesses() {
        let word = SecretWord::new("Banana");

        assert_eq!(word.masked(&[]), "______");
    }

    #[test]
    fn test_masked_reveals_original_case() {
        let word = SecretWord::new("Banana");

        assert_eq!(word.masked(&['a']), "_a_a_a");
        assert_eq!(word.masked(&['b']), "B_____");
        assert_eq!(word.masked(&['b', 'a', 'n']), "Banana");
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let word = SecretWord::new("Banana");

        assert!(word.contains('b'));
        assert!(word.contains('a'));
        assert!(!word.contains('x'));
    }

    #[test]
    fn test_is_fully_revealed() {
        let word = SecretWord::new("Banana");

        assert!(!word.is_fully_revealed(&[]));
        assert!(!word.is_fully_revealed(&['b', 'a']));
        assert!(word.is_fully_revealed(&['b', 'a', 'n']));
        // Extra guesses don't matter
        assert!(word.is_fully_revealed(&['x', 'b', 'a', 'n']));
    }

    #[test]
    fn test_lowercase_key() {
        assert_eq!(lowercase_key('B'), 'b');
        assert_eq!(lowercase_key('b'), 'b');
    }
}
