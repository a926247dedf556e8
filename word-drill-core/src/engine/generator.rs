use log::debug;
use rand::Rng;

use crate::engine::pool::{build_pool, POOL_TARGET_LEN};
use crate::engine::settings::{Limits, Settings, SettingsForm};
use crate::engine::validate::validate;

/// Generated words, in generation order. Duplicates are expected with
/// small alphabets and are kept.
pub type WordList = Vec<String>;

/// Generates the requested number of pseudo-random words.
///
/// # Behavior
/// - Re-validates `settings` against `limits` and returns an empty list
///   on failure, even when the caller already validated. The pipeline
///   downstream always gets a consumable list, never an error.
/// - Builds one sampling pool for the whole call, then draws each word's
///   characters uniformly, with replacement, from that pool.
/// - Word length is `settings.word_length`, or uniform in
///   `[limits.word_length.min, settings.word_length]` inclusive when
///   `random_word_length` is set.
///
/// # Notes
/// - Output is intentionally not reproducible; there is no seed.
pub fn generate_words(settings: &Settings, limits: &Limits) -> WordList {
	if !validate(&SettingsForm::from_settings(settings), limits) {
		debug!("invalid settings, generating no words");
		return WordList::new();
	}

	// Validation passed, so the alphabet has >= 2 characters and the
	// pool is non-empty
	let pool: Vec<char> = build_pool(&settings.chars, POOL_TARGET_LEN).chars().collect();
	let mut rng = rand::rng();

	let mut words = WordList::with_capacity(settings.words_to_generate);
	for _ in 0..settings.words_to_generate {
		let length = if settings.random_word_length {
			rng.random_range(limits.word_length.min..=settings.word_length)
		} else {
			settings.word_length
		};

		let word: String = (0..length)
			.map(|_| pool[rng.random_range(0..pool.len())])
			.collect();
		words.push(word);
	}

	words
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashSet;

	fn settings() -> Settings {
		Settings {
			chars: "abcdef".to_owned(),
			words_to_generate: 10,
			word_length: 5,
			columns: 5,
			random_word_length: false,
		}
	}

	#[test]
	fn generates_the_requested_number_of_words() {
		let words = generate_words(&settings(), &Limits::default());
		assert_eq!(words.len(), 10);
	}

	#[test]
	fn fixed_length_words_have_exactly_the_configured_length() {
		let words = generate_words(&settings(), &Limits::default());
		assert!(words.iter().all(|w| w.chars().count() == 5));
	}

	#[test]
	fn randomized_lengths_stay_inside_the_configured_range() {
		let mut settings = settings();
		settings.random_word_length = true;
		settings.words_to_generate = 200;
		let limits = Limits::default();

		let words = generate_words(&settings, &limits);
		assert_eq!(words.len(), 200);
		for word in &words {
			let len = word.chars().count();
			assert!(len >= limits.word_length.min && len <= settings.word_length, "bad length {len}");
		}
	}

	#[test]
	fn words_only_use_alphabet_characters() {
		let settings = settings();
		let alphabet: HashSet<char> = settings.chars.chars().collect();
		for word in generate_words(&settings, &Limits::default()) {
			assert!(word.chars().all(|c| alphabet.contains(&c)), "stray character in {word}");
		}
	}

	#[test]
	fn invalid_settings_generate_an_empty_list() {
		let mut settings = settings();
		settings.chars = "a".to_owned();
		assert!(generate_words(&settings, &Limits::default()).is_empty());

		let mut settings = self::settings();
		settings.words_to_generate = 0;
		assert!(generate_words(&settings, &Limits::default()).is_empty());
	}

	#[test]
	fn each_call_is_independent() {
		// Not a determinism check; just that both calls honor the count
		let settings = settings();
		let limits = Limits::default();
		assert_eq!(generate_words(&settings, &limits).len(), 10);
		assert_eq!(generate_words(&settings, &limits).len(), 10);
	}
}
