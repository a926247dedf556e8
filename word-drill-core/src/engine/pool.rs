use rand::Rng;
use rand::seq::SliceRandom;

/// Default working-buffer size for one generation call.
pub const POOL_TARGET_LEN: usize = 1000;

/// Expands an alphabet into a shuffled sampling buffer.
///
/// # Behavior
/// - Concatenates `target_length / alphabet` independently shuffled
///   permutations of the alphabet (Fisher–Yates, uniform).
/// - Tops the remainder up with uniform draws from the alphabet, with
///   replacement, so the result is exactly `target_length` characters.
/// - Shuffles the assembled buffer once more before returning.
///
/// The buffer decorrelates positions when the alphabet is tiny; words
/// are sampled from it rather than from the raw alphabet. It is built
/// fresh on every generation call and never cached.
///
/// # Notes
/// - Assumes the validator already rejected alphabets shorter than 2
///   characters. An empty alphabet yields an empty buffer rather than
///   a division by zero.
pub fn build_pool(chars: &str, target_length: usize) -> String {
	let alphabet: Vec<char> = chars.chars().collect();
	if alphabet.is_empty() {
		return String::new();
	}

	let mut rng = rand::rng();

	let repeats = target_length / alphabet.len();
	let missing = target_length - repeats * alphabet.len();

	let mut pool: Vec<char> = Vec::with_capacity(target_length);
	let mut permutation = alphabet.clone();
	for _ in 0..repeats {
		permutation.shuffle(&mut rng);
		pool.extend_from_slice(&permutation);
	}
	for _ in 0..missing {
		pool.push(alphabet[rng.random_range(0..alphabet.len())]);
	}

	pool.shuffle(&mut rng);
	pool.into_iter().collect()
}
