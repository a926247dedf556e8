/// Joins generated words into a display block.
///
/// # Behavior
/// - An empty word list yields an empty string.
/// - Every word, the last one included, is followed by a separator: a
///   line break after each `columns`-th word (1-indexed) when
///   `columns > 0`, a single space otherwise. With `columns == 0` the
///   result is one flat line with no breaks.
///
/// The trailing separator after the final word is kept on purpose;
/// callers that want a tight block can `trim_end` the result.
pub fn format_word_list(words: &[String], columns: usize) -> String {
	if words.is_empty() {
		return String::new();
	}

	let mut out = String::new();
	for (index, word) in words.iter().enumerate() {
		out.push_str(word);
		if columns > 0 && (index + 1) % columns == 0 {
			out.push('\n');
		} else {
			out.push(' ');
		}
	}
	out
}
