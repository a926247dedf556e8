use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Runtime kind of a settings field.
///
/// Mirrors the three value shapes a form submission can carry:
/// free text, a numeric input, and a checkbox flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
	Text,
	Number,
	Flag,
}

/// Static settings schema: every accepted field name with its kind.
///
/// The validator checks submissions against exactly this set; an extra
/// or missing field is a failure on its own, before any value is looked
/// at. Names use the wire spelling so they match what a form submits.
pub const SCHEMA: &[(&str, FieldKind)] = &[
	("chars", FieldKind::Text),
	("wordsToGenerate", FieldKind::Number),
	("wordLength", FieldKind::Number),
	("columns", FieldKind::Number),
	("randomWordLength", FieldKind::Flag),
];

/// Generation settings, the typed form of one submission.
///
/// # Responsibilities
/// - Carry the alphabet and the numeric generation parameters
/// - Provide the fallback defaults used when a raw field is absent or
///   unusable
///
/// # Invariants
/// - A `Settings` value makes no promise about limits on its own;
///   callers gate it through the validator before generating
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
	/// Alphabet the words are drawn from. Duplicate characters allowed.
	pub chars: String,

	/// Number of words to produce.
	pub words_to_generate: usize,

	/// Length of each word, or the longest length when randomized.
	pub word_length: usize,

	/// Words per line in the formatted output. `0` disables wrapping.
	pub columns: usize,

	/// Whether each word gets an independently randomized length.
	pub random_word_length: bool,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			chars: String::new(),
			words_to_generate: 50,
			word_length: 5,
			columns: 5,
			random_word_length: false,
		}
	}
}

/// Inclusive numeric bound for one settings field.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bound {
	pub min: usize,
	pub max: usize,
}

impl Bound {
	/// Returns true if `value` lies in `[min, max]`.
	pub fn contains(&self, value: usize) -> bool {
		value >= self.min && value <= self.max
	}
}

/// Bounds for every bounded settings quantity.
///
/// The length of `chars` counts as its own bounded quantity and is
/// checked against the `chars` bound. Limits travel as an explicit
/// value into the validator and the generator; nothing in the engine
/// reads them from ambient state.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Limits {
	pub chars: Bound,
	pub words_to_generate: Bound,
	pub word_length: Bound,
	pub columns: Bound,
}

impl Default for Limits {
	fn default() -> Self {
		Self {
			chars: Bound { min: 2, max: 100 },
			words_to_generate: Bound { min: 1, max: 1000 },
			word_length: Bound { min: 2, max: 30 },
			// 0 columns means a flat, unwrapped word list
			columns: Bound { min: 0, max: 15 },
		}
	}
}

/// One raw field value as submitted, before coercion into `Settings`.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
	Text(String),
	Number(f64),
	Flag(bool),
}

impl FieldValue {
	/// The schema kind this value satisfies.
	pub fn kind(&self) -> FieldKind {
		match self {
			FieldValue::Text(_) => FieldKind::Text,
			FieldValue::Number(_) => FieldKind::Number,
			FieldValue::Flag(_) => FieldKind::Flag,
		}
	}
}

/// A raw settings submission: named field values in no guaranteed shape.
///
/// This is the untyped stand-in for whatever object the presentation
/// layer assembled. Unlike `Settings` it can express a missing field, an
/// unknown field, or a field of the wrong kind, which is exactly what
/// the validator needs to judge.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SettingsForm {
	entries: BTreeMap<String, FieldValue>,
}

impl SettingsForm {
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets a field, replacing any previous value under the same name.
	pub fn set(&mut self, name: &str, value: FieldValue) {
		self.entries.insert(name.to_owned(), value);
	}

	/// Removes a field. Mostly useful for building rejection cases.
	pub fn unset(&mut self, name: &str) {
		self.entries.remove(name);
	}

	pub fn get(&self, name: &str) -> Option<&FieldValue> {
		self.entries.get(name)
	}

	/// Field names in sorted order.
	pub fn field_names(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	/// Lowers typed settings back into form shape.
	///
	/// The generator uses this to re-run the full validator on settings
	/// it received, instead of keeping a second, diverging check.
	pub fn from_settings(settings: &Settings) -> Self {
		let mut form = Self::new();
		form.set("chars", FieldValue::Text(settings.chars.clone()));
		form.set("wordsToGenerate", FieldValue::Number(settings.words_to_generate as f64));
		form.set("wordLength", FieldValue::Number(settings.word_length as f64));
		form.set("columns", FieldValue::Number(settings.columns as f64));
		form.set("randomWordLength", FieldValue::Flag(settings.random_word_length));
		form
	}

	/// Coerces the form into typed settings, field by field.
	///
	/// Each field has a declared kind and a fallback: text is trimmed,
	/// numbers must be finite non-negative integers, and any field that
	/// is absent or of the wrong kind takes its value from `defaults`.
	/// No errors are produced here; rejection is the validator's job.
	pub fn to_settings(&self, defaults: &Settings) -> Settings {
		Settings {
			chars: self
				.text("chars")
				.map(|s| s.trim().to_owned())
				.unwrap_or_else(|| defaults.chars.clone()),
			words_to_generate: self.number("wordsToGenerate").unwrap_or(defaults.words_to_generate),
			word_length: self.number("wordLength").unwrap_or(defaults.word_length),
			columns: self.number("columns").unwrap_or(defaults.columns),
			random_word_length: self.flag("randomWordLength").unwrap_or(defaults.random_word_length),
		}
	}

	pub(crate) fn text(&self, name: &str) -> Option<&str> {
		match self.entries.get(name) {
			Some(FieldValue::Text(s)) => Some(s.as_str()),
			_ => None,
		}
	}

	/// Reads a numeric field as a whole non-negative integer.
	///
	/// Returns `None` for NaN, infinities, negatives, and fractional
	/// values; those count as type mismatches upstream.
	pub(crate) fn number(&self, name: &str) -> Option<usize> {
		match self.entries.get(name) {
			Some(FieldValue::Number(v)) if v.is_finite() && *v >= 0.0 && v.fract() == 0.0 => {
				Some(*v as usize)
			}
			_ => None,
		}
	}

	pub(crate) fn flag(&self, name: &str) -> Option<bool> {
		match self.entries.get(name) {
			Some(FieldValue::Flag(b)) => Some(*b),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_settings_match_form_defaults() {
		let settings = Settings::default();
		assert_eq!(settings.words_to_generate, 50);
		assert_eq!(settings.word_length, 5);
		assert_eq!(settings.columns, 5);
		assert!(!settings.random_word_length);
		assert!(settings.chars.is_empty());
	}

	#[test]
	fn bound_is_inclusive() {
		let bound = Bound { min: 2, max: 30 };
		assert!(bound.contains(2));
		assert!(bound.contains(30));
		assert!(!bound.contains(1));
		assert!(!bound.contains(31));
	}

	#[test]
	fn to_settings_trims_text_and_takes_values() {
		let mut form = SettingsForm::new();
		form.set("chars", FieldValue::Text("  abcdef  ".to_owned()));
		form.set("wordsToGenerate", FieldValue::Number(10.0));
		form.set("wordLength", FieldValue::Number(5.0));
		form.set("columns", FieldValue::Number(0.0));
		form.set("randomWordLength", FieldValue::Flag(true));

		let settings = form.to_settings(&Settings::default());
		assert_eq!(settings.chars, "abcdef");
		assert_eq!(settings.words_to_generate, 10);
		assert_eq!(settings.word_length, 5);
		assert_eq!(settings.columns, 0);
		assert!(settings.random_word_length);
	}

	#[test]
	fn to_settings_falls_back_on_missing_or_mistyped_fields() {
		let mut form = SettingsForm::new();
		form.set("chars", FieldValue::Text("abcdef".to_owned()));
		// wordsToGenerate absent, wordLength mistyped, columns fractional
		form.set("wordLength", FieldValue::Flag(true));
		form.set("columns", FieldValue::Number(2.5));

		let defaults = Settings::default();
		let settings = form.to_settings(&defaults);
		assert_eq!(settings.words_to_generate, defaults.words_to_generate);
		assert_eq!(settings.word_length, defaults.word_length);
		assert_eq!(settings.columns, defaults.columns);
	}

	#[test]
	fn from_settings_round_trips_through_to_settings() {
		let settings = Settings {
			chars: "abcdef".to_owned(),
			words_to_generate: 10,
			word_length: 5,
			columns: 5,
			random_word_length: false,
		};
		let form = SettingsForm::from_settings(&settings);
		assert_eq!(form.to_settings(&Settings::default()), settings);
	}

	#[test]
	fn number_rejects_non_integral_values() {
		let mut form = SettingsForm::new();
		form.set("columns", FieldValue::Number(2.5));
		assert_eq!(form.number("columns"), None);
		form.set("columns", FieldValue::Number(f64::NAN));
		assert_eq!(form.number("columns"), None);
		form.set("columns", FieldValue::Number(-1.0));
		assert_eq!(form.number("columns"), None);
		form.set("columns", FieldValue::Number(3.0));
		assert_eq!(form.number("columns"), Some(3));
	}
}
