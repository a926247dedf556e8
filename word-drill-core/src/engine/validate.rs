use log::warn;

use crate::engine::settings::{FieldKind, Limits, SettingsForm, SCHEMA};

/// Validates a raw settings submission against the schema and `limits`.
///
/// # Behavior
/// Checks, in order:
/// 1. The form carries exactly the schema's field set. An extra or
///    missing field fails on its own, independent of any value.
/// 2. Every field's value matches its declared kind. Numbers must be
///    finite non-negative integers; the trimmed alphabet must hold at
///    least 2 characters (duplicates are fine, positions are what count).
/// 3. Every bounded quantity lies inside its `limits` bound. The
///    alphabet length is bounded like any numeric field.
///
/// # Notes
/// - Never panics and never returns an error; the verdict is the whole
///   contract. Each rejection logs a diagnostic naming the field and
///   the reason, which is for debugging only.
pub fn validate(form: &SettingsForm, limits: &Limits) -> bool {
	has_expected_fields(form) && fields_well_typed(form) && within_limits(form, limits)
}

/// Symmetry check: the form's key set equals the schema's key set.
fn has_expected_fields(form: &SettingsForm) -> bool {
	let mut expected: Vec<&str> = SCHEMA.iter().map(|(name, _)| *name).collect();
	expected.sort_unstable();

	// field_names is already sorted
	let actual: Vec<&str> = form.field_names().collect();

	if actual != expected {
		warn!("schema mismatch: expected fields {expected:?}, got {actual:?}");
		return false;
	}
	true
}

fn fields_well_typed(form: &SettingsForm) -> bool {
	for (name, kind) in SCHEMA {
		let Some(value) = form.get(name) else {
			warn!("{name} - field missing");
			return false;
		};
		if value.kind() != *kind {
			warn!("{name} - expected {kind:?}, got {:?}", value.kind());
			return false;
		}
		match kind {
			FieldKind::Text => {
				// The only text field is the alphabet itself
				let Some(text) = form.text(name) else {
					return false;
				};
				if text.trim().chars().count() < 2 {
					warn!("{name} - alphabet too small, need at least 2 characters");
					return false;
				}
			}
			FieldKind::Number => {
				if form.number(name).is_none() {
					warn!("{name} - not a whole non-negative number");
					return false;
				}
			}
			FieldKind::Flag => {}
		}
	}
	true
}

fn within_limits(form: &SettingsForm, limits: &Limits) -> bool {
	let quantities = [
		("chars", form.text("chars").map(|s| s.trim().chars().count()), limits.chars),
		("wordsToGenerate", form.number("wordsToGenerate"), limits.words_to_generate),
		("wordLength", form.number("wordLength"), limits.word_length),
		("columns", form.number("columns"), limits.columns),
	];

	for (name, value, bound) in quantities {
		let Some(value) = value else {
			warn!("{name} - no numeric quantity to bound");
			return false;
		};
		if !bound.contains(value) {
			warn!("{name} - {value} outside [{}, {}]", bound.min, bound.max);
			return false;
		}
	}
	true
}
