//! Locale-aware ordering for German words.
//!
//! Approximates the root collation browsers apply in `localeCompare`: letters
//! compare case- and accent-insensitively first, then unaccented sorts before
//! accented, then lowercase before uppercase. Raw code points break any
//! remaining tie so the order is total.

use std::cmp::Ordering;

#[derive(Clone, Copy)]
struct Unit {
	base: char,
	accent: u8,
	upper: bool,
}

/// Base letters and accent weight for a lowercase character.
fn fold(c: char) -> (&'static str, u8) {
	// acute < grave < circumflex < diaeresis, as in CLDR
	match c {
		'á' => ("a", 1),
		'à' => ("a", 2),
		'â' => ("a", 3),
		'ä' => ("a", 4),
		'ó' => ("o", 1),
		'ò' => ("o", 2),
		'ô' => ("o", 3),
		'ö' => ("o", 4),
		'ú' => ("u", 1),
		'ù' => ("u", 2),
		'û' => ("u", 3),
		'ü' => ("u", 4),
		'é' => ("e", 1),
		'è' => ("e", 2),
		'ê' => ("e", 3),
		'ë' => ("e", 4),
		'í' => ("i", 1),
		'ì' => ("i", 2),
		'î' => ("i", 3),
		'ï' => ("i", 4),
		'ç' => ("c", 5),
		'ñ' => ("n", 6),
		'ß' => ("ss", 1),
		_ => ("", 0),
	}
}

fn units(s: &str) -> Vec<Unit> {
	let mut out = Vec::with_capacity(s.len());
	for c in s.chars() {
		let upper = c.is_uppercase();
		for lower in c.to_lowercase() {
			match fold(lower) {
				("", _) => out.push(Unit {
					base: lower,
					accent: 0,
					upper,
				}),
				(base, accent) => out.extend(base.chars().map(|base| Unit {
					base,
					accent,
					upper,
				})),
			}
		}
	}
	out
}

/// Compares two words the way a German locale would order them.
pub fn compare(a: &str, b: &str) -> Ordering {
	let (ua, ub) = (units(a), units(b));

	ua.iter()
		.map(|u| u.base)
		.cmp(ub.iter().map(|u| u.base))
		.then_with(|| ua.iter().map(|u| u.accent).cmp(ub.iter().map(|u| u.accent)))
		.then_with(|| ua.iter().map(|u| u.upper).cmp(ub.iter().map(|u| u.upper)))
		.then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn umlauts_sort_with_their_base_letter() {
		assert_eq!(compare("ändern", "zahlen"), Ordering::Less);
		assert_eq!(compare("zählen", "zahlen"), Ordering::Greater);
		assert_eq!(compare("zählen", "zahlung"), Ordering::Less);
	}

	#[test]
	fn diaeresis_is_the_heaviest_accent() {
		assert_eq!(compare("áb", "äb"), Ordering::Less);
		assert_eq!(compare("àb", "âb"), Ordering::Less);
		assert_eq!(compare("âb", "äb"), Ordering::Less);
		assert_eq!(compare("ab", "áb"), Ordering::Less);
	}

	#[test]
	fn sharp_s_expands_to_double_s() {
		assert_eq!(compare("schließen", "schliessen"), Ordering::Greater);
		assert_eq!(compare("schließen", "schlieszen"), Ordering::Less);
	}

	#[test]
	fn case_is_a_late_tiebreak() {
		assert_eq!(compare("gehen", "Gehen"), Ordering::Less);
		assert_eq!(compare("Gehen", "haben"), Ordering::Less);
		assert_eq!(compare("fahren", "fahren"), Ordering::Equal);
	}

	#[test]
	fn shorter_prefix_sorts_first() {
		assert_eq!(compare("geh", "gehen"), Ordering::Less);
		assert_eq!(compare("", "a"), Ordering::Less);
	}
}
