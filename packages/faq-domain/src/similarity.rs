use crate::normalize::KeywordSet;

/// Jaccard index of two keyword sets. Zero when both are empty.
pub fn jaccard(a: &KeywordSet, b: &KeywordSet) -> f32 {
	let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
	let intersection = small.iter().filter(|token| large.contains(*token)).count();
	let union = a.len() + b.len() - intersection;

	if union == 0 {
		return 0.0;
	}

	intersection as f32 / union as f32
}

/// Best similarity on a 0-100 scale between the shorter string and any window of the longer one.
///
/// Windows are as long as the shorter string, plus the prefixes and suffixes of the longer string
/// that are cut short at its ends. Zero when either side is empty.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
	let a: Vec<char> = a.chars().collect();
	let b: Vec<char> = b.chars().collect();

	if a.is_empty() || b.is_empty() {
		return 0;
	}

	let (short, long) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };
	let width = short.len();
	let edges = (1..width).flat_map(|len| [&long[..len], &long[long.len() - len..]]);
	let full = (0..=long.len() - width).map(|start| &long[start..start + width]);
	let mut best = 0_u8;

	for window in edges.chain(full) {
		best = best.max(ratio(short, window));

		if best == 100 {
			break;
		}
	}

	best
}

/// Indel similarity, `2 * lcs / (len_a + len_b)`, rounded to 0-100.
fn ratio(a: &[char], b: &[char]) -> u8 {
	let total = a.len() + b.len();

	if total == 0 {
		return 0;
	}

	let lcs = longest_common_subsequence(a, b);

	((200.0 * lcs as f64 / total as f64).round()) as u8
}

fn longest_common_subsequence(a: &[char], b: &[char]) -> usize {
	let mut prev = vec![0_usize; b.len() + 1];
	let mut curr = vec![0_usize; b.len() + 1];

	for ca in a {
		for (j, cb) in b.iter().enumerate() {
			curr[j + 1] = if ca == cb { prev[j] + 1 } else { prev[j + 1].max(curr[j]) };
		}

		std::mem::swap(&mut prev, &mut curr);
	}

	prev[b.len()]
}

#[cfg(test)]
mod tests {
	use super::*;

	fn set(words: &[&str]) -> KeywordSet {
		words.iter().map(|word| word.to_string()).collect()
	}

	#[test]
	fn jaccard_of_identical_sets_is_one() {
		let a = set(&["cervical", "cancer"]);

		assert_eq!(jaccard(&a, &a.clone()), 1.0);
	}

	#[test]
	fn jaccard_of_empty_or_disjoint_sets_is_zero() {
		assert_eq!(jaccard(&KeywordSet::new(), &KeywordSet::new()), 0.0);
		assert_eq!(jaccard(&set(&["a"]), &KeywordSet::new()), 0.0);
		assert_eq!(jaccard(&set(&["a"]), &set(&["b"])), 0.0);
	}

	#[test]
	fn jaccard_counts_overlap_over_union() {
		let query = set(&["cervical", "cancer"]);
		let entry = set(&["breast", "cancer", "causes"]);

		assert_eq!(jaccard(&query, &entry), 0.25);
		assert_eq!(jaccard(&entry, &query), 0.25);
	}

	#[test]
	fn partial_ratio_finds_substring() {
		assert_eq!(partial_ratio("breast cancer", "what causes breast cancer"), 100);
		assert_eq!(partial_ratio("what causes breast cancer", "breast cancer"), 100);
	}

	#[test]
	fn partial_ratio_scores_windows_cut_at_the_ends() {
		// Suffix "abcdefgh": 2 * 8 / 19.
		assert_eq!(partial_ratio("abcdefghijk", "zzzzzzabcdefgh"), 84);
		assert_eq!(partial_ratio("zzzzzzabcdefgh", "abcdefghijk"), 84);
		// Suffix "ab": 2 * 2 / 6.
		assert_eq!(partial_ratio("abcd", "xxab"), 67);
		// Prefix "cdef": 2 * 4 / 10.
		assert_eq!(partial_ratio("abcdef", "cdefzzzz"), 80);
	}

	#[test]
	fn partial_ratio_of_empty_side_is_zero() {
		assert_eq!(partial_ratio("", "cancer"), 0);
		assert_eq!(partial_ratio("cancer", ""), 0);
	}

	#[test]
	fn partial_ratio_scores_near_misses() {
		// One substitution in six characters: lcs 5, 2 * 5 / 12.
		assert_eq!(partial_ratio("cancer", "cancor"), 83);
		assert!(partial_ratio("vaccine", "what is cervical cancer") < 80);
	}

	#[test]
	fn partial_ratio_handles_multibyte_text() {
		assert_eq!(partial_ratio("ক্যান্সার", "স্তন ক্যান্সার কী"), 100);
	}

	#[test]
	fn lcs_matches_known_values() {
		let a: Vec<char> = "abcbdab".chars().collect();
		let b: Vec<char> = "bdcaba".chars().collect();

		assert_eq!(longest_common_subsequence(&a, &b), 4);
	}
}
