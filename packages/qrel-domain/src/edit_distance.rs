/// Levenshtein distance over Unicode code points.
pub fn edit_distance(lhs: &str, rhs: &str) -> usize {
	let lhs: Vec<char> = lhs.chars().collect();
	let rhs: Vec<char> = rhs.chars().collect();

	sequence_distance(&lhs, &rhs)
}

/// Levenshtein distance over arbitrary sequences with unit insert, delete and substitute costs.
pub fn sequence_distance<T>(lhs: &[T], rhs: &[T]) -> usize
where
	T: PartialEq,
{
	if lhs.is_empty() {
		return rhs.len();
	}
	if rhs.is_empty() {
		return lhs.len();
	}

	let mut prev: Vec<usize> = (0..=rhs.len()).collect();
	let mut curr = vec![0; rhs.len() + 1];

	for (i, left) in lhs.iter().enumerate() {
		curr[0] = i + 1;

		for (j, right) in rhs.iter().enumerate() {
			let cost = usize::from(left != right);

			curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
		}

		std::mem::swap(&mut prev, &mut curr);
	}

	prev[rhs.len()]
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn matches_reference_values() {
		assert_eq!(edit_distance("", ""), 0);
		assert_eq!(edit_distance("abc", "abc"), 0);
		assert_eq!(edit_distance("abc", "abd"), 1);
		assert_eq!(edit_distance("", "abc"), 3);
		assert_eq!(edit_distance("abc", ""), 3);
		assert_eq!(edit_distance("kitten", "sitting"), 3);
	}

	#[test]
	fn counts_code_points_not_bytes() {
		assert_eq!(edit_distance("导数", "导函数"), 1);
		assert_eq!(edit_distance("√x", "x"), 1);
	}

	#[test]
	fn works_on_token_sequences() {
		assert_eq!(sequence_distance(&["add", "eq"], &["add", "mul", "eq"]), 1);
		assert_eq!(sequence_distance::<u8>(&[], &[]), 0);
	}
}
