use crate::{item::Item, keywords};

/// Hard tag-level pre-filter applied before any other scoring.
///
/// A pair passes when both sides carry tags and some tag pair is identical or shares a core
/// keyword. The test is symmetric in its arguments.
pub fn passes(target: &Item, candidate: &Item) -> bool {
	tags_pass(&target.tags, &candidate.tags)
}

pub fn tags_pass(lhs: &[String], rhs: &[String]) -> bool {
	let lhs: Vec<&str> = lhs.iter().map(|tag| tag.trim()).filter(|tag| !tag.is_empty()).collect();
	let rhs: Vec<&str> = rhs.iter().map(|tag| tag.trim()).filter(|tag| !tag.is_empty()).collect();

	if lhs.is_empty() || rhs.is_empty() {
		return false;
	}

	lhs.iter().any(|left| {
		rhs.iter().any(|right| left == right || keywords::share_keyword(left, right))
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	fn tags(values: &[&str]) -> Vec<String> {
		values.iter().map(|value| value.to_string()).collect()
	}

	fn both_ways(lhs: &[&str], rhs: &[&str]) -> (bool, bool) {
		(tags_pass(&tags(lhs), &tags(rhs)), tags_pass(&tags(rhs), &tags(lhs)))
	}

	#[test]
	fn shared_keyword_passes_in_both_orders() {
		assert_eq!(both_ways(&["导数"], &["导数应用"]), (true, true));
		assert_eq!(both_ways(&["Derivative"], &["derivative rules"]), (true, true));
	}

	#[test]
	fn identical_tag_without_keyword_passes() {
		assert_eq!(both_ways(&["竞赛题"], &["压轴", "竞赛题"]), (true, true));
	}

	#[test]
	fn unrelated_topics_fail_in_both_orders() {
		assert_eq!(both_ways(&["几何"], &["概率"]), (false, false));
		assert_eq!(both_ways(&["竞赛题"], &["压轴"]), (false, false));
	}

	#[test]
	fn empty_tag_sets_fail() {
		assert_eq!(both_ways(&[], &["导数"]), (false, false));
		assert_eq!(both_ways(&["  "], &["  "]), (false, false));
	}
}
