use std::{collections::BTreeSet, sync::LazyLock};

use regex::Regex;
use serde::Serialize;

use crate::normalize::{fold_stem, normalize_stem};

/// Structure detectors, matched against the folded raw stem.
const STRUCTURE_PATTERNS: &[(&str, &str)] = &[
	("equation", r"=|方程|equation"),
	("solve", r"求|解|solve|find|calculate|compute|evaluate"),
	("prove", r"证明|求证|prove|show that"),
	("determine", r"判断|确定|判定|determine|decide whether"),
	("derivative", r"导数|导函数|切线|derivative|tangent line|d/dx|[a-z]'\s*\("),
	("integral", r"积分|∫|\\int\b|integral"),
	("limit", r"极限|\\lim\b|\blim\b|limit"),
	(
		"word_problem",
		r"应用|实际|某(?:工厂|公司|商店|学校|城市|商场)|利润|成本|售价|速度|千米|千克|cost|price|profit|speed",
	),
	("function_notation", r"[a-z]\s*\(\s*[a-z0-9]"),
	("inequality", r"不等式|[<>≤≥≠]|\\(?:leq?|geq?|neq?)\b|inequality"),
];

const OPERATOR_SYMBOLS: [(char, Operator); 6] = [
	('+', Operator::Add),
	('-', Operator::Sub),
	('*', Operator::Mul),
	('/', Operator::Div),
	('^', Operator::Pow),
	('=', Operator::Eq),
];

/// Literals above this value count as large integers.
const LARGE_INT_FLOOR: u64 = 100;

static STRUCTURE_DETECTORS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
	STRUCTURE_PATTERNS
		.iter()
		.map(|(name, pattern)| (*name, Regex::new(pattern).expect("structure regex")))
		.collect()
});
static LETTER_RUN: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"[A-Za-z]+").expect("letter run regex"));
static FUNCTION_NAME: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"([A-Za-z])\(").expect("function name regex"));
static NUMBER_LITERAL: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").expect("number literal regex"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
	Add,
	Sub,
	Mul,
	Div,
	Pow,
	Eq,
}
impl Operator {
	pub fn from_symbol(symbol: char) -> Option<Self> {
		OPERATOR_SYMBOLS.iter().find(|(ch, _)| *ch == symbol).map(|(_, op)| *op)
	}

	pub fn name(self) -> &'static str {
		match self {
			Self::Add => "add",
			Self::Sub => "sub",
			Self::Mul => "mul",
			Self::Div => "div",
			Self::Pow => "pow",
			Self::Eq => "eq",
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberKind {
	Float,
	SmallInt,
	LargeInt,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NumberProfile {
	pub count: usize,
	pub kinds: BTreeSet<NumberKind>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeatureSet {
	pub structure_tags: BTreeSet<&'static str>,
	pub math_entities: BTreeSet<String>,
	pub operators: Vec<Operator>,
	pub number_profile: NumberProfile,
}

pub fn extract(stem: &str) -> FeatureSet {
	let normalized = normalize_stem(stem);
	let folded = fold_stem(stem);

	FeatureSet {
		structure_tags: structure_tags(&folded),
		math_entities: math_entities(&normalized),
		operators: operators(&normalized),
		number_profile: number_profile(&folded),
	}
}

pub fn structure_tags(folded: &str) -> BTreeSet<&'static str> {
	STRUCTURE_DETECTORS
		.iter()
		.filter(|(_, detector)| detector.is_match(folded))
		.map(|(name, _)| *name)
		.collect()
}

/// Short letter runs (variable names) and letters applied like functions.
pub fn math_entities(normalized: &str) -> BTreeSet<String> {
	let mut out = BTreeSet::new();

	for run in LETTER_RUN.find_iter(normalized) {
		if run.as_str().len() <= 2 {
			out.insert(run.as_str().to_ascii_lowercase());
		}
	}
	for caps in FUNCTION_NAME.captures_iter(normalized) {
		if let Some(name) = caps.get(1) {
			out.insert(name.as_str().to_ascii_lowercase());
		}
	}

	out
}

pub fn operators(normalized: &str) -> Vec<Operator> {
	normalized.chars().filter_map(Operator::from_symbol).collect()
}

pub fn number_profile(folded: &str) -> NumberProfile {
	let mut profile = NumberProfile::default();

	for literal in NUMBER_LITERAL.find_iter(folded) {
		profile.count += 1;
		profile.kinds.insert(classify_number(literal.as_str()));
	}

	profile
}

fn classify_number(literal: &str) -> NumberKind {
	if literal.contains('.') {
		return NumberKind::Float;
	}

	match literal.parse::<u64>() {
		Ok(value) if value <= LARGE_INT_FLOOR => NumberKind::SmallInt,
		_ => NumberKind::LargeInt,
	}
}
