use serde::Serialize;

use crate::{
	features::{self, FeatureSet},
	formula, gate,
	item::Item,
	normalize::normalize_stem,
	scorers, weights,
};

/// Per-dimension content scores. `None` marks a dimension with no evidence on either side; such
/// dimensions carry no weight in the content average.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContentBreakdown {
	pub text: Option<f32>,
	pub structure: f32,
	pub entities: Option<f32>,
	pub operations: f32,
	pub numbers: Option<f32>,
	pub formulas: Option<f32>,
	pub score: f32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RelevanceBreakdown {
	pub gate_passed: bool,
	pub tag: f32,
	pub content: Option<ContentBreakdown>,
	pub category: Option<f32>,
	pub difficulty: f32,
	pub question_type: f32,
	pub relevance: f32,
}
impl RelevanceBreakdown {
	pub fn rejected() -> Self {
		Self::default()
	}
}

/// Stem-derived artifacts of one item, computed once per request.
pub struct PreparedItem<'a> {
	pub item: &'a Item,
	pub normalized: String,
	pub features: FeatureSet,
	pub has_formulas: bool,
}
impl<'a> PreparedItem<'a> {
	pub fn new(item: &'a Item) -> Self {
		Self {
			item,
			normalized: normalize_stem(&item.stem),
			features: features::extract(&item.stem),
			has_formulas: !formula::extract_formulas(&item.stem).is_empty(),
		}
	}
}

#[derive(Default)]
struct WeightedAverage {
	sum: f32,
	weight: f32,
}
impl WeightedAverage {
	fn add(&mut self, weight: f32, score: f32) {
		self.sum += weight * score;
		self.weight += weight;
	}

	fn add_evidence(&mut self, weight: f32, score: Option<f32>) {
		if let Some(score) = score {
			self.add(weight, score);
		}
	}

	fn value(&self) -> f32 {
		if self.weight <= 0.0 {
			return 0.0;
		}

		(self.sum / self.weight).clamp(0.0, 1.0)
	}
}

pub fn score(target: &Item, candidate: &Item) -> f32 {
	score_breakdown(target, candidate).relevance
}

pub fn score_breakdown(target: &Item, candidate: &Item) -> RelevanceBreakdown {
	if !gate::passes(target, candidate) {
		return RelevanceBreakdown::rejected();
	}

	score_prepared(&PreparedItem::new(target), &PreparedItem::new(candidate))
}

/// Scores a prepared pair. Gated pairs return the rejected breakdown with relevance `0`.
pub fn score_prepared(
	target: &PreparedItem<'_>,
	candidate: &PreparedItem<'_>,
) -> RelevanceBreakdown {
	if !gate::passes(target.item, candidate.item) {
		return RelevanceBreakdown::rejected();
	}

	let content = content_breakdown(target, candidate);
	let tag = scorers::tag_score(&target.item.tags, &candidate.item.tags);
	let category = match (target.item.category(), candidate.item.category()) {
		(Some(lhs), Some(rhs)) => Some(scorers::category_score(Some(lhs), Some(rhs))),
		_ => None,
	};
	let difficulty = scorers::difficulty_score(target.item.difficulty, candidate.item.difficulty);
	let question_type =
		scorers::type_score(target.item.question_type, candidate.item.question_type);
	let mut total = WeightedAverage::default();

	total.add(weights::TAG, tag);
	total.add(weights::CONTENT, content.score);
	total.add_evidence(weights::CATEGORY, category);
	total.add(weights::DIFFICULTY, difficulty);
	total.add(weights::QUESTION_TYPE, question_type);

	RelevanceBreakdown {
		gate_passed: true,
		tag,
		content: Some(content),
		category,
		difficulty,
		question_type,
		relevance: total.value(),
	}
}

fn content_breakdown(
	target: &PreparedItem<'_>,
	candidate: &PreparedItem<'_>,
) -> ContentBreakdown {
	let lhs = &target.features;
	let rhs = &candidate.features;
	let text = (!target.normalized.is_empty() || !candidate.normalized.is_empty())
		.then(|| scorers::text_score(&target.normalized, &candidate.normalized));
	let structure = scorers::structure_score(&lhs.structure_tags, &rhs.structure_tags);
	let entities = (!lhs.math_entities.is_empty() || !rhs.math_entities.is_empty())
		.then(|| scorers::entity_score(&lhs.math_entities, &rhs.math_entities));
	let operations = scorers::operator_score(&lhs.operators, &rhs.operators);
	let numbers = (lhs.number_profile.count > 0 || rhs.number_profile.count > 0)
		.then(|| scorers::number_score(&lhs.number_profile, &rhs.number_profile));
	let formulas = (target.has_formulas || candidate.has_formulas)
		.then(|| formula::formula_similarity(&target.item.stem, &candidate.item.stem));
	let mut average = WeightedAverage::default();

	average.add_evidence(weights::TEXT, text);
	average.add(weights::STRUCTURE, structure);
	average.add_evidence(weights::ENTITIES, entities);
	average.add(weights::OPERATIONS, operations);
	average.add_evidence(weights::NUMBERS, numbers);
	average.add_evidence(weights::FORMULAS, formulas);

	ContentBreakdown {
		text,
		structure,
		entities,
		operations,
		numbers,
		formulas,
		score: average.value(),
	}
}
