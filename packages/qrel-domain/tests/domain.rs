use time::OffsetDateTime;
use uuid::Uuid;

use qrel_domain::{
	Item, QuestionType, ScoredCandidate, edit_distance::edit_distance, formula, gate, score,
	score_breakdown, select,
};

fn item(tags: &[&str], stem: &str) -> Item {
	Item {
		id: Uuid::new_v4(),
		tags: tags.iter().map(|tag| tag.to_string()).collect(),
		category: Some("高考真题".to_string()),
		question_type: QuestionType::Choice,
		difficulty: 3,
		stem: stem.to_string(),
		popularity: 0,
		created_at: OffsetDateTime::UNIX_EPOCH,
	}
}

#[test]
fn item_deserializes_from_bank_json() {
	let raw = serde_json::json!({
		"id": "5b0e3f5c-8c4c-4b55-9a61-2f7f1d3c9a10",
		"tags": ["导数", "函数单调性"],
		"category": "高考真题",
		"question_type": "multiple_choice",
		"difficulty": 4,
		"stem": "已知 $f(x)=e^x-ax$，讨论 f(x) 的单调性",
		"popularity": 42,
		"created_at": "2024-03-01T08:00:00Z"
	});
	let item: Item = serde_json::from_value(raw).expect("Failed to parse item.");

	assert_eq!(item.question_type, QuestionType::MultipleChoice);
	assert_eq!(item.tags.len(), 2);
	assert_eq!(item.created_at.year(), 2024);
}

#[test]
fn optional_fields_default() {
	let raw = serde_json::json!({
		"id": "5b0e3f5c-8c4c-4b55-9a61-2f7f1d3c9a11",
		"question_type": "fill",
		"difficulty": 1,
		"stem": "1+1=?",
		"created_at": "2024-03-01T08:00:00+08:00"
	});
	let item: Item = serde_json::from_value(raw).expect("Failed to parse item.");

	assert!(item.tags.is_empty());
	assert_eq!(item.category(), None);
	assert_eq!(item.popularity, 0);
}

#[test]
fn derivative_application_is_related_to_derivative() {
	let target = item(&["导数"], "求 $f(x)=x^3$ 在 $x=1$ 处的切线方程");
	let candidate = item(&["导数应用"], "求曲线 $y=\\ln x$ 在 $x=e$ 处的切线方程");

	assert!(gate::passes(&target, &candidate));
	assert!(gate::passes(&candidate, &target));
	assert!(score(&target, &candidate) > 0.0);
}

#[test]
fn geometry_and_probability_never_rank_together() {
	let stem = "一个袋子里有 3 个红球和 2 个白球";
	let target = item(&["几何"], stem);
	let candidate = item(&["概率"], stem);
	let relevance = score(&target, &candidate);
	let selected = select(
		vec![ScoredCandidate { item: candidate, relevance, breakdown: None }],
		3,
	);

	assert_eq!(relevance, 0.0);
	assert!(selected.is_empty());
}

#[test]
fn clone_of_target_scores_one() {
	let target = item(
		&["三角函数", "诱导公式"],
		"化简 $\\sin(\\pi - \\alpha) + \\cos(\\frac{\\pi}{2} + \\alpha)$，其中 0 < α < 1.5",
	);
	let clone = Item { id: Uuid::new_v4(), ..target.clone() };
	let breakdown = score_breakdown(&target, &clone);

	assert!(breakdown.gate_passed);
	assert!((breakdown.relevance - 1.0).abs() < 1e-5);
}

#[test]
fn formula_similarity_is_reflexive() {
	let stem = "设 $a_n = 2n + 1$，求 $S_n$";

	assert_eq!(formula::formula_similarity(stem, stem), 1.0);
}

#[test]
fn edit_distance_reference_values() {
	assert_eq!(edit_distance("", ""), 0);
	assert_eq!(edit_distance("abc", "abc"), 0);
	assert_eq!(edit_distance("abc", "abd"), 1);
	assert_eq!(edit_distance("", "abc"), 3);
}
