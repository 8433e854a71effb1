//! Core-concept vocabulary shared by the tag gate, the tag scorer and candidate queries.
//!
//! Entries are lower-case. Tags are lower-cased before the substring test, so English terms match
//! case-insensitively while CJK terms match as-is.

pub const CORE_KEYWORDS: &[&str] = &[
	"函数",
	"几何",
	"代数",
	"三角",
	"概率",
	"统计",
	"导数",
	"积分",
	"极限",
	"方程",
	"不等式",
	"数列",
	"向量",
	"集合",
	"复数",
	"矩阵",
	"对数",
	"指数",
	"圆锥曲线",
	"椭圆",
	"双曲线",
	"抛物线",
	"排列组合",
	"二项式",
	"命题",
	"function",
	"geometry",
	"algebra",
	"trigonometry",
	"probability",
	"statistics",
	"derivative",
	"integral",
	"limit",
	"equation",
	"inequality",
	"sequence",
	"vector",
	"set",
	"complex",
	"matrix",
	"logarithm",
	"exponent",
];

/// Core keywords contained in `tag`, in table order.
pub fn keywords_in(tag: &str) -> Vec<&'static str> {
	let lowered = tag.trim().to_lowercase();

	if lowered.is_empty() {
		return Vec::new();
	}

	CORE_KEYWORDS.iter().copied().filter(|keyword| lowered.contains(keyword)).collect()
}

/// True when some core keyword is contained in both tags.
pub fn share_keyword(lhs: &str, rhs: &str) -> bool {
	let rhs = rhs.trim().to_lowercase();

	if rhs.is_empty() {
		return false;
	}

	keywords_in(lhs).into_iter().any(|keyword| rhs.contains(keyword))
}
