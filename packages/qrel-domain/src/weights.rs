//! Fixed fusion weights. Each group sums to 1.0, so a weighted average of `[0, 1]` scores stays
//! in `[0, 1]`.

pub const TAG: f32 = 0.4;
pub const CONTENT: f32 = 0.35;
pub const CATEGORY: f32 = 0.15;
pub const DIFFICULTY: f32 = 0.08;
pub const QUESTION_TYPE: f32 = 0.02;

pub const TEXT: f32 = 0.25;
pub const STRUCTURE: f32 = 0.20;
pub const ENTITIES: f32 = 0.15;
pub const OPERATIONS: f32 = 0.15;
pub const NUMBERS: f32 = 0.10;
pub const FORMULAS: f32 = 0.15;

pub const TOP_LEVEL: [f32; 5] = [TAG, CONTENT, CATEGORY, DIFFICULTY, QUESTION_TYPE];
pub const CONTENT_LEVEL: [f32; 6] = [TEXT, STRUCTURE, ENTITIES, OPERATIONS, NUMBERS, FORMULAS];
