//! 提取能力层
//!
//! 四个相互独立的匹配步骤加一个汇总步骤，每一步单独失败、单独测试：
//!
//! ```text
//! 原始文本 → segmenter → 单元
//!   单元 → sequence_key        (序号)
//!   单元 → answer_block → option_extractor (答案)
//! 各单元结果 → aggregator → 最终序列
//! ```

pub mod aggregator;
pub mod answer_block;
pub mod option_extractor;
pub mod segmenter;
pub mod sequence_key;

pub use aggregator::aggregate;
pub use answer_block::find_spans;
pub use option_extractor::{extract, inspect, OptionLetter, SpanOutcome};
pub use segmenter::segment;
pub use sequence_key::{resolve, resolve_key};
