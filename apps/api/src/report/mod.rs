// Evaluation report: transcript scoring via the LLM, fixed 70/30 weighting,
// and verdict mapping. Degrades to an error object when scoring fails.

pub mod engine;
pub mod prompts;
pub mod scoring;
