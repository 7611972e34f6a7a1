// Interview grading prompt templates.

pub const GRADER_SYSTEM: &str = "\
You are an Expert Technical Interviewer grading a finished mock interview.";

pub const SCORE_PROMPT: &str = r#"Grade this interview on two criteria.

1. TECHNICAL ACCURACY (0-100): Are the answers correct, deep, and precise?
2. CONFIDENCE & COMMUNICATION (0-100): Is the candidate clear? Do they use filler words (um, uh) excessively? Do they sound unsure?

CANDIDATE PROFILE:
{profile_json}

TRANSCRIPT:
{transcript}

---
RETURN JSON ONLY:
{
    "technical_score": (0-100),
    "confidence_score": (0-100),
    "strengths": ["List of 3"],
    "weaknesses": ["List of 3"],
    "summary": "Short summary of performance"
}"#;
