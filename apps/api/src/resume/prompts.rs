// Résumé parsing prompt templates.

pub const RESUME_PARSE_SYSTEM: &str = "\
You are a precise resume parser. \
Extract candidate details from raw resume text into structured JSON. \
You MUST respond with valid JSON only — no markdown fences, no explanations. \
If a field cannot be determined from the text, omit it rather than guessing.";

pub const RESUME_PARSE_PROMPT: &str = r#"Extract details from the resume text below.

RESUME TEXT:
{resume_text}

OUTPUT FORMAT (JSON ONLY):
{
  "full_name": "Name",
  "email": "email",
  "years_of_experience": 2,
  "technical_skills": ["Skill1", "Skill2"],
  "soft_skills": ["Skill1", "Skill2"],
  "primary_domain": "e.g. Frontend, Backend, Data Science",
  "projects": [
    {
      "title": "Project Name",
      "description": "Short summary"
    }
  ]
}

Do not add conversational text. Return ONLY the JSON."#;
