// Prompt text for the résumé feedback call.

/// Instructions and reply shape. The résumé and job description follow it.
pub const FEEDBACK_INSTRUCTIONS: &str = r#"You are an expert resume evaluator tasked to evaluate a resume against a job description. Provide relevant matching keywords that strongly relate the resume and job description if such keywords exist. Also find the relevant missing keywords but do not output these. Provide concise, actionable feedback based on these missing keywords where each item is categorized as either "skills" or "experience". Give at least 2 "skills" items and at least 2 "experience" items.

Respond with JSON only, shaped exactly like this:
{
  "matching_keywords": ["example1", "example2"],
  "feedback": [
    { "category": "skills", "text": "Include experience with AWS services." },
    { "category": "experience", "text": "Add projects demonstrating REST API development." }
  ]
}
"#;

/// Appends both texts verbatim; neither is scanned for placeholders.
pub fn build_feedback_prompt(resume_text: &str, job_description: &str) -> String {
    format!(
        "{FEEDBACK_INSTRUCTIONS}\nThis is the resume: {resume_text}\n\n\
         This is the job description: {job_description}\n"
    )
}
