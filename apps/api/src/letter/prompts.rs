//! Prompt construction for cover-letter generation.
//!
//! `build_prompt` is pure and deterministic: the same request always yields the
//! same bytes. Every field is rendered, blank ones as an explicit placeholder,
//! so the model never has to guess what was left out.

use std::fmt::Write;

use crate::models::request::{is_blank, GenerationRequest};

/// Role-setting instruction that opens every prompt.
pub const ROLE_INSTRUCTION: &str = "You are an expert professional cover letter writer. \
    Write a compelling, personalized cover letter based on the following information:";

/// Anti-fabrication rule appended after the numbered requirements.
pub const GROUNDING_DIRECTIVE: &str = "CRITICAL: Only reference skills and achievements \
    provided above. Do NOT make up or hallucinate any experiences. Make the letter compelling, \
    unique, and memorable while being honest about qualifications.";

/// Output-shape rule that closes every prompt.
pub const OUTPUT_DIRECTIVE: &str = "Write ONLY the cover letter text, nothing else. \
    Include the salutation and sign-off.";

/// Placeholder for blank applicant fields.
pub const NOT_SPECIFIED: &str = "Not specified";
/// Placeholder for blank job-target fields.
pub const NOT_PROVIDED: &str = "Not provided";

pub const GENERIC_SALUTATION: &str = "Dear Hiring Manager,";

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if is_blank(value) {
        placeholder
    } else {
        value
    }
}

/// Salutation line: the hiring manager by name when known.
pub fn salutation(hiring_manager: &str) -> String {
    if is_blank(hiring_manager) {
        GENERIC_SALUTATION.to_string()
    } else {
        format!("Dear {hiring_manager},")
    }
}

/// Builds the single user message sent to the chat-completion model.
pub fn build_prompt(request: &GenerationRequest) -> String {
    let applicant = &request.applicant;
    let job = &request.job;
    let style = &request.style;
    let length = style.length.guide();

    let full_name = or_placeholder(&applicant.full_name, NOT_SPECIFIED);

    let mut prompt = String::with_capacity(3072);

    // write! into a String cannot fail
    let _ = write!(
        prompt,
        "{ROLE_INSTRUCTION}\n\
         \n\
         APPLICANT PROFILE:\n\
         Name: {full_name}\n\
         Current Role: {current_role}\n\
         Years of Experience: {years}\n\
         Key Skills: {skills}\n\
         Key Achievements: {achievements}\n\
         \n\
         TARGET OPPORTUNITY:\n\
         Company: {company}\n\
         Position: {position}\n\
         Hiring Manager: {manager}\n\
         Job Description: {description}\n\
         Motivation/Interest: {motivation}\n\
         \n\
         LETTER TYPE: {letter_type}\n\
         \n\
         TONE: Write in a {tone} tone.\n\
         \n\
         LENGTH REQUIREMENT: {words} - The letter should be {length_description}\n\
         Structure: {structure}\n\
         \n",
        current_role = or_placeholder(&applicant.current_role, NOT_SPECIFIED),
        years = or_placeholder(&applicant.years_of_experience, NOT_SPECIFIED),
        skills = or_placeholder(&applicant.key_skills, NOT_SPECIFIED),
        achievements = or_placeholder(&applicant.achievements, NOT_SPECIFIED),
        company = or_placeholder(&job.company_name, NOT_PROVIDED),
        position = or_placeholder(&job.job_title, NOT_PROVIDED),
        manager = or_placeholder(&job.hiring_manager, NOT_PROVIDED),
        description = or_placeholder(&job.job_description, NOT_PROVIDED),
        motivation = or_placeholder(&job.motivation, NOT_PROVIDED),
        letter_type = style.template.context(),
        tone = style.tone.guide(),
        words = length.words,
        length_description = length.description,
        structure = length.structure,
    );

    let requirements = [
        format!(
            "Length: Aim for {} (approximately {} sentences per paragraph)",
            length.words, length.sentences_per_paragraph
        ),
        "Opening: Strong hook that shows genuine interest and relevant experience".to_string(),
        format!(
            "Body: Connect the candidate's specific skills and achievements to the job \
             requirements (provide {} clear examples)",
            length.example_count
        ),
        "Closing: Compelling call to action with enthusiasm".to_string(),
        format!("Salutation: {}", salutation(&job.hiring_manager)),
        format!("Sign-off: Sincerely, {full_name}"),
        "Style: Professional but conversational, show personality while maintaining \
         professionalism"
            .to_string(),
        "Content: Use specific examples and quantifiable achievements where possible".to_string(),
        "Relevance: Directly address how the candidate's background matches what the company \
         needs"
            .to_string(),
    ];

    prompt.push_str("REQUIREMENTS:\n");
    for (i, requirement) in requirements.iter().enumerate() {
        let _ = writeln!(prompt, "{}. {requirement}", i + 1);
    }

    let _ = write!(prompt, "\n{GROUNDING_DIRECTIVE}\n\n{OUTPUT_DIRECTIVE}");

    prompt
}
