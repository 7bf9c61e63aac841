use std::borrow::Cow;

use validator::{Validate, ValidationError};

pub const MAX_RESUME_BYTES: u64 = 5 * 1024 * 1024;

pub const ALLOWED_RESUME_TYPES: [&str; 3] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

pub fn validate<T: Validate>(val: &T) -> Result<(), validator::ValidationErrors> {
    val.validate()
}

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// Digits, `+`, parentheses, `-` and whitespace only.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let ok = !phone.is_empty()
        && phone
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '(' | ')' | '-') || c.is_whitespace());
    if ok {
        Ok(())
    } else {
        Err(error("phone", "Use valid phone characters"))
    }
}

pub fn validate_skills_text(skills_text: &str) -> Result<(), ValidationError> {
    if split_skills(skills_text).is_empty() {
        Err(error("skills", "Enter at least one skill (comma-separated)"))
    } else {
        Ok(())
    }
}

pub fn validate_resume_type(file_type: &str) -> Result<(), ValidationError> {
    if ALLOWED_RESUME_TYPES.contains(&file_type) {
        Ok(())
    } else {
        Err(error("resume_type", "Only PDF, DOC, or DOCX allowed"))
    }
}

/// Comma-separated input to trimmed, non-blank skill tags, order kept.
pub fn split_skills(skills_text: &str) -> Vec<String> {
    skills_text
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_characters() {
        assert!(validate_phone("+233 (20) 123-4567").is_ok());
        assert!(validate_phone("0201234567").is_ok());
        assert!(validate_phone("020-CALL-ME").is_err());
        assert!(validate_phone("").is_err());
    }

    #[test]
    fn test_split_skills() {
        assert_eq!(split_skills(" React, ,TypeScript ,, CSS"), vec!["React", "TypeScript", "CSS"]);
        assert!(split_skills(" , ,").is_empty());
    }

    #[test]
    fn test_skills_text_needs_one_skill() {
        assert!(validate_skills_text("Rust").is_ok());
        let err = validate_skills_text(",,").unwrap_err();
        assert_eq!(err.code, "skills");
    }

    #[test]
    fn test_resume_types() {
        assert!(validate_resume_type("application/pdf").is_ok());
        assert!(validate_resume_type("image/png").is_err());
    }
}
