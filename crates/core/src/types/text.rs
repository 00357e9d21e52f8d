use std::fmt;

use crate::error::ValidationError;

/// Display name of a comment author, trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Author(String);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Body(String);

impl Author {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Body {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<&str> for Author {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyAuthor);
        }
        Ok(Author(trimmed.to_string()))
    }
}

impl TryFrom<&str> for Body {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyBody);
        }
        Ok(Body(trimmed.to_string()))
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validates both form fields, reporting the author first.
pub(crate) fn validate(author: &str, body: &str) -> Result<(Author, Body), ValidationError> {
    let author = Author::try_from(author)?;
    let body = Body::try_from(body)?;
    Ok((author, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let author = Author::try_from("  Ada \n").unwrap();
        assert_eq!(author.as_str(), "Ada");
        let body = Body::try_from("\thello world ").unwrap();
        assert_eq!(body.as_str(), "hello world");
    }

    #[test]
    fn keeps_inner_whitespace() {
        let body = Body::try_from(" line one\nline two ").unwrap();
        assert_eq!(body.as_str(), "line one\nline two");
    }

    #[test]
    fn rejects_blank_values() {
        assert_eq!(Author::try_from("   "), Err(ValidationError::EmptyAuthor));
        assert_eq!(Body::try_from(""), Err(ValidationError::EmptyBody));
    }

    #[test]
    fn validate_reports_author_before_body() {
        assert_eq!(validate("", ""), Err(ValidationError::EmptyAuthor));
        assert_eq!(validate("x", " "), Err(ValidationError::EmptyBody));
    }
}
