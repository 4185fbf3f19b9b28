use super::error::ProfileError;

/// Id that resolves to the fixed administrator fixture.
pub const ADMIN_SUBJECT_ID: u32 = 1;

/// Id reserved to force a not-found failure.
pub const MISSING_SUBJECT_ID: u32 = 999;

/// A user record as displayed by the profile view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl Subject {
    /// Builds the mock record for `id`.
    ///
    /// Id 1 is "John Doe" with the Admin role; every other id gets a
    /// generated "User {id}" record with the User role.
    pub fn fixture(id: u32) -> Self {
        if id == ADMIN_SUBJECT_ID {
            return Self {
                id,
                name: "John Doe".to_string(),
                email: "john.doe@example.com".to_string(),
                role: "Admin".to_string(),
            };
        }

        Self {
            id,
            name: format!("User {}", id),
            email: format!("user{}@example.com", id),
            role: "User".to_string(),
        }
    }
}

/// Parses the id typed into the form as a positive base-10 integer.
///
/// Surrounding whitespace is ignored. Empty input, anything non-numeric,
/// zero and values that overflow `u32` are rejected.
pub fn parse_subject_id(input: &str) -> Result<u32, ProfileError> {
    let trimmed = input.trim();
    match trimmed.parse::<u32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ProfileError::Validation {
            input: trimmed.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_fixture() {
        let subject = Subject::fixture(1);
        assert_eq!(
            subject,
            Subject {
                id: 1,
                name: "John Doe".to_string(),
                email: "john.doe@example.com".to_string(),
                role: "Admin".to_string(),
            }
        );
    }

    #[test]
    fn generated_fixture_uses_id() {
        for id in [2, 42, 1000, u32::MAX] {
            let subject = Subject::fixture(id);
            assert_eq!(subject.id, id);
            assert_eq!(subject.name, format!("User {}", id));
            assert_eq!(subject.email, format!("user{}@example.com", id));
            assert_eq!(subject.role, "User");
        }
    }

    #[test]
    fn parse_accepts_positive_integers() {
        assert_eq!(parse_subject_id("2"), Ok(2));
        assert_eq!(parse_subject_id(" 999 "), Ok(999));
        assert_eq!(parse_subject_id("007"), Ok(7));
    }

    #[test]
    fn parse_rejects_garbage() {
        for input in ["", "   ", "abc", "1.5", "-3", "0", "99999999999"] {
            let err = parse_subject_id(input).unwrap_err();
            assert!(
                matches!(err, ProfileError::Validation { .. }),
                "expected validation error for {:?}",
                input
            );
        }
    }
}
