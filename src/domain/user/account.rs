//! User aggregate with the extended personality profile fields.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthenticatedUser, Timestamp, UserId, ValidationError};
use crate::domain::mbti::PersonalityType;

/// Maximum length of the free-text personality label.
pub const PERSONALITY_LABEL_MAX_LEN: usize = 50;

/// Column limits of the identity fields copied from the token issuer.
pub const USERNAME_MAX_LEN: usize = 150;
pub const NAME_MAX_LEN: usize = 150;
pub const EMAIL_MAX_LEN: usize = 254;

/// Shown when a user has neither an MBTI result nor a personality label.
pub const NOT_SET_LABEL: &str = "Not Set";

/// An application user.
///
/// Identity comes from the token issuer; the personality fields are owned
/// here. `mbti_type` holds the last assessment result, `personality_type` a
/// free-text label that assessments also overwrite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub personality_type: Option<String>,
    pub mbti_type: Option<PersonalityType>,
    pub date_joined: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    /// Creates the record for a first-time authenticated user.
    ///
    /// Issuer claims longer than the column limits are cut to fit.
    pub fn provision(auth: &AuthenticatedUser) -> Self {
        let now = Timestamp::now();
        let (first_name, last_name) = split_name(auth.display_name.as_deref());
        Self {
            id: auth.id.clone(),
            username: truncate_chars(auth.display_name_or_email(), USERNAME_MAX_LEN),
            email: truncate_chars(&auth.email, EMAIL_MAX_LEN),
            first_name: truncate_chars(&first_name, NAME_MAX_LEN),
            last_name: truncate_chars(&last_name, NAME_MAX_LEN),
            personality_type: None,
            mbti_type: None,
            date_joined: now,
            updated_at: now,
        }
    }

    /// Stores an assessment result in both personality fields.
    pub fn record_mbti_result(&mut self, result: PersonalityType) {
        self.mbti_type = Some(result);
        self.personality_type = Some(result.code());
        self.updated_at = Timestamp::now();
    }

    /// Sets or clears the free-text personality label.
    pub fn set_personality_label(&mut self, label: Option<String>) -> Result<(), ValidationError> {
        let label = label.map(|l| l.trim().to_string()).filter(|l| !l.is_empty());
        if let Some(ref l) = label {
            validate_personality_label(l)?;
        }
        self.personality_type = label;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Type shown on the dashboard: MBTI result, then label, then "Not Set".
    pub fn displayed_type(&self) -> String {
        self.mbti_type
            .map(|t| t.code())
            .or_else(|| self.personality_type.clone())
            .unwrap_or_else(|| NOT_SET_LABEL.to_string())
    }

    /// Full name when known, otherwise the username.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }

    /// True once the user has completed an assessment.
    pub fn has_assessment(&self) -> bool {
        self.mbti_type.is_some()
    }
}

/// Checks the length limit of the free-text personality label.
pub fn validate_personality_label(label: &str) -> Result<(), ValidationError> {
    let len = label.chars().count();
    if len > PERSONALITY_LABEL_MAX_LEN {
        return Err(ValidationError::out_of_range(
            "personality_type",
            0,
            PERSONALITY_LABEL_MAX_LEN as i32,
            len as i32,
        ));
    }
    Ok(())
}

fn truncate_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

fn split_name(display_name: Option<&str>) -> (String, String) {
    match display_name.map(str::trim) {
        Some(name) if name.contains(' ') => {
            let (first, last) = name.split_once(' ').unwrap_or((name, ""));
            (first.to_string(), last.trim().to_string())
        }
        Some(name) => (name.to_string(), String::new()),
        None => (String::new(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth_user(display_name: Option<&str>) -> AuthenticatedUser {
        AuthenticatedUser::new(
            UserId::new("user-123").unwrap(),
            "ada@example.com",
            display_name.map(str::to_string),
            true,
        )
    }

    #[test]
    fn provision_copies_identity_and_splits_name() {
        let user = User::provision(&auth_user(Some("Ada Lovelace")));

        assert_eq!(user.id.as_str(), "user-123");
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.username, "Ada Lovelace");
        assert_eq!(user.first_name, "Ada");
        assert_eq!(user.last_name, "Lovelace");
        assert!(user.personality_type.is_none());
        assert!(user.mbti_type.is_none());
    }

    #[test]
    fn provision_without_name_uses_email() {
        let user = User::provision(&auth_user(None));

        assert_eq!(user.username, "ada@example.com");
        assert_eq!(user.display_name(), "ada@example.com");
    }

    #[test]
    fn provision_cuts_oversized_claims_to_column_limits() {
        let long_name = format!("{} {}", "Ä".repeat(200), "b".repeat(200));
        let long_email = format!("{}@example.com", "x".repeat(300));
        let auth = AuthenticatedUser::new(
            UserId::new("user-123").unwrap(),
            long_email.as_str(),
            Some(long_name),
            true,
        );

        let user = User::provision(&auth);

        assert_eq!(user.username.chars().count(), USERNAME_MAX_LEN);
        assert_eq!(user.email.chars().count(), EMAIL_MAX_LEN);
        assert_eq!(user.first_name, "Ä".repeat(NAME_MAX_LEN));
        assert_eq!(user.last_name, "b".repeat(NAME_MAX_LEN));
    }

    #[test]
    fn displayed_type_defaults_to_not_set() {
        let user = User::provision(&auth_user(None));
        assert_eq!(user.displayed_type(), "Not Set");
        assert!(!user.has_assessment());
    }

    #[test]
    fn displayed_type_falls_back_to_label() {
        let mut user = User::provision(&auth_user(None));
        user.set_personality_label(Some("Curious optimist".to_string()))
            .unwrap();

        assert_eq!(user.displayed_type(), "Curious optimist");
    }

    #[test]
    fn record_mbti_result_sets_both_fields() {
        let mut user = User::provision(&auth_user(None));
        let before = user.updated_at;
        let result: PersonalityType = "ENFJ".parse().unwrap();

        user.record_mbti_result(result);

        assert_eq!(user.mbti_type, Some(result));
        assert_eq!(user.personality_type.as_deref(), Some("ENFJ"));
        assert_eq!(user.displayed_type(), "ENFJ");
        assert!(user.updated_at >= before);
    }

    #[test]
    fn mbti_result_wins_over_label() {
        let mut user = User::provision(&auth_user(None));
        user.record_mbti_result("ISTP".parse().unwrap());
        user.set_personality_label(Some("Builder".to_string())).unwrap();

        assert_eq!(user.displayed_type(), "ISTP");
    }

    #[test]
    fn personality_label_length_is_limited() {
        let mut user = User::provision(&auth_user(None));

        assert!(user.set_personality_label(Some("x".repeat(50))).is_ok());
        assert!(user.set_personality_label(Some("x".repeat(51))).is_err());
    }

    #[test]
    fn blank_personality_label_clears_field() {
        let mut user = User::provision(&auth_user(None));
        user.set_personality_label(Some("Label".to_string())).unwrap();
        user.set_personality_label(Some("   ".to_string())).unwrap();

        assert!(user.personality_type.is_none());
    }
}
