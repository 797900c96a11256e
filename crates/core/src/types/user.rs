//! User profile snapshot.

use serde::{Deserialize, Serialize};

use crate::types::{Email, Role, UserId};

/// Denormalized snapshot of the authenticated user.
///
/// Cached next to the credential purely to avoid a redundant round
/// trip on startup; the remote `/api/me` response always supersedes
/// it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// User's database ID.
    pub id: UserId,
    /// User's email address.
    pub email: Email,
    /// Display name.
    pub full_name: String,
    /// Account role.
    pub role: Role,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let json = r#"{"id":3,"email":"ana@example.com","fullName":"Ana Torres","role":"CUSTOMER"}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.id, UserId::new(3));
        assert_eq!(profile.email.as_str(), "ana@example.com");
        assert_eq!(profile.full_name, "Ana Torres");
        assert_eq!(profile.role, Role::Customer);
    }

    #[test]
    fn test_rejects_missing_fields() {
        // A snapshot without an email is not trusted.
        let json = r#"{"id":3,"fullName":"Ana Torres","role":"CUSTOMER"}"#;
        assert!(serde_json::from_str::<UserProfile>(json).is_err());
    }
}
