use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "access_token")]
    pub token: String,
}

/// Dashboard role carried in the token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Manager,
    Supervisor,
    Captain,
    Employee,
    /// Any role string this build does not know; grants nothing
    #[serde(other)]
    Unknown,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Supervisor => "supervisor",
            Role::Captain => "captain",
            Role::Employee => "employee",
            Role::Unknown => "unknown",
        }
    }

    /// Roles that can be assigned from forms
    pub fn options() -> &'static [&'static str] {
        &["admin", "manager", "supervisor", "captain", "employee"]
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payload of the access token (JWT claims)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserClaims {
    #[serde(alias = "sub")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub role: Role,
    /// Expiration, seconds since epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl UserClaims {
    pub fn is_expired(&self, now_ts: i64) -> bool {
        self.exp.map(|exp| exp <= now_ts).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_role_strings_decode_as_unknown() {
        let role: Role = serde_json::from_str(r#""auditor""#).unwrap();
        assert_eq!(role, Role::Unknown);
        let role: Role = serde_json::from_str(r#""captain""#).unwrap();
        assert_eq!(role, Role::Captain);
    }

    #[test]
    fn claims_accept_sub_as_id() {
        let claims: UserClaims =
            serde_json::from_str(r#"{"sub":"42","name":"Ann","role":"admin","exp":100}"#).unwrap();
        assert_eq!(claims.id, "42");
        assert_eq!(claims.email, "");
        assert!(claims.is_expired(100));
        assert!(!claims.is_expired(99));
    }

    #[test]
    fn claims_without_exp_never_expire() {
        let claims: UserClaims =
            serde_json::from_str(r#"{"id":"1","role":"employee"}"#).unwrap();
        assert!(!claims.is_expired(i64::MAX));
    }

    #[test]
    fn login_response_accepts_access_token_alias() {
        let resp: LoginResponse = serde_json::from_str(r#"{"access_token":"abc"}"#).unwrap();
        assert_eq!(resp.token, "abc");
    }
}
