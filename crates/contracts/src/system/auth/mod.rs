use serde::{Deserialize, Serialize};

use crate::shared::validation::{FieldErrors, ValidationRules};

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `POST /auth/login` response. The token key is snake_case while the user
/// key is camelCase; that is the wire contract, not a typo.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default, rename = "loggedInUser")]
    pub logged_in_user: Option<UserInfo>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl UserInfo {
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

const USERNAME: ValidationRules = ValidationRules::email();
const PASSWORD: ValidationRules = ValidationRules::length(3, 20);

/// Login form schema: e-mail-shaped username, password of 3..=20 characters.
pub fn validate_login(username: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    USERNAME.check(&mut errors, "username", "Username", username);
    PASSWORD.check(&mut errors, "password", "Password", password);
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_schema_rejects_short_password_and_bad_username() {
        let errors = validate_login("not-an-email", "ab");
        assert_eq!(errors.len(), 2);
        assert!(errors.get("username").is_some());
        assert!(errors.get("password").is_some());
    }

    #[test]
    fn login_schema_accepts_the_bypass_pair() {
        assert!(validate_login("tungnt@aptech", "123456789").is_empty());
    }

    #[test]
    fn response_parses_with_and_without_user() {
        let resp: LoginResponse = serde_json::from_str(
            r#"{"access_token":"jwt","loggedInUser":{"id":1,"username":"tungnt@aptech"}}"#,
        )
        .unwrap();
        assert_eq!(resp.access_token, "jwt");
        assert_eq!(resp.logged_in_user.unwrap().display_name(), "tungnt@aptech");

        let resp: LoginResponse = serde_json::from_str(r#"{"access_token":"jwt"}"#).unwrap();
        assert!(resp.logged_in_user.is_none());
    }
}
