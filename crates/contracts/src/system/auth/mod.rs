use serde::{Deserialize, Serialize};

use crate::shared::validation::{require_email, require_text, ValidationError};

pub const MIN_PASSWORD_LEN: usize = 6;

/// Body of `POST /admin/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_email("email", "Email", &self.email)?;
        require_text("password", "Password", &self.password)?;
        Ok(())
    }
}

/// Body of `POST /admin/signup`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignupRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", "Name", &self.name)?;
        require_email("email", "Email", &self.email)?;
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::new(
                "password",
                format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
            ));
        }
        Ok(())
    }
}

/// `data` of a successful login/signup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub access_token: String,
    pub admin: AdminProfile,
}

/// `data` of `GET /admin/profile`, also cached under `adminProfile`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfile {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "admin".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_email_format() {
        let req = LoginRequest {
            email: "admin".into(),
            password: "secret".into(),
        };
        assert_eq!(req.validate().unwrap_err().field, "email");
    }

    #[test]
    fn test_signup_password_length() {
        let mut req = SignupRequest {
            name: "Mai".into(),
            email: "mai@shop.example".into(),
            password: "12345".into(),
        };
        assert_eq!(req.validate().unwrap_err().field, "password");
        req.password = "123456".into();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_session_wire_shape() {
        let json = r#"{"accessToken":"t0k","admin":{"_id":"a1","name":"Mai","email":"mai@shop.example"}}"#;
        let session: AuthSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.access_token, "t0k");
        assert_eq!(session.admin.role, "admin");
        assert_eq!(session.admin.phone, None);
    }
}
