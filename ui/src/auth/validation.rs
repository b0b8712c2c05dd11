use api::NewUser;

use super::AuthError;
use crate::core::digest::hash_password;
use crate::core::mobile::Mobile;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Raw signup inputs as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub mobile: String,
    pub password: String,
    pub confirm_password: String,
    pub state: String,
    pub district: String,
}

impl SignupForm {
    /// All failing checks, in the order the form shows them. Empty when valid.
    pub fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let mut require = |ok: bool, message: &str| {
            if !ok {
                errors.push(message.to_string());
            }
        };

        require(!self.first_name.trim().is_empty(), "First Name is required");
        require(!self.last_name.trim().is_empty(), "Last Name is required");
        require(!self.mobile.trim().is_empty(), "Mobile number is required");
        require(
            Mobile::parse(&self.mobile).is_ok(),
            "Please enter a valid 10-digit mobile number",
        );
        require(!self.password.is_empty(), "Password is required");
        require(
            self.password.chars().count() >= MIN_PASSWORD_LEN,
            "Password must be at least 8 characters long",
        );
        require(
            self.password == self.confirm_password,
            "Passwords do not match",
        );
        require(!self.state.is_empty(), "State is required");
        require(!self.district.is_empty(), "District is required");
        errors
    }

    /// Validate and build the insert payload with the password digested.
    pub fn validate(&self) -> Result<NewUser, AuthError> {
        let errors = self.errors();
        if !errors.is_empty() {
            return Err(AuthError::Validation(errors));
        }
        let mobile = Mobile::parse(&self.mobile)?;
        Ok(NewUser {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            mobile: mobile.as_str().to_string(),
            state: self.state.clone(),
            district: self.district.clone(),
            password_hash: hash_password(&self.password),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SignupForm {
        SignupForm {
            first_name: " Asha ".into(),
            last_name: "Patil".into(),
            mobile: "+919876543210".into(),
            password: "monsoon2013".into(),
            confirm_password: "monsoon2013".into(),
            state: "Maharashtra".into(),
            district: "Pune".into(),
        }
    }

    #[test]
    fn valid_form_builds_payload() {
        let user = filled().validate().unwrap();
        assert_eq!(user.first_name, "Asha");
        assert_eq!(user.mobile, "9876543210");
        assert_eq!(user.password_hash, hash_password("monsoon2013"));
        assert_eq!(user.password_hash.len(), 64);
    }

    #[test]
    fn empty_form_reports_everything() {
        let errors = SignupForm::default().errors();
        assert_eq!(
            errors,
            [
                "First Name is required",
                "Last Name is required",
                "Mobile number is required",
                "Please enter a valid 10-digit mobile number",
                "Password is required",
                "Password must be at least 8 characters long",
                "State is required",
                "District is required",
            ]
        );
    }

    #[test]
    fn short_and_mismatched_passwords() {
        let form = SignupForm {
            password: "short".into(),
            confirm_password: "shorter".into(),
            ..filled()
        };
        let Err(AuthError::Validation(errors)) = form.validate() else {
            panic!("expected validation failure");
        };
        assert_eq!(
            errors,
            [
                "Password must be at least 8 characters long",
                "Passwords do not match"
            ]
        );
    }

    #[test]
    fn passwords_are_not_trimmed() {
        let form = SignupForm {
            password: "  spaced  ".into(),
            confirm_password: "spaced".into(),
            ..filled()
        };
        assert_eq!(form.errors(), ["Passwords do not match"]);
    }

    #[test]
    fn nine_digit_mobile_rejected() {
        let form = SignupForm {
            mobile: "987654321".into(),
            ..filled()
        };
        assert_eq!(
            form.errors(),
            ["Please enter a valid 10-digit mobile number"]
        );
    }
}
