use api::UserStore;
use dioxus::logger::tracing;
use time::OffsetDateTime;

use super::{AuthError, SignupForm};
use crate::core::digest::verify_password;
use crate::core::mobile::Mobile;
use crate::core::session::{self, Session};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub mobile: String,
    /// Compared exactly as typed.
    pub password: String,
}

impl LoginForm {
    fn check(&self) -> Result<Mobile, AuthError> {
        if self.mobile.trim().is_empty() || self.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        Ok(Mobile::parse(&self.mobile)?)
    }
}

pub struct AuthService<S> {
    store: S,
}

impl<S: UserStore> AuthService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Verify credentials, persist the session and stamp `last_login`.
    pub async fn login(&self, form: &LoginForm) -> Result<Session, AuthError> {
        let mobile = form.check()?;
        let user = self
            .store
            .find_by_mobile(mobile.as_str())
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !verify_password(&form.password, &user.password_hash) {
            tracing::info!(user_id = user.id, "login rejected: password mismatch");
            return Err(AuthError::InvalidPassword);
        }

        let now = OffsetDateTime::now_utc();
        let session = Session::from_user(&user, now);
        session::save(&session)?;
        tracing::info!(user_id = user.id, "login succeeded");

        if let Err(err) = self
            .store
            .touch_last_login(mobile.as_str(), &session.login_time)
            .await
        {
            tracing::warn!("couldn't update last_login: {err}");
        }
        Ok(session)
    }

    /// Validate, reject known mobiles, then insert. The store's own uniqueness
    /// check still applies if another signup lands in between.
    pub async fn signup(&self, form: &SignupForm) -> Result<(), AuthError> {
        let user = form.validate()?;
        if self.store.mobile_exists(&user.mobile).await? {
            tracing::info!("signup rejected: mobile already registered");
            return Err(AuthError::DuplicateAccount);
        }
        self.store.insert(user).await?;
        tracing::info!("signup succeeded");
        Ok(())
    }

    pub fn logout(&self) -> Result<(), AuthError> {
        session::clear()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{MemoryUserStore, UserStore};
    use futures::executor::block_on;

    fn signup_form(mobile: &str) -> SignupForm {
        SignupForm {
            first_name: "Meena".into(),
            last_name: "Devi".into(),
            mobile: mobile.into(),
            password: "kharif-rabi".into(),
            confirm_password: "kharif-rabi".into(),
            state: "Bihar".into(),
            district: "Patna".into(),
        }
    }

    fn login_form(mobile: &str, password: &str) -> LoginForm {
        LoginForm {
            mobile: mobile.into(),
            password: password.into(),
        }
    }

    #[test]
    fn second_signup_with_same_mobile_is_rejected() {
        let service = AuthService::new(MemoryUserStore::default());
        block_on(service.signup(&signup_form("9999999999"))).unwrap();
        let second = block_on(service.signup(&signup_form("9999999999")));
        assert_eq!(second, Err(AuthError::DuplicateAccount));
        assert_eq!(service.store().len(), 1);
    }

    #[test]
    fn insert_race_still_maps_to_duplicate() {
        let store = MemoryUserStore::default();
        let service = AuthService::new(store.clone());
        let user = signup_form("9999999999").validate().unwrap();
        // Another client inserts after our existence check would have passed.
        block_on(store.insert(user.clone())).unwrap();
        let err = AuthError::from(block_on(store.insert(user)).unwrap_err());
        assert_eq!(err, AuthError::DuplicateAccount);
        assert_eq!(service.store().len(), 1);
    }

    #[test]
    fn login_persists_session_and_stamps_last_login() {
        let service = AuthService::new(MemoryUserStore::default());
        block_on(service.signup(&signup_form("9876543210"))).unwrap();

        let session = block_on(service.login(&login_form("+919876543210", "kharif-rabi"))).unwrap();
        assert_eq!(session.mobile, "9876543210");
        assert_eq!(session.display_name(), "Meena Devi");
        assert_eq!(session::load(), Some(session.clone()));

        let row = block_on(service.store().find_by_mobile("9876543210"))
            .unwrap()
            .unwrap();
        assert_eq!(row.last_login.as_deref(), Some(session.login_time.as_str()));

        service.logout().unwrap();
        assert!(session::load().is_none());
    }

    #[test]
    fn login_failures_are_distinguished() {
        let service = AuthService::new(MemoryUserStore::default());
        block_on(service.signup(&signup_form("9876543210"))).unwrap();

        assert_eq!(
            block_on(service.login(&login_form("", "x"))),
            Err(AuthError::MissingCredentials)
        );
        assert_eq!(
            block_on(service.login(&login_form("98765", "x"))),
            Err(AuthError::InvalidMobile)
        );
        assert_eq!(
            block_on(service.login(&login_form("9000000000", "kharif-rabi"))),
            Err(AuthError::UserNotFound)
        );
        assert_eq!(
            block_on(service.login(&login_form("9876543210", " kharif-rabi"))),
            Err(AuthError::InvalidPassword)
        );
    }

    #[test]
    fn error_messages_match_the_forms() {
        assert_eq!(
            AuthError::UserNotFound.to_string(),
            "User not found. Please check your mobile number or sign up."
        );
        assert_eq!(
            AuthError::Validation(vec!["a".into(), "b".into()]).messages(),
            ["a", "b"]
        );
    }
}
