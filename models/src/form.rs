//! Typed form payloads.
//!
//! Each struct is populated by looking up its named controls on a form and
//! is turned back into ordered `(name, value)` pairs for a form-encoded
//! body. Field contents are not validated here; the server decides.

use crate::ModelError;

use common::RedactedSecret;

/// Anything that can answer "what is the current value of control `name`".
pub trait FieldSource {
    fn field_value(&self, name: &str) -> Option<String>;
}

/// A form whose fields map one-to-one onto a POST body.
pub trait FormRequest: Sized {
    /// Element id of the form on the page.
    const FORM_ID: &'static str;

    /// Read every required control from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MissingField`] if a control is absent.
    fn read_from(source: &impl FieldSource) -> Result<Self, ModelError>;

    /// Body fields in declaration order.
    fn form_fields(&self) -> Vec<(&'static str, &str)>;
}

#[track_caller]
fn required(
    source: &impl FieldSource,
    form: &'static str,
    field: &'static str,
) -> Result<String, ModelError> {
    source
        .field_value(field)
        .ok_or_else(|| ModelError::missing_field(form, field))
}

pub const USERNAME_FIELD: &str = "username";
pub const PASSWORD_FIELD: &str = "password";
pub const EMAIL_FIELD: &str = "email";
pub const PREFERRED_CATEGORY_FIELD: &str = "preferredCategory";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: RedactedSecret,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: RedactedSecret::new(password),
        }
    }
}

impl FormRequest for Credentials {
    const FORM_ID: &'static str = "login-form";

    fn read_from(source: &impl FieldSource) -> Result<Self, ModelError> {
        Ok(Self {
            username: required(source, Self::FORM_ID, USERNAME_FIELD)?,
            password: required(source, Self::FORM_ID, PASSWORD_FIELD)?.into(),
        })
    }

    fn form_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            (USERNAME_FIELD, self.username.as_str()),
            (PASSWORD_FIELD, self.password.expose()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: RedactedSecret,
}

impl Registration {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: RedactedSecret::new(password),
        }
    }
}

impl FormRequest for Registration {
    const FORM_ID: &'static str = "register-form";

    fn read_from(source: &impl FieldSource) -> Result<Self, ModelError> {
        Ok(Self {
            username: required(source, Self::FORM_ID, USERNAME_FIELD)?,
            email: required(source, Self::FORM_ID, EMAIL_FIELD)?,
            password: required(source, Self::FORM_ID, PASSWORD_FIELD)?.into(),
        })
    }

    fn form_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            (USERNAME_FIELD, self.username.as_str()),
            (EMAIL_FIELD, self.email.as_str()),
            (PASSWORD_FIELD, self.password.expose()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsUpdate {
    pub preferred_category: String,
}

impl SettingsUpdate {
    pub fn new(preferred_category: impl Into<String>) -> Self {
        Self {
            preferred_category: preferred_category.into(),
        }
    }
}

impl FormRequest for SettingsUpdate {
    const FORM_ID: &'static str = "settings-form";

    fn read_from(source: &impl FieldSource) -> Result<Self, ModelError> {
        Ok(Self {
            preferred_category: required(source, Self::FORM_ID, PREFERRED_CATEGORY_FIELD)?,
        })
    }

    fn form_fields(&self) -> Vec<(&'static str, &str)> {
        vec![(PREFERRED_CATEGORY_FIELD, self.preferred_category.as_str())]
    }
}
