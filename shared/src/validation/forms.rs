//! Account and admin form validation

use serde::{Deserialize, Serialize};

use super::{Field, ValidationError, is_blank};
use crate::client::{LoginRequest, RegisterRequest};
use crate::models::TableCreate;

/// Admin "add table" form; numeric fields arrive as text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableFormDraft {
    pub table_number: String,
    pub name: String,
    pub capacity: String,
    pub description: String,
    pub image_url: Option<String>,
}

/// All four text fields are required; numbers must be positive integers.
pub fn validate_table_form(draft: &TableFormDraft) -> Result<TableCreate, ValidationError> {
    if [&draft.table_number, &draft.name, &draft.capacity, &draft.description]
        .iter()
        .any(|v| is_blank(v))
    {
        return Err(ValidationError::IncompleteTableForm);
    }

    let table_number = parse_positive(&draft.table_number).ok_or(ValidationError::TableNumberInvalid)?;
    let capacity = parse_positive(&draft.capacity).ok_or(ValidationError::CapacityInvalid)?;

    Ok(TableCreate {
        table_number,
        name: draft.name.trim().to_string(),
        capacity,
        description: draft.description.trim().to_string(),
        image_url: draft
            .image_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
    })
}

fn parse_positive(s: &str) -> Option<i32> {
    s.trim().parse::<i32>().ok().filter(|n| *n > 0)
}

/// Registration form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

pub fn validate_register_form(form: &RegisterForm) -> Result<RegisterRequest, ValidationError> {
    if is_blank(&form.username) {
        return Err(ValidationError::MissingField(Field::Username));
    }
    if is_blank(&form.email) {
        return Err(ValidationError::MissingField(Field::Email));
    }
    if form.password.is_empty() {
        return Err(ValidationError::MissingField(Field::Password));
    }
    if form.password != form.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(RegisterRequest {
        username: form.username.trim().to_string(),
        email: form.email.trim().to_string(),
        password: form.password.clone(),
    })
}

/// Login form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

pub fn validate_login_form(form: &LoginForm) -> Result<LoginRequest, ValidationError> {
    if is_blank(&form.email) {
        return Err(ValidationError::MissingField(Field::Email));
    }
    if form.password.is_empty() {
        return Err(ValidationError::MissingField(Field::Password));
    }
    Ok(LoginRequest {
        email: form.email.trim().to_string(),
        password: form.password.clone(),
    })
}
