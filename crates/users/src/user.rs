use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use sampleapi_core::validation::{has_min_chars, is_email_shaped, is_present};
use sampleapi_core::{CREATED_RECORD_ID, Entity, RecordId, RuleSet, Validate, ValidationErrors, ViolationKind};

/// User as exposed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: RecordId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

impl Entity for User {
    const RESOURCE: &'static str = "user";
    const COLLECTION: &'static str = "users";

    fn id(&self) -> RecordId {
        self.id
    }
}

/// Body of `POST /users` and `PUT /users/{id}`.
///
/// Absent fields decode as empty strings so that `{}` fails validation on
/// every field instead of failing to decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserRequest {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Email")]
    pub email: String,
}

impl UserRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Echo this request as a freshly created user.
    pub fn into_created(self) -> User {
        self.into_user(CREATED_RECORD_ID)
    }

    pub fn into_user(self, id: RecordId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
        }
    }
}

static USER_RULES: LazyLock<RuleSet<UserRequest>> = LazyLock::new(|| {
    RuleSet::<UserRequest>::new()
        .rule("name", ViolationKind::Required, "name is required", |r| {
            is_present(&r.name)
        })
        .rule(
            "name",
            ViolationKind::TooShort,
            "name must be at least 2 characters",
            |r| has_min_chars(&r.name, 2),
        )
        .rule("email", ViolationKind::Required, "email is required", |r| {
            is_present(&r.email)
        })
        .rule(
            "email",
            ViolationKind::InvalidFormat,
            "email must be a valid email address",
            |r| is_email_shaped(&r.email),
        )
});

impl Validate for UserRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        USER_RULES.validate(self)
    }
}
