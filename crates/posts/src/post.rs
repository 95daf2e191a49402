use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use sampleapi_core::validation::{has_min_chars, is_present};
use sampleapi_core::{CREATED_RECORD_ID, Entity, RecordId, RuleSet, Validate, ValidationErrors, ViolationKind};

/// Post as exposed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: RecordId,
    pub user_id: RecordId,
    pub title: String,
    pub body: String,
}

impl Post {
    pub fn new(
        id: RecordId,
        user_id: RecordId,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id,
            user_id,
            title: title.into(),
            body: body.into(),
        }
    }
}

impl Entity for Post {
    const RESOURCE: &'static str = "post";
    const COLLECTION: &'static str = "posts";

    fn id(&self) -> RecordId {
        self.id
    }
}

/// Body of `POST /posts`.
///
/// Absent fields decode as `0` / `""` and are then rejected by validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostRequest {
    #[serde(alias = "UserId")]
    pub user_id: RecordId,
    #[serde(alias = "Title")]
    pub title: String,
    #[serde(alias = "Body")]
    pub body: String,
}

impl PostRequest {
    pub fn new(user_id: RecordId, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            user_id,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Echo this request as a freshly created post.
    pub fn into_created(self) -> Post {
        Post {
            id: CREATED_RECORD_ID,
            user_id: self.user_id,
            title: self.title,
            body: self.body,
        }
    }
}

static POST_RULES: LazyLock<RuleSet<PostRequest>> = LazyLock::new(|| {
    RuleSet::<PostRequest>::new()
        .rule(
            "userId",
            ViolationKind::OutOfRange,
            "userId must be greater than 0",
            |r| r.user_id > 0,
        )
        .rule("title", ViolationKind::Required, "title is required", |r| {
            is_present(&r.title)
        })
        .rule(
            "title",
            ViolationKind::TooShort,
            "title must be at least 3 characters",
            |r| has_min_chars(&r.title, 3),
        )
        .rule("body", ViolationKind::Required, "body is required", |r| {
            is_present(&r.body)
        })
});

impl Validate for PostRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        POST_RULES.validate(self)
    }
}
