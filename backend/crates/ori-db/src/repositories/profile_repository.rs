use crate::{
    Document, DocumentStore, FieldValue, RepositoryError, SetOptions, StoreTimestamp,
    error::Result as RepositoryErrorResult, normalize_timestamp,
};

use ori_core::{UserProfile, UserType, split_display_name};

use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, warn};

pub const USERS_COLLECTION: &str = "users";

const UID: &str = "uid";
const EMAIL: &str = "email";
const FIRST_NAME: &str = "firstName";
const LAST_NAME: &str = "lastName";
const DISPLAY_NAME: &str = "displayName";
const COMPANY: &str = "company";
const ROLE: &str = "role";
const USER_TYPE: &str = "userType";
const USER_TYPES: &str = "userTypes";
const CREATED_AT: &str = "createdAt";
const LAST_LOGIN_AT: &str = "lastLoginAt";

/// Reads and writes profile documents in the `users` collection.
#[derive(Clone)]
pub struct ProfileRepository {
    store: Arc<dyn DocumentStore>,
}

impl ProfileRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Load the profile for `id`, normalizing both timestamps.
    pub async fn get(&self, id: &str) -> RepositoryErrorResult<Option<UserProfile>> {
        let document = self.store.get_document(USERS_COLLECTION, id).await?;

        document.map(|doc| decode_profile(id, &doc)).transpose()
    }

    /// Write a complete new profile document, replacing anything stored at its id.
    pub async fn create(&self, profile: &UserProfile) -> RepositoryErrorResult<()> {
        debug!("Creating profile document {}", profile.id);

        self.store
            .set_document(
                USERS_COLLECTION,
                &profile.id,
                encode_profile(profile),
                SetOptions::overwrite(),
            )
            .await?;

        Ok(())
    }

    /// Merge a new `lastLoginAt` into an existing profile. No other field is written.
    pub async fn touch_login(&self, id: &str, at: DateTime<Utc>) -> RepositoryErrorResult<()> {
        if self.store.get_document(USERS_COLLECTION, id).await?.is_none() {
            return Err(RepositoryError::not_found(id));
        }

        let mut fields = Document::new();
        fields.insert(
            LAST_LOGIN_AT.to_string(),
            StoreTimestamp::from_instant(at).into(),
        );

        self.store
            .set_document(USERS_COLLECTION, id, fields, SetOptions::merge())
            .await?;

        debug!("Recorded login for {id} at {at}");
        Ok(())
    }
}

fn encode_profile(profile: &UserProfile) -> Document {
    let mut doc = Document::new();
    doc.insert(UID.to_string(), profile.id.as_str().into());
    doc.insert(EMAIL.to_string(), profile.email.as_str().into());
    doc.insert(FIRST_NAME.to_string(), profile.first_name.as_str().into());
    doc.insert(LAST_NAME.to_string(), profile.last_name.as_str().into());
    if let Some(company) = &profile.company {
        doc.insert(COMPANY.to_string(), company.as_str().into());
    }
    if let Some(role) = &profile.role {
        doc.insert(ROLE.to_string(), role.as_str().into());
    }
    doc.insert(USER_TYPE.to_string(), profile.user_type.as_str().into());
    doc.insert(
        CREATED_AT.to_string(),
        StoreTimestamp::from_instant(profile.created_at).into(),
    );
    doc.insert(
        LAST_LOGIN_AT.to_string(),
        StoreTimestamp::from_instant(profile.last_login_at).into(),
    );
    doc
}

fn decode_profile(id: &str, doc: &Document) -> RepositoryErrorResult<UserProfile> {
    let text = |field| text_field(doc, field);

    let (derived_first, derived_last) = split_display_name(text(DISPLAY_NAME));
    let first_name = text(FIRST_NAME).map_or(derived_first, str::to_string);
    let last_name = text(LAST_NAME).map_or(derived_last, str::to_string);

    let user_type = match text(USER_TYPE) {
        Some(raw) => UserType::from_str(raw)
            .map_err(|e| RepositoryError::malformed(id, USER_TYPE, e.to_string()))?,
        None => legacy_user_type(doc),
    };

    let created_at = match doc.get(CREATED_AT) {
        Some(value) if !value.is_null() => normalize_timestamp(value).ok_or_else(|| {
            RepositoryError::malformed(id, CREATED_AT, format!("unrecognized value {value:?}"))
        })?,
        _ => return Err(RepositoryError::malformed(id, CREATED_AT, "is missing")),
    };

    let last_login_at = match doc.get(LAST_LOGIN_AT) {
        Some(value) if !value.is_null() => normalize_timestamp(value).ok_or_else(|| {
            RepositoryError::malformed(id, LAST_LOGIN_AT, format!("unrecognized value {value:?}"))
        })?,
        _ => created_at,
    };

    Ok(UserProfile {
        id: id.to_string(),
        email: text(EMAIL).unwrap_or_default().to_string(),
        first_name,
        last_name,
        company: text(COMPANY).map(str::to_string),
        role: text(ROLE).map(str::to_string),
        user_type,
        created_at,
        last_login_at,
    })
}

fn text_field<'a>(doc: &'a Document, field: &str) -> Option<&'a str> {
    doc.get(field).and_then(FieldValue::as_str)
}

/// Older documents carry a `userTypes` flag map instead of a single `userType`.
fn legacy_user_type(doc: &Document) -> UserType {
    let Some(flags) = doc.get(USER_TYPES).and_then(FieldValue::as_map) else {
        warn!("Profile document has no user type, defaulting to {}", UserType::default());
        return UserType::default();
    };

    UserType::ALL
        .into_iter()
        .find(|user_type| {
            flags
                .get(user_type.as_str())
                .and_then(FieldValue::as_bool)
                .unwrap_or(false)
        })
        .unwrap_or_default()
}
