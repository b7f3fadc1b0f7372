use std::fmt;
use std::str::FromStr;

use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::FindOptions;
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

pub const COLLECTION: &str = "service_requests";

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_APPROVED: &str = "approved";
pub const STATUS_REJECTED: &str = "rejected";

/// Service-request document. Requester and caregiver identity fields are
/// denormalized copies taken at write time; there are no cross-collection
/// references to resolve at read time. Caregiver fields stay absent until
/// the request is approved or rejected.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: String,
    pub user_name: String,
    pub user_email: String,
    pub service_type: String,
    pub requirements: String,
    pub cost: f64,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caregiver_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caregiver_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caregiver_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<String>,
}

/// Store-assigned request identifier in its 24-char hex string form.
/// Keeps raw id strings from crossing the handler boundary unvalidated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestId(ObjectId);

impl RequestId {
    pub fn as_object_id(&self) -> ObjectId {
        self.0
    }
}

impl FromStr for RequestId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectId::parse_str(s)
            .map(RequestId)
            .map_err(|_| ModelError::Validation(format!("malformed request id: {s}")))
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

/// Fields written when a caregiver approves or rejects a request.
#[derive(Clone, Debug)]
pub struct Decision {
    pub status: String,
    pub caregiver_id: String,
    pub caregiver_name: String,
    pub caregiver_email: String,
    pub processed_at: String,
    pub updated_at: String,
}

pub fn collection(db: &Database) -> Collection<Model> {
    db.collection(COLLECTION)
}

pub async fn create(db: &Database, model: Model) -> Result<ObjectId, ModelError> {
    let result = collection(db)
        .insert_one(&model, None)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    result
        .inserted_id
        .as_object_id()
        .ok_or(ModelError::Unacknowledged)
}

/// All pending requests, most recently created first. No pagination.
pub async fn find_pending(db: &Database) -> Result<Vec<Model>, ModelError> {
    let options = FindOptions::builder()
        .sort(doc! { "createdAt": -1 })
        .build();
    let cursor = collection(db)
        .find(doc! { "status": STATUS_PENDING }, options)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    cursor
        .try_collect()
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}

/// Unconditionally write the decision onto the matching document. Returns
/// whether a document matched; a request that was already decided is
/// overwritten, caregiver fields included.
pub async fn apply_decision(
    db: &Database,
    id: &RequestId,
    decision: &Decision,
) -> Result<bool, ModelError> {
    let update = doc! {
        "$set": {
            "status": decision.status.as_str(),
            "caregiverId": decision.caregiver_id.as_str(),
            "caregiverName": decision.caregiver_name.as_str(),
            "caregiverEmail": decision.caregiver_email.as_str(),
            "processedAt": decision.processed_at.as_str(),
            "updatedAt": decision.updated_at.as_str(),
        }
    };
    let result = collection(db)
        .update_one(doc! { "_id": id.as_object_id() }, update, None)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(result.matched_count > 0)
}
