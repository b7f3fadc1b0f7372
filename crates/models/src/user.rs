use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

pub const COLLECTION: &str = "users";

/// Account document. The password is stored exactly as supplied; this
/// service does no hashing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Model {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub password: String,
    pub dob: String,
    pub role: String,
}

pub fn collection(db: &Database) -> Collection<Model> {
    db.collection(COLLECTION)
}

pub async fn find_by_email(db: &Database, email: &str) -> Result<Option<Model>, ModelError> {
    collection(db)
        .find_one(doc! { "email": email }, None)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}

/// Insert a new account and return the store-assigned id.
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
