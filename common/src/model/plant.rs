use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// One tracked garden plant, stored in the `plants` collection.
///
/// `id` is `None` until the document has been inserted; the database
/// generates the `_id` and it never changes afterwards. The date is kept
/// as free-form text, exactly as the user typed it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plant {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub variety: String,
    pub photo_url: String,
    pub date_planted: String,
}
