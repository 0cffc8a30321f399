use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// One harvest event, stored in the `harvests` collection.
///
/// `plant_id` references the `_id` of the plant the harvest was taken
/// from. Harvest documents are append-only: no handler edits or removes
/// them once written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Harvest {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub quantity: String,
    pub date: String,
    pub plant_id: ObjectId,
}
