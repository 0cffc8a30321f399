//! MongoDB access helpers.
//!
//! Connection setup lives here together with the typed collection
//! accessors, so handler code never spells out collection names or
//! repeats identifier parsing.

use anyhow::Result;
use common::model::harvest::Harvest;
use common::model::plant::Plant;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use std::time::Duration;

use crate::error::AppError;

/// Collection holding one document per tracked plant.
pub const PLANTS: &str = "plants";
/// Collection holding one document per recorded harvest.
pub const HARVESTS: &str = "harvests";

/// Connects to MongoDB and pings the target database.
///
/// The ping makes an unreachable server a startup failure instead of a
/// surprise on the first request. Server selection is capped at ten
/// seconds so a bad URI does not hang the process indefinitely.
pub async fn connect(uri: &str, database: &str) -> Result<Database> {
    let mut options = ClientOptions::parse(uri).await?;
    options.server_selection_timeout = Some(Duration::from_secs(10));

    let client = Client::with_options(options)?;
    let db = client.database(database);
    db.run_command(doc! { "ping": 1 }).await?;

    Ok(db)
}

pub fn plants(db: &Database) -> Collection<Plant> {
    db.collection(PLANTS)
}

pub fn harvests(db: &Database) -> Collection<Harvest> {
    db.collection(HARVESTS)
}

/// Parses a plant id taken from a URL path segment.
pub fn parse_plant_id(raw: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(raw).map_err(|_| AppError::InvalidId(raw.to_string()))
}

/// Looks up a single plant by id. `Ok(None)` means the id is well formed
/// but no such document exists.
pub async fn find_plant(db: &Database, id: ObjectId) -> mongodb::error::Result<Option<Plant>> {
    plants(db).find_one(doc! { "_id": id }).await
}
