//! Template registry and page view models.
//!
//! Template sources are embedded into the binary at compile time and
//! compiled into a single `Tera` registry during startup. Handlers never
//! format HTML themselves; they fill a `tera::Context` with the view
//! structs below and render by template name.
//!
//! The view structs exist because the stored documents carry `ObjectId`
//! values, which do not serialize to the plain hex string the pages need
//! for `/plant/<id>` style links. Converting at the render boundary keeps
//! the storage model untouched.

use anyhow::{anyhow, Result};
use common::model::harvest::Harvest;
use common::model::plant::Plant;
use include_dir::{include_dir, Dir};
use serde::Serialize;
use tera::Tera;

static TEMPLATE_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Compiles every embedded template into one registry.
///
/// Template names are the file names under `backend/templates/`, so a
/// handler renders `"plants_list.html"`, `"detail.html"` and so on.
pub fn build_templates() -> Result<Tera> {
    let mut sources = Vec::new();
    for file in TEMPLATE_DIR.files() {
        let name = file.path().to_string_lossy().to_string();
        let body = file
            .contents_utf8()
            .ok_or_else(|| anyhow!("template '{}' is not valid UTF-8", name))?;
        sources.push((name, body.to_string()));
    }

    let mut templates = Tera::default();
    templates.add_raw_templates(sources)?;
    Ok(templates)
}

/// A plant as the pages see it: same display fields, id as hex text.
#[derive(Debug, Serialize)]
pub struct PlantView {
    pub id: String,
    pub name: String,
    pub variety: String,
    pub photo_url: String,
    pub date_planted: String,
}

impl From<Plant> for PlantView {
    fn from(plant: Plant) -> Self {
        PlantView {
            id: plant.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: plant.name,
            variety: plant.variety,
            photo_url: plant.photo_url,
            date_planted: plant.date_planted,
        }
    }
}

/// A harvest row on the detail page.
#[derive(Debug, Serialize)]
pub struct HarvestView {
    pub quantity: String,
    pub date: String,
}

impl From<Harvest> for HarvestView {
    fn from(harvest: Harvest) -> Self {
        HarvestView {
            quantity: harvest.quantity,
            date: harvest.date,
        }
    }
}
