use serde::Deserialize;

/// Form payload for creating or editing a plant.
/// Field names match the HTML form inputs, not the stored document.
#[derive(Debug, Deserialize)]
pub struct PlantForm {
    pub plant_name: String,
    pub variety: String,
    pub photo: String,
    pub date_planted: String,
}

impl PlantForm {
    /// Rejects payloads whose required display name is blank. The other
    /// fields are free-form and may legitimately be empty.
    pub fn validate(&self) -> Result<(), String> {
        if self.plant_name.trim().is_empty() {
            return Err("The plant name cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Form payload for recording a harvest on the detail page.
/// The date input is named `date_planted` in the markup; it is stored as
/// the harvest date.
#[derive(Debug, Deserialize)]
pub struct HarvestForm {
    pub harvested_amount: String,
    pub date_planted: String,
}

impl HarvestForm {
    pub fn validate(&self) -> Result<(), String> {
        if self.harvested_amount.trim().is_empty() {
            return Err("The harvested amount cannot be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plant_form_accepts_filled_name() {
        let form = PlantForm {
            plant_name: "Basil".to_string(),
            variety: String::new(),
            photo: String::new(),
            date_planted: String::new(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn plant_form_rejects_whitespace_name() {
        let form = PlantForm {
            plant_name: "   ".to_string(),
            variety: "Genovese".to_string(),
            photo: "http://x/y.jpg".to_string(),
            date_planted: "2024-05-01".to_string(),
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn harvest_form_rejects_blank_amount() {
        let form = HarvestForm {
            harvested_amount: String::new(),
            date_planted: "2024-06-12".to_string(),
        };
        assert!(form.validate().is_err());
    }
}
