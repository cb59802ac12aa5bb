//! Synchronous form checks run before any network call.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::error::PasswordRule;
use crate::net::types::{CareLevel, NewPlant, parse_iso_date};

pub const MIN_PASSWORD_LEN: usize = 6;

/// Check a sign-up password: an ASCII lowercase letter, an ASCII uppercase
/// letter, and at least six characters.
///
/// # Errors
///
/// Returns every violated rule, in a fixed order.
pub fn validate_password(password: &str) -> Result<(), Vec<PasswordRule>> {
    let mut violated = Vec::new();
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        violated.push(PasswordRule::MissingLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        violated.push(PasswordRule::MissingUppercase);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        violated.push(PasswordRule::TooShort);
    }
    if violated.is_empty() { Ok(()) } else { Err(violated) }
}

/// One line per violated rule, for the sign-up error notice.
pub fn password_error_message(rules: &[PasswordRule]) -> String {
    rules.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}

/// Raw plant form fields as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlantForm {
    pub image: String,
    pub plant_name: String,
    pub category: String,
    pub description: String,
    pub care_level: String,
    pub watering_frequency: String,
    pub last_watered_date: String,
    pub next_watering_date: String,
    pub health_status: String,
}

impl PlantForm {
    /// Prefill from an existing plant, for the update page.
    pub fn from_plant(plant: &NewPlant) -> Self {
        Self {
            image: plant.image.clone(),
            plant_name: plant.plant_name.clone(),
            category: plant.category.clone(),
            description: plant.description.clone(),
            care_level: plant.care_level.as_str().to_owned(),
            watering_frequency: plant.watering_frequency.clone(),
            last_watered_date: plant.last_watered_date.clone(),
            next_watering_date: plant.next_watering_date.clone(),
            health_status: plant.health_status.clone(),
        }
    }

    /// Validate and build the request body, stamping the owner.
    ///
    /// # Errors
    ///
    /// Returns the first user-facing problem found.
    pub fn to_new_plant(&self, owner_email: &str, owner_name: &str) -> Result<NewPlant, String> {
        let plant_name = self.plant_name.trim();
        if plant_name.is_empty() {
            return Err("Plant name is required.".to_owned());
        }
        let care_level = CareLevel::from(self.care_level.clone());
        if let CareLevel::Other(raw) = &care_level {
            return Err(format!("Unknown care level \"{raw}\"."));
        }
        let mut dates = [None, None];
        for (slot, (label, value)) in
            dates.iter_mut().zip([("Last watered", &self.last_watered_date), ("Next watering", &self.next_watering_date)])
        {
            if value.is_empty() {
                continue;
            }
            *slot = parse_iso_date(value);
            if slot.is_none() {
                return Err(format!("{label} date must be a real date as YYYY-MM-DD."));
            }
        }
        if let [Some(last), Some(next)] = dates {
            if next < last {
                return Err("Next watering date cannot be before the last watered date.".to_owned());
            }
        }

        Ok(NewPlant {
            image: self.image.trim().to_owned(),
            plant_name: plant_name.to_owned(),
            category: self.category.trim().to_owned(),
            description: self.description.trim().to_owned(),
            care_level,
            watering_frequency: self.watering_frequency.trim().to_owned(),
            last_watered_date: self.last_watered_date.clone(),
            next_watering_date: self.next_watering_date.clone(),
            health_status: self.health_status.trim().to_owned(),
            user_email: owner_email.to_owned(),
            user_name: owner_name.to_owned(),
        })
    }
}

/// Strict `YYYY-MM-DD` naming a day that exists.
pub fn is_iso_date(value: &str) -> bool {
    parse_iso_date(value).is_some()
}
