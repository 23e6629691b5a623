use serde::Serialize;
use crate::api::models::commands::{ non_blank, IngredientCommand };
use crate::api::models::domain::Difficulty;

const DESCRIPTION_MIN_LENGTH: usize = 3;
const DESCRIPTION_MAX_LENGTH: usize = 255;
const MINUTES_MIN: u32 = 1;
const MINUTES_MAX: u32 = 999;
const SERVINGS_MIN: u32 = 1;
const SERVINGS_MAX: u32 = 100;

#[derive(FromForm, Serialize, Clone, Debug, Default, PartialEq)]
pub struct RecipeCommand {
    pub id: Option<String>,
    pub description: String,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
    #[field(default = String::new())]
    pub source: String,
    #[field(default = String::new())]
    pub url: String,
    pub directions: String,
    #[field(default = Difficulty::Easy)]
    pub difficulty: Difficulty,
    #[field(default = String::new())]
    pub notes: String,
    #[field(default = None)]
    pub image_url: Option<String>,
    #[field(default = Vec::new())]
    pub ingredients: Vec<IngredientCommand>
}

impl RecipeCommand {
    pub fn normalized_id(&self) -> Option<&str> {
        non_blank(self.id.as_deref())
    }

    /// Field messages for everything the recipe form got wrong, empty when the
    /// command can be saved.
    pub fn validation_errors(&self) -> Vec<String> {
        let mut errors = vec![];
        let description_length = self.description.trim().chars().count();
        if description_length < DESCRIPTION_MIN_LENGTH || description_length > DESCRIPTION_MAX_LENGTH {
            errors.push(format!("Description must be between {} and {} characters", DESCRIPTION_MIN_LENGTH, DESCRIPTION_MAX_LENGTH));
        }
        if self.prep_time < MINUTES_MIN || self.prep_time > MINUTES_MAX {
            errors.push(format!("Prep time must be between {} and {} minutes", MINUTES_MIN, MINUTES_MAX));
        }
        if self.cook_time < MINUTES_MIN || self.cook_time > MINUTES_MAX {
            errors.push(format!("Cook time must be between {} and {} minutes", MINUTES_MIN, MINUTES_MAX));
        }
        if self.servings < SERVINGS_MIN || self.servings > SERVINGS_MAX {
            errors.push(format!("Servings must be between {} and {}", SERVINGS_MIN, SERVINGS_MAX));
        }
        if self.directions.trim().is_empty() {
            errors.push("Directions must not be blank".to_string());
        }
        let url = self.url.trim();
        if !url.is_empty() && !(url.starts_with("http://") || url.starts_with("https://")) {
            errors.push("Url must start with http:// or https://".to_string());
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_command() -> RecipeCommand {
        RecipeCommand {
            description: "Perfect Guacamole".to_string(),
            prep_time: 10,
            cook_time: 1,
            servings: 4,
            directions: "Mash the avocados".to_string(),
            url: "https://www.simplyrecipes.com/recipes/perfect_guacamole/".to_string(),
            ..RecipeCommand::default()
        }
    }

    #[test]
    fn valid_command_has_no_errors() {
        assert!(valid_command().validation_errors().is_empty());
    }

    #[test]
    fn reports_every_broken_field() {
        let command = RecipeCommand {
            description: "ab".to_string(),
            prep_time: 0,
            cook_time: 1000,
            servings: 101,
            directions: " ".to_string(),
            url: "ftp://example.com".to_string(),
            ..valid_command()
        };

        assert_eq!(command.validation_errors().len(), 6);
    }

    #[test]
    fn empty_url_is_allowed() {
        let command = RecipeCommand { url: String::new(), ..valid_command() };
        assert!(command.validation_errors().is_empty());
    }
}
