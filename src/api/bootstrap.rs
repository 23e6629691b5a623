use uuid::Uuid;
use crate::api::models::domain::{ Difficulty, Ingredient, Recipe, UnitOfMeasure };

pub fn default_units_of_measure() -> Vec<UnitOfMeasure> {
    vec![
        UnitOfMeasure::new("each", "Each"),
        UnitOfMeasure::new("teaspoon", "Teaspoon"),
        UnitOfMeasure::new("tablespoon", "Tablespoon"),
        UnitOfMeasure::new("cup", "Cup"),
        UnitOfMeasure::new("pinch", "Pinch"),
        UnitOfMeasure::new("ounce", "Ounce"),
        UnitOfMeasure::new("pint", "Pint"),
        UnitOfMeasure::new("dash", "Dash")
    ]
}

/// Sample recipes used when no recipe documents exist yet. Ingredients whose
/// unit is not among `units_of_measure` are skipped.
pub fn default_recipes(units_of_measure: &[UnitOfMeasure]) -> Vec<Recipe> {
    let mut guacamole = Recipe::new(Uuid::new_v4().to_string());
    guacamole.description = "Perfect Guacamole".to_string();
    guacamole.prep_time = 10;
    guacamole.cook_time = 1;
    guacamole.servings = 4;
    guacamole.source = "Simply Recipes".to_string();
    guacamole.url = "https://www.simplyrecipes.com/recipes/perfect_guacamole/".to_string();
    guacamole.difficulty = Difficulty::Easy;
    guacamole.directions = "1 Cut avocado, remove flesh.\n2 Mash with a fork.\n3 Add salt, lime juice, and the rest.\n4 Cover with plastic and chill to store.".to_string();
    guacamole.notes = "Be careful handling chiles if using.".to_string();
    add_ingredients(&mut guacamole, units_of_measure, &[
        ("ripe avocados", 2.0, "each"),
        ("Kosher salt", 0.5, "teaspoon"),
        ("fresh lime juice or lemon juice", 2.0, "tablespoon"),
        ("minced red onion or thinly sliced green onion", 2.0, "tablespoon"),
        ("serrano chiles, stems and seeds removed, minced", 2.0, "each"),
        ("cilantro", 2.0, "tablespoon"),
        ("freshly grated black pepper", 2.0, "dash"),
        ("ripe tomato, seeds and pulp removed, chopped", 0.5, "each")
    ]);

    let mut tacos = Recipe::new(Uuid::new_v4().to_string());
    tacos.description = "Spicy Grilled Chicken Taco".to_string();
    tacos.prep_time = 20;
    tacos.cook_time = 9;
    tacos.servings = 4;
    tacos.source = "Simply Recipes".to_string();
    tacos.url = "https://www.simplyrecipes.com/recipes/spicy_grilled_chicken_tacos/".to_string();
    tacos.difficulty = Difficulty::Moderate;
    tacos.directions = "1 Prepare a gas or charcoal grill for medium-high, direct heat.\n2 Make the marinade and coat the chicken.\n3 Grill the chicken.\n4 Warm the tortillas.\n5 Assemble the tacos.".to_string();
    tacos.notes = "We have a family motto and it is this: Everything goes better in a tortilla.".to_string();
    add_ingredients(&mut tacos, units_of_measure, &[
        ("Ancho Chili Powder", 2.0, "tablespoon"),
        ("Dried Oregano", 1.0, "teaspoon"),
        ("Dried Cumin", 1.0, "teaspoon"),
        ("Sugar", 1.0, "teaspoon"),
        ("Salt", 0.5, "teaspoon"),
        ("Clove of Garlic, Chopped", 1.0, "each"),
        ("finely grated orange zest", 1.0, "tablespoon"),
        ("fresh-squeezed orange juice", 3.0, "tablespoon"),
        ("Olive Oil", 2.0, "tablespoon"),
        ("boneless chicken thighs", 4.0, "each"),
        ("small corn tortillas", 8.0, "each"),
        ("packed baby arugula", 3.0, "cup"),
        ("medium ripe avocados, sliced", 2.0, "each")
    ]);

    vec![guacamole, tacos]
}

fn add_ingredients(recipe: &mut Recipe, units_of_measure: &[UnitOfMeasure], ingredients: &[(&str, f64, &str)]) {
    for (description, amount, uom_id) in ingredients {
        match units_of_measure.iter().find(|unit| unit.id == *uom_id) {
            Some(uom) => {
                recipe.add_ingredient(Ingredient::new(Uuid::new_v4().to_string(), *description, *amount, uom.clone()));
            },
            None => log::warn!("Skipping bootstrap ingredient \"{}\": unknown unit of measure \"{}\"", description, uom_id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_recipes_reference_default_units() {
        let units_of_measure = default_units_of_measure();

        let recipes = default_recipes(&units_of_measure);

        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].ingredients().len(), 8);
        assert_eq!(recipes[1].ingredients().len(), 13);
        for ingredient in recipes.iter().flat_map(|recipe| recipe.ingredients()) {
            assert!(units_of_measure.contains(&ingredient.uom));
        }
    }

    #[test]
    fn ingredients_with_unknown_units_are_skipped() {
        let recipes = default_recipes(&[UnitOfMeasure::new("each", "Each")]);

        assert!(recipes[0].ingredients().iter().all(|ingredient| ingredient.uom.id == "each"));
        assert_eq!(recipes[0].ingredients().len(), 3);
    }
}
