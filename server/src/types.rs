use crate::models::{Ingredient, Recipe, RecordStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Full write shape for a recipe, shared by create and update. Every field
/// is required; update replaces the stored row wholesale with these values.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecipePayload {
    pub id: i32,
    pub name: String,
    pub prep_time_minutes: i32,
    pub servings: i32,
    pub category: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub status: RecordStatus,
}

/// Recipe as returned to clients. Same field set as the write shape, but
/// kept distinct so storage-side additions never leak into input
/// requirements.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeResponse {
    pub id: i32,
    pub name: String,
    pub prep_time_minutes: i32,
    pub servings: i32,
    pub category: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub status: RecordStatus,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        RecipeResponse {
            id: recipe.id,
            name: recipe.name,
            prep_time_minutes: recipe.prep_time_minutes,
            servings: recipe.servings,
            category: recipe.category,
            ingredients: recipe.ingredients.into_iter().flatten().collect(),
            instructions: recipe.instructions,
            status: recipe.status,
        }
    }
}

/// Full write shape for an ingredient, shared by create and update.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IngredientPayload {
    pub id: i32,
    pub name: String,
    pub unit: String,
    pub quantity: f64,
    pub status: RecordStatus,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct IngredientResponse {
    pub id: i32,
    pub name: String,
    pub unit: String,
    pub quantity: f64,
    pub status: RecordStatus,
}

impl From<Ingredient> for IngredientResponse {
    fn from(ingredient: Ingredient) -> Self {
        IngredientResponse {
            id: ingredient.id,
            name: ingredient.name,
            unit: ingredient.unit,
            quantity: ingredient.quantity,
            status: ingredient.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_payload_requires_every_field() {
        let missing_status = serde_json::json!({
            "id": 1,
            "name": "Tarta",
            "prep_time_minutes": 30,
            "servings": 4,
            "category": "Dessert",
            "ingredients": ["flour", "egg"],
            "instructions": "Mix and bake",
        });
        assert!(serde_json::from_value::<RecipePayload>(missing_status).is_err());

        let wrong_type = serde_json::json!({
            "id": "one",
            "name": "Tarta",
            "prep_time_minutes": 30,
            "servings": 4,
            "category": "Dessert",
            "ingredients": ["flour", "egg"],
            "instructions": "Mix and bake",
            "status": "active",
        });
        assert!(serde_json::from_value::<RecipePayload>(wrong_type).is_err());
    }

    #[test]
    fn test_recipe_payload_round_trip() {
        let payload: RecipePayload = serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "Tarta",
            "prep_time_minutes": 30,
            "servings": 4,
            "category": "Dessert",
            "ingredients": ["flour", "egg"],
            "instructions": "Mix and bake",
            "status": "active",
        }))
        .unwrap();
        assert_eq!(payload.id, 1);
        assert_eq!(payload.ingredients, vec!["flour", "egg"]);
        assert_eq!(payload.status, RecordStatus::Active);
    }

    #[test]
    fn test_recipe_response_flattens_ingredient_array() {
        let row = Recipe {
            id: 7,
            name: "Chocolate Cake".to_string(),
            prep_time_minutes: 45,
            servings: 8,
            category: "Dessert".to_string(),
            ingredients: vec![Some("flour".to_string()), None, Some("cocoa".to_string())],
            instructions: "Bake.".to_string(),
            status: RecordStatus::Active,
        };
        let response = RecipeResponse::from(row);
        assert_eq!(response.ingredients, vec!["flour", "cocoa"]);
    }

    #[test]
    fn test_ingredient_payload_requires_quantity_as_number() {
        let wrong_type = serde_json::json!({
            "id": 2,
            "name": "Sugar",
            "unit": "g",
            "quantity": "200",
            "status": "active",
        });
        assert!(serde_json::from_value::<IngredientPayload>(wrong_type).is_err());

        let ok = serde_json::json!({
            "id": 2,
            "name": "Sugar",
            "unit": "g",
            "quantity": 200.5,
            "status": "active",
        });
        let payload: IngredientPayload = serde_json::from_value(ok).unwrap();
        assert_eq!(payload.quantity, 200.5);
    }
}
