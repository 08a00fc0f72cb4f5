use crate::models::{NewRecipe, Recipe, RecordStatus};
use crate::schema::recipes;
use diesel::prelude::*;

use super::like_escape;

/// Atomic insert-if-absent. Returns `None` when a row with the same id
/// already exists; the existing row is left untouched.
pub fn create(conn: &mut PgConnection, recipe: &NewRecipe<'_>) -> QueryResult<Option<Recipe>> {
    diesel::insert_into(recipes::table)
        .values(recipe)
        .on_conflict(recipes::id)
        .do_nothing()
        .returning(Recipe::as_returning())
        .get_result(conn)
        .optional()
}

/// Direct lookup by id, regardless of status.
pub fn find(conn: &mut PgConnection, id: i32) -> QueryResult<Option<Recipe>> {
    recipes::table
        .find(id)
        .select(Recipe::as_select())
        .first(conn)
        .optional()
}

pub fn list_active(conn: &mut PgConnection) -> QueryResult<Vec<Recipe>> {
    recipes::table
        .filter(recipes::status.eq(RecordStatus::Active))
        .select(Recipe::as_select())
        .load(conn)
}

/// Full-row replacement. Returns `None` when no row with `id` exists; no
/// row is created in that case.
pub fn update(
    conn: &mut PgConnection,
    id: i32,
    recipe: &NewRecipe<'_>,
) -> QueryResult<Option<Recipe>> {
    diesel::update(recipes::table.find(id))
        .set(recipe)
        .returning(Recipe::as_returning())
        .get_result(conn)
        .optional()
}

/// Flips status to deleted. Returns the number of rows touched (0 when the
/// id is unknown).
pub fn soft_delete(conn: &mut PgConnection, id: i32) -> QueryResult<usize> {
    diesel::update(recipes::table.find(id))
        .set(recipes::status.eq(RecordStatus::Deleted))
        .execute(conn)
}

/// Active recipes whose category matches `category` exactly, ignoring case.
pub fn by_category(conn: &mut PgConnection, category: &str) -> QueryResult<Vec<Recipe>> {
    recipes::table
        .filter(recipes::status.eq(RecordStatus::Active))
        .filter(recipes::category.ilike(like_escape(category)))
        .select(Recipe::as_select())
        .load(conn)
}

/// Active recipes whose name contains `name`, ignoring case.
pub fn search_by_name(conn: &mut PgConnection, name: &str) -> QueryResult<Vec<Recipe>> {
    let pattern = format!("%{}%", like_escape(name));
    recipes::table
        .filter(recipes::status.eq(RecordStatus::Active))
        .filter(recipes::name.ilike(pattern))
        .select(Recipe::as_select())
        .load(conn)
}
