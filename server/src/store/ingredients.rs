use crate::models::{Ingredient, NewIngredient, RecordStatus};
use crate::schema::ingredients;
use diesel::prelude::*;

use super::like_escape;

/// Atomic insert-if-absent. Returns `None` when a row with the same id
/// already exists; the existing row is left untouched.
pub fn create(
    conn: &mut PgConnection,
    ingredient: &NewIngredient<'_>,
) -> QueryResult<Option<Ingredient>> {
    diesel::insert_into(ingredients::table)
        .values(ingredient)
        .on_conflict(ingredients::id)
        .do_nothing()
        .returning(Ingredient::as_returning())
        .get_result(conn)
        .optional()
}

/// Direct lookup by id, regardless of status.
pub fn find(conn: &mut PgConnection, id: i32) -> QueryResult<Option<Ingredient>> {
    ingredients::table
        .find(id)
        .select(Ingredient::as_select())
        .first(conn)
        .optional()
}

pub fn list_active(conn: &mut PgConnection) -> QueryResult<Vec<Ingredient>> {
    ingredients::table
        .filter(ingredients::status.eq(RecordStatus::Active))
        .select(Ingredient::as_select())
        .load(conn)
}

/// Full-row replacement. Returns `None` when no row with `id` exists; no
/// row is created in that case.
pub fn update(
    conn: &mut PgConnection,
    id: i32,
    ingredient: &NewIngredient<'_>,
) -> QueryResult<Option<Ingredient>> {
    diesel::update(ingredients::table.find(id))
        .set(ingredient)
        .returning(Ingredient::as_returning())
        .get_result(conn)
        .optional()
}

/// Flips status to deleted. Returns the number of rows touched (0 when the
/// id is unknown).
pub fn soft_delete(conn: &mut PgConnection, id: i32) -> QueryResult<usize> {
    diesel::update(ingredients::table.find(id))
        .set(ingredients::status.eq(RecordStatus::Deleted))
        .execute(conn)
}

/// Active ingredients whose unit matches `unit` exactly, ignoring case.
pub fn by_unit(conn: &mut PgConnection, unit: &str) -> QueryResult<Vec<Ingredient>> {
    ingredients::table
        .filter(ingredients::status.eq(RecordStatus::Active))
        .filter(ingredients::unit.ilike(like_escape(unit)))
        .select(Ingredient::as_select())
        .load(conn)
}

/// Active ingredients whose name contains `name`, ignoring case.
pub fn search_by_name(conn: &mut PgConnection, name: &str) -> QueryResult<Vec<Ingredient>> {
    let pattern = format!("%{}%", like_escape(name));
    ingredients::table
        .filter(ingredients::status.eq(RecordStatus::Active))
        .filter(ingredients::name.ilike(pattern))
        .select(Ingredient::as_select())
        .load(conn)
}
