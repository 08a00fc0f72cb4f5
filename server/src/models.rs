use diesel::deserialize::{self, FromSql, FromSqlRow};
use diesel::expression::AsExpression;
use diesel::pg::{Pg, PgValue};
use diesel::prelude::*;
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Text;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Lifecycle state carried by every row. Soft deletes flip this to
/// `Deleted`; rows are never physically removed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsExpression, FromSqlRow, utoipa::ToSchema,
)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Active,
    Deleted,
}

impl RecordStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RecordStatus::Active => "active",
            RecordStatus::Deleted => "deleted",
        }
    }
}

impl FromSql<Text, Pg> for RecordStatus {
    fn from_sql(value: PgValue<'_>) -> deserialize::Result<Self> {
        match <String as FromSql<Text, Pg>>::from_sql(value)?.as_str() {
            "active" => Ok(RecordStatus::Active),
            "deleted" => Ok(RecordStatus::Deleted),
            other => Err(format!("unrecognized record status: {other}").into()),
        }
    }
}

impl ToSql<Text, Pg> for RecordStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Recipe {
    pub id: i32,
    pub name: String,
    pub prep_time_minutes: i32,
    pub servings: i32,
    pub category: String,
    pub ingredients: Vec<Option<String>>,
    pub instructions: String,
    pub status: RecordStatus,
}

/// Insert row for `recipes`. Doubles as the full-replacement changeset for
/// updates; AsChangeset skips the primary key, so the path id stays
/// authoritative.
#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::recipes)]
pub struct NewRecipe<'a> {
    pub id: i32,
    pub name: &'a str,
    pub prep_time_minutes: i32,
    pub servings: i32,
    pub category: &'a str,
    pub ingredients: &'a [Option<String>],
    pub instructions: &'a str,
    pub status: RecordStatus,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::ingredients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Ingredient {
    pub id: i32,
    pub name: String,
    pub unit: String,
    pub quantity: f64,
    pub status: RecordStatus,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::ingredients)]
pub struct NewIngredient<'a> {
    pub id: i32,
    pub name: &'a str,
    pub unit: &'a str,
    pub quantity: f64,
    pub status: RecordStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&RecordStatus::Active).unwrap(),
            "\"active\""
        );
        assert_eq!(
            serde_json::to_string(&RecordStatus::Deleted).unwrap(),
            "\"deleted\""
        );
    }

    #[test]
    fn test_status_accepts_only_known_values() {
        let active: RecordStatus = serde_json::from_str("\"active\"").unwrap();
        assert_eq!(active, RecordStatus::Active);
        let deleted: RecordStatus = serde_json::from_str("\"deleted\"").unwrap();
        assert_eq!(deleted, RecordStatus::Deleted);

        assert!(serde_json::from_str::<RecordStatus>("\"archived\"").is_err());
        assert!(serde_json::from_str::<RecordStatus>("\"Active\"").is_err());
    }

    #[test]
    fn test_status_as_str_matches_wire_form() {
        assert_eq!(RecordStatus::Active.as_str(), "active");
        assert_eq!(RecordStatus::Deleted.as_str(), "deleted");
    }
}
