//! Rendering of sparse updates
//!
//! Turns a [`Patch`] into one parameterized `UPDATE ... WHERE id = $n`.
//! Column names come from the domain's own patch builders; every value is
//! bound.

use reflink_core::value_objects::{Patch, PatchValue};
use sqlx::{Postgres, QueryBuilder};

/// Build `UPDATE {table} SET ... WHERE id = $n`, or `None` for an empty patch
pub fn build_update(
    table: &'static str,
    patch: &Patch,
    id: i64,
) -> Option<QueryBuilder<'static, Postgres>> {
    if patch.is_empty() {
        return None;
    }

    let mut builder = QueryBuilder::new(format!("UPDATE {table} SET "));
    {
        let mut assignments = builder.separated(", ");
        for (column, value) in patch.iter() {
            assignments.push(column);
            assignments.push_unseparated(" = ");
            match value {
                PatchValue::Text(text) => assignments.push_bind_unseparated(text.clone()),
                PatchValue::BigInt(number) => assignments.push_bind_unseparated(*number),
            };
        }
    }
    builder.push(" WHERE id = ");
    builder.push_bind(id);

    Some(builder)
}
