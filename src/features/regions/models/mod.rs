//! Storage-shaped region entities.
//!
//! Every non-root entity embeds a full copy of its parent, populated from a
//! single join over all ancestor levels.

mod district;
mod province;
mod regency;
mod village;

pub use district::District;
pub use province::Province;
pub use regency::Regency;
pub use village::Village;

use sqlx::{postgres::PgRow, FromRow};

/// A level of the administrative hierarchy together with the query that
/// loads it with its ancestor chain.
pub trait Region: Sized + Send + Sync + 'static {
    /// Flat row produced by [`Region::SELECT`]
    type Row: for<'r> FromRow<'r, PgRow> + Send + Unpin + Into<Self>;

    /// Singular name used in logs and response messages
    const ENTITY: &'static str;

    /// `SELECT ... FROM ... JOIN ...` without any `WHERE` clause
    const SELECT: &'static str;

    /// Qualified column holding the entity's own ID
    const ID_COLUMN: &'static str;

    /// Qualified column holding the entity's own name
    const NAME_COLUMN: &'static str;

    fn id(&self) -> &str;

    fn name(&self) -> &str;
}
