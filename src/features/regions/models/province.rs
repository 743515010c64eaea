use sqlx::FromRow;

use super::Region;

/// Province model representing Indonesian provinces (provinsi)
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Province {
    pub id: String,
    pub name: String,
}

impl Region for Province {
    type Row = Province;

    const ENTITY: &'static str = "province";
    const SELECT: &'static str = "SELECT p.id, p.name FROM provinces p";
    const ID_COLUMN: &'static str = "p.id";
    const NAME_COLUMN: &'static str = "p.name";

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
