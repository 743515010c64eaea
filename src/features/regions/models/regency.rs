use sqlx::FromRow;

use super::{Province, Region};

/// Regency model representing Indonesian regencies/cities (kabupaten/kota)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regency {
    pub id: String,
    pub name: String,
    pub province: Province,
}

#[derive(Debug, FromRow)]
pub struct RegencyRow {
    pub id: String,
    pub name: String,
    pub province_id: String,
    pub province_name: String,
}

impl From<RegencyRow> for Regency {
    fn from(row: RegencyRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            province: Province {
                id: row.province_id,
                name: row.province_name,
            },
        }
    }
}

impl Region for Regency {
    type Row = RegencyRow;

    const ENTITY: &'static str = "regency";
    const SELECT: &'static str = "SELECT r.id, r.name, r.province_id, p.name AS province_name \
         FROM regencies r \
         INNER JOIN provinces p ON p.id = r.province_id";
    const ID_COLUMN: &'static str = "r.id";
    const NAME_COLUMN: &'static str = "r.name";

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
