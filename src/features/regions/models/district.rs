use sqlx::FromRow;

use super::{Province, Regency, Region};

/// District model representing Indonesian districts (kecamatan)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct District {
    pub id: String,
    pub name: String,
    pub regency: Regency,
}

#[derive(Debug, FromRow)]
pub struct DistrictRow {
    pub id: String,
    pub name: String,
    pub regency_id: String,
    pub regency_name: String,
    pub province_id: String,
    pub province_name: String,
}

impl From<DistrictRow> for District {
    fn from(row: DistrictRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            regency: Regency {
                id: row.regency_id,
                name: row.regency_name,
                province: Province {
                    id: row.province_id,
                    name: row.province_name,
                },
            },
        }
    }
}

impl Region for District {
    type Row = DistrictRow;

    const ENTITY: &'static str = "district";
    const SELECT: &'static str = "SELECT d.id, d.name, \
         d.regency_id, r.name AS regency_name, \
         r.province_id, p.name AS province_name \
         FROM districts d \
         INNER JOIN regencies r ON r.id = d.regency_id \
         INNER JOIN provinces p ON p.id = r.province_id";
    const ID_COLUMN: &'static str = "d.id";
    const NAME_COLUMN: &'static str = "d.name";

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
