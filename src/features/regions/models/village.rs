use sqlx::FromRow;

use super::{District, Province, Regency, Region};

/// Village model representing Indonesian villages (kelurahan/desa)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Village {
    pub id: String,
    pub name: String,
    pub district: District,
}

#[derive(Debug, FromRow)]
pub struct VillageRow {
    pub id: String,
    pub name: String,
    pub district_id: String,
    pub district_name: String,
    pub regency_id: String,
    pub regency_name: String,
    pub province_id: String,
    pub province_name: String,
}

impl From<VillageRow> for Village {
    fn from(row: VillageRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            district: District {
                id: row.district_id,
                name: row.district_name,
                regency: Regency {
                    id: row.regency_id,
                    name: row.regency_name,
                    province: Province {
                        id: row.province_id,
                        name: row.province_name,
                    },
                },
            },
        }
    }
}

impl Village {
    /// Qualified column holding the parent district's ID
    pub const DISTRICT_ID_COLUMN: &'static str = "v.district_id";

    /// Qualified column holding the parent district's name
    pub const DISTRICT_NAME_COLUMN: &'static str = "d.name";
}

impl Region for Village {
    type Row = VillageRow;

    const ENTITY: &'static str = "village";
    const SELECT: &'static str = "SELECT v.id, v.name, \
         v.district_id, d.name AS district_name, \
         d.regency_id, r.name AS regency_name, \
         r.province_id, p.name AS province_name \
         FROM villages v \
         INNER JOIN districts d ON d.id = v.district_id \
         INNER JOIN regencies r ON r.id = d.regency_id \
         INNER JOIN provinces p ON p.id = r.province_id";
    const ID_COLUMN: &'static str = "v.id";
    const NAME_COLUMN: &'static str = "v.name";

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
