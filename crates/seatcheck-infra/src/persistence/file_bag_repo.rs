//! File-based implementation of BagRepository

use std::path::Path;

use chrono::Utc;
use uuid::Uuid;

use seatcheck_domain::model::{Bag, NewBag};
use seatcheck_domain::repository::BagRepository;
use seatcheck_types::{Error, Result};

use super::json_table::JsonTable;

/// Bag catalogue stored in `bags.json`
pub struct FileBagRepository {
    table: JsonTable<Bag>,
}

impl FileBagRepository {
    pub fn open(store_dir: &Path) -> Result<Self> {
        Ok(Self {
            table: JsonTable::open(store_dir, "bags.json")?,
        })
    }
}

impl BagRepository for FileBagRepository {
    fn find_all(&self) -> std::result::Result<Vec<Bag>, Error> {
        let mut bags = self.table.values()?;
        bags.sort_by(|a, b| {
            (&a.brand, &a.model, a.created_at).cmp(&(&b.brand, &b.model, b.created_at))
        });
        Ok(bags)
    }

    fn find_by_id(&self, id: &str) -> std::result::Result<Option<Bag>, Error> {
        self.table.get(id)
    }

    fn search_by_brand(&self, brand: &str) -> std::result::Result<Vec<Bag>, Error> {
        let brand = brand.trim().to_lowercase();
        let mut bags: Vec<Bag> = self.table.read(|rows| {
            rows.values()
                .filter(|b| b.brand.as_deref().is_some_and(|name| name.trim().to_lowercase() == brand))
                .cloned()
                .collect()
        })?;
        bags.sort_by(|a, b| a.model.cmp(&b.model));
        Ok(bags)
    }

    fn create(&self, bag: NewBag) -> std::result::Result<Bag, Error> {
        bag.validate()?;
        self.table.write(|rows| {
            let created = Bag::from_new(Uuid::new_v4().to_string(), bag, Utc::now());
            rows.insert(created.id.clone(), created.clone());
            Ok(created)
        })
    }
}
