//! File-based implementation of BagCheckRepository

use std::path::Path;

use chrono::Utc;
use uuid::Uuid;

use seatcheck_domain::model::{BagCheck, NewBagCheck};
use seatcheck_domain::repository::BagCheckRepository;
use seatcheck_types::{Error, Result};

use super::json_table::JsonTable;

/// Check audit records stored in `bag_checks.json`
pub struct FileBagCheckRepository {
    table: JsonTable<BagCheck>,
}

impl FileBagCheckRepository {
    pub fn open(store_dir: &Path) -> Result<Self> {
        Ok(Self {
            table: JsonTable::open(store_dir, "bag_checks.json")?,
        })
    }

    fn newest_first(mut checks: Vec<BagCheck>) -> Vec<BagCheck> {
        checks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        checks
    }
}

impl BagCheckRepository for FileBagCheckRepository {
    fn create(&self, check: NewBagCheck) -> std::result::Result<BagCheck, Error> {
        check.dimensions.validate()?;
        self.table.write(|rows| {
            let created = BagCheck::from_new(Uuid::new_v4().to_string(), check, Utc::now());
            rows.insert(created.id.clone(), created.clone());
            Ok(created)
        })
    }

    fn find_by_user(&self, user_id: &str) -> std::result::Result<Vec<BagCheck>, Error> {
        let checks: Vec<BagCheck> = self.table.read(|rows| {
            rows.values()
                .filter(|c| c.user_id.as_deref() == Some(user_id))
                .cloned()
                .collect()
        })?;
        Ok(Self::newest_first(checks))
    }

    fn find_all(&self) -> std::result::Result<Vec<BagCheck>, Error> {
        Ok(Self::newest_first(self.table.values()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatcheck_domain::model::Dimensions;
    use tempfile::tempdir;

    fn check(user: Option<&str>, fits: bool) -> NewBagCheck {
        NewBagCheck {
            user_id: user.map(str::to_string),
            bag_id: None,
            airline_id: "airline-1".to_string(),
            flight_number: Some("AA100".to_string()),
            dimensions: Dimensions::new(40.0, 30.0, 20.0).unwrap(),
            is_pet_carrier: false,
            fits_under_seat: fits,
        }
    }

    #[test]
    fn test_create_and_find_by_user() {
        let dir = tempdir().unwrap();
        let repo = FileBagCheckRepository::open(dir.path()).unwrap();
        repo.create(check(Some("alice"), true)).unwrap();
        repo.create(check(Some("alice"), false)).unwrap();
        repo.create(check(None, true)).unwrap();

        let alice = repo.find_by_user("alice").unwrap();
        assert_eq!(alice.len(), 2);
        assert!(alice[0].created_at >= alice[1].created_at);
        assert_eq!(repo.find_all().unwrap().len(), 3);
    }

    #[test]
    fn test_records_survive_reopen() {
        let dir = tempdir().unwrap();
        {
            let repo = FileBagCheckRepository::open(dir.path()).unwrap();
            repo.create(check(Some("alice"), true)).unwrap();
        }
        let repo = FileBagCheckRepository::open(dir.path()).unwrap();
        let stored = repo.find_by_user("alice").unwrap();
        assert_eq!(stored.len(), 1);
        assert!(stored[0].fits_under_seat);
        assert_eq!(stored[0].flight_number.as_deref(), Some("AA100"));
    }
}
