//! File-based implementation of AirlineRepository

use std::path::Path;

use chrono::Utc;
use uuid::Uuid;

use seatcheck_domain::model::{normalize_iata_code, Airline, NewAirline};
use seatcheck_domain::repository::AirlineRepository;
use seatcheck_types::{Error, Result, StoreError};

use super::json_table::JsonTable;

/// Airlines stored in `airlines.json`, keyed by id
pub struct FileAirlineRepository {
    table: JsonTable<Airline>,
}

impl FileAirlineRepository {
    pub fn open(store_dir: &Path) -> Result<Self> {
        Ok(Self {
            table: JsonTable::open(store_dir, "airlines.json")?,
        })
    }

    /// Number of stored airlines
    pub fn count(&self) -> Result<usize> {
        self.table.read(|rows| rows.len())
    }
}

impl AirlineRepository for FileAirlineRepository {
    fn find_all(&self) -> std::result::Result<Vec<Airline>, Error> {
        let mut airlines = self.table.values()?;
        airlines.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(airlines)
    }

    fn find_by_iata_code(&self, iata_code: &str) -> std::result::Result<Option<Airline>, Error> {
        let code = normalize_iata_code(iata_code);
        self.table
            .read(|rows| rows.values().find(|a| a.iata_code == code).cloned())
    }

    fn find_by_id(&self, id: &str) -> std::result::Result<Option<Airline>, Error> {
        self.table.get(id)
    }

    fn create(&self, airline: NewAirline) -> std::result::Result<Airline, Error> {
        airline.validate()?;
        let code = normalize_iata_code(&airline.iata_code);
        self.table.write(|rows| {
            if rows.values().any(|a| a.iata_code == code) {
                return Err(StoreError::Duplicate(format!("airline {}", code)).into());
            }
            let created = Airline::from_new(Uuid::new_v4().to_string(), airline, Utc::now());
            rows.insert(created.id.clone(), created.clone());
            Ok(created)
        })
    }

    fn update(&self, id: &str, airline: NewAirline) -> std::result::Result<Airline, Error> {
        airline.validate()?;
        let code = normalize_iata_code(&airline.iata_code);
        self.table.write(|rows| {
            if rows.values().any(|a| a.iata_code == code && a.id != id) {
                return Err(StoreError::Duplicate(format!("airline {}", code)).into());
            }
            let existing = rows
                .get_mut(id)
                .ok_or_else(|| Error::AirlineNotFound(id.to_string()))?;
            existing.apply(airline, Utc::now());
            Ok(existing.clone())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatcheck_domain::model::Dimensions;
    use tempfile::tempdir;

    fn united() -> NewAirline {
        NewAirline::new("United Airlines", "UA")
            .with_personal_item(Dimensions::new(43.18, 25.40, 22.86).unwrap())
    }

    #[test]
    fn test_create_and_lookup_case_insensitive() {
        let dir = tempdir().unwrap();
        let repo = FileAirlineRepository::open(dir.path()).unwrap();
        let created = repo.create(united()).unwrap();

        let found = repo.find_by_iata_code("ua").unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(repo.find_by_id(&created.id).unwrap().unwrap().name, "United Airlines");
        assert!(repo.find_by_iata_code("ZZ").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_code_rejected() {
        let dir = tempdir().unwrap();
        let repo = FileAirlineRepository::open(dir.path()).unwrap();
        repo.create(united()).unwrap();
        let err = repo.create(NewAirline::new("Other", "ua")).unwrap_err();
        assert!(matches!(err, Error::Store(StoreError::Duplicate(_))));
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_update_and_reload() {
        let dir = tempdir().unwrap();
        let id = {
            let repo = FileAirlineRepository::open(dir.path()).unwrap();
            let created = repo.create(united()).unwrap();
            let mut changed = united();
            changed.pet_carrier_allowed = false;
            repo.update(&created.id, changed).unwrap();
            created.id
        };

        let repo = FileAirlineRepository::open(dir.path()).unwrap();
        let airline = repo.find_by_id(&id).unwrap().unwrap();
        assert!(!airline.pet_carrier_allowed);
        assert!(matches!(
            repo.update("missing", united()),
            Err(Error::AirlineNotFound(_))
        ));
    }

    #[test]
    fn test_find_all_sorted_by_name() {
        let dir = tempdir().unwrap();
        let repo = FileAirlineRepository::open(dir.path()).unwrap();
        repo.create(united()).unwrap();
        repo.create(NewAirline::new("Alaska Airlines", "AS")).unwrap();
        let names: Vec<_> = repo.find_all().unwrap().into_iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["Alaska Airlines", "United Airlines"]);
    }

    #[test]
    fn test_invalid_airline_rejected() {
        let dir = tempdir().unwrap();
        let repo = FileAirlineRepository::open(dir.path()).unwrap();
        let mut bad = united();
        bad.max_personal_item_width_cm = Some(-3.0);
        assert!(repo.create(bad).is_err());
    }

    #[test]
    fn test_create_retry_after_failed_save() {
        let dir = tempdir().unwrap();
        let repo = FileAirlineRepository::open(dir.path()).unwrap();
        let blocker = dir.path().join("airlines.json.tmp");
        std::fs::create_dir(&blocker).unwrap();

        assert!(repo.create(united()).is_err());
        assert!(repo.find_by_iata_code("UA").unwrap().is_none());

        std::fs::remove_dir(&blocker).unwrap();
        let created = repo.create(united()).unwrap();
        let reopened = FileAirlineRepository::open(dir.path()).unwrap();
        assert_eq!(reopened.find_by_iata_code("UA").unwrap().unwrap().id, created.id);
    }
}
