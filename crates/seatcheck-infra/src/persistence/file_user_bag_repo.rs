//! File-based implementation of UserBagRepository

use std::path::Path;

use chrono::Utc;
use uuid::Uuid;

use seatcheck_domain::model::{NewUserBag, UserBag};
use seatcheck_domain::repository::UserBagRepository;
use seatcheck_types::{Error, Result};

use super::json_table::JsonTable;

/// Saved bags stored in `user_bags.json`
pub struct FileUserBagRepository {
    table: JsonTable<UserBag>,
}

impl FileUserBagRepository {
    pub fn open(store_dir: &Path) -> Result<Self> {
        Ok(Self {
            table: JsonTable::open(store_dir, "user_bags.json")?,
        })
    }
}

impl UserBagRepository for FileUserBagRepository {
    fn find_by_user(&self, user_id: &str) -> std::result::Result<Vec<UserBag>, Error> {
        let mut bags: Vec<UserBag> = self.table.read(|rows| {
            rows.values()
                .filter(|ub| ub.user_id == user_id)
                .cloned()
                .collect()
        })?;
        bags.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(bags)
    }

    fn add(&self, user_bag: NewUserBag) -> std::result::Result<UserBag, Error> {
        if user_bag.user_id.trim().is_empty() || user_bag.bag_id.trim().is_empty() {
            return Err(Error::InvalidInput("user id and bag id are required".to_string()));
        }
        self.table.write(|rows| {
            let created = UserBag {
                id: Uuid::new_v4().to_string(),
                user_id: user_bag.user_id,
                bag_id: user_bag.bag_id,
                custom_name: user_bag.custom_name,
                created_at: Utc::now(),
            };
            rows.insert(created.id.clone(), created.clone());
            Ok(created)
        })
    }

    fn rename(
        &self,
        user_id: &str,
        user_bag_id: &str,
        custom_name: &str,
    ) -> std::result::Result<UserBag, Error> {
        let custom_name = custom_name.trim();
        if custom_name.is_empty() {
            return Err(Error::InvalidInput("Custom name is required".to_string()));
        }
        self.table.write(|rows| {
            let entry = rows
                .get_mut(user_bag_id)
                .filter(|ub| ub.user_id == user_id)
                .ok_or_else(|| Error::UserBagNotFound(user_bag_id.to_string()))?;
            entry.custom_name = Some(custom_name.to_string());
            Ok(entry.clone())
        })
    }

    fn remove(&self, user_id: &str, bag_id: &str) -> std::result::Result<bool, Error> {
        self.table.write(|rows| {
            let before = rows.len();
            rows.retain(|_, ub| !(ub.user_id == user_id && ub.bag_id == bag_id));
            Ok(rows.len() != before)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn new_user_bag(user: &str, bag: &str) -> NewUserBag {
        NewUserBag {
            user_id: user.to_string(),
            bag_id: bag.to_string(),
            custom_name: None,
        }
    }

    #[test]
    fn test_add_and_find_scoped_to_user() {
        let dir = tempdir().unwrap();
        let repo = FileUserBagRepository::open(dir.path()).unwrap();
        repo.add(new_user_bag("alice", "bag-1")).unwrap();
        repo.add(new_user_bag("alice", "bag-2")).unwrap();
        repo.add(new_user_bag("bob", "bag-1")).unwrap();

        assert_eq!(repo.find_by_user("alice").unwrap().len(), 2);
        assert_eq!(repo.find_by_user("bob").unwrap().len(), 1);
        assert!(repo.find_by_user("carol").unwrap().is_empty());
    }

    #[test]
    fn test_rename_requires_owner_and_name() {
        let dir = tempdir().unwrap();
        let repo = FileUserBagRepository::open(dir.path()).unwrap();
        let saved = repo.add(new_user_bag("alice", "bag-1")).unwrap();

        let renamed = repo.rename("alice", &saved.id, "  Weekend tote ").unwrap();
        assert_eq!(renamed.custom_name.as_deref(), Some("Weekend tote"));

        assert!(matches!(
            repo.rename("bob", &saved.id, "Mine now"),
            Err(Error::UserBagNotFound(_))
        ));
        assert!(matches!(
            repo.rename("alice", &saved.id, "   "),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_remove_by_bag_id() {
        let dir = tempdir().unwrap();
        let repo = FileUserBagRepository::open(dir.path()).unwrap();
        repo.add(new_user_bag("alice", "bag-1")).unwrap();
        repo.add(new_user_bag("bob", "bag-1")).unwrap();

        assert!(repo.remove("alice", "bag-1").unwrap());
        assert!(!repo.remove("alice", "bag-1").unwrap());
        assert_eq!(repo.find_by_user("bob").unwrap().len(), 1);
    }
}
