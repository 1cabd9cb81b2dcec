//! Bag check history queries

use std::collections::BTreeMap;

use tracing::warn;

use seatcheck_domain::model::{BagCheck, BagCheckRecord};
use seatcheck_types::Result;

use crate::repository::Repositories;

/// A user's checks joined with airline and bag, newest first
pub fn check_history(repos: &Repositories, user_id: &str) -> Result<Vec<BagCheckRecord>> {
    join_checks(repos, repos.bag_checks.find_by_user(user_id)?)
}

/// Every recorded check across all users, newest first
pub fn all_check_history(repos: &Repositories) -> Result<Vec<BagCheckRecord>> {
    join_checks(repos, repos.bag_checks.find_all()?)
}

/// Checks whose airline no longer exists are skipped
fn join_checks(repos: &Repositories, checks: Vec<BagCheck>) -> Result<Vec<BagCheckRecord>> {
    let mut records = Vec::with_capacity(checks.len());
    for check in checks {
        let Some(airline) = repos.airlines.find_by_id(&check.airline_id)? else {
            warn!(bag_check_id = %check.id, "bag check references a missing airline");
            continue;
        };
        let bag = match check.bag_id.as_deref() {
            Some(bag_id) => repos.bags.find_by_id(bag_id)?,
            None => None,
        };
        records.push(BagCheckRecord { check, airline, bag });
    }
    Ok(records)
}

/// Aggregate counts over a set of checks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistorySummary {
    pub total: usize,
    pub fits: usize,
    pub does_not_fit: usize,
    /// Checks per airline IATA code
    pub by_airline: BTreeMap<String, usize>,
}

pub fn summarize(records: &[BagCheckRecord]) -> HistorySummary {
    let mut summary = HistorySummary {
        total: records.len(),
        ..Default::default()
    };
    for record in records {
        if record.check.fits_under_seat {
            summary.fits += 1;
        } else {
            summary.does_not_fit += 1;
        }
        *summary
            .by_airline
            .entry(record.airline.iata_code.clone())
            .or_insert(0) += 1;
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{check_bag, seed_airlines, BagCheckRequest};
    use crate::repository::open_repositories_at;
    use seatcheck_domain::model::Dimensions;
    use tempfile::tempdir;

    #[test]
    fn test_history_and_summary() {
        let dir = tempdir().unwrap();
        let repos = open_repositories_at(dir.path()).unwrap();
        seed_airlines(repos.airlines.as_ref()).unwrap();

        let user = Some("alice".to_string());
        for (code, length) in [("AA", 40.0), ("AA", 60.0), ("UA", 40.0)] {
            let dims = Dimensions::new(length, 20.0, 15.0).unwrap();
            check_bag(&repos, BagCheckRequest::new(code, dims).for_user(user.clone())).unwrap();
        }
        // anonymous, not recorded
        check_bag(&repos, BagCheckRequest::new("AA", Dimensions::new(1.0, 1.0, 1.0).unwrap())).unwrap();

        let records = check_history(&repos, "alice").unwrap();
        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.bag.is_none()));

        let summary = summarize(&records);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.fits, 2);
        assert_eq!(summary.does_not_fit, 1);
        assert_eq!(summary.by_airline.get("AA"), Some(&2));
        assert_eq!(summary.by_airline.get("UA"), Some(&1));

        assert!(check_history(&repos, "bob").unwrap().is_empty());
    }

    #[test]
    fn test_all_check_history_spans_users() {
        let dir = tempdir().unwrap();
        let repos = open_repositories_at(dir.path()).unwrap();
        seed_airlines(repos.airlines.as_ref()).unwrap();

        let dims = Dimensions::new(40.0, 20.0, 15.0).unwrap();
        for user in ["alice", "bob"] {
            check_bag(&repos, BagCheckRequest::new("DL", dims).for_user(Some(user.to_string()))).unwrap();
        }
        check_bag(&repos, BagCheckRequest::new("DL", dims)).unwrap();

        let records = all_check_history(&repos).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.airline.iata_code == "DL"));
        let mut users: Vec<_> = records.iter().filter_map(|r| r.check.user_id.clone()).collect();
        users.sort();
        assert_eq!(users, vec!["alice", "bob"]);
    }
}
