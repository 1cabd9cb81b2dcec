//! Saved bag use cases, scoped to an identified user

use tracing::{debug, warn};

use seatcheck_domain::model::{NewUserBag, UserBag, UserBagWithBag};
use seatcheck_types::{Error, Result};

use crate::repository::Repositories;

/// A user's saved bags joined with the catalogue, newest first
pub fn list_user_bags(repos: &Repositories, user_id: &str) -> Result<Vec<UserBagWithBag>> {
    let mut joined = Vec::new();
    for user_bag in repos.user_bags.find_by_user(user_id)? {
        match repos.bags.find_by_id(&user_bag.bag_id)? {
            Some(bag) => joined.push(UserBagWithBag { user_bag, bag }),
            None => warn!(user_bag_id = %user_bag.id, bag_id = %user_bag.bag_id, "saved bag references a missing bag"),
        }
    }
    Ok(joined)
}

/// Save a catalogue bag to the user's list
pub fn save_user_bag(
    repos: &Repositories,
    user_id: &str,
    bag_id: &str,
    custom_name: Option<String>,
) -> Result<UserBag> {
    if repos.bags.find_by_id(bag_id)?.is_none() {
        return Err(Error::BagNotFound(bag_id.to_string()));
    }
    let custom_name = custom_name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty());
    repos.user_bags.add(NewUserBag {
        user_id: user_id.to_string(),
        bag_id: bag_id.to_string(),
        custom_name,
    })
}

pub fn rename_user_bag(
    repos: &Repositories,
    user_id: &str,
    user_bag_id: &str,
    custom_name: &str,
) -> Result<UserBag> {
    repos.user_bags.rename(user_id, user_bag_id, custom_name)
}

/// Remove a bag from the user's list; removing an absent bag is not an error
pub fn remove_user_bag(repos: &Repositories, user_id: &str, bag_id: &str) -> Result<()> {
    let removed = repos.user_bags.remove(user_id, bag_id)?;
    debug!(user_id, bag_id, removed, "removed saved bag");
    Ok(())
}
