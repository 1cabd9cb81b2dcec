//! Domain model types

pub mod airline;
pub mod bag;
pub mod bag_check;
pub mod dimensions;
pub mod user_bag;

pub use airline::{normalize_iata_code, Airline, AirlineLimits, NewAirline};
pub use bag::{Bag, NewBag};
pub use bag_check::{BagCheck, BagCheckRecord, NewBagCheck};
pub use dimensions::{Axis, Dimensions};
pub use user_bag::{NewUserBag, UserBag, UserBagWithBag};
