//! Person (subscriber) records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::format_date;

/// A registered person. The identity document is the unique key.
///
/// `vip_level` is derived from subscription spend and recomputed on demand
/// by the ledger's update pass; it is not part of the person's identity and
/// always starts at zero for freshly parsed records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub document: String,
    pub name: String,
    pub surname: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub postal_code: String,
    pub birthday: NaiveDate,
    pub vip_level: u32,
}

impl std::fmt::Display for Person {
    /// Wire rendering of the eight identity fields, `;`-separated.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{};{};{};{};{};{};{};{}",
            self.document,
            self.name,
            self.surname,
            self.phone,
            self.email,
            self.address,
            self.postal_code,
            format_date(self.birthday),
        )
    }
}
