
//! Members of the two houses of the UK parliament - MPs and Lords.

use serde::{Serialize, Deserialize};
use std::fmt;
pub use crate::parse_member_lists::{update_mps_page_cache, update_lords_page_cache, create_mps_csv, create_lords_csv};

/// A house of the UK parliament.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq)]
pub enum House {
    Commons,
    Lords,
}

// Provide Display & to_string() for House enum
impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Information about an MP, as shown on their card on the Commons listing pages.
/// Any field missing from the markup is an empty string rather than an error.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct MP {
    pub member_id: String,
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
    pub constituency: String,
    pub party: String,
}

/// Information about a Lord. `membership_type` is the peerage type shown on the
/// card (Life peer, Hereditary, Bishop). Missing fields are empty strings.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Lord {
    pub member_id: String,
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
    pub membership_type: String,
    pub party: String,
}
