//! Customer identity lookup.

use crate::error::Result;
use crate::types::{Customer, CustomerId};
use std::fs;
use std::path::{Path, PathBuf};

/// Customer existence check by opaque customer ID.
pub trait IdentityService {
    /// Look up a customer, returning `None` if the ID is unknown.
    fn find_customer_by_id(&self, customer_id: &CustomerId) -> Result<Option<Customer>>;
}

/// Identity lookup backed by a flat roster file.
///
/// One customer ID per line; surrounding whitespace is trimmed and
/// blank lines are ignored. Each lookup re-reads the file.
pub struct FileIdentityService {
    path: PathBuf,
}

impl FileIdentityService {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl IdentityService for FileIdentityService {
    fn find_customer_by_id(&self, customer_id: &CustomerId) -> Result<Option<Customer>> {
        let roster = fs::read_to_string(&self.path)?;

        Ok(roster
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .find(|line| *line == customer_id.as_str())
            .map(|_| Customer {
                id: customer_id.clone(),
            }))
    }
}
