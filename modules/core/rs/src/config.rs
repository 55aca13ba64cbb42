use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;

use crate::error::{Error, Result};

/// Construction parameters of a range dictionary: the size of the identifier space and the
/// default value of every attribute key.
#[derive(Clone, PartialEq, Eq, Debug, Constructor, Dissolve, Getters)]
pub struct Config<K, V> {
    size: usize,
    defaults: Vec<(K, V)>,
}

impl<K, V> Default for Config<K, V> {
    fn default() -> Self {
        Self {
            size: 0,
            defaults: Vec::new(),
        }
    }
}

impl<K, V> Config<K, V> {
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_default(mut self, key: K, value: V) -> Self {
        self.defaults.push((key, value));
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::configuration("size must be positive"));
        }
        if self.defaults.is_empty() {
            return Err(Error::configuration(
                "at least one attribute key with a default value is required",
            ));
        }
        Ok(())
    }
}
