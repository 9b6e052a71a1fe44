use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

/// Ordered shoe-size slots, one per added entry. Position is the only identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShoeList {
    sizes: Vec<String>,
}

impl ShoeList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an empty slot and return its position.
    pub fn add(&mut self) -> usize {
        self.sizes.push(String::new());
        self.sizes.len() - 1
    }

    /// Remove the slot at `position`; later slots shift down by one.
    pub fn remove(&mut self, position: usize) -> CoreResult<String> {
        self.check(position)?;
        Ok(self.sizes.remove(position))
    }

    /// Replace the raw text stored at `position`.
    pub fn edit(&mut self, position: usize, size: impl Into<String>) -> CoreResult<()> {
        self.check(position)?;
        self.sizes[position] = size.into();
        Ok(())
    }

    pub fn get(&self, position: usize) -> Option<&str> {
        self.sizes.get(position).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.sizes.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.sizes.clone()
    }

    fn check(&self, position: usize) -> CoreResult<()> {
        if position < self.sizes.len() {
            Ok(())
        } else {
            Err(CoreError::ShoeNotFound { position, len: self.sizes.len() })
        }
    }
}

impl<S: Into<String>> FromIterator<S> for ShoeList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self { sizes: iter.into_iter().map(Into::into).collect() }
    }
}
