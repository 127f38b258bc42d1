use super::DEFAULT_PACK_SIZES;
use derive_more::Display;
use std::collections::HashMap;
use std::sync::RwLock;

#[derive(Display, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[display(fmt = "not found")]
    NotFound,
    #[display(fmt = "pack store failure: {}", _0)]
    Backend(String),
}

impl std::error::Error for StoreError {}

/// Where the pack sizes of every product live.
pub trait PackRepository: Send + Sync {
    fn get_by_product_id(&self, product_id: u64) -> Result<Vec<u64>, StoreError>;
    fn update_config(&self, product_id: u64, pack_sizes: Vec<u64>) -> Result<(), StoreError>;
}

#[derive(Debug)]
pub struct InMemoryPackRepository {
    configs: RwLock<HashMap<u64, Vec<u64>>>,
    default_sizes: Vec<u64>,
}

impl InMemoryPackRepository {
    pub fn new() -> InMemoryPackRepository {
        InMemoryPackRepository::with_default(&DEFAULT_PACK_SIZES)
    }

    // products without their own sizes get these
    pub fn with_default(default_sizes: &[u64]) -> InMemoryPackRepository {
        InMemoryPackRepository {
            configs: RwLock::new(HashMap::new()),
            default_sizes: default_sizes.to_vec(),
        }
    }
}

impl Default for InMemoryPackRepository {
    fn default() -> InMemoryPackRepository {
        InMemoryPackRepository::new()
    }
}

impl PackRepository for InMemoryPackRepository {
    fn get_by_product_id(&self, product_id: u64) -> Result<Vec<u64>, StoreError> {
        let configs = self
            .configs
            .read()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(configs
            .get(&product_id)
            .cloned()
            .unwrap_or_else(|| self.default_sizes.clone()))
    }

    fn update_config(&self, product_id: u64, pack_sizes: Vec<u64>) -> Result<(), StoreError> {
        self.configs
            .write()
            .map_err(|e| StoreError::Backend(e.to_string()))?
            .insert(product_id, pack_sizes);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn unknown_product_gets_default_sizes() {
        let repository = InMemoryPackRepository::new();
        assert_eq!(
            repository.get_by_product_id(7),
            Ok(DEFAULT_PACK_SIZES.to_vec())
        );
        let repository = InMemoryPackRepository::with_default(&[3, 5]);
        assert_eq!(repository.get_by_product_id(7), Ok(vec![3, 5]));
    }

    #[test]
    fn update_replaces_one_product_only() {
        let repository = InMemoryPackRepository::new();
        repository.update_config(1, vec![250, 600]).unwrap();
        assert_eq!(repository.get_by_product_id(1), Ok(vec![250, 600]));
        assert_eq!(
            repository.get_by_product_id(2),
            Ok(DEFAULT_PACK_SIZES.to_vec())
        );
    }

    #[test]
    fn concurrent_readers_and_writers() {
        let repository = Arc::new(InMemoryPackRepository::new());
        let handles = (0..8u64)
            .map(|id| {
                let repository = Arc::clone(&repository);
                thread::spawn(move || {
                    for size in 1..50 {
                        repository.update_config(id, vec![size, size * 2]).unwrap();
                        let sizes = repository.get_by_product_id(id).unwrap();
                        assert_eq!(sizes[1], sizes[0] * 2);
                    }
                })
            })
            .collect::<Vec<_>>();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(repository.get_by_product_id(3), Ok(vec![49, 98]));
    }
}
