use super::solvers::{Solver, SolverTrait};
use super::store::{PackRepository, StoreError};
use super::{PackList, Problem, Solution};
use derive_more::Display;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Display, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[display(fmt = "not found")]
    NotFound,
    #[display(fmt = "internal server error")]
    Internal,
    #[display(fmt = "invalid pack configuration: {}", _0)]
    InvalidConfig(String),
    #[display(fmt = "quantity must be positive")]
    InvalidQuantity,
    #[display(fmt = "missing service dependency: {}", _0)]
    MissingDependency(&'static str),
}

impl std::error::Error for ServiceError {}

/// Rejects sets the solvers cannot work with.
pub fn validate_pack_sizes(pack_sizes: &[u64]) -> Result<(), ServiceError> {
    if pack_sizes.is_empty() {
        return Err(ServiceError::InvalidConfig(
            "at least one pack size is required".to_string(),
        ));
    }
    if pack_sizes.contains(&0) {
        return Err(ServiceError::InvalidConfig(
            "pack sizes must be positive".to_string(),
        ));
    }
    Ok(())
}

#[derive(Default)]
pub struct ServiceArgs {
    pub packs: Option<Arc<dyn PackRepository>>,
}

pub struct ProductService {
    packs: Arc<dyn PackRepository>,
}

impl ProductService {
    pub fn new(args: ServiceArgs) -> Result<ProductService, ServiceError> {
        Ok(ProductService {
            packs: args.packs.ok_or(ServiceError::MissingDependency("packs"))?,
        })
    }

    pub fn pack_sizes(&self, product_id: u64) -> Result<Vec<u64>, ServiceError> {
        self.packs
            .get_by_product_id(product_id)
            .map_err(|e| store_error(product_id, e))
    }

    pub fn calculate_packs_configuration(
        &self,
        product_id: u64,
        quantity: u64,
    ) -> Result<PackList, ServiceError> {
        Ok(self
            .calculate_with(&Solver::default(), product_id, quantity)?
            .pack_list())
    }

    pub fn calculate_with(
        &self,
        solver: &Solver,
        product_id: u64,
        quantity: u64,
    ) -> Result<Solution, ServiceError> {
        if quantity == 0 {
            return Err(ServiceError::InvalidQuantity);
        }
        let pack_sizes = self.pack_sizes(product_id)?;
        // the store may hold sets written before validation existed
        validate_pack_sizes(&pack_sizes).map_err(|e| {
            error!(product_id, %e, "stored pack sizes are unusable");
            ServiceError::Internal
        })?;
        Ok(solver.construction(&Problem {
            quantity,
            pack_sizes,
        }))
    }

    pub fn update_packs_configuration(
        &self,
        product_id: u64,
        pack_sizes: &[u64],
    ) -> Result<(), ServiceError> {
        validate_pack_sizes(pack_sizes)?;
        let mut pack_sizes = pack_sizes.to_vec();
        pack_sizes.sort_unstable();
        pack_sizes.dedup();
        self.packs
            .update_config(product_id, pack_sizes)
            .map_err(|e| store_error(product_id, e))
    }
}

fn store_error(product_id: u64, e: StoreError) -> ServiceError {
    match e {
        StoreError::NotFound => {
            info!(product_id, "no pack configuration found");
            ServiceError::NotFound
        }
        e => {
            error!(product_id, %e, "pack store failed");
            ServiceError::Internal
        }
    }
}
