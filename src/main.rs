use packs::ioutils::{Order, OrdersFromFile, PackSizes};
use packs::service::{validate_pack_sizes, ProductService, ServiceArgs, ServiceError};
use packs::solvers::{Methods, Solver, SolverTrait};
use packs::store::InMemoryPackRepository;
use packs::{format_pack_list, DisplayError, Problem, Solution};

use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(StructOpt, Debug)]
#[structopt(name = "packs", author = "Martin Quarda <martin@quarda.cz>")]
struct Opts {
    /// Ordered quantities
    quantities: Vec<u64>,
    /// File with one order per line: `<quantity> [pack size ...]`
    #[structopt(long)]
    orders: Option<OrdersFromFile>,
    /// Replaces the product's pack sizes, comma separated
    #[structopt(long)]
    sizes: Option<PackSizes>,
    /// Pack sizes of products without their own configuration
    #[structopt(long, default_value = "250,500,1000,2000,5000")]
    default_sizes: PackSizes,
    #[structopt(long, default_value = "1")]
    product: u64,
    /// single-size, greedy or selector
    #[structopt(long, default_value = "selector")]
    method: Methods,
    #[structopt(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opts = Opts::from_args();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    validate_pack_sizes(&opts.default_sizes.0)?;
    let service = ProductService::new(ServiceArgs {
        packs: Some(Arc::new(InMemoryPackRepository::with_default(
            &opts.default_sizes.0,
        ))),
    })?;
    if let Some(sizes) = &opts.sizes {
        service.update_packs_configuration(opts.product, &sizes.0)?;
    }

    let solver = Solver::from_method(opts.method);

    let orders = opts
        .quantities
        .iter()
        .map(|&quantity| Order {
            quantity,
            pack_sizes: None,
        })
        .chain(opts.orders.into_iter().flat_map(|orders| orders.0))
        .collect::<Vec<_>>();
    if orders.is_empty() {
        return Err(DisplayError::from("No order given, pass quantities or --orders.").into());
    }

    let mut time = Duration::new(0, 0);
    let mut failed = 0;
    for order in &orders {
        let start = Instant::now();
        let result = solve(&service, &solver, opts.product, order);
        let elapsed = start.elapsed();
        time += elapsed;
        match result {
            Ok(solution) => {
                let packs = format_pack_list(&solution.pack_list());
                if opts.verbose {
                    println!(
                        "{}: {} overhead: {} packs: {} time: {:?}",
                        order.quantity,
                        packs,
                        solution.overhead,
                        solution.configuration.pack_count(),
                        elapsed
                    );
                } else {
                    println!("{}: {}", order.quantity, packs);
                }
            }
            Err(e) => {
                failed += 1;
                println!("{}: error: {}", order.quantity, e);
            }
        }
    }

    if opts.verbose {
        println!(
            "Method: {} Orders: {} Total time: {:?}",
            solver.name(),
            orders.len(),
            time
        );
    }

    if failed > 0 {
        return Err(DisplayError(format!("{} of {} orders failed.", failed, orders.len())).into());
    }
    Ok(())
}

fn solve(
    service: &ProductService,
    solver: &Solver,
    product_id: u64,
    order: &Order,
) -> Result<Solution, ServiceError> {
    match &order.pack_sizes {
        None => service.calculate_with(solver, product_id, order.quantity),
        Some(pack_sizes) => {
            if order.quantity == 0 {
                return Err(ServiceError::InvalidQuantity);
            }
            validate_pack_sizes(pack_sizes)?;
            Ok(solver.construction(&Problem::new(order.quantity, pack_sizes)))
        }
    }
}
