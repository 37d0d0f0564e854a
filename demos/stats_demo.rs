use clap::Parser;
use fcontainers::Config;
use fcontainers::FHashTable;
use fcontainers::murmurhash::Murmur3BuildHasher;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'c', long = "target_capacity", default_value_t = 1000)]
    target_capacity: usize,

    #[arg(short = 'f', long = "capacity_factor", default_value_t = 0.75)]
    capacity_factor: f64,

    /// Hash keys with Murmur3 instead of FNV-1a.
    #[arg(long)]
    murmur: bool,
}

fn fill<S: core::hash::BuildHasher>(
    mut table: FHashTable<u64, u64, S>,
) -> Result<FHashTable<u64, u64, S>, fcontainers::Error> {
    // Stop one short of the growth threshold so the capacity stays put.
    let threshold = (table.capacity() as f64 * table.capacity_factor()).ceil() as u64;
    for value in 0..threshold.saturating_sub(1) {
        table.insert(value, value * 2)?;
    }
    Ok(table)
}

fn report<S>(table: &FHashTable<u64, u64, S>) {
    println!("Inserted {} values into table", table.len());
    println!("Final load factor: {:.2}%", table.load_factor() * 100.0);
    table.print_probe_histogram();
    table.debug_stats().print();
}

fn main() -> Result<(), fcontainers::Error> {
    let args = Args::parse();

    println!(
        "Creating FHashTable with target capacity: {}",
        args.target_capacity
    );
    let config = Config::default()
        .with_capacity(args.target_capacity)
        .with_capacity_factor(args.capacity_factor);

    if args.murmur {
        let table = FHashTable::with_config_and_hasher(
            &config,
            Murmur3BuildHasher::with_seed(0x9747_b28c),
            fcontainers::DefaultEq,
        )?;
        println!("Actual capacity: {} (murmur3)", table.capacity());
        report(&fill(table)?);
    } else {
        let table = FHashTable::with_config(&config)?;
        println!("Actual capacity: {} (fnv-1a)", table.capacity());
        report(&fill(table)?);
    }

    Ok(())
}
