//! Writes `array.data`, `list.data` and `list_simple.data` by timing the
//! three set implementations in `sets`.
//!
//! Each line is one measurement:
//! `size_a t_add_a size_b t_add_b t_union t_intersection t_difference`,
//! times in microseconds.

mod sets;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use sets::{ArraySet, IntSet, ListSet, SimpleListSet};

/// Upper bound (exclusive) of randomly drawn elements.
const MAX_VALUE: i32 = 20_000;
/// Size of the first measurement of every round.
const START_SIZE: usize = 16;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Order {
    Random,
    Ascending,
    Descending,
}

#[derive(Parser)]
#[command(version, about)]
/// Benchmarks set implementations and writes one .data file per implementation.
struct Args {
    /// Order in which generated elements are inserted.
    #[arg(long, value_enum, default_value_t = Order::Random)]
    order: Order,

    /// Number of passes over all sizes.
    #[arg(long, default_value_t = 10)]
    rounds: usize,

    /// Number of sizes per pass; the size doubles each step starting at 16.
    #[arg(long, default_value_t = 10)]
    steps: usize,

    /// Seed for random order; drawn from the OS when absent.
    #[arg(long)]
    seed: Option<u64>,

    /// Directory the .data files are written to.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    run::<ArraySet>(&args, &mut rng)?;
    run::<ListSet>(&args, &mut rng)?;
    run::<SimpleListSet>(&args, &mut rng)?;
    Ok(())
}

fn run<S: IntSet>(args: &Args, rng: &mut SmallRng) -> Result<()> {
    let path = args.out_dir.join(format!("{}.data", S::NAME));
    let mut out = create(&path)?;

    for _ in 0..args.rounds {
        let mut n = START_SIZE;
        for _ in 0..args.steps {
            let (a, t_a) = generate::<S>(n, args.order, rng);
            let (b, t_b) = generate::<S>(n, args.order, rng);

            let (_, t_union) = timed(|| a.union(&b));
            let (_, t_intersection) = timed(|| a.intersection(&b));
            let (_, t_difference) = timed(|| a.difference(&b));

            writeln!(
                out,
                "{} {t_a} {} {t_b} {t_union} {t_intersection} {t_difference}",
                a.len(),
                b.len()
            )
            .with_context(|| format!("writing {}", path.display()))?;

            n *= 2;
        }
    }

    out.flush()
        .with_context(|| format!("writing {}", path.display()))?;
    log::info!(
        "Wrote {} measurements to {}",
        args.rounds * args.steps,
        path.display()
    );
    Ok(())
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    Ok(BufWriter::new(file))
}

/// Build a set from `n` generated values, timing only the insertions.
fn generate<S: IntSet>(n: usize, order: Order, rng: &mut SmallRng) -> (S, u128) {
    let values: Vec<i32> = match order {
        Order::Random => (0..n).map(|_| rng.gen_range(0..MAX_VALUE)).collect(),
        Order::Ascending => (0..n as i32).collect(),
        Order::Descending => (1..=n as i32).rev().collect(),
    };

    timed(|| {
        let mut set = S::new();
        for &v in &values {
            set.add(v);
        }
        set
    })
}

/// Run `f`, returning its result and the elapsed microseconds.
fn timed<T>(f: impl FnOnce() -> T) -> (T, u128) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed().as_micros())
}
