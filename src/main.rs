use balanced_bst::display::element_orders;
use balanced_bst::random::random_int_array;
use balanced_bst::Tree;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::level_filters::LevelFilter;
use tracing::{debug, error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Builds a tree from random values, knocks it off balance and rebalances it
#[derive(Parser, Debug)]
#[command(name = "balanced_bst")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Smallest value to generate
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    min: i64,

    /// Upper bound (exclusive) of the generated values
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    max: i64,

    /// How many values to generate, before removing duplicates
    #[arg(short, long, default_value_t = 7)]
    length: usize,

    /// Seed for the random values, for repeatable runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Values inserted to unbalance the tree
    #[arg(
        short,
        long,
        num_args = 1..,
        default_values_t = [101, 102, 103],
        allow_negative_numbers = true
    )]
    unbalance: Vec<i64>,

    /// Log verbosity: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);
    debug!(?cli, "parsed arguments");

    if let Err(e) = run(&cli) {
        error!(%e, "demo failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> balanced_bst::Result<()> {
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let values = random_int_array(cli.min, cli.max, cli.length, &mut rng);
    info!(?values, "generated values");

    let mut tree = Tree::from_values(values);
    report(&tree);
    println!("{}", element_orders(&tree)?);

    for value in &cli.unbalance {
        if !tree.insert(*value) {
            info!(value, "already in tree");
        }
    }
    report(&tree);

    println!("rebalancing tree...");
    tree.rebalance();
    report(&tree);
    println!("{}", element_orders(&tree)?);

    Ok(())
}

fn report(tree: &Tree<i64>) {
    let balanced = tree.is_balanced();
    info!(balanced, len = tree.len(), "tree state");
    println!("balanced: {}", balanced);
    print!("{}", tree);
    println!();
}

fn setup_logging(verbosity: u8) {
    let default = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // `RUST_LOG` wins over `-d` when it is set.
    let filter = EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();
}
