use corebin::*;

/// A size-class table generator for chunk-based allocators
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a chunk-size list (stock catalog if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(PathBuf))]
    chunks:     Option<PathBuf>,

    /// Path to an allocation-size list (stock ladder if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(PathBuf))]
    sizes:      Option<PathBuf>,

    /// Page size in bytes
    #[arg(short, long, default_value_t = presets::PAGE_SIZE)]
    #[arg(value_parser = clap::value_parser!(Bytes))]
    page_size:  Bytes,

    /// Maximum acceptable waste per allocation, in percent
    #[arg(short, long, default_value_t = 10.0)]
    #[arg(value_parser = clap::value_parser!(f64))]
    waste:      f64,

    /// Print a per-chunk usage summary after the table
    #[arg(long, default_value_t = false)]
    #[arg(value_parser = clap::value_parser!(bool))]
    summary:    bool,
}

fn main() {
    let cli = Args::parse();
    assert!(cli.waste > 0.0, "Waste limit must be positive");
    let chunk_sizes = match cli.chunks {
        Some(path)  => {
            assert!(path.exists() && path.is_file(), "Invalid chunk list path");
            read_sizes_from_path::<SizeListParser>(path).unwrap()
        },
        None        => presets::chunk_sizes(),
    };
    let alloc_sizes = match cli.sizes {
        Some(path)  => {
            assert!(path.exists() && path.is_file(), "Invalid size list path");
            read_sizes_from_path::<SizeListParser>(path).unwrap()
        },
        None        => presets::alloc_sizes(),
    };
    let catalog = Catalog::new(cli.page_size, chunk_sizes).unwrap();
    let requests = Requests::new(alloc_sizes).unwrap();

    let total = Instant::now();
    let bins = solve::solve(&catalog, &requests, cli.waste);
    let solve_cost = total.elapsed().as_micros();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    emit::emit_table(&bins, &mut out).unwrap();
    if cli.summary {
        emit::emit_summary(&emit::chunk_usage(&bins), catalog.page_size(), &mut out).unwrap();
    }
    let unresolved = bins.iter().filter(|b| b.fit.is_none()).count();
    if unresolved > 0 {
        println!("WARNING: {unresolved} size classes left unresolved!");
    }

    println!("Total solve time: {} μs", solve_cost);
}
