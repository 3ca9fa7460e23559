use std::fs::File;
use std::io::Write;
use std::time::Instant;
use clap::Parser;
use csimlib::config::CacheConfig;
use csimlib::io::get_reader;
use csimlib::simulator::Simulator;

/// Companion results file, written next to wherever the simulator is run from
const RESULTS_PATH: &str = ".csim_results";

#[derive(Parser, Debug)]
#[command(about = String::from("Set-associative LRU cache simulator for valgrind memory traces"))]
#[command(
    after_help = "Examples:\n  csim -s 4 -E 1 -b 4 -t traces/yi.trace\n  csim -v -s 8 -E 2 -b 4 -t traces/yi.trace"
)]
struct Args {
    /// Number of set index bits
    #[arg(short = 's', value_parser = clap::value_parser!(u32).range(1..))]
    set_bits: u32,

    /// Number of lines per set
    #[arg(short = 'E', value_parser = clap::value_parser!(u32).range(1..))]
    associativity: u32,

    /// Number of block offset bits
    #[arg(short = 'b', value_parser = clap::value_parser!(u32).range(1..))]
    block_bits: u32,

    /// Trace file to replay
    #[arg(short = 't')]
    trace: String,

    /// Echo each access record with its outcome
    #[arg(short, long)]
    verbose: bool,

    /// Print timing once the replay finishes
    #[arg(short, long)]
    performance: bool,

    /// Print the summary as JSON instead of the one-line form
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), String> {
    let start = Instant::now();
    let args = Args::parse();
    let config = CacheConfig::new(args.set_bits, args.associativity, args.block_bits)?;
    let trace_file = File::open(&args.trace)
        .map_err(|e| format!("Couldn't open the trace file at path {}: {e}", args.trace))?;
    let trace_reader = get_reader(trace_file)?;
    let mut simulator = Simulator::new(&config);
    let mut stdout = std::io::stdout();
    let echo: Option<&mut dyn Write> = if args.verbose { Some(&mut stdout) } else { None };
    let summary = *simulator.replay(trace_reader, echo)?;
    if args.json {
        let serialised = serde_json::to_string_pretty(&summary)
            .map_err(|e| format!("Couldn't serialise the output {e}"))?;
        println!("{serialised}");
    } else {
        println!("{summary}");
    }
    summary.persist(RESULTS_PATH)?;
    let end = Instant::now();
    if args.performance {
        let simulation_time = simulator.get_execution_time();
        let total_time = end - start;
        println!("Simulation time: {}s", simulation_time.as_nanos() as f64 / 1e9);
        println!(
            "Total execution time (includes initial parsing, configuration, and output): {}s",
            total_time.as_nanos() as f64 / 1e9
        )
    }
    Ok(())
}
