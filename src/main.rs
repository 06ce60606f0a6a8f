use std::path::PathBuf;
use std::thread;

use clap::builder::RangedU64ValueParser;
use clap::Parser;
use exprtree::{
    config,
    errors::ExprResult,
    report::{Failure, Options, Report},
    VERSION,
};
use tracing::{debug, Level};

#[derive(Parser)]
#[command(
    author,
    version = VERSION,
    about = "Evaluate a digit expression and draw its syntax tree",
    long_about = "Evaluate a digit expression and draw its syntax tree.\n\
                 The input file holds one expression over single digits, + - * / and { }.\n\
                 + and - bind tighter than * and /, and all operators group to the right.\n\
                 \n\
                 Example usage:\n\
                 exprtree input.txt                 # Print tree and result\n\
                 exprtree input.txt --no-tree       # Print only the result\n\
                 exprtree input.txt --verbose       # Log each phase to stderr"
)]
struct Cli {
    // The path to the expression file
    path: PathBuf,

    // Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,

    // Print only the result, not the tree diagram
    #[arg(long)]
    no_tree: bool,

    // Maximum nesting depth accepted by the parser
    #[arg(
        long,
        default_value_t = config::parser::MAX_NESTING_DEPTH,
        value_parser = RangedU64ValueParser::<usize>::new()
            .range(1..=config::parser::NESTING_DEPTH_CEILING as u64)
    )]
    max_depth: usize,
}

// Runs the pipeline on a thread whose stack fits the requested nesting depth.
fn run(args: Cli) -> ExprResult<Report> {
    let options = Options {
        max_depth: args.max_depth,
        tree: !args.no_tree,
    };
    let stack_size = config::stack::size_for_depth(options.max_depth);
    debug!(version = VERSION, max_depth = options.max_depth, stack_size, "starting");

    let worker = thread::Builder::new()
        .name("exprtree-worker".to_string())
        .stack_size(stack_size)
        .spawn(move || Report::from_file(&args.path, options))?;
    match worker.join() {
        Ok(result) => result,
        Err(panic) => std::panic::resume_unwind(panic),
    }
}

fn main() {
    let args = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    match run(args) {
        Ok(report) => print!("{}", report),
        Err(e) => {
            eprintln!("{}", Failure(&e));
            std::process::exit(1);
        }
    }
}
