use clap::{Parser, Subcommand};
use prioheap::{
    options::{CommonOptions, OrderOptions},
    ranking::{sort_file, top_file},
};

/// Priority ordering of numeric values with a binary heap
#[derive(Debug, Parser)]
#[command(name = "prioheap")]
#[command(about = "Sort values or select the best few, by heap order.", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Write all values out in priority order
    #[command(arg_required_else_help = true)]
    Sort {
        /// File with one number per line (may be compressed)
        #[arg(short, long)]
        input: String,

        /// The output filename
        #[arg(short, long)]
        out: String,

        #[command(flatten)]
        order: OrderOptions,

        #[command(flatten)]
        common: CommonOptions,
    },

    /// Write out only the k highest priority values
    #[command(arg_required_else_help = true)]
    Top {
        /// File with one number per line (may be compressed)
        #[arg(short, long)]
        input: String,

        /// The output filename
        #[arg(short, long)]
        out: String,

        /// Number of values to keep
        #[arg(short, long, required = false, default_value = "10")]
        k: usize,

        #[command(flatten)]
        order: OrderOptions,

        #[command(flatten)]
        common: CommonOptions,
    },
}

fn init_logging(common: &CommonOptions) {
    let level = if common.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::builder().filter_level(level).init();
}

fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sort {
            input,
            out,
            order,
            common,
        } => {
            init_logging(&common);
            sort_file(&input, &out, &order)?;
        }
        Commands::Top {
            input,
            out,
            k,
            order,
            common,
        } => {
            init_logging(&common);
            top_file(&input, &out, k, &order)?;
        }
    }
    Ok(())
}
