use clap::{Parser, ValueEnum};
use std::error::Error;
use std::path::PathBuf;
use subnet_partition::config::Config;
use subnet_partition::input::read_subnet_file;
use subnet_partition::logging::init_logging;
use subnet_partition::models::AddressBlock;
use subnet_partition::output::{print_tree, subnet_print};
use subnet_partition::processing::{
    build_subnet_tree, de_duplicate_subnets, divide_in, find_duplicate_cidrs, join_in,
    log_duplicates, mark_joinable,
};
use subnet_partition::{build_subnets, build_subnets_lenient, complete_subnets, display_root};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Csv,
    Tree,
}

/// Complete a set of IPv4 subnets into a full partition
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Subnet file: one "<cidr> [description] [#color]" per line, or a .json array
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: Format,

    /// Skip invalid entries instead of rejecting the whole file
    #[arg(long)]
    lenient: bool,

    /// Divide this subnet after completion
    #[arg(long, value_name = "CIDR")]
    divide: Option<AddressBlock>,

    /// Join these two subnets after completion
    #[arg(long, num_args = 2, value_names = ["LOW", "HIGH"])]
    join: Option<Vec<AddressBlock>>,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logging(&config.log_config)?;
    let args = Args::parse();

    log::info!("#Start main()");

    let input = args
        .input
        .or(config.input)
        .ok_or("No input file given (argument or SUBNET_INPUT)")?;
    let records = read_subnet_file(&input)?;

    let subnets = if args.lenient || config.lenient {
        build_subnets_lenient(&records)
    } else {
        build_subnets(&records)?
    };
    log_duplicates(&find_duplicate_cidrs(&subnets));
    let subnets = de_duplicate_subnets(subnets);

    let mut completed = complete_subnets(subnets)?;

    if let Some(cidr) = args.divide {
        divide_in(&mut completed, &cidr)?;
    }
    if let Some(pair) = args.join {
        join_in(&mut completed, &pair[0], &pair[1])?;
    }
    mark_joinable(&mut completed);

    match display_root(&completed) {
        Ok(root) => println!("# root {root}"),
        Err(e) => log::warn!("No display root: {e}"),
    }

    match args.format {
        Format::Csv => subnet_print(&completed),
        Format::Tree => print_tree(&build_subnet_tree(&completed)),
    }

    Ok(())
}
