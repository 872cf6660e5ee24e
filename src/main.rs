use clap::Parser;
use roster_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(_stats) => {
            // Success - stats have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Roster Processor - Bonus-Point Roster Generator");
    println!("===============================================");
    println!();
    println!("Convert raw student activity/award spreadsheets into formatted");
    println!("institutional bonus-point roster workbooks.");
    println!();
    println!("USAGE:");
    println!("    roster-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    export       Render a formatted roster workbook (main command)");
    println!("    inspect      Summarize a source workbook without producing output");
    println!("    blacklist    Export unattended and invalid rows as a blacklist");
    println!("    help         Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Render a roster with inferred layout and default output name:");
    println!("    roster-processor export --input 数据源.xlsx");
    println!();
    println!("    # Render a competition roster for one term, with a blacklist:");
    println!("    roster-processor export --input 数据源.xlsx --term 2024年秋 \\");
    println!("                            --template competition --blacklist 黑名单.xlsx");
    println!();
    println!("    # Summarize a source workbook as JSON:");
    println!("    roster-processor inspect --input 数据源.xlsx --format json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    roster-processor <COMMAND> --help");
}
