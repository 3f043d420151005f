use clap::Parser;
use modem_stats::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    match runtime.block_on(commands::run(args)) {
        Ok(summary) => {
            // Records and reports have already been written by the command
            process::exit(summary.exit_code());
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Modem Stats - Cable Modem Channel Statistics");
    println!("============================================");
    println!();
    println!("Read the signal status page of a DOCSIS cable modem and write one");
    println!("line protocol record per downstream and upstream channel.");
    println!();
    println!("USAGE:");
    println!("    modem-stats <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    collect     Extract channel records and write them to stdout");
    println!("    validate    Report cells on the status page that failed to parse");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Fetch the page from the modem's default address:");
    println!("    modem-stats collect");
    println!();
    println!("    # Use a different modem address and measurement name:");
    println!("    modem-stats collect --url http://10.0.0.1/cmSignalData.htm -m channelstats");
    println!();
    println!("    # Check a saved page for unparseable values:");
    println!("    modem-stats validate --input cmSignalData.htm");
    println!();
    println!("For detailed help on any command, use:");
    println!("    modem-stats <COMMAND> --help");
}
