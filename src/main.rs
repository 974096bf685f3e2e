//! Wordlist Refinery - wordlist normalization and curation for penetration testing
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::process;

use wordlist_refinery::cli::Args;
use wordlist_refinery::config::RefineConfig;
use wordlist_refinery::error::RefineError;
use wordlist_refinery::ingest::Refinery;
use wordlist_refinery::progress::{print_banner, print_error, print_header, print_info};

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    } else if !args.quiet {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    // Configure thread pool
    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .ok();
    }

    // Run the application
    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        // Print chain of errors
        let mut source = e.source();
        while let Some(err) = source {
            print_error(&format!("  Caused by: {}", err));
            source = err.source();
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    // Print banner unless quiet mode
    if !args.quiet {
        print_banner();
    }

    // Build and validate the run configuration; fails before any I/O
    let config = RefineConfig::from_args(&args)?;

    // Show configuration
    if !args.quiet && args.verbose {
        print_config(&args, &config);
    }

    if config.no_sentence && !args.quiet {
        print_info("--no-sentence has no effect and is accepted for compatibility only");
    }

    if !args.quiet {
        print_header(&format!("Refining {} input file(s)...", args.inputs.len()));
    }

    // Run the refinery
    let refinery = Refinery::new(config).quiet(args.quiet);
    let summary = refinery.run(&args.inputs, &args.output)?;

    if !args.quiet {
        refinery.stats().print_summary(summary.written);
        print_info(&format!("Output written to: {:?}", args.output));
    }

    // Partial results were written, but the run still counts as failed
    if !summary.is_success() {
        return Err(RefineError::PartialIngest {
            failed: summary.failed_files.len(),
            total: args.inputs.len(),
        }
        .into());
    }

    Ok(())
}

/// Print configuration summary
fn print_config(args: &Args, config: &RefineConfig) {
    print_header("Configuration");

    print_info(&format!("Inputs:       {:?}", args.inputs));
    print_info(&format!("Output:       {:?}", args.output));
    print_info(&format!(
        "Lengths:      min {} / max {} / trim {}",
        config.minlen, config.maxlen, config.maxtrim
    ));
    print_info(&format!(
        "Trims:        digits {} / special {} / detab {}",
        config.digit_trim, config.special_trim, config.detab
    ));
    print_info(&format!(
        "Rewrites:     lower {} / collapse-runs {} / email-sort {}",
        config.lower, config.dup_remove, config.email_sort
    ));
    print_info(&format!(
        "Rejects:      numeric {} / hashes {} / dominance {}%",
        config.no_numbers, config.hash_remove, config.dup_sense
    ));
    print_info(&format!(
        "Tokenizing:   wordify {} / dewebify {} / no-utf8 {}",
        config.wordify, config.dewebify, config.no_utf8
    ));
    print_info(&format!(
        "Finalize:     sort {} / deduplicate {}",
        config.sort, config.deduplicate
    ));
    print_info(&format!(
        "Threads:      {}",
        args.threads.unwrap_or_else(num_cpus::get)
    ));
}
