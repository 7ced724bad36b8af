//! # chatdump CLI
//!
//! Command-line interface for the chatdump library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatdump::DumpError;
use chatdump::cli::Args;
use chatdump::config::DumpConfig;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), DumpError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    let config = DumpConfig::from(args);
    let policy = config.selection();

    // Print header
    println!("📦 chatdump v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Root:    {}", config.root.display());
    println!("💾 Output:  {}", config.output.display());
    println!("🎯 Mode:    {}", policy);
    println!();

    println!("⏳ Dumping channels...");
    let report = chatdump::walk(&config)?;
    println!(
        "   {} channels visited, {} dumped ({:.2}s)",
        report.channels_visited,
        report.channels_dumped,
        total_start.elapsed().as_secs_f64()
    );

    let total_time = total_start.elapsed();

    println!();
    println!("✅ Done! Dump saved to {}", report.output.display());

    // Summary
    println!();
    println!("📊 Summary:");
    println!("   Channels:  {} visited", report.channels_visited);
    println!("   Blocks:    {} written", report.channels_dumped);
    println!("   IDs:       {} dumped", report.ids_dumped);

    // Performance stats
    println!();
    println!("⚡ Performance:");
    println!("   Total time:  {:.2}s", total_time.as_secs_f64());
    let ids_per_sec = report.ids_dumped as f64 / total_time.as_secs_f64();
    println!("   Throughput:  {:.0} IDs/sec", ids_per_sec);

    Ok(())
}
