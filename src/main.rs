//! Command-line host for the quoting engine.
//!
//! Reads a JSON job description, prices it against the embedded or default
//! preset, and prints the estimate and summary the way the interactive tool
//! presents them.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use quote_builder::domain::{quote_job, JobQuote, VAT_RATE_PERCENT};
use quote_builder::util::{format_gbp, jobfile};

/// Painting and decorating quote calculator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a JSON job description
    #[arg(value_name = "JOB_FILE")]
    job_path: PathBuf,

    /// Emit the full breakdown as JSON instead of a formatted summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let job = jobfile::load_job_file(&cli.job_path)
        .with_context(|| format!("failed to load job file {}", cli.job_path.display()))?;
    let quote = quote_job(&job.rooms, &job.config, Some(&job.add_ons));

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
    } else {
        print_summary(&job.config.name, &quote, job.config.vat_applicable);
    }

    Ok(())
}

fn print_summary(preset_name: &str, quote: &JobQuote, vat_applicable: bool) {
    println!("Quote ({preset_name})");
    println!();

    for room in &quote.room_breakdowns {
        println!(
            "  {}: {:.2} L paint, {:.2} h labour, materials {}, labour {}, total {}",
            room.room_name,
            room.paint_litres,
            room.labour_hours,
            format_gbp(room.materials_cost),
            format_gbp(room.labour_cost),
            format_gbp(room.total_cost),
        );
    }
    if !quote.room_breakdowns.is_empty() {
        println!();
    }

    println!("  Total paint needed:  {:.2} L", quote.total_paint_litres);
    println!("  Total labour hours:  {:.2} h", quote.total_labour_hours);
    println!("  Materials:           {}", format_gbp(quote.total_materials_cost));
    println!("  Labour:              {}", format_gbp(quote.total_labour_cost));
    if quote.total_add_ons_cost != 0.0 {
        println!("  Add-ons:             {}", format_gbp(quote.total_add_ons_cost));
    }
    println!("  Subtotal:            {}", format_gbp(quote.sub_total_before_markup));
    println!("  Markup:              {}", format_gbp(quote.markup_amount));
    if vat_applicable {
        println!(
            "  VAT ({VAT_RATE_PERCENT}%):           {}",
            format_gbp(quote.vat_amount)
        );
    }
    println!("  Grand total:         {}", format_gbp(quote.grand_total));
}
