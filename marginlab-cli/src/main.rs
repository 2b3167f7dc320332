//! MarginLab CLI — one-shot margin breakdown.
//!
//! Takes the same free-form inputs as the TUI (currency symbols, commas, and
//! padding are all fine) and prints the same derived figures, warnings, and
//! copyable summary line.

use anyhow::Result;
use clap::Parser;

use marginlab_core::{
    compute, currency, freight_high, is_negative, percent, summary_line, RawInputs,
};

#[derive(Parser)]
#[command(
    name = "marginlab",
    about = "MarginLab CLI — profit-margin breakdown for a single sale"
)]
struct Cli {
    /// Sale total (free-form, e.g. "$31,191").
    #[arg(long)]
    sale: String,

    /// Order cost (free-form).
    #[arg(long)]
    cost: String,

    /// Freight cost (free-form). Defaults to none.
    #[arg(long, default_value = "")]
    freight: String,

    /// Leave freight out of the cost side of the margin.
    #[arg(long, default_value_t = false)]
    exclude_freight: bool,

    /// Warn when freight reaches this percent of the sale.
    #[arg(long, default_value = "8")]
    warn_threshold: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let inputs = RawInputs {
        sale_total: cli.sale,
        order_cost: cli.cost,
        freight_cost: cli.freight,
        include_freight: !cli.exclude_freight,
        warn_threshold: cli.warn_threshold,
    };
    let r = compute(&inputs);

    println!("Sale total:          {}", currency(r.sale));
    println!("Cost after freight:  {}", currency(r.cost_after_freight));
    println!("Gross profit:        {}", currency(r.gross_profit));
    println!("Profit margin:       {}", percent(r.margin));
    println!("Freight share:       {}", percent(r.freight_pct));

    if is_negative(&r) {
        eprintln!("warning: negative margin, this sale loses money");
    }
    if freight_high(&r) {
        eprintln!(
            "warning: freight is {} of the sale (warn at {})",
            percent(r.freight_pct),
            percent(r.warn_threshold)
        );
    }

    println!();
    println!("{}", summary_line(&r, inputs.include_freight));

    Ok(())
}
