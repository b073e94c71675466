use std::path::PathBuf;

use clap::Parser;

/// Single-customer console banking session.
#[derive(Parser, Debug)]
#[command(name = "console_bank", version, about)]
pub struct Config {
    /// Customer name; prompted for when omitted
    #[arg(long)]
    pub name: Option<String>,

    /// Customer ID; prompted for when omitted
    #[arg(long)]
    pub customer_id: Option<String>,

    /// Read answers from FILE instead of stdin
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Currency symbol used when printing amounts
    #[arg(long, default_value = "₹")]
    pub currency: String,
}
