//! Command line definition

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "villa", version, about = "Villa marketplace client")]
pub struct Cli {
    /// Use the local development backend and session namespace
    #[arg(long, global = true)]
    pub dev: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and remember the session
    Login { email: String, password: String },
    /// Forget the session on this machine
    Logout,
    /// Show who is logged in
    Whoami,
    /// List villas
    Villas {
        #[arg(long)]
        city: Option<String>,
    },
    /// Your bookings (owners see bookings of their villas)
    Bookings,
    /// Your wishlist
    Wishlist,
    /// Revenue summary (owner, admin)
    Revenue,
    /// Book a villa, logging in first when credentials are given
    Book {
        villa_id: String,
        check_in: NaiveDate,
        check_out: NaiveDate,
        guests: u32,
        #[arg(long, requires = "password")]
        email: Option<String>,
        #[arg(long, requires = "email")]
        password: Option<String>,
    },
}
