//! Terminal host for the ticket cart.
//!
//! Each subcommand fires the UI event of the same name against a file-backed
//! store, so the cart persists between invocations:
//!
//! ```bash
//! ticket-cart add individual
//! ticket-cart set individual 3
//! ticket-cart show
//! ticket-cart load /Carrinho.html
//! ```

use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use ticket_cart::errors::AppError;
use ticket_cart::render::format_brl;
use ticket_cart::{build_service, CartConfig, Page};

#[derive(Parser)]
#[command(name = "ticket-cart")]
#[command(version, about = "Zoo ticket cart stored in a local file")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the tickets on offer
    Catalog,
    /// Add one ticket to the cart
    Add { id: String },
    /// Set a line's quantity; zero or less removes it
    Set {
        id: String,
        #[arg(allow_hyphen_values = true)]
        quantity: String,
    },
    /// Remove a line from the cart
    Remove { id: String },
    /// Render the cart page
    Show,
    /// Print the badge count
    Badge,
    /// Simulate loading the page at PATH
    Load { path: String },
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = CartConfig::from_env();
    log::debug!("Using store at {}", config.store_path.display());
    let mut service = build_service(&config);

    match cli.command {
        Command::Catalog => {
            for item in service.catalog().items() {
                println!(
                    "{:<12} {:<22} {:>12}  {}",
                    item.id,
                    item.name,
                    format_brl(&item.unit_price),
                    item.description
                );
            }
        }
        Command::Add { id } => service.add_item(&id)?,
        Command::Set { id, quantity } => service.set_quantity_input(&id, &quantity)?,
        Command::Remove { id } => service.remove_item(&id)?,
        Command::Show => service.render_cart()?,
        Command::Badge => service.refresh_badge_count(),
        Command::Load { path } => service.on_page_load(Page::from_path(&path))?,
    }
    Ok(())
}

fn main() {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    if let Err(e) = run(Cli::parse()) {
        log::error!("{}", e);
        std::process::exit(e.exit_code());
    }
}
