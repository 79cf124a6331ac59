use std::io;

use anyhow::Result;
use storefront::{demo_data, Store};
use storefront_config::StorefrontConfig;

mod commands;
mod format;
mod logger;
mod session;
mod views;

use session::Session;

fn main() -> Result<()> {
    let log_file = logger::init()?;

    log::info!("Starting storefront (log file: {})", log_file.display());

    let config = StorefrontConfig::load();
    let mut store = Store::from_config(&config);
    if config.seed_demo_data {
        demo_data::fill_products(&mut store)?;
    }

    let mut session = Session::new(store, config.currency_symbol);
    let result = session.run(&mut io::stdin().lock(), &mut io::stdout().lock());

    if let Err(err) = &result {
        log::error!("Session failed: {:#}", err);
    }

    log::info!(
        "Exiting storefront ({} items left in cart)",
        session.store().state().cart.item_count()
    );
    result
}
