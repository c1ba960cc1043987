// src/main.rs
use storefront::catalog::PageSnapshot;
use storefront::config::Config;
use storefront::domain::errors::AppResult;
use storefront::format::format_currency;
use storefront::ui::Document;
use storefront::Storefront;

const DEMO_PAGE: &str = include_str!("../demos/page.json");

fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    config.init_logging()?;

    log::info!("Starting storefront v{}", env!("CARGO_PKG_VERSION"));

    // Load the rendered page, falling back to the bundled demo
    let snapshot = match &config.store.catalog_path {
        Some(path) => PageSnapshot::from_file(path)?,
        None => {
            log::info!("CATALOG_PATH not set, using bundled demo page");
            PageSnapshot::from_json(DEMO_PAGE)?
        }
    };

    let document = Document::new(snapshot.elements.clone());
    let storefront = Storefront::new(&snapshot, config.store.tax_rate, document);

    let page = storefront.page();
    let totals = storefront.totals();

    println!("Products: {}", storefront.visible_products().join(", "));
    println!("Cart ({}):", page.badge_label);
    for line in storefront.cart().lines() {
        println!(
            "  {} x{} @ {} = {}",
            line.name,
            line.qty,
            format_currency(line.price),
            format_currency(line.line_total())
        );
    }
    println!("Subtotal:    {}", format_currency(totals.subtotal));
    println!("Discount:    {}", format_currency(totals.discount));
    println!("Tax:         {}", format_currency(totals.tax));
    println!("Grand Total: {}", format_currency(totals.grand));

    log::info!("Storefront rendered");
    Ok(())
}
