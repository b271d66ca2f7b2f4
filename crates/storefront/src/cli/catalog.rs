//! Command handlers.

use super::commands::{Commands, OutputFormat};
use storefront::{
    ConsoleListener, JsonError, JsonErrorKind, Product, RatingFormatter, Storefront, StorefrontConfig,
    StorefrontResult, chart_lines, product_lines, project,
};

const CHART_WIDTH: usize = 40;

/// Run one command against the configured catalog.
///
/// Returns the number of failure notices reported along the way.
pub async fn handle_command(
    command: Commands,
    config: &StorefrontConfig,
) -> StorefrontResult<usize> {
    let mut catalog = storefront::open(config)?;
    let mut listener = ConsoleListener::default();

    match command {
        Commands::Tui => {
            tracing::info!(base_url = %config.remote.base_url, "Launching TUI");
            storefront::run_tui(&mut catalog, config.chart).await?;
        }
        Commands::List { format } => {
            load(&mut catalog, &mut listener).await;
            print_list(catalog.catalog().products(), format)?;
        }
        Commands::Refresh => {
            catalog.refresh();
            catalog.settle(&mut listener).await;
        }
        Commands::Add { id, stub } => {
            load(&mut catalog, &mut listener).await;
            if stub {
                catalog.add_stub(&mut listener).await;
            } else {
                match id {
                    Some(id) => catalog.add_one(id),
                    None => catalog.add_random(),
                };
                catalog.settle(&mut listener).await;
            }
        }
        Commands::Remove { index } => {
            load(&mut catalog, &mut listener).await;
            let len = catalog.catalog().len();
            if catalog.remove_at(index, &mut listener).await.is_none() {
                println!("Nothing removed: index {} is past the end ({} products)", index, len);
            }
        }
        Commands::Chart { top } => {
            load(&mut catalog, &mut listener).await;
            let n = top.unwrap_or(config.chart.top_n);
            let points = project(
                catalog.catalog().products(),
                n,
                config.chart.label_width,
                &RatingFormatter,
            );
            for line in chart_lines(&points, CHART_WIDTH) {
                println!("{}", line);
            }
        }
        Commands::Reset => {
            catalog.clear_snapshot().await?;
            println!("Local snapshot removed");
        }
    }

    if listener.failures() > 0 {
        tracing::info!(failures = listener.failures(), "Finished with failures");
    }
    Ok(listener.failures())
}

async fn load(catalog: &mut Storefront, listener: &mut ConsoleListener) {
    catalog.load(&mut *listener).await;
    catalog.settle(&mut *listener).await;
}

fn print_list(products: &[Product], format: OutputFormat) -> StorefrontResult<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(products)
                .map_err(|e| JsonError::new(JsonErrorKind::Encode(e.to_string())))?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            for line in product_lines(products) {
                println!("{}", line);
            }
            println!("Total: {} products", products.len());
        }
    }
    Ok(())
}
