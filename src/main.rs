use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod data;
mod models;
mod services;
mod utils;

use api::prediction::PredictionClient;
use data::CsvSeriesSource;
use models::FilterOption;
use services::view_service::StockView;
use utils::{Align, Table};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("stockview=debug".parse().unwrap())
                .add_directive("reqwest=warn".parse().unwrap()),
        )
        .with_target(true)
        .init();

    let mut args = std::env::args().skip(1);
    let symbol = match args.next() {
        Some(s) => s,
        None => {
            error!("Usage: stockview <SYMBOL> [window]");
            error!("Windows: 7 days (default), 1 month, 6 months, 1 year");
            return;
        }
    };
    let filter = args
        .next()
        .map(|label| FilterOption::parse(&label))
        .unwrap_or_default();

    let config = config::Config::from_env();
    info!("Starting stockview for {} ({} window)", symbol, filter);
    debug!(
        "Data dir: {}, prediction service: {}",
        config.data_dir.display(),
        config.prediction_base_url
    );

    let series_source = CsvSeriesSource::new(&config.data_dir);
    let prediction_client = PredictionClient::with_base_url(config.prediction_base_url);

    let mut view = StockView::new();
    if let Err(e) = view
        .refresh(&series_source, &prediction_client, &symbol, filter)
        .await
    {
        error!("{}", e);
        std::process::exit(1);
    }

    println!("{}", utils::summary_line(view.symbol(), &view.metrics()));
    println!();

    let mut history = Table::new(vec![("Date", Align::Left), ("Close", Align::Right)]);
    for point in view.series() {
        history.add_row(vec![
            point.date.format("%Y-%m-%d").to_string(),
            format!("{:.2}", point.price),
        ]);
    }
    println!("{}", history.render());

    if !view.predictions().is_empty() {
        println!("Predictions:");
        let mut predicted = Table::new(vec![
            ("Date", Align::Left),
            ("Predicted", Align::Right),
            ("Change", Align::Right),
        ]);
        for point in view.predictions() {
            predicted.add_row(vec![
                point.date.format("%Y-%m-%d").to_string(),
                format!("{:.2}", point.predicted_price),
                utils::format_percentage(point.percentage_change),
            ]);
        }
        println!("{}", predicted.render());
    }
}
