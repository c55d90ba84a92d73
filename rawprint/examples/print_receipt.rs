//! Print the sample receipt and the feature demo page

use rawprint::Printer;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // Change to your printer IP
    let ip = std::env::var("PRINTER_IP").unwrap_or_else(|_| "192.168.1.100".to_string());

    let printer = Printer::new(ip, rawprint::DEFAULT_PORT);

    let result = printer.print_sample_receipt().await;
    println!("receipt: {result}");

    let result = printer.print_demo().await;
    println!("demo: {result}");
}
