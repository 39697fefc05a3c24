//! Order extraction demo: one schema-constrained completion returning a
//! strict JSON order record.

use cambist::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let bundle = openai_bundle_from_env()?;
    let service = extraction_service(bundle.provider);

    let request = ExtractionRequest::new(
        bundle.model,
        "Order A-1029 by Sarah Johnson (sarah.johnson@example.com): \
         2x Water Bottle ($12.50 each), 1x Carrying Pouch ($5). Total $30.",
        order_extraction_format(),
    )
    .with_system_prompt("Return ONLY a JSON object matching the schema.");

    let result = service.extract(request).await?;
    println!("{}", result.raw_json);

    Ok(())
}
