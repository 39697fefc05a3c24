//! Currency mini-agent demo: the model answers conversion questions by
//! calling the locally registered currency tools.

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
    let service = currency_loop(bundle.provider, bundle.model);

    let demos = [
        ("demo-1", "Convert 100 USD to THB"),
        ("demo-2", "Convert 250 baht to euros"),
        ("demo-3", "Convert 10 ABC to USD"),
    ];

    for (session_id, prompt) in demos {
        println!("\n--- {session_id} ---");
        let request = ToolLoopRequest::new(session_id, prompt).with_temperature(0.2);
        let result = service.run_loop(request).await?;

        match result.outcome {
            LoopOutcome::Answered(text) => println!("FINAL: {text}"),
            LoopOutcome::Exhausted => println!(
                "NO ANSWER: round cap reached after {} provider calls",
                result.rounds_used
            ),
        }
    }

    Ok(())
}
