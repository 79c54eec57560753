use anyhow::Result;
use quill_client::{DraftSession, GenerationRequest, GeneratorClient, Tone};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let base_url =
        std::env::var("QUILL_API_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    let client = GeneratorClient::new(base_url)?;

    let request =
        GenerationRequest::new("The history of fountain pens", "collectors").with_tone(Tone::Formal);

    let frames = client.generate_stream(&request).await?;

    let mut session = DraftSession::new();
    session
        .run_frames(frames, |draft| {
            print!("\r{} | {} chars", draft.title, draft.content.len());
            let _ = std::io::Write::flush(&mut std::io::stdout());
        })
        .await?;

    println!("\nphase: {:?}", session.phase());
    println!("\n# {}\n\n{}", session.draft().title, session.draft().content);

    Ok(())
}
