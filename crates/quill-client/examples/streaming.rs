use anyhow::Result;
use quill_client::{GenerationRequest, GeneratorClient, Length, Tone};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let base_url =
        std::env::var("QUILL_API_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    let client = GeneratorClient::new(base_url)?;

    let request = GenerationRequest::new("Why cats purr", "curious pet owners")
        .with_tone(Tone::Casual)
        .with_length(Length::Short);

    println!("Generating...\n");

    let draft = client
        .generate(&request, |draft| {
            println!(
                "[update] title: {:?}, content: {} chars",
                draft.title,
                draft.content.len()
            );
        })
        .await?;

    println!("\n# {}\n", draft.title);
    println!("{}", draft.content);

    Ok(())
}
