//! Grounded Fact Checker
//!
//! Interactive terminal front-end: enter a claim, get a verdict with a
//! detailed analysis and the cited sources. One check runs at a time; the
//! prompt comes back in every outcome.

use std::io::{self, Write};
use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use claimcheck::{Analysis, CheckerConfig, ClaimChecker, GeminiProvider, Verdict};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("claimcheck=info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    println!("\n{}", "═".repeat(60));
    println!("🔎 Grounded Fact Checker v0.1.0");
    println!("{}", "═".repeat(60));
    println!("Verdicts: TRUE | FALSE | NEEDS REVIEW | UNVERIFIABLE");
    println!("{}\n", "═".repeat(60));

    let config = CheckerConfig::from_env()?;
    let provider = Arc::new(GeminiProvider::new(&config));
    let checker = ClaimChecker::new(provider);

    println!("💡 Enter a claim to fact-check, or 'quit' to exit.\n");

    loop {
        print!("📝 Claim: ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let claim = input.trim();

        if claim.is_empty() {
            continue;
        }
        if matches!(claim.to_lowercase().as_str(), "quit" | "exit" | "q") {
            println!("\n👋 Goodbye!\n");
            break;
        }

        println!("\n⚙️  Checking...\n");

        match checker.check(claim).await {
            Ok(analysis) => render_analysis(&analysis),
            Err(e) => println!("❌ {}\n", e),
        }
    }

    Ok(())
}

/// Render one fact-check result to the terminal
fn render_analysis(analysis: &Analysis) {
    let badge = match analysis.verdict {
        Verdict::True => "✅",
        Verdict::False => "❌",
        Verdict::NeedsReview => "⚠️",
        Verdict::Unverifiable => "❓",
    };

    println!("{} Verdict: {}", badge, analysis.verdict);
    println!("{}", "─".repeat(50));
    println!("{}", analysis.body);
    println!("{}", "─".repeat(50));

    println!("🔗 Sources:");
    if analysis.sources.is_empty() {
        println!("   No specific sources were cited in the grounded search process.");
    } else {
        for (i, source) in analysis.sources.iter().enumerate() {
            println!("   [{}] {}", i + 1, source.title);
            println!("       {}", source.uri);
        }
    }
    println!();
}
