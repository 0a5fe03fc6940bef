use gap_similarity::{Document, SimilarityConfig, SimilarityEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // open gaps, already filtered by the caller (no closed or duplicate gaps)
    let backlog = vec![
        Document::from_gap(1, Some("Refund email missing"), Some("Customers get no confirmation after a refund"))?,
        Document::from_gap(2, Some("Login page error"), Some("Submit throws a 500 on the login page"))?,
        Document::from_gap(3, Some("Refund confirmation delayed"), None)?,
        Document::from_gap(4, Some("Pallet count mismatch"), Some("Warehouse counts differ from the system"))?,
    ];
    let target = Document::from_gap(
        10,
        Some("Refund confirmation email not sent"),
        Some("The customer never receives the refund confirmation email"),
    )?;

    let engine: SimilarityEngine = SimilarityEngine::new(SimilarityConfig::load()?)?;
    let results = engine.find_similar_with_threshold(&target, &backlog, 0.1)?;

    println!("Similar gaps for #{}:", target.id);
    for result in &results {
        println!("  gap #{} {:>3}%", result.id, result.score);
    }
    println!("{:#?}", engine.score_candidates(&target, &backlog));
    Ok(())
}
