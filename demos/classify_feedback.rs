//! # Feedback Classification Demo
//!
//! Tags a handful of storefront comments and prints the dashboard counts.
//!
//! Run with: cargo run --example classify_feedback

use feedback_sentiment::{FeedbackBook, FeedbackQuery, FeedbackSubmission, SentimentLabel};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    println!("=== Feedback Sentiment Demo ===\n");

    let comments = vec![
        ("Maya", "Amazing running shoes, super light!", 5),
        ("Tom", "The tent pole arrived broken", 2),
        ("Lee", "Good racket, nice grip", 4),
        ("Ana", "Delivery took a week", 3),
        ("Raj", "Love the jersey \u{1F389}", 5),
        ("Kim", "Sizes run small \u{1F622}", 3),
    ];

    let mut book = FeedbackBook::default();
    let classifier = book.classifier().clone();

    println!("{}", "=".repeat(70));
    for (name, message, rating) in comments {
        let explanation = classifier.explain(Some(message), rating);
        let record = book.submit(FeedbackSubmission {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            subject: "Product review".to_string(),
            message: message.to_string(),
            rating,
            user: None,
        })?;

        println!("\nComment: \"{}\" ({} stars)", record.message, record.rating);
        println!("{}", "-".repeat(60));
        println!("  Sentiment: {}", record.sentiment);
        println!("  Decided by: {:?}", explanation.stage);
        if let Some(weighted) = explanation.weighted {
            println!(
                "  Score: {} (positive {:?}, negative {:?}, rating bias {})",
                weighted.score,
                weighted.positive_matches,
                weighted.negative_matches,
                weighted.rating_bias
            );
        }
    }
    println!("\n{}", "=".repeat(70));

    println!("\n=== Dashboard ===\n");
    let stats = book.stats();
    println!("Total feedback: {}", stats.total);
    for label in SentimentLabel::ALL {
        println!(
            "  {:<8} {} ({:.0}%)",
            label.as_str(),
            stats.sentiment_count(label),
            stats.sentiment_share(label) * 100.0
        );
    }
    if let Some(avg) = stats.average_rating() {
        println!("Average rating: {:.2}", avg);
    }

    let latest = book.list(&FeedbackQuery::default().with_limit(3));
    println!("\nLatest {} of {}:", latest.feedback.len(), latest.total);
    for record in latest.feedback {
        println!("  [{}] {}: {}", record.sentiment, record.name, record.message);
    }

    println!("\n=== Live Preview ===\n");
    for draft in ["Great", "Great fit, bad zip", "Great fit, love it"] {
        println!("  {:<22} -> {}", format!("\"{}\"", draft), classifier.preview(draft));
    }

    Ok(())
}
