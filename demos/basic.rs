use fitclub_http::{ClientOptions, FitClubClient, Lead, RetryPolicy};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let base_url = std::env::var("FITCLUB_BASE_URL")?;

    let club = FitClubClient::new(base_url).with_options(ClientOptions {
        timeout_ms: 10_000,
        max_attempts: 3,
        backoff_base_ms: 1_000,
        retry: RetryPolicy::default(),
    });

    for session in club.class_schedule().await? {
        println!(
            "{} {} {} ({} spots left)",
            session.weekday,
            session.start,
            session.name,
            session
                .spots_left
                .map_or("?".to_owned(), |spots| spots.to_string())
        );
    }

    for plan in club.membership_plans().await? {
        println!("{}: {} cents per {:?}", plan.name, plan.price_cents, plan.period);
    }

    let receipt = club
        .submit_lead(&Lead::new("Kit", "kit@example.com").with_message("Interested in a trial week"))
        .await?;
    println!("lead received: {} ticket: {:?}", receipt.received, receipt.ticket_id);

    Ok(())
}
