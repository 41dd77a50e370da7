//! Public site information commands. No session required.

use atelier_client::{AvailabilityProvider, CmsClient, SyntheticAvailability};
use chrono::Local;

use super::{CommandError, into_result, print_json};

/// Show the public configuration map.
pub async fn configurations(client: &CmsClient) -> Result<(), CommandError> {
    let map = into_result(client.public().configurations().await)?;
    print_json(&map)
}

/// Show the aggregated public site info.
pub async fn info(client: &CmsClient) -> Result<(), CommandError> {
    let info = into_result(client.public().site_info().await)?;
    print_json(&info)
}

/// Show upcoming consultation availability.
pub async fn schedule(days: u32, seed: Option<u64>) -> Result<(), CommandError> {
    let provider = seed.map_or_else(SyntheticAvailability::default, SyntheticAvailability::seeded);

    let today = Local::now().date_naive();
    for day in provider.day_schedules(today, days).await {
        if !day.has_availability() {
            println!("{}  fully booked", day.date);
            continue;
        }
        let open: Vec<String> = day
            .slots
            .iter()
            .filter(|slot| slot.available)
            .map(|slot| slot.time.format("%H:%M").to_string())
            .collect();
        println!("{}  {}", day.date, open.join(" "));
    }
    Ok(())
}
