use crate::commands::SortOrder;
use crate::model::Client;

/// Alphabetical by name, ignoring case. Stable.
pub fn by_name(clients: &[Client]) -> Vec<&Client> {
    let mut sorted: Vec<&Client> = clients.iter().collect();
    sorted.sort_by_cached_key(|c| c.name.to_lowercase());
    sorted
}

/// Highest total spend first. Equal totals keep collection order.
pub fn by_total_spend(clients: &[Client]) -> Vec<&Client> {
    let mut sorted: Vec<&Client> = clients.iter().collect();
    sorted.sort_by(|a, b| b.total_spend().cmp(&a.total_spend()));
    sorted
}

pub fn run(clients: &[Client], order: SortOrder) -> Vec<&Client> {
    match order {
        SortOrder::Name => by_name(clients),
        SortOrder::TotalSpend => by_total_spend(clients),
    }
}
