use crate::commands::Summary;
use crate::model::Client;

pub fn run(clients: &[Client]) -> Summary {
    let total_spend = clients
        .iter()
        .map(Client::total_spend)
        .fold(0i64, i64::saturating_add);
    let count = clients.len();
    let average_spend = if count == 0 {
        0
    } else {
        total_spend / count as i64
    };

    Summary {
        count,
        total_spend,
        average_spend,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::demo_clients;

    #[test]
    fn totals_and_averages() {
        let summary = run(&demo_clients());
        assert_eq!(summary.count, 3);
        assert_eq!(summary.total_spend, 485000);
        assert_eq!(summary.average_spend, 161666);
    }

    #[test]
    fn empty_collection_has_zero_average() {
        assert_eq!(run(&[]), Summary::default());
    }

    #[test]
    fn huge_totals_saturate() {
        let mut clients = demo_clients();
        clients[0].push_purchase(("2026-03-01", i64::MAX));
        clients[1].push_purchase(("2026-03-01", i64::MAX));

        let summary = run(&clients);
        assert_eq!(summary.total_spend, i64::MAX);
        assert_eq!(summary.average_spend, i64::MAX / 3);
    }
}
