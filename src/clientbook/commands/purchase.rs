use crate::error::Result;
use crate::model::{Client, ClientId, Purchase};

use super::find;

/// Append `purchase` to the history of the client with `id`.
pub fn run(clients: &mut [Client], id: ClientId, purchase: Purchase) -> Result<&mut Client> {
    let client = find::run_mut(clients, id)?;
    client.purchases.push(purchase);
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::demo_clients;

    #[test]
    fn appends_to_end_of_history() {
        let mut clients = demo_clients();
        let client = run(&mut clients, 3, Purchase::new("2026-02-10", 5000)).unwrap();

        assert_eq!(client.purchases.len(), 2);
        assert_eq!(client.purchases[1], Purchase::new("2026-02-10", 5000));
        assert_eq!(client.total_spend(), 130000);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut clients = demo_clients();
        assert!(run(&mut clients, 8, Purchase::new("2026-02-10", 1))
            .unwrap_err()
            .is_not_found());
    }
}
