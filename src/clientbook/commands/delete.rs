use crate::error::{ClientError, Result};
use crate::model::{Client, ClientId};

/// Remove the client with `id`, returning it.
pub fn run(clients: &mut Vec<Client>, id: ClientId) -> Result<Client> {
    let position = clients
        .iter()
        .position(|c| c.id == id)
        .ok_or(ClientError::ClientNotFound(id))?;
    Ok(clients.remove(position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::demo_clients;

    #[test]
    fn removes_and_keeps_other_ids() {
        let mut clients = demo_clients();
        let removed = run(&mut clients, 2).unwrap();

        assert_eq!(removed.name, "Marie Ngo");
        let ids: Vec<_> = clients.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn second_delete_is_not_found() {
        let mut clients = demo_clients();
        run(&mut clients, 1).unwrap();
        assert!(matches!(
            run(&mut clients, 1),
            Err(ClientError::ClientNotFound(1))
        ));
    }

    #[test]
    fn unknown_id_leaves_collection_untouched() {
        let mut clients = demo_clients();
        assert!(run(&mut clients, 9999).unwrap_err().is_not_found());
        assert_eq!(clients.len(), 3);
    }
}
