use crate::error::{ClientError, Result};
use crate::model::{Client, ClientId};

pub fn run(clients: &[Client], id: ClientId) -> Result<&Client> {
    clients
        .iter()
        .find(|c| c.id == id)
        .ok_or(ClientError::ClientNotFound(id))
}

pub fn run_mut(clients: &mut [Client], id: ClientId) -> Result<&mut Client> {
    clients
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or(ClientError::ClientNotFound(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::demo_clients;

    #[test]
    fn finds_by_id() {
        let clients = demo_clients();
        assert_eq!(run(&clients, 2).unwrap().name, "Marie Ngo");
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut clients = demo_clients();
        assert!(matches!(run(&clients, 99), Err(ClientError::ClientNotFound(99))));
        assert!(run_mut(&mut clients, 0).unwrap_err().is_not_found());
    }
}
