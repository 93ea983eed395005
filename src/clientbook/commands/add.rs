use crate::commands::NewClient;
use crate::error::{ClientError, Result};
use crate::model::{trim_tags, Client, ClientId};

/// Next id for `clients`: one past the highest id, or 1 when empty.
pub fn next_id(clients: &[Client]) -> Result<ClientId> {
    match clients.iter().map(|c| c.id).max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or(ClientError::IdsExhausted(max)),
    }
}

/// Append a new client and return the live record.
pub fn run(clients: &mut Vec<Client>, draft: NewClient) -> Result<&mut Client> {
    let client = Client {
        id: next_id(clients)?,
        name: draft.name.trim().to_string(),
        city: draft.city.trim().to_string(),
        phone: draft.phone.trim().to_string(),
        tags: trim_tags(&draft.tags),
        purchases: Vec::new(),
    };
    clients.push(client);
    let last = clients.len() - 1;
    Ok(&mut clients[last])
}
