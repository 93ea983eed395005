use crate::commands::ClientPatch;
use crate::error::Result;
use crate::model::{Client, ClientId};

use super::find;

/// Apply `patch` to the client with `id` and return the updated record.
pub fn run<'a>(
    clients: &'a mut [Client],
    id: ClientId,
    patch: &ClientPatch,
) -> Result<&'a mut Client> {
    let client = find::run_mut(clients, id)?;
    patch.apply(client);
    Ok(client)
}
