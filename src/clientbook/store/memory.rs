use super::DataStore;
use crate::error::Result;
use crate::model::Client;

/// Keeps the last saved collection in memory. Nothing is persisted.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    clients: Vec<Client>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clients(clients: Vec<Client>) -> Self {
        Self { clients, saves: 0 }
    }

    /// Number of times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn saved(&self) -> &[Client] {
        &self.clients
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Client>> {
        Ok(self.clients.clone())
    }

    fn save(&mut self, clients: &[Client]) -> Result<()> {
        self.clients = clients.to_vec();
        self.saves += 1;
        Ok(())
    }
}
