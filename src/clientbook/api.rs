//! # API Layer
//!
//! [`ClientApi`] is the single entry point for front ends. It owns a
//! [`DataStore`] and the collection loaded from it, forwards each operation to
//! the matching function in [`commands`], and wraps the outcome in a
//! [`CmdResult`] (affected or listed clients, an optional summary, and
//! messages for the user).
//!
//! Mutations only touch the in-memory collection. Nothing reaches the store
//! until [`ClientApi::save`] is called.
//!
//! The API never prints and never exits; that is the front end's job.

use crate::commands;
use crate::error::Result;
use crate::model::{Client, ClientId, Purchase};
use crate::store::DataStore;
use tracing::{debug, info};

pub struct ClientApi<S: DataStore> {
    store: S,
    paths: commands::ClientbookPaths,
    clients: Vec<Client>,
}

impl<S: DataStore> ClientApi<S> {
    /// Load the collection from `store`.
    pub fn open(store: S, paths: commands::ClientbookPaths) -> Result<Self> {
        let clients = store.load()?;
        debug!(count = clients.len(), "client collection opened");
        Ok(Self {
            store,
            paths,
            clients,
        })
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    pub fn paths(&self) -> &commands::ClientbookPaths {
        &self.paths
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn list(&self) -> Result<CmdResult> {
        let summary = commands::summary::run(&self.clients);
        Ok(CmdResult::default()
            .with_listed_clients(self.clients.clone())
            .with_summary(summary))
    }

    pub fn get_client(&self, id: ClientId) -> Result<CmdResult> {
        let client = commands::find::run(&self.clients, id)?;
        Ok(CmdResult::default().with_listed_clients(vec![client.clone()]))
    }

    pub fn add_client(&mut self, draft: NewClient) -> Result<CmdResult> {
        let client = commands::add::run(&mut self.clients, draft)?.clone();
        info!(id = client.id, "client added");

        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!(
            "Client added (id {}): {}",
            client.id, client.name
        )));
        Ok(result.with_affected_clients(vec![client]))
    }

    pub fn update_client(&mut self, id: ClientId, patch: &ClientPatch) -> Result<CmdResult> {
        let mut result = CmdResult::default();
        if patch.is_empty() {
            result.add_message(CmdMessage::info(format!(
                "Nothing to change for client {}",
                id
            )));
        }

        let client = commands::modify::run(&mut self.clients, id, patch)?.clone();
        if !patch.is_empty() {
            info!(id, "client updated");
            result.add_message(CmdMessage::success(format!(
                "Client updated (id {}): {}",
                client.id, client.name
            )));
        }
        Ok(result.with_affected_clients(vec![client]))
    }

    pub fn delete_client(&mut self, id: ClientId) -> Result<CmdResult> {
        let removed = commands::delete::run(&mut self.clients, id)?;
        info!(id, "client deleted");

        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!(
            "Client deleted (id {}): {}",
            removed.id, removed.name
        )));
        Ok(result.with_affected_clients(vec![removed]))
    }

    pub fn record_purchase(&mut self, id: ClientId, purchase: Purchase) -> Result<CmdResult> {
        let message = format!(
            "Purchase of {} recorded on {}",
            purchase.amount, purchase.date
        );
        let client = commands::purchase::run(&mut self.clients, id, purchase)?.clone();
        info!(id, total = client.total_spend(), "purchase recorded");

        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!("{} for {}", message, client.name)));
        Ok(result.with_affected_clients(vec![client]))
    }

    pub fn search(&self, field: SearchField, query: &str) -> Result<CmdResult> {
        let found = commands::search::run(&self.clients, field, query);
        let mut result = CmdResult::default();
        if found.is_empty() {
            result.add_message(CmdMessage::info("No client found."));
        }
        Ok(result.with_listed_clients(commands::cloned(found)))
    }

    pub fn sorted(&self, order: SortOrder) -> Result<CmdResult> {
        let sorted = commands::sort::run(&self.clients, order);
        Ok(CmdResult::default().with_listed_clients(commands::cloned(sorted)))
    }

    /// Write the current collection to the store.
    pub fn save(&mut self) -> Result<CmdResult> {
        self.store.save(&self.clients)?;
        info!(count = self.clients.len(), "client collection saved");

        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!(
            "Saved {} client(s) to {}",
            self.clients.len(),
            self.paths.data_file.display()
        )));
        Ok(result)
    }

    /// Drop unsaved changes and load the collection again.
    pub fn reload(&mut self) -> Result<()> {
        self.clients = self.store.load()?;
        debug!(count = self.clients.len(), "client collection reloaded");
        Ok(())
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{
    ClientPatch, ClientbookPaths, CmdMessage, CmdResult, MessageLevel, NewClient, SearchField,
    SortOrder, Summary,
};
