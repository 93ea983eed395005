//! # Service Layer
//!
//! Plain functions over a caller-owned collection (`Vec<Client>` or a slice of
//! it). Mutating operations change the collection in place; searches and
//! sorts hand back new vectors of references and leave the collection order
//! alone.
//!
//! The types shared by the API facade (`CmdResult`, `CmdMessage`, the input
//! structs) live here too.

use crate::config::ClientbookConfig;
use crate::model::{trim_tags, Client};
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod find;
pub mod modify;
pub mod purchase;
pub mod search;
pub mod sort;
pub mod summary;

#[derive(Debug, Clone)]
pub struct ClientbookPaths {
    pub config_dir: PathBuf,
    pub data_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Aggregate spend over a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub count: usize,
    pub total_spend: i64,
    /// Integer average per client, zero for an empty collection.
    pub average_spend: i64,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_clients: Vec<Client>,
    pub listed_clients: Vec<Client>,
    pub summary: Option<Summary>,
    pub config: Option<ClientbookConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_clients(mut self, clients: Vec<Client>) -> Self {
        self.affected_clients = clients;
        self
    }

    pub fn with_listed_clients(mut self, clients: Vec<Client>) -> Self {
        self.listed_clients = clients;
        self
    }

    pub fn with_summary(mut self, summary: Summary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_config(mut self, config: ClientbookConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Fields for a client that does not exist yet. Trimming happens on insert.
#[derive(Debug, Clone, Default)]
pub struct NewClient {
    pub name: String,
    pub city: String,
    pub phone: String,
    pub tags: Vec<String>,
}

impl NewClient {
    pub fn new(
        name: impl Into<String>,
        city: impl Into<String>,
        phone: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            city: city.into(),
            phone: phone.into(),
            tags,
        }
    }
}

/// Partial update: `Some` overwrites the field, `None` leaves it alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientPatch {
    pub name: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl ClientPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.city.is_none() && self.phone.is_none() && self.tags.is_none()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub(crate) fn apply(&self, client: &mut Client) {
        if let Some(name) = &self.name {
            client.name = name.trim().to_string();
        }
        if let Some(city) = &self.city {
            client.city = city.trim().to_string();
        }
        if let Some(phone) = &self.phone {
            client.phone = phone.trim().to_string();
        }
        if let Some(tags) = &self.tags {
            client.tags = trim_tags(tags);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Name,
    City,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Name,
    TotalSpend,
}

pub(crate) fn cloned(clients: Vec<&Client>) -> Vec<Client> {
    clients.into_iter().cloned().collect()
}
