use crate::model::{Client, ClientId, Purchase};
use serde::{Deserialize, Serialize};

/// On-disk shape of one client. Field order here is the order written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredClient {
    pub id: ClientId,
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(rename = "ville")]
    pub city: String,
    #[serde(rename = "telephone")]
    pub phone: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Purchases as `[date, amount]` pairs.
    #[serde(rename = "historique_achats", default)]
    pub purchases: Vec<(String, i64)>,
}

impl From<&Client> for StoredClient {
    fn from(client: &Client) -> Self {
        Self {
            id: client.id,
            name: client.name.clone(),
            city: client.city.clone(),
            phone: client.phone.clone(),
            tags: client.tags.clone(),
            purchases: client
                .purchases
                .iter()
                .map(|p| (p.date.clone(), p.amount))
                .collect(),
        }
    }
}

impl From<StoredClient> for Client {
    fn from(stored: StoredClient) -> Self {
        Self {
            id: stored.id,
            name: stored.name,
            city: stored.city,
            phone: stored.phone,
            tags: stored.tags,
            purchases: stored.purchases.into_iter().map(Purchase::from).collect(),
        }
    }
}
