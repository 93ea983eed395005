/// Identifier assigned by the collection when a client is added.
pub type ClientId = u64;

/// A single dated purchase. Dates are kept as the caller supplied them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Purchase {
    pub date: String,
    pub amount: i64,
}

impl Purchase {
    pub fn new(date: impl Into<String>, amount: i64) -> Self {
        Self {
            date: date.into(),
            amount,
        }
    }
}

impl<D: Into<String>> From<(D, i64)> for Purchase {
    fn from((date, amount): (D, i64)) -> Self {
        Purchase::new(date, amount)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub city: String,
    pub phone: String,
    pub tags: Vec<String>,
    pub purchases: Vec<Purchase>,
}

impl Client {
    /// Sum of every purchase amount, zero when there are none.
    pub fn total_spend(&self) -> i64 {
        total_spend(self)
    }

    pub fn push_purchase(&mut self, purchase: impl Into<Purchase>) {
        self.purchases.push(purchase.into());
    }

    /// The last `count` purchases, oldest first.
    pub fn recent_purchases(&self, count: usize) -> &[Purchase] {
        let start = self.purchases.len().saturating_sub(count);
        &self.purchases[start..]
    }
}

/// Sum of purchase amounts, saturating at `i64::MAX`.
pub fn total_spend(client: &Client) -> i64 {
    client
        .purchases
        .iter()
        .fold(0i64, |acc, p| acc.saturating_add(p.amount))
}

pub(crate) fn trim_tags<I, T>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    tags.into_iter()
        .map(|t| t.as_ref().trim().to_string())
        .collect()
}
