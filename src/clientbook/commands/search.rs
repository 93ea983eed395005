use crate::commands::SearchField;
use crate::model::Client;

pub fn by_name<'a>(clients: &'a [Client], query: &str) -> Vec<&'a Client> {
    run(clients, SearchField::Name, query)
}

pub fn by_city<'a>(clients: &'a [Client], query: &str) -> Vec<&'a Client> {
    run(clients, SearchField::City, query)
}

/// Case-insensitive substring match on one field, in collection order.
pub fn run<'a>(clients: &'a [Client], field: SearchField, query: &str) -> Vec<&'a Client> {
    let needle = query.trim().to_lowercase();
    clients
        .iter()
        .filter(|c| {
            let haystack = match field {
                SearchField::Name => &c.name,
                SearchField::City => &c.city,
            };
            haystack.to_lowercase().contains(&needle)
        })
        .collect()
}
