//! Scripted walk through every operation, seeding sample clients on first run.

use super::print::{
    print_all, print_banner, print_client, print_error, print_messages, ViewOptions,
};
use clientbook::api::{ClientApi, ClientPatch, NewClient, SearchField, SortOrder};
use clientbook::error::Result;
use clientbook::model::{ClientId, Purchase};
use clientbook::store::DataStore;

const MISSING_ID: ClientId = 9999;
const DELETED_ID: ClientId = 2;

struct Seed {
    name: &'static str,
    city: &'static str,
    phone: &'static str,
    tags: &'static [&'static str],
    purchases: &'static [(&'static str, i64)],
}

const SEEDS: &[Seed] = &[
    Seed {
        name: "Jean Mbarga",
        city: "Yaoundé",
        phone: "677123456",
        tags: &["fidèle", "vip", "entreprise"],
        purchases: &[
            ("2025-11-10", 75000),
            ("2025-12-15", 120000),
            ("2026-01-05", 85000),
        ],
    },
    Seed {
        name: "Marie Ngo",
        city: "Douala",
        phone: "699887766",
        tags: &["nouveau", "whatsapp", "particulier"],
        purchases: &[("2026-02-01", 45000), ("2026-02-03", 35000)],
    },
    Seed {
        name: "Paul Tchouassi",
        city: "Bafoussam",
        phone: "623456789",
        tags: &[],
        purchases: &[("2026-01-20", 125000)],
    },
];

const LATE_ADDITION: Seed = Seed {
    name: "Amina Diallo",
    city: "Maroua",
    phone: "655432109",
    tags: &["nouveau", "recommande"],
    purchases: &[("2026-02-05", 60000)],
};

fn add_seed<S: DataStore>(api: &mut ClientApi<S>, seed: &Seed) -> Result<ClientId> {
    let tags = seed.tags.iter().map(|t| t.to_string()).collect();
    let result = api.add_client(NewClient::new(seed.name, seed.city, seed.phone, tags))?;
    let id = result.affected_clients[0].id;
    for (date, amount) in seed.purchases {
        api.record_purchase(id, Purchase::new(*date, *amount))?;
    }
    Ok(id)
}

pub(crate) fn run<S: DataStore>(api: &mut ClientApi<S>, view: &ViewOptions) -> Result<()> {
    print_banner("AUTOMATIC DEMONSTRATION", '*');

    println!("\n1. Loading: {} client(s) found", api.clients().len());

    if api.is_empty() {
        println!("\n2. Creating {} sample clients...", SEEDS.len());
        for seed in SEEDS {
            add_seed(api, seed)?;
        }
        println!("   {} clients created", api.clients().len());
    }

    let listing = api.list()?;
    print_all(&listing.listed_clients, listing.summary, view);

    println!("\n3. Search by name (query: 'jean')");
    show_found(&api.search(SearchField::Name, "jean")?.listed_clients, view, true);

    println!("\n4. Search by city (query: 'yaoundé')");
    show_found(&api.search(SearchField::City, "yaoundé")?.listed_clients, view, false);

    println!("\n5. Sorted by name");
    for client in api.sorted(SortOrder::Name)?.listed_clients {
        println!("   - {}", client.name);
    }

    println!("\n6. Sorted by total spend (highest first)");
    for client in api.sorted(SortOrder::TotalSpend)?.listed_clients {
        println!("   - {}: {}", client.name, view.money(client.total_spend()));
    }

    println!("\n7. Updating a client (new city)");
    if let Some(first) = api.clients().first().cloned() {
        api.update_client(first.id, &ClientPatch::default().city("Garoua"))?;
        println!("   Client {}: {} -> Garoua", first.name, first.city);
    }

    println!("\n8. Deleting a missing id ({})", MISSING_ID);
    match api.delete_client(MISSING_ID) {
        Ok(_) => print_error("   ERROR: this should have failed"),
        Err(e) if e.is_not_found() => println!("   OK: error caught - {}", e),
        Err(e) => return Err(e),
    }

    println!("\n9. Deleting an existing client (id {})", DELETED_ID);
    match api.delete_client(DELETED_ID) {
        Ok(result) => print_messages(&result.messages),
        Err(e) if e.is_not_found() => print_error(format!("   {}", e)),
        Err(e) => return Err(e),
    }

    println!("\n10. Adding a new client");
    let id = add_seed(api, &LATE_ADDITION)?;
    println!("   New client added: {} (id {})", LATE_ADDITION.name, id);

    println!("\n11. Final listing");
    let listing = api.list()?;
    print_all(&listing.listed_clients, listing.summary, view);

    println!("\n12. Saving...");
    print_messages(&api.save()?.messages);

    print_banner("OPERATIONS DEMONSTRATED", '*');
    println!("- create: 3 sample clients + 1 new client");
    println!("- read: search by name and by city");
    println!("- update: city change");
    println!("- delete: one existing client");
    Ok(())
}

fn show_found(found: &[clientbook::model::Client], view: &ViewOptions, details: bool) {
    if found.is_empty() {
        println!("   No result");
    }
    for client in found {
        print_client(client, view, details);
    }
}
