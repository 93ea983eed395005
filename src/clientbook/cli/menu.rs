use super::demo;
use super::input::{self, Prompter};
use super::print::{
    print_all, print_banner, print_client, print_clients, print_error, print_messages, ViewOptions,
};
use clientbook::api::{ClientApi, SearchField, SortOrder};
use clientbook::error::{ClientError, Result};
use clientbook::model::{ClientId, Purchase};
use clientbook::store::DataStore;
use std::io::BufRead;

enum Flow {
    Continue,
    Quit,
}

/// Run the numbered menu until the user saves and quits or input runs out.
/// Running out of input leaves without saving.
pub(crate) fn run<S: DataStore, R: BufRead>(
    api: &mut ClientApi<S>,
    view: &ViewOptions,
    input: R,
) -> Result<()> {
    let mut prompter = Prompter::new(input);

    loop {
        print_menu();
        let Some(choice) = prompter.ask("Your choice (1-9): ")? else {
            return input_closed();
        };

        let flow = match choice.as_str() {
            "1" => list(api, view),
            "2" => add(api, &mut prompter),
            "3" => search(api, view, &mut prompter),
            "4" => sort(api, view, &mut prompter),
            "5" => modify(api, view, &mut prompter),
            "6" => delete(api, view, &mut prompter),
            "7" => purchase(api, view, &mut prompter),
            "8" => {
                demo::run(api, view)?;
                api.reload()?;
                Ok(Flow::Continue)
            }
            "9" => {
                println!("\nSaving before leaving...");
                print_messages(&api.save()?.messages);
                println!("Goodbye!");
                return Ok(());
            }
            _ => {
                print_error("Invalid choice, please try again");
                Ok(Flow::Continue)
            }
        };

        match recover(flow)? {
            Flow::Quit => return input_closed(),
            Flow::Continue => {}
        }

        if prompter.ask("\nPress Enter to continue...")?.is_none() {
            return input_closed();
        }
    }
}

fn print_menu() {
    print_banner("MAIN MENU", '=');
    println!("1. Show all clients");
    println!("2. Add a client");
    println!("3. Search clients");
    println!("4. Sort clients");
    println!("5. Modify a client");
    println!("6. Delete a client");
    println!("7. Add a purchase to a client");
    println!("8. Run the automatic demo");
    println!("9. Save and quit");
    println!("{}", "-".repeat(40));
}

fn input_closed() -> Result<()> {
    println!("Input closed, leaving without saving.");
    Ok(())
}

/// Not-found, id and validation errors are shown and the menu goes on.
fn recover(flow: Result<Flow>) -> Result<Flow> {
    match flow {
        Ok(flow) => Ok(flow),
        Err(
            e @ (ClientError::ClientNotFound(_)
            | ClientError::IdsExhausted(_)
            | ClientError::Api(_)),
        ) => {
            print_error(e);
            Ok(Flow::Continue)
        }
        Err(e) => Err(e),
    }
}

macro_rules! ask_or_quit {
    ($prompter:expr, $label:expr) => {
        match $prompter.ask($label)? {
            Some(answer) => answer,
            None => return Ok(Flow::Quit),
        }
    };
}

fn list<S: DataStore>(api: &ClientApi<S>, view: &ViewOptions) -> Result<Flow> {
    let result = api.list()?;
    print_all(&result.listed_clients, result.summary, view);
    Ok(Flow::Continue)
}

fn ask_id<R: BufRead>(prompter: &mut Prompter<R>, label: &str) -> Result<Option<ClientId>> {
    match prompter.ask(label)? {
        Some(raw) => input::parse_id(&raw).map(Some),
        None => Ok(None),
    }
}

fn add<S: DataStore, R: BufRead>(
    api: &mut ClientApi<S>,
    prompter: &mut Prompter<R>,
) -> Result<Flow> {
    println!("\n--- ADD A CLIENT ---");
    let name = ask_or_quit!(prompter, "Name: ");
    let city = ask_or_quit!(prompter, "City: ");
    let phone = ask_or_quit!(prompter, "Phone (9 digits): ");
    let tags = ask_or_quit!(prompter, "Tags (comma separated): ");

    let draft = input::new_client(&name, &city, &phone, &tags)?;
    let result = api.add_client(draft)?;
    print_messages(&result.messages);
    let id = result.affected_clients[0].id;

    match prompter.confirm("Add a purchase now?")? {
        None => return Ok(Flow::Quit),
        Some(false) => {}
        Some(true) => {
            let raw = ask_or_quit!(prompter, "Purchase amount: ");
            let amount = input::parse_amount(&raw)?;
            let result = api.record_purchase(id, Purchase::new(input::today(), amount))?;
            print_messages(&result.messages);
        }
    }
    Ok(Flow::Continue)
}

fn search<S: DataStore, R: BufRead>(
    api: &ClientApi<S>,
    view: &ViewOptions,
    prompter: &mut Prompter<R>,
) -> Result<Flow> {
    println!("\n--- SEARCH ---");
    println!("1. By name");
    println!("2. By city");
    let field = match ask_or_quit!(prompter, "Your choice: ").as_str() {
        "1" => SearchField::Name,
        "2" => SearchField::City,
        _ => {
            print_error("Invalid choice");
            return Ok(Flow::Continue);
        }
    };
    let query = ask_or_quit!(prompter, "Search for: ");

    let result = api.search(field, &query)?;
    if !result.listed_clients.is_empty() {
        println!("\n{} client(s) found:", result.listed_clients.len());
    }
    print_clients(&result.listed_clients, view, true);
    print_messages(&result.messages);
    Ok(Flow::Continue)
}

fn sort<S: DataStore, R: BufRead>(
    api: &ClientApi<S>,
    view: &ViewOptions,
    prompter: &mut Prompter<R>,
) -> Result<Flow> {
    println!("\n--- SORT ---");
    println!("1. By name (A-Z)");
    println!("2. By total spend (highest first)");
    let (order, title) = match ask_or_quit!(prompter, "Your choice: ").as_str() {
        "1" => (SortOrder::Name, "Clients sorted by name"),
        "2" => (SortOrder::TotalSpend, "Clients sorted by spend"),
        _ => {
            print_error("Invalid choice");
            return Ok(Flow::Continue);
        }
    };

    println!("\n{}:", title);
    print_clients(&api.sorted(order)?.listed_clients, view, false);
    Ok(Flow::Continue)
}

fn modify<S: DataStore, R: BufRead>(
    api: &mut ClientApi<S>,
    view: &ViewOptions,
    prompter: &mut Prompter<R>,
) -> Result<Flow> {
    list(api, view)?;
    let Some(id) = ask_id(prompter, "\nId of the client to modify: ")? else {
        return Ok(Flow::Quit);
    };

    println!("Leave blank to keep the current value");
    let name = ask_or_quit!(prompter, "New name: ");
    let city = ask_or_quit!(prompter, "New city: ");
    let phone = ask_or_quit!(prompter, "New phone: ");
    let tags = ask_or_quit!(prompter, "New tags (comma separated): ");

    let patch = input::patch(Some(&name), Some(&city), Some(&phone), Some(&tags))?;
    let result = api.update_client(id, &patch)?;
    print_messages(&result.messages);
    Ok(Flow::Continue)
}

fn delete<S: DataStore, R: BufRead>(
    api: &mut ClientApi<S>,
    view: &ViewOptions,
    prompter: &mut Prompter<R>,
) -> Result<Flow> {
    list(api, view)?;
    let Some(id) = ask_id(prompter, "\nId of the client to delete: ")? else {
        return Ok(Flow::Quit);
    };

    match prompter.confirm(&format!("Really delete client {}?", id))? {
        None => Ok(Flow::Quit),
        Some(false) => {
            println!("Deletion cancelled");
            Ok(Flow::Continue)
        }
        Some(true) => {
            print_messages(&api.delete_client(id)?.messages);
            Ok(Flow::Continue)
        }
    }
}

fn purchase<S: DataStore, R: BufRead>(
    api: &mut ClientApi<S>,
    view: &ViewOptions,
    prompter: &mut Prompter<R>,
) -> Result<Flow> {
    println!("\n--- ADD A PURCHASE ---");
    list(api, view)?;
    let Some(id) = ask_id(prompter, "\nClient id: ")? else {
        return Ok(Flow::Quit);
    };

    let found = api.get_client(id)?;
    println!("Client: {}", found.listed_clients[0].name);

    let raw_amount = ask_or_quit!(prompter, "Purchase amount: ");
    let raw_date = ask_or_quit!(prompter, "Date (YYYY-MM-DD, blank for today): ");
    let amount = input::parse_amount(&raw_amount)?;
    let date = input::parse_date(Some(&raw_date))?;

    let result = api.record_purchase(id, Purchase::new(date, amount))?;
    print_messages(&result.messages);
    if let Some(client) = result.affected_clients.first() {
        print_client(client, view, true);
    }
    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clientbook::api::ClientbookPaths;
    use clientbook::store::memory::InMemoryStore;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn api() -> ClientApi<InMemoryStore> {
        let paths = ClientbookPaths {
            config_dir: PathBuf::from("/tmp/clientbook-menu"),
            data_file: PathBuf::from("/tmp/clientbook-menu/clients.json"),
        };
        ClientApi::open(InMemoryStore::new(), paths).unwrap()
    }

    fn drive(api: &mut ClientApi<InMemoryStore>, script: &str) {
        run(api, &ViewOptions::default(), Cursor::new(script.to_string())).unwrap();
    }

    #[test]
    fn add_with_purchase_then_save() {
        let mut api = api();
        drive(
            &mut api,
            "2\nJean Mbarga\nYaoundé\n677123456\nvip, fidèle\ny\n75000\n\n9\n",
        );

        let saved = api.store().saved();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].tags, vec!["vip", "fidèle"]);
        assert_eq!(saved[0].total_spend(), 75000);
        assert_eq!(saved[0].purchases[0].date, input::today());
    }

    #[test]
    fn invalid_phone_adds_nothing() {
        let mut api = api();
        drive(&mut api, "2\nJean\nYaoundé\n12345\n\n\n9\n");
        assert!(api.store().saved().is_empty());
        assert_eq!(api.store().save_count(), 1);
    }

    #[test]
    fn end_of_input_does_not_save() {
        let mut api = api();
        drive(&mut api, "2\nJean\nYaoundé\n677123456\n\nn\n");
        assert_eq!(api.clients().len(), 1);
        assert_eq!(api.store().save_count(), 0);
    }

    #[test]
    fn modify_keeps_blank_fields() {
        let mut api = api();
        drive(
            &mut api,
            "2\nJean\nYaoundé\n677123456\n\nn\n\n5\n1\n\nGaroua\n\n\n\n9\n",
        );
        let client = &api.store().saved()[0];
        assert_eq!(client.name, "Jean");
        assert_eq!(client.city, "Garoua");
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut api = api();
        drive(
            &mut api,
            "2\nJean\nYaoundé\n677123456\n\nn\n\n6\n1\nn\n\n6\n1\ny\n\n9\n",
        );
        assert!(api.store().saved().is_empty());
    }

    #[test]
    fn purchase_for_unknown_client_keeps_going() {
        let mut api = api();
        drive(&mut api, "7\n42\n\n1\n\n9\n");
        assert_eq!(api.store().save_count(), 1);
    }

    #[test]
    fn purchase_with_explicit_date() {
        let mut api = api();
        drive(
            &mut api,
            "2\nMarie\nDouala\n699887766\n\nn\n\n7\n1\n45000\n2026-02-01\n\n9\n",
        );
        let client = &api.store().saved()[0];
        assert_eq!(client.purchases, vec![Purchase::new("2026-02-01", 45000)]);
    }

    #[test]
    fn unknown_choice_is_reported() {
        let mut api = api();
        drive(&mut api, "x\n\n9\n");
        assert_eq!(api.store().save_count(), 1);
    }
}
