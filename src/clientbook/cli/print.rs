use clientbook::api::{CmdMessage, MessageLevel, Summary};
use clientbook::model::Client;
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

const RULE_WIDTH: usize = 60;
const NAME_WIDTH: usize = 15;
const CITY_WIDTH: usize = 10;

/// Display settings taken from the config file.
#[derive(Debug, Clone)]
pub(crate) struct ViewOptions {
    pub currency: String,
    pub recent_purchases: usize,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            currency: "FCFA".into(),
            recent_purchases: 3,
        }
    }
}

impl ViewOptions {
    pub(crate) fn money(&self, amount: i64) -> String {
        format!("{} {}", amount, self.currency)
    }
}

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(crate) fn print_error(content: impl std::fmt::Display) {
    println!("{}", content.to_string().red());
}

pub(crate) fn print_banner(title: &str, fill: char) {
    let rule = fill.to_string().repeat(RULE_WIDTH);
    println!();
    println!("{}", rule);
    println!("{}", title.bold());
    println!("{}", rule);
}

/// One-line summary of a client, without colors.
pub(crate) fn client_line(client: &Client, view: &ViewOptions) -> String {
    let mut line = format!(
        "ID:{} | {} | {} | Tel: {}",
        client.id,
        pad_to_width(&client.name, NAME_WIDTH),
        pad_to_width(&client.city, CITY_WIDTH),
        client.phone
    );
    if !client.tags.is_empty() {
        line.push_str(&format!(" | Tags: {}", client.tags.join(",")));
    }
    line.push_str(&format!(" | Total: {}", view.money(client.total_spend())));
    line
}

pub(crate) fn print_client(client: &Client, view: &ViewOptions, details: bool) {
    println!("{}", client_line(client, view));

    if details && !client.purchases.is_empty() {
        println!("   Purchases:");
        for purchase in client.recent_purchases(view.recent_purchases) {
            println!(
                "     - {}: {}",
                purchase.date.dimmed(),
                view.money(purchase.amount)
            );
        }
    }
}

pub(crate) fn print_clients(clients: &[Client], view: &ViewOptions, details: bool) {
    for client in clients {
        print_client(client, view, details);
    }
}

/// Full listing with header and spend totals.
pub(crate) fn print_all(clients: &[Client], summary: Option<Summary>, view: &ViewOptions) {
    print_banner(&format!("CLIENTS ({} total)", clients.len()), '=');

    if clients.is_empty() {
        println!("{}", "No clients recorded yet.".dimmed());
        return;
    }

    print_clients(clients, view, false);

    if let Some(summary) = summary {
        println!();
        println!("Total spend: {}", view.money(summary.total_spend).green());
        println!("Average per client: {}", view.money(summary.average_spend));
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let current = s.width();
    if current >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clientbook::model::Purchase;

    fn client(tags: Vec<String>) -> Client {
        Client {
            id: 1,
            name: "Jean Mbarga".into(),
            city: "Yaoundé".into(),
            phone: "677123456".into(),
            tags,
            purchases: vec![
                Purchase::new("2025-11-10", 75000),
                Purchase::new("2025-12-15", 120000),
            ],
        }
    }

    #[test]
    fn line_pads_columns_by_display_width() {
        let line = client_line(&client(vec![]), &ViewOptions::default());
        assert_eq!(
            line,
            "ID:1 | Jean Mbarga     | Yaoundé    | Tel: 677123456 | Total: 195000 FCFA"
        );
    }

    #[test]
    fn line_lists_tags_when_present() {
        let line = client_line(
            &client(vec!["vip".into(), "fidèle".into()]),
            &ViewOptions::default(),
        );
        assert!(line.contains(" | Tags: vip,fidèle | "));
    }

    #[test]
    fn long_values_are_not_truncated() {
        assert_eq!(pad_to_width("Bafoussam-Centre", CITY_WIDTH), "Bafoussam-Centre");
    }

    #[test]
    fn money_uses_configured_currency() {
        let view = ViewOptions {
            currency: "XAF".into(),
            recent_purchases: 1,
        };
        assert_eq!(view.money(500), "500 XAF");
    }
}
