//! Front-end validation. The library accepts any strings and amounts; these
//! rules are what the command line and the menu enforce before calling it.

use chrono::{Local, NaiveDate};
use clientbook::api::{ClientPatch, NewClient};
use clientbook::error::{ClientError, Result};
use clientbook::model::ClientId;
use std::io::{self, BufRead, Write};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Local phone numbers: 9 digits, leading 2, 3, 6 or 7.
pub(crate) fn validate_phone(phone: &str) -> Result<()> {
    let phone = phone.trim();
    let valid = phone.len() == 9
        && phone.bytes().all(|b| b.is_ascii_digit())
        && matches!(phone.as_bytes()[0], b'2' | b'3' | b'6' | b'7');
    if valid {
        Ok(())
    } else {
        Err(ClientError::Api(
            "Invalid phone number (9 digits, starting with 2, 3, 6 or 7)".into(),
        ))
    }
}

pub(crate) fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

pub(crate) fn parse_amount(raw: &str) -> Result<i64> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ClientError::Api(format!("Invalid amount: '{}'", raw)));
    }
    raw.parse()
        .map_err(|_| ClientError::Api(format!("Amount too large: {}", raw)))
}

pub(crate) fn parse_id(raw: &str) -> Result<ClientId> {
    raw.trim()
        .parse()
        .map_err(|_| ClientError::Api(format!("Invalid id: '{}'", raw.trim())))
}

/// `YYYY-MM-DD`, or today when blank.
pub(crate) fn parse_date(raw: Option<&str>) -> Result<String> {
    match raw.map(str::trim).filter(|d| !d.is_empty()) {
        None => Ok(today()),
        Some(date) => {
            NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| {
                ClientError::Api(format!("Invalid date '{}' (use YYYY-MM-DD)", date))
            })?;
            Ok(date.to_string())
        }
    }
}

pub(crate) fn today() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

pub(crate) fn new_client(name: &str, city: &str, phone: &str, tags: &str) -> Result<NewClient> {
    if name.trim().is_empty() || city.trim().is_empty() || phone.trim().is_empty() {
        return Err(ClientError::Api("Name, city and phone are all required".into()));
    }
    validate_phone(phone)?;
    Ok(NewClient::new(name, city, phone, parse_tags(tags)))
}

/// Build a patch from optional inputs; blank values count as absent.
pub(crate) fn patch(
    name: Option<&str>,
    city: Option<&str>,
    phone: Option<&str>,
    tags: Option<&str>,
) -> Result<ClientPatch> {
    let present = |v: Option<&str>| v.map(str::trim).filter(|v| !v.is_empty()).map(String::from);

    let phone = present(phone);
    if let Some(phone) = &phone {
        validate_phone(phone)?;
    }
    Ok(ClientPatch {
        name: present(name),
        city: present(city),
        phone,
        tags: present(tags).map(|t| parse_tags(&t)),
    })
}

/// Line-oriented prompts over any buffered reader.
pub(crate) struct Prompter<R: BufRead> {
    input: R,
}

impl<R: BufRead> Prompter<R> {
    pub(crate) fn new(input: R) -> Self {
        Self { input }
    }

    /// Print `label`, read one line. `None` once input is exhausted.
    pub(crate) fn ask(&mut self, label: &str) -> Result<Option<String>> {
        print!("{}", label);
        io::stdout().flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            println!();
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub(crate) fn confirm(&mut self, label: &str) -> Result<Option<bool>> {
        Ok(self
            .ask(&format!("{} (y/n): ", label))?
            .map(|answer| matches!(answer.to_lowercase().as_str(), "y" | "yes" | "o" | "oui")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn phone_rules() {
        assert!(validate_phone("677123456").is_ok());
        assert!(validate_phone(" 223456789 ").is_ok());
        assert!(validate_phone("577123456").is_err());
        assert!(validate_phone("67712345").is_err());
        assert!(validate_phone("6771234567").is_err());
        assert!(validate_phone("67712345a").is_err());
        assert!(validate_phone("").is_err());
    }

    #[test]
    fn tags_are_split_and_trimmed() {
        assert_eq!(parse_tags(" vip, fidèle ,,entreprise"), vec!["vip", "fidèle", "entreprise"]);
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn amounts_must_be_digits() {
        assert_eq!(parse_amount("60000").unwrap(), 60000);
        assert!(parse_amount("-5").is_err());
        assert!(parse_amount("12.5").is_err());
        assert!(parse_amount("").is_err());
        assert!(parse_amount("99999999999999999999999").is_err());
    }

    #[test]
    fn dates_are_checked() {
        assert_eq!(parse_date(Some("2026-02-05")).unwrap(), "2026-02-05");
        assert!(parse_date(Some("05/02/2026")).is_err());
        assert!(parse_date(Some("2026-02-30")).is_err());
        assert_eq!(parse_date(Some("  ")).unwrap(), today());
        assert_eq!(parse_date(None).unwrap(), today());
    }

    #[test]
    fn new_client_requires_fields() {
        assert!(new_client("", "Douala", "699887766", "").is_err());
        assert!(new_client("Marie", "Douala", "123", "").is_err());
        let draft = new_client("Marie", "Douala", "699887766", "nouveau").unwrap();
        assert_eq!(draft.tags, vec!["nouveau"]);
    }

    #[test]
    fn blank_patch_fields_are_absent() {
        let patch = patch(Some(""), Some("Garoua"), None, Some("  ")).unwrap();
        assert_eq!(patch, ClientPatch::default().city("Garoua"));
        assert!(super::patch(None, None, Some("1"), None).is_err());
    }

    #[test]
    fn prompter_reads_lines_until_eof() {
        let mut prompter = Prompter::new(Cursor::new("  first \ny\n"));
        assert_eq!(prompter.ask("> ").unwrap().as_deref(), Some("first"));
        assert_eq!(prompter.confirm("sure?").unwrap(), Some(true));
        assert_eq!(prompter.ask("> ").unwrap(), None);
    }
}
