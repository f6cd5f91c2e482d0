use chrono::Local;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Local ISO-8601 date-time, with fractional seconds only when non-zero.
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// A single entry on the grocery list.
///
/// Identity is the `id`: two items compare equal when their ids match,
/// regardless of name, status or timestamp.
#[derive(Debug, Clone)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub checked: bool,
    pub created_at: String,
}

impl Item {
    /// A fresh, unchecked item stamped with the current local time.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            checked: false,
            created_at: Local::now().format(CREATED_AT_FORMAT).to_string(),
        }
    }

    /// Rebuild an item from persisted fields, taken verbatim.
    pub fn restore(
        id: u32,
        name: impl Into<String>,
        checked: bool,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            checked,
            created_at: created_at.into(),
        }
    }

    /// The `YYYY-MM-DD` part of `created_at`.
    pub fn created_date(&self) -> &str {
        self.created_at.get(..10).unwrap_or(&self.created_at)
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Item {}

impl Hash for Item {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.checked { "[✓]" } else { "[ ]" };
        write!(
            f,
            "{}. {} {} (added: {})",
            self.id,
            status,
            self.name,
            self.created_date()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use std::collections::HashSet;

    #[test]
    fn new_item_is_unchecked_with_parseable_timestamp() {
        let item = Item::new(1, "Bananas");
        assert!(!item.checked);
        assert_eq!(item.name, "Bananas");
        assert!(NaiveDateTime::parse_from_str(&item.created_at, CREATED_AT_FORMAT).is_ok());
    }

    #[test]
    fn equality_is_by_id_only() {
        let a = Item::restore(3, "Milk", false, "2024-01-01T10:00:00");
        let b = Item::restore(3, "Bread", true, "2025-06-01T08:30:00");
        let c = Item::restore(4, "Milk", false, "2024-01-01T10:00:00");
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<Item> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn display_shows_status_and_date() {
        let mut item = Item::restore(2, "Apples", false, "2024-03-05T09:15:42.123");
        assert_eq!(item.to_string(), "2. [ ] Apples (added: 2024-03-05)");

        item.checked = true;
        assert_eq!(item.to_string(), "2. [✓] Apples (added: 2024-03-05)");
    }

    #[test]
    fn short_timestamp_is_shown_whole() {
        let item = Item::restore(1, "Eggs", false, "today");
        assert_eq!(item.created_date(), "today");
    }
}
