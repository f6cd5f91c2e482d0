use super::ItemStore;
use crate::error::{GrocError, Result};
use crate::model::Item;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};
use uuid::Uuid;

const DELIMITER: char = '|';
const ESCAPE: char = '\\';
const FIELD_COUNT: usize = 4;

/// Plain text storage, one item per line:
///
/// ```text
/// 1|Bananas|false|2024-03-05T09:15:42.123
/// 2|Apples|true|2024-03-05T09:16:03.004
/// ```
///
/// `\`, `|` and line breaks inside a field are backslash-escaped, so names
/// without them are written exactly as shown above.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the list, reporting I/O failures instead of hiding them.
    ///
    /// Blank lines are ignored. Records that don't have exactly four fields,
    /// whose id is not a number, or whose timestamp is empty are skipped with a
    /// warning.
    pub fn read_items(&self) -> Result<Vec<Item>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(GrocError::Io)?;
        let mut items = Vec::new();

        for (number, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match parse_record(line) {
                Some(item) => items.push(item),
                None => warn!(
                    path = %self.path.display(),
                    line = number + 1,
                    "Skipping malformed record"
                ),
            }
        }

        debug!(path = %self.path.display(), count = items.len(), "Loaded items");
        Ok(items)
    }

    /// Rewrite the whole file with `items`.
    ///
    /// The new content goes to a temporary file next to the target which is
    /// then renamed over it.
    pub fn write_items(&self, items: &[Item]) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir).map_err(GrocError::Io)?;
            }
        }

        let content: String = items
            .iter()
            .map(|item| format!("{}\n", format_record(item)))
            .collect();

        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, content).map_err(GrocError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(GrocError::Io(e));
        }

        debug!(path = %self.path.display(), count = items.len(), "Saved items");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "items".to_string());
        self.path
            .with_file_name(format!(".{}-{}.tmp", file_name, Uuid::new_v4()))
    }
}

impl ItemStore for FileStore {
    fn load_items(&self) -> Vec<Item> {
        match self.read_items() {
            Ok(items) => items,
            Err(e) => {
                error!(path = %self.path.display(), "Error loading items: {}", e);
                Vec::new()
            }
        }
    }

    fn save_items(&mut self, items: &[Item]) {
        if let Err(e) = self.write_items(items) {
            error!(path = %self.path.display(), "Error saving items: {}", e);
        }
    }
}

fn format_record(item: &Item) -> String {
    [
        item.id.to_string(),
        escape_field(&item.name),
        item.checked.to_string(),
        escape_field(&item.created_at),
    ]
    .join("|")
}

fn parse_record(line: &str) -> Option<Item> {
    let fields = split_fields(line);
    if fields.len() != FIELD_COUNT || fields[3].is_empty() {
        return None;
    }

    let id = fields[0].parse::<u32>().ok()?;
    let checked = fields[2].eq_ignore_ascii_case("true");
    Some(Item::restore(id, &fields[1], checked, &fields[3]))
}

fn escape_field(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    for c in field.chars() {
        match c {
            ESCAPE => out.push_str("\\\\"),
            DELIMITER => out.push_str("\\|"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

/// Split on unescaped delimiters and undo `escape_field`.
///
/// Unknown escape sequences are kept as written.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::with_capacity(FIELD_COUNT);
    let mut current = String::new();
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            ESCAPE => match chars.next() {
                Some(ESCAPE) => current.push(ESCAPE),
                Some(DELIMITER) => current.push(DELIMITER),
                Some('n') => current.push('\n'),
                Some('r') => current.push('\r'),
                Some(other) => {
                    current.push(ESCAPE);
                    current.push(other);
                }
                None => current.push(ESCAPE),
            },
            DELIMITER => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}
