use super::error::AsmError;
use super::LABEL_CAPACITY;
use crate::instruction::Word;

/// Insertion-ordered label table. A linear `Vec` is plenty for programs
/// with at most `LABEL_CAPACITY` labels; a `HashMap` would just add an
/// allocation for a table this small.
#[derive(Debug, Default)]
pub struct SymbolTable {
    entries: Vec<(String, Word)>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable::default()
    }

    /// Records `name` at `address`. Fails if `name` is already recorded
    /// (duplicate label) or the table is at capacity.
    pub fn insert(&mut self, name: &str, address: Word) -> Result<(), AsmError> {
        if self.entries.iter().any(|(n, _)| n == name) {
            return Err(AsmError::DuplicateLabel(name.to_string()));
        }
        if self.entries.len() >= LABEL_CAPACITY {
            return Err(AsmError::LabelTableFull);
        }
        self.entries.push((name.to_string(), address));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Word> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, a)| *a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_then_get_round_trips() {
        let mut table = SymbolTable::new();
        table.insert("end", 3).unwrap();
        assert_eq!(table.get("end"), Some(3));
        assert_eq!(table.get("missing"), None);
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let mut table = SymbolTable::new();
        table.insert("loop", 0).unwrap();
        let err = table.insert("loop", 5).unwrap_err();
        assert_eq!(err, AsmError::DuplicateLabel("loop".to_string()));
    }

    #[test]
    fn table_rejects_overflow_past_capacity() {
        let mut table = SymbolTable::new();
        for i in 0..LABEL_CAPACITY {
            table.insert(&format!("l{i}"), i as Word).unwrap();
        }
        let err = table.insert("one_too_many", 0).unwrap_err();
        assert_eq!(err, AsmError::LabelTableFull);
    }
}
