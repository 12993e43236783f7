use crate::types::{TodoId, TodoRecord};

/// Ordered in-memory copy of the remote to-do collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    records: Vec<TodoRecord>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in the server's full collection.
    pub fn replace_all(&mut self, records: Vec<TodoRecord>) {
        self.records = records;
    }

    pub fn append(&mut self, record: TodoRecord) {
        self.records.push(record);
    }

    /// Remove by id. Returns the removed record, `None` when it wasn't present.
    pub fn remove(&mut self, id: &TodoId) -> Option<TodoRecord> {
        let index = self.position(id)?;
        Some(self.records.remove(index))
    }

    pub fn get(&self, id: &TodoId) -> Option<&TodoRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    pub fn position(&self, id: &TodoId) -> Option<usize> {
        self.records.iter().position(|r| &r.id == id)
    }

    pub fn get_index(&self, index: usize) -> Option<&TodoRecord> {
        self.records.get(index)
    }

    /// Overwrite a record's time. Returns `false` when the id is unknown.
    pub fn set_time(&mut self, id: &TodoId, time: u64) -> bool {
        match self.records.iter_mut().find(|r| &r.id == id) {
            Some(record) => {
                record.time = time;
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &TodoRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
