use crate::engine::{Engine, Generation, SyncLedger};
use crate::fetch::Fetch;
use crate::time_utils::format_time;
use crate::types::{Quote, TodoId, TodoRecord};

mod clock;
mod state;
mod todo_list;

pub use clock::Clock;
pub use state::{DeleteContext, FocusedBox, TextInput, View};
pub use todo_list::TodoList;

/// A time write the runtime should send to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingWrite {
    pub id: TodoId,
    pub time: u64,
    pub seq: u64,
}

pub struct App {
    pub running: bool,
    pub current_view: View,
    pub focused_box: FocusedBox,
    pub status_message: Option<String>,

    // To-do list, kept in sync with the store
    pub todos: TodoList,
    pub selected_index: usize,
    pub active: Option<TodoId>,
    pub input: TextInput,
    pub delete_context: Option<DeleteContext>,

    // Elapsed-time engine and the write ordering for its ticks
    pub engine: Engine,
    pub ledger: SyncLedger,

    pub clock: Clock,
    pub todo_fetch: Option<Fetch<Vec<TodoRecord>>>,
    pub quote: Option<Fetch<Quote>>,
    initial_load_applied: bool,

    // Loading indicator
    pub throbber_state: throbber_widgets_tui::ThrobberState,
}

impl App {
    pub fn new(engine: Engine, clock: Clock) -> Self {
        Self {
            running: true,
            current_view: View::Main,
            focused_box: FocusedBox::List,
            status_message: None,
            todos: TodoList::new(),
            selected_index: 0,
            active: None,
            input: TextInput::new(),
            delete_context: None,
            engine,
            ledger: SyncLedger::new(),
            clock,
            todo_fetch: None,
            quote: None,
            initial_load_applied: false,
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// True until the initial list load has landed.
    pub fn is_loading(&self) -> bool {
        self.todo_fetch.as_ref().is_some_and(Fetch::is_loading)
    }

    /// Why the initial list load has not landed, if it failed.
    pub fn load_error(&self) -> Option<&str> {
        self.todo_fetch.as_ref().and_then(Fetch::error)
    }

    /// Pick up finished fetches. The list is replaced only by the first
    /// successful load.
    pub fn poll_fetches(&mut self) {
        let loaded = match self.todo_fetch.as_mut() {
            Some(fetch) => {
                if fetch.poll() && !self.initial_load_applied {
                    fetch.data().cloned()
                } else {
                    None
                }
            }
            None => None,
        };
        if let Some(records) = loaded {
            self.apply_initial_load(records);
        }
        if let Some(quote) = self.quote.as_mut() {
            quote.poll();
        }
    }

    pub fn apply_initial_load(&mut self, records: Vec<TodoRecord>) {
        tracing::info!("loaded {} todos", records.len());
        self.todos.replace_all(records);
        self.initial_load_applied = true;
        self.clamp_selection();
    }

    // ------------------------------------------------------------------
    // Selection and focus
    // ------------------------------------------------------------------

    pub fn select_next(&mut self) {
        if self.selected_index + 1 < self.todos.len() {
            self.selected_index += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn selected_record(&self) -> Option<&TodoRecord> {
        self.todos.get_index(self.selected_index)
    }

    fn clamp_selection(&mut self) {
        if self.selected_index >= self.todos.len() {
            self.selected_index = self.todos.len().saturating_sub(1);
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focused_box = match self.focused_box {
            FocusedBox::List => FocusedBox::Input,
            FocusedBox::Input => FocusedBox::List,
        };
    }

    // ------------------------------------------------------------------
    // Active item
    // ------------------------------------------------------------------

    /// Mark the highlighted record as the one receiving ticks.
    pub fn activate_selected(&mut self) {
        let Some(record) = self.selected_record() else {
            return;
        };
        let (id, content) = (record.id.clone(), record.content.clone());
        self.active = Some(id);
        self.set_status(format!("Tracking \"{}\"", content));
    }

    pub fn clear_active(&mut self) {
        if self.active.take().is_some() {
            self.set_status("No item is being tracked");
        }
    }

    pub fn is_active(&self, id: &TodoId) -> bool {
        self.active.as_ref() == Some(id)
    }

    pub fn active_record(&self) -> Option<&TodoRecord> {
        self.active.as_ref().and_then(|id| self.todos.get(id))
    }

    // ------------------------------------------------------------------
    // Create / delete
    // ------------------------------------------------------------------

    /// Take the typed content for a new record. Blank input stays local.
    pub fn take_new_content(&mut self) -> Option<String> {
        let content = self.input.value.trim().to_string();
        if content.is_empty() {
            self.set_status("Nothing to add");
            return None;
        }
        self.input.clear();
        Some(content)
    }

    pub fn apply_created(&mut self, record: TodoRecord) {
        self.set_status(format!("Added \"{}\"", record.content));
        self.todos.append(record);
    }

    pub fn enter_delete_confirm(&mut self) {
        let Some(record) = self.selected_record() else {
            return;
        };
        self.delete_context = Some(DeleteContext {
            id: record.id.clone(),
            display_label: record.content.clone(),
            display_time: format_time(record.time),
        });
        self.current_view = View::ConfirmDelete;
    }

    pub fn cancel_delete(&mut self) {
        self.delete_context = None;
        self.current_view = View::Main;
    }

    /// Close the dialog and return the id to delete.
    pub fn take_delete_target(&mut self) -> Option<TodoId> {
        self.current_view = View::Main;
        self.delete_context.take().map(|ctx| ctx.id)
    }

    /// The store confirmed the delete.
    pub fn apply_deleted(&mut self, id: &TodoId) {
        if let Some(record) = self.todos.remove(id) {
            self.set_status(format!("Deleted \"{}\"", record.content));
        }
        self.ledger.forget(id);
        if self.is_active(id) {
            self.active = None;
        }
        self.clamp_selection();
    }

    // ------------------------------------------------------------------
    // Engine and counter mirroring
    // ------------------------------------------------------------------

    /// Apply a tick to the engine. When it moved the counter and an item is
    /// active, the write mirroring it is returned.
    pub fn on_tick(&mut self, generation: Generation) -> Option<PendingWrite> {
        let ticked = self.engine.on_tick(generation)?;
        if ticked.finished {
            self.set_status("Timer finished");
        }
        self.mirror_counter_change()
    }

    /// Start or stop the engine. Starting a timer loads its start value,
    /// which counts as a counter change.
    pub fn toggle_engine(&mut self) -> Option<PendingWrite> {
        let before = self.engine.counter();
        self.engine.toggle();
        self.mirror_if_changed(before)
    }

    pub fn reset_engine(&mut self) -> Option<PendingWrite> {
        let before = self.engine.counter();
        self.engine.reset();
        self.clear_status();
        self.mirror_if_changed(before)
    }

    pub fn switch_mode(&mut self) -> Option<PendingWrite> {
        let before = self.engine.counter();
        self.engine.switch_mode();
        self.set_status(format!("{} mode", self.engine.mode().label()));
        self.mirror_if_changed(before)
    }

    fn mirror_if_changed(&mut self, before: u64) -> Option<PendingWrite> {
        if self.engine.counter() == before {
            return None;
        }
        self.mirror_counter_change()
    }

    /// Every counter change while an item is active adds one second to that
    /// item, whichever direction the counter moved.
    fn mirror_counter_change(&mut self) -> Option<PendingWrite> {
        let id = self.active.clone()?;
        let time = self.todos.get(&id)?.time + 1;
        self.todos.set_time(&id, time);
        let seq = self.ledger.issue(&id);

        Some(PendingWrite { id, time, seq })
    }

    /// Store answered a time write. Applied only if it is the newest one for
    /// that record.
    pub fn apply_synced(&mut self, id: &TodoId, seq: u64, record: TodoRecord) -> bool {
        if !self.ledger.accept(id, seq) {
            tracing::debug!("discarding out-of-order time update {} for {}", seq, id);
            return false;
        }
        self.todos.set_time(id, record.time)
    }

    /// A time write failed. Local time stays; the next write carries it.
    pub fn sync_failed(&mut self, id: &TodoId, seq: u64) {
        self.ledger.accept(id, seq);
    }
}
