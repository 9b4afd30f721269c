//! Dashboard State
//!
//! All UI state lives in [`DashboardState`] and changes only through
//! [`DashboardState::reduce`]. The reducer never performs I/O: it returns
//! [`Effect`]s that the controller carries out and reports back as
//! [`Action::Completed`].

use crate::config::LoadFailurePolicy;
use crate::error::RequestResult;
use crate::models::{DraftField, Employee, EmployeeDraft, EmployeeId, SubmitMode};
use crate::validation::validate;

pub const MSG_ADDED: &str = "Added!";
pub const MSG_UPDATED: &str = "Updated!";
pub const MSG_DELETED: &str = "Deleted!";
pub const MSG_SAVE_FAILED: &str = "Operation failed!";
pub const MSG_DELETE_FAILED: &str = "Delete failed!";
pub const MSG_LOAD_FAILED: &str = "Load failed!";

/// Sequence number attached to every outgoing request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// Identifies one displayed status message, so a stale clear can be ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Error,
}

/// Transient banner text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: MessageKind,
    pub ticket: MessageTicket,
}

/// A call the controller must make against the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    List,
    Create(EmployeeDraft),
    Update(EmployeeId, EmployeeDraft),
    Delete(EmployeeId),
}

/// Result of a finished [`Request`]
#[derive(Debug)]
pub enum Outcome {
    Listed(RequestResult<Vec<Employee>>),
    Saved { mode: SubmitMode, result: RequestResult<()> },
    Deleted(RequestResult<()>),
}

/// User intents and request completions
#[derive(Debug)]
pub enum Action {
    /// Fetch the employee list
    Load,
    /// Keystroke in one of the form inputs
    EditField(DraftField, String),
    /// Copy a listed employee into the form and switch to update mode
    BeginEdit(Employee),
    /// Leave update mode and empty the form
    CancelEdit,
    /// Validate the form and send create or update
    Submit,
    /// Ask for confirmation before deleting
    RequestDelete(EmployeeId),
    /// Confirmation declined
    DeclineDelete,
    /// Confirmation accepted, send the delete
    ConfirmDelete,
    /// A request issued through [`Effect::Send`] finished
    Completed { token: RequestToken, outcome: Outcome },
    /// Message lifetime ran out
    ClearMessage(MessageTicket),
}

/// Work requested by the reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Perform the request, then dispatch [`Action::Completed`] with the token
    Send(RequestToken, Request),
    /// Dispatch [`Action::ClearMessage`] once the message lifetime elapses
    ScheduleClear(MessageTicket),
}

/// Everything the dashboard view renders
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    /// Last successfully fetched list, in backend order
    pub employees: Vec<Employee>,
    pub draft: EmployeeDraft,
    /// Employee being edited (None = create mode)
    pub editing: Option<Employee>,
    /// Employee awaiting delete confirmation
    pub pending_delete: Option<EmployeeId>,
    pub message: Option<StatusMessage>,
    /// Error of the most recent list load, cleared by the next successful one
    pub last_load_error: Option<String>,
    pub load_failure: LoadFailurePolicy,
    in_flight: u32,
    last_token: u64,
    latest_list: Option<RequestToken>,
    latest_intent: Option<RequestToken>,
    last_ticket: u64,
}

impl DashboardState {
    pub fn new(load_failure: LoadFailurePolicy) -> Self {
        Self {
            load_failure,
            ..Default::default()
        }
    }

    /// A request is outstanding. Advisory: only disables form buttons.
    pub fn busy(&self) -> bool {
        self.in_flight > 0
    }

    pub fn in_flight(&self) -> u32 {
        self.in_flight
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() { "Update" } else { "Add" }
    }

    /// Apply an action and return the work it calls for.
    pub fn reduce(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::Load => vec![self.issue(Request::List).1],
            Action::EditField(field, value) => {
                self.draft.set(field, value);
                Vec::new()
            }
            Action::BeginEdit(employee) => {
                self.draft = EmployeeDraft::from(&employee);
                self.editing = Some(employee);
                self.latest_intent = Some(self.next_token());
                Vec::new()
            }
            Action::CancelEdit => {
                self.draft = EmployeeDraft::default();
                self.editing = None;
                self.latest_intent = Some(self.next_token());
                Vec::new()
            }
            Action::Submit => self.submit(),
            Action::RequestDelete(id) => {
                self.pending_delete = Some(id);
                Vec::new()
            }
            Action::DeclineDelete => {
                self.pending_delete = None;
                Vec::new()
            }
            Action::ConfirmDelete => match self.pending_delete.take() {
                Some(id) => vec![self.issue(Request::Delete(id)).1],
                None => Vec::new(),
            },
            Action::Completed { token, outcome } => {
                self.in_flight = self.in_flight.saturating_sub(1);
                self.complete(token, outcome)
            }
            Action::ClearMessage(ticket) => {
                if self.message.as_ref().is_some_and(|m| m.ticket == ticket) {
                    self.message = None;
                }
                Vec::new()
            }
        }
    }

    fn submit(&mut self) -> Vec<Effect> {
        if let Err(err) = validate(&self.draft) {
            log::debug!("[dashboard] submit rejected: {}", err);
            return vec![self.show(err.user_message(), MessageKind::Error)];
        }
        let request = match &self.editing {
            Some(employee) => Request::Update(employee.id.clone(), self.draft.clone()),
            None => Request::Create(self.draft.clone()),
        };
        let (token, effect) = self.issue(request);
        self.latest_intent = Some(token);
        vec![effect]
    }

    fn complete(&mut self, token: RequestToken, outcome: Outcome) -> Vec<Effect> {
        match outcome {
            Outcome::Listed(result) => {
                if self.latest_list != Some(token) {
                    log::debug!("[dashboard] discarding stale list response {:?}", token);
                    return Vec::new();
                }
                match result {
                    Ok(employees) => {
                        log::debug!("[dashboard] loaded {} employees", employees.len());
                        self.employees = employees;
                        self.last_load_error = None;
                        Vec::new()
                    }
                    Err(err) => {
                        log::warn!("[dashboard] list load failed: {}", err);
                        self.last_load_error = Some(err.to_string());
                        match self.load_failure {
                            LoadFailurePolicy::Silent => Vec::new(),
                            LoadFailurePolicy::Notify => vec![self.show(MSG_LOAD_FAILED, MessageKind::Error)],
                        }
                    }
                }
            }
            Outcome::Saved { mode, result: Ok(()) } => {
                // A newer edit or submit owns the form now; leave it alone.
                if self.latest_intent == Some(token) {
                    self.draft = EmployeeDraft::default();
                    self.editing = None;
                }
                let text = match mode {
                    SubmitMode::Create => MSG_ADDED,
                    SubmitMode::Update(_) => MSG_UPDATED,
                };
                vec![self.show(text, MessageKind::Info), self.issue(Request::List).1]
            }
            Outcome::Saved { mode, result: Err(err) } => {
                log::warn!("[dashboard] save ({:?}) failed: {}", mode, err);
                vec![self.show(MSG_SAVE_FAILED, MessageKind::Error)]
            }
            Outcome::Deleted(Ok(())) => {
                vec![self.show(MSG_DELETED, MessageKind::Info), self.issue(Request::List).1]
            }
            Outcome::Deleted(Err(err)) => {
                log::warn!("[dashboard] delete failed: {}", err);
                vec![self.show(MSG_DELETE_FAILED, MessageKind::Error)]
            }
        }
    }

    fn next_token(&mut self) -> RequestToken {
        self.last_token += 1;
        RequestToken(self.last_token)
    }

    fn issue(&mut self, request: Request) -> (RequestToken, Effect) {
        let token = self.next_token();
        self.in_flight += 1;
        if request == Request::List {
            self.latest_list = Some(token);
        }
        (token, Effect::Send(token, request))
    }

    /// Replace the current message; the previous one's clear becomes a no-op.
    fn show(&mut self, text: &str, kind: MessageKind) -> Effect {
        self.last_ticket += 1;
        let ticket = MessageTicket(self.last_ticket);
        self.message = Some(StatusMessage {
            text: text.to_string(),
            kind,
            ticket,
        });
        Effect::ScheduleClear(ticket)
    }
}
