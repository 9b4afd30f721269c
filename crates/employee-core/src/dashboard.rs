//! Dashboard Controller
//!
//! Drives [`DashboardState`] against an [`EmployeeBackend`]: dispatches an
//! action, performs the effects the reducer asks for and feeds the results
//! back until nothing is left to do.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use crate::backend::EmployeeBackend;
use crate::config::DashboardConfig;
use crate::models::{DraftField, Employee, EmployeeId, SubmitMode};
use crate::state::{Action, DashboardState, Effect, MessageTicket, Outcome, Request};

/// Shared home of the dashboard state.
///
/// Every mutation goes through [`StateCell::dispatch`], which runs the reducer.
pub trait StateCell: Clone + 'static {
    fn dispatch(&self, action: Action) -> Vec<Effect>;

    /// Copy of the current state
    fn snapshot(&self) -> DashboardState;
}

impl StateCell for Rc<RefCell<DashboardState>> {
    fn dispatch(&self, action: Action) -> Vec<Effect> {
        self.borrow_mut().reduce(action)
    }

    fn snapshot(&self) -> DashboardState {
        self.borrow().clone()
    }
}

/// Runs a task once a delay has passed (used to expire status messages)
pub trait Timer {
    fn schedule(&self, after: Duration, task: Box<dyn FnOnce()>);
}

/// Dashboard controller
pub struct Dashboard<B, S, T> {
    backend: Rc<B>,
    state: S,
    timer: Rc<T>,
    message_ttl: Duration,
}

impl<B, S: Clone, T> Clone for Dashboard<B, S, T> {
    fn clone(&self) -> Self {
        Self {
            backend: Rc::clone(&self.backend),
            state: self.state.clone(),
            timer: Rc::clone(&self.timer),
            message_ttl: self.message_ttl,
        }
    }
}

impl<B, S, T> Dashboard<B, S, T>
where
    B: EmployeeBackend,
    S: StateCell,
    T: Timer,
{
    pub fn new(backend: B, state: S, timer: T, config: &DashboardConfig) -> Self {
        Self {
            backend: Rc::new(backend),
            state,
            timer: Rc::new(timer),
            message_ttl: config.message_ttl,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Apply an action and carry out everything it leads to.
    ///
    /// Resolves once the last request it caused has completed. Several
    /// dispatches may run concurrently; the reducer sorts out stale responses.
    pub async fn dispatch(&self, action: Action) {
        let mut queue: VecDeque<Effect> = self.state.dispatch(action).into();
        while let Some(effect) = queue.pop_front() {
            match effect {
                Effect::ScheduleClear(ticket) => self.schedule_clear(ticket),
                Effect::Send(token, request) => {
                    let outcome = self.perform(request).await;
                    queue.extend(self.state.dispatch(Action::Completed { token, outcome }));
                }
            }
        }
    }

    pub async fn load(&self) {
        self.dispatch(Action::Load).await
    }

    pub async fn submit(&self) {
        self.dispatch(Action::Submit).await
    }

    pub async fn confirm_delete(&self) {
        self.dispatch(Action::ConfirmDelete).await
    }

    // Local-only actions never issue requests, so they complete synchronously.

    pub fn edit_field(&self, field: DraftField, value: String) {
        self.apply_local(Action::EditField(field, value));
    }

    pub fn begin_edit(&self, employee: Employee) {
        self.apply_local(Action::BeginEdit(employee));
    }

    pub fn cancel_edit(&self) {
        self.apply_local(Action::CancelEdit);
    }

    pub fn request_delete(&self, id: EmployeeId) {
        self.apply_local(Action::RequestDelete(id));
    }

    pub fn decline_delete(&self) {
        self.apply_local(Action::DeclineDelete);
    }

    fn apply_local(&self, action: Action) {
        let effects = self.state.dispatch(action);
        debug_assert!(effects.is_empty(), "local action produced effects");
    }

    fn schedule_clear(&self, ticket: MessageTicket) {
        let state = self.state.clone();
        self.timer.schedule(
            self.message_ttl,
            Box::new(move || {
                state.dispatch(Action::ClearMessage(ticket));
            }),
        );
    }

    async fn perform(&self, request: Request) -> Outcome {
        match request {
            Request::List => Outcome::Listed(self.backend.list().await),
            Request::Create(draft) => Outcome::Saved {
                mode: SubmitMode::Create,
                result: self.backend.create(&draft).await,
            },
            Request::Update(id, draft) => {
                let result = self.backend.update(&id, &draft).await;
                Outcome::Saved { mode: SubmitMode::Update(id), result }
            }
            Request::Delete(id) => Outcome::Deleted(self.backend.delete(&id).await),
        }
    }
}
