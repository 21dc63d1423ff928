//! Shared fixtures for integration tests.
//!
//! `Order` is a business object that keeps its own state and a log of every
//! callback the machine drove. `OrderProcessor` fails any action whose id is
//! listed in `failing`.

#![allow(dead_code)]

use switchyard::core::{Action, State, StateHistory};
use switchyard::engine::{DefaultDelegate, EventProcessor};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("action '{0}' failed")]
    ActionFailed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Exit(State),
    Pre(Action),
    Enter(State),
    Next(Action),
    Failure(Action, OrderError),
}

#[derive(Debug, Clone)]
pub struct Order {
    pub id: u64,
    pub state: State,
    pub calls: Vec<Call>,
    pub history: StateHistory,
}

impl Order {
    pub fn new(id: u64, state: State) -> Self {
        Self {
            id,
            state,
            calls: Vec::new(),
            history: StateHistory::new(),
        }
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }

    pub fn enters(&self) -> usize {
        self.count(|c| matches!(c, Call::Enter(_)))
    }

    pub fn exits(&self) -> usize {
        self.count(|c| matches!(c, Call::Exit(_)))
    }

    pub fn failures(&self) -> Vec<(Action, OrderError)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Failure(action, err) => Some((action.clone(), err.clone())),
                _ => None,
            })
            .collect()
    }
}

#[derive(Debug, Default, Clone)]
pub struct OrderProcessor {
    pub failing: Vec<i64>,
}

impl OrderProcessor {
    pub fn failing(ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            failing: ids.into_iter().collect(),
        }
    }

    fn run(&self, action: &Action) -> Result<(), OrderError> {
        if self.failing.contains(&action.id) {
            Err(OrderError::ActionFailed(action.name().to_string()))
        } else {
            Ok(())
        }
    }
}

impl EventProcessor<Order> for OrderProcessor {
    type Error = OrderError;

    fn on_exit(&self, from: &State, order: &mut Order) {
        assert_eq!(
            &order.state, from,
            "order {} changed state outside the machine",
            order.id
        );
        order.calls.push(Call::Exit(from.clone()));
    }

    fn pre_action(
        &self,
        action: &Action,
        _from: &State,
        _to: &State,
        order: &mut Order,
    ) -> Result<(), OrderError> {
        order.calls.push(Call::Pre(action.clone()));
        self.run(action)
    }

    fn next_action(
        &self,
        action: &Action,
        _from: &State,
        _to: &State,
        order: &mut Order,
    ) -> Result<(), OrderError> {
        order.calls.push(Call::Next(action.clone()));
        self.run(action)
    }

    fn on_action_failure(
        &self,
        action: &Action,
        _from: &State,
        _to: &State,
        order: &mut Order,
        error: &OrderError,
    ) {
        order.calls.push(Call::Failure(action.clone(), error.clone()));
    }

    fn on_enter(&self, to: &State, order: &mut Order) {
        order.state = to.clone();
        order.history = order.history.record(to.clone());
        order.calls.push(Call::Enter(to.clone()));
    }
}

pub fn delegate(processor: OrderProcessor) -> DefaultDelegate<OrderProcessor> {
    DefaultDelegate::new(processor)
}
