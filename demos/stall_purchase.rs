//! Purchase at the Stall
//!
//! A buyer walks to a wholesale stall to pick up goods. Depending on what the
//! stall says, the order succeeds, fails over to an online order, or waits a
//! day and re-checks its deadline.
//!
//! Key concepts:
//! - One machine drives many orders; each order keeps its own state
//! - Pre-actions that feed the next event (pickup result, deadline check)
//! - Self-transitions that run actions without exit/enter
//! - Auditing the table and printing its DOT description
//!
//! Run with: cargo run --example stall_purchase

use std::convert::Infallible;
use std::error::Error;
use stillwater::validation::Validation;
use switchyard::audit::audit;
use switchyard::builder::{internal_transition, simple_transition, StateMachineBuilder};
use switchyard::core::{Action, Event, State, Transition};
use switchyard::diagram::to_dot;
use switchyard::engine::{DefaultDelegate, EventProcessor, StateMachine};

/// Every state, event and action the stall workflow knows about.
struct Catalog {
    pending: State,
    purchasing: State,
    failed: State,
    purchased: State,
    ended: State,

    go_to_stall: Event,
    got_goods: Event,
    ship_to_warehouse: Event,
    received: Event,
    removed: Event,
    two_days_later: Event,
    tomorrow: Event,
    overdue: Event,
    not_expired: Event,
    urgent: Event,
    not_urgent: Event,
}

const FETCH_PICKUP_RESULT: i64 = 1;
const DISABLE_SOURCE: i64 = 2;
const SAME_DAY_ONLINE_ORDER: i64 = 3;
const NEXT_DAY_ONLINE_ORDER: i64 = 4;
const FREEZE_SOURCE: i64 = 5;
const CHECK_DEADLINE: i64 = 6;

impl Catalog {
    fn new() -> Self {
        Self {
            pending: State::new(0, "Pending"),
            purchasing: State::new(1, "Purchasing"),
            failed: State::new(2, "Purchase failed"),
            purchased: State::new(3, "Purchased"),
            ended: State::new(4, "Ended"),

            go_to_stall: Event::new(0, "go to stall"),
            got_goods: Event::new(1, "got goods"),
            ship_to_warehouse: Event::new(2, "ship to warehouse"),
            received: Event::new(3, "received"),
            removed: Event::new(4, "removed from sale"),
            two_days_later: Event::new(5, "ready in two days"),
            tomorrow: Event::new(6, "ready tomorrow"),
            overdue: Event::new(7, "pickup overdue"),
            not_expired: Event::new(8, "pickup not expired"),
            urgent: Event::new(9, "urgent"),
            not_urgent: Event::new(10, "not urgent"),
        }
    }

    fn transitions(&self) -> Vec<Transition> {
        vec![
            Transition::new(self.pending.clone(), self.go_to_stall.clone(), self.purchasing.clone())
                .with_pre_action(Action::new(FETCH_PICKUP_RESULT, "fetch pickup result")),
            simple_transition(self.purchasing.clone(), self.got_goods.clone(), self.purchased.clone()),
            simple_transition(
                self.purchased.clone(),
                self.ship_to_warehouse.clone(),
                self.purchased.clone(),
            ),
            simple_transition(self.purchased.clone(), self.received.clone(), self.ended.clone()),
            Transition::new(self.purchasing.clone(), self.removed.clone(), self.failed.clone())
                .with_pre_action(Action::new(DISABLE_SOURCE, "disable this source")),
            Transition::new(self.failed.clone(), self.urgent.clone(), self.ended.clone())
                .with_pre_action(Action::new(SAME_DAY_ONLINE_ORDER, "same-day online order")),
            Transition::new(self.failed.clone(), self.not_urgent.clone(), self.ended.clone())
                .with_pre_action(Action::new(NEXT_DAY_ONLINE_ORDER, "next-day online order")),
            Transition::new(self.purchasing.clone(), self.two_days_later.clone(), self.failed.clone())
                .with_pre_action(Action::new(FREEZE_SOURCE, "freeze source for two days")),
            internal_transition(
                self.purchasing.clone(),
                self.tomorrow.clone(),
                Action::new(CHECK_DEADLINE, "check pickup deadline"),
            ),
            simple_transition(self.purchasing.clone(), self.overdue.clone(), self.failed.clone()),
            simple_transition(self.purchasing.clone(), self.not_expired.clone(), self.pending.clone()),
        ]
    }
}

#[derive(Clone, Copy, Debug)]
enum Pickup {
    GotGoods,
    Removed,
    TwoDaysLater,
    Tomorrow,
}

/// What the stall will answer, fixed when the order is created.
#[derive(Clone, Copy, Debug)]
struct StallAnswer {
    pickup: Pickup,
    expired: bool,
}

#[derive(Debug)]
struct PurchaseOrder {
    id: u64,
    state: State,
    states: Vec<State>,
    event_count: u64,
    urgent: bool,
    stall: StallAnswer,
    pickup: Option<Pickup>,
    expired: Option<bool>,
}

impl PurchaseOrder {
    fn new(id: u64, initial: State, urgent: bool, stall: StallAnswer) -> Self {
        Self {
            id,
            states: vec![initial.clone()],
            state: initial,
            event_count: 0,
            urgent,
            stall,
            pickup: None,
            expired: None,
        }
    }
}

struct StallProcessor;

impl StallProcessor {
    fn run(&self, action: &Action, order: &mut PurchaseOrder) -> Result<(), Infallible> {
        order.event_count += 1;
        match action.id {
            FETCH_PICKUP_RESULT => order.pickup = Some(order.stall.pickup),
            CHECK_DEADLINE => order.expired = Some(order.stall.expired),
            DISABLE_SOURCE | FREEZE_SOURCE | SAME_DAY_ONLINE_ORDER | NEXT_DAY_ONLINE_ORDER => {
                println!("    order {}: {}", order.id, action.name());
            }
            _ => {}
        }
        Ok(())
    }
}

impl EventProcessor<PurchaseOrder> for StallProcessor {
    type Error = Infallible;

    fn on_exit(&self, from: &State, order: &mut PurchaseOrder) {
        assert_eq!(
            &order.state, from,
            "order {} changed state outside the machine",
            order.id
        );
        println!("    order {} leaves {}", order.id, from);
    }

    fn pre_action(
        &self,
        action: &Action,
        _from: &State,
        _to: &State,
        order: &mut PurchaseOrder,
    ) -> Result<(), Infallible> {
        self.run(action, order)
    }

    fn on_enter(&self, to: &State, order: &mut PurchaseOrder) {
        order.state = to.clone();
        order.states.push(to.clone());
        println!("    order {} enters {}", order.id, to);
    }

    fn next_action(
        &self,
        action: &Action,
        _from: &State,
        _to: &State,
        order: &mut PurchaseOrder,
    ) -> Result<(), Infallible> {
        self.run(action, order)
    }
}

type StallMachine = StateMachine<DefaultDelegate<StallProcessor>>;

fn fire(
    machine: &StallMachine,
    order: &mut PurchaseOrder,
    event: &Event,
) -> Result<(), Box<dyn Error>> {
    println!("  -> {event}");
    let current = order.state.clone();
    machine.trigger(&current, event, order)?;
    Ok(())
}

fn place_online_order(
    machine: &StallMachine,
    catalog: &Catalog,
    order: &mut PurchaseOrder,
) -> Result<(), Box<dyn Error>> {
    let event = if order.urgent {
        &catalog.urgent
    } else {
        &catalog.not_urgent
    };
    fire(machine, order, event)
}

fn process(
    machine: &StallMachine,
    catalog: &Catalog,
    order: &mut PurchaseOrder,
) -> Result<(), Box<dyn Error>> {
    fire(machine, order, &catalog.go_to_stall)?;

    match order.pickup {
        Some(Pickup::GotGoods) => {
            fire(machine, order, &catalog.got_goods)?;
            fire(machine, order, &catalog.ship_to_warehouse)?;
            fire(machine, order, &catalog.received)?;
        }
        Some(Pickup::Removed) => {
            fire(machine, order, &catalog.removed)?;
            place_online_order(machine, catalog, order)?;
        }
        Some(Pickup::TwoDaysLater) => {
            fire(machine, order, &catalog.two_days_later)?;
            place_online_order(machine, catalog, order)?;
        }
        Some(Pickup::Tomorrow) => {
            fire(machine, order, &catalog.tomorrow)?;
            if order.expired == Some(true) {
                fire(machine, order, &catalog.overdue)?;
                place_online_order(machine, catalog, order)?;
            } else {
                fire(machine, order, &catalog.not_expired)?;
            }
        }
        None => return Err(format!("order {} has no pickup result", order.id).into()),
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== Purchase at the Stall ===\n");

    let catalog = Catalog::new();
    let machine = StateMachineBuilder::new()
        .delegate(DefaultDelegate::new(StallProcessor))
        .transitions(catalog.transitions())
        .build()?;

    println!("Table audit:");
    match audit(machine.table()) {
        Validation::Success(()) => println!("  no issues"),
        Validation::Failure(issues) => {
            for issue in issues.iter() {
                println!("  {issue}");
            }
        }
    }
    println!();

    let answers = [
        (false, StallAnswer { pickup: Pickup::GotGoods, expired: false }),
        (true, StallAnswer { pickup: Pickup::Removed, expired: false }),
        (false, StallAnswer { pickup: Pickup::TwoDaysLater, expired: false }),
        (true, StallAnswer { pickup: Pickup::Tomorrow, expired: true }),
        (false, StallAnswer { pickup: Pickup::Tomorrow, expired: false }),
    ];

    for (id, (urgent, stall)) in (1..).zip(answers) {
        let mut order = PurchaseOrder::new(id, catalog.pending.clone(), urgent, stall);
        println!("Order {id} ({stall:?}, urgent: {urgent}):");
        process(&machine, &catalog, &mut order)?;

        let path: Vec<String> = order.states.iter().map(|s| s.name().to_string()).collect();
        println!(
            "  final state {} after {} actions, path: {}\n",
            order.state,
            order.event_count,
            path.join(" -> ")
        );
    }

    // Events the current state has no transition for are rejected.
    let mut finished = PurchaseOrder::new(
        99,
        catalog.ended.clone(),
        false,
        StallAnswer { pickup: Pickup::GotGoods, expired: false },
    );
    if let Err(err) = machine.trigger(&catalog.ended, &catalog.go_to_stall, &mut finished) {
        println!("Rejected: {err}\n");
    }

    println!("DOT description (pipe into `dot -Tpng`):");
    println!("{}", to_dot(machine.table()));

    println!("=== Example Complete ===");
    Ok(())
}
