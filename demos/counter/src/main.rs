//! Interactive counter demo.
//!
//! A reducer-based counter and a "disable buttons" flag, both watched by the
//! notifiers in `pulse-notify`: counter changes produce one debounced status
//! check per settled value, flag changes produce an immediate check that
//! reverts the flag on failure. Run with `RUST_LOG=debug` to watch the
//! scheduling decisions.

use std::rc::Rc;

use anyhow::Result;
use pulse_core::{Scope, StateHolder, Store, scoped_effect, signal, watch};
use pulse_notify::{DEFAULT_QUIET_PERIOD, GraphqlProbe, watch_counter, watch_toggle};
use tokio::io::{AsyncBufReadExt, BufReader};

struct Counter;

#[derive(Clone, Copy)]
enum CounterEvent {
    Increment,
    Decrement,
    Reset,
}

impl StateHolder for Counter {
    type State = i64;
    type Event = CounterEvent;

    fn initial_state() -> i64 {
        0
    }

    fn reduce(state: &i64, event: CounterEvent) -> i64 {
        match event {
            CounterEvent::Increment => state + 1,
            CounterEvent::Decrement => state - 1,
            CounterEvent::Reset => 0,
        }
    }
}

fn print_state(count: i64, disabled: bool) {
    println!(
        "count = {count}, buttons {}",
        if disabled { "disabled" } else { "enabled" }
    );
}

async fn run() -> Result<()> {
    let store = Store::<Counter>::new();
    let disable_buttons = signal(false);

    let probe = Rc::new(GraphqlProbe::new());
    let scope = Scope::new();
    scope.run(|| {
        let counter = store.signal();
        let flag = disable_buttons.clone();

        {
            let probe = probe.clone();
            scoped_effect(move || watch_counter(&counter, probe, DEFAULT_QUIET_PERIOD));
        }
        {
            let probe = probe.clone();
            scoped_effect(move || watch_toggle(&flag, probe));
        }

        // echo every change, including automatic reverts
        let flag = disable_buttons.clone();
        let counter = store.signal();
        scoped_effect(move || {
            let flag2 = flag.clone();
            let counter2 = counter.clone();
            watch(&counter, move |new, _| print_state(*new, flag2.get())).also(watch(
                &flag,
                move |new, _| print_state(counter2.get(), *new),
            ))
        });
    });

    println!("commands: + - 0 (counter), t (toggle buttons), q (quit)");
    print_state(store.get(), disable_buttons.get());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "+" | "-" | "0" if disable_buttons.get() => println!("buttons are disabled"),
            "+" => store.dispatch(CounterEvent::Increment),
            "-" => store.dispatch(CounterEvent::Decrement),
            "0" => store.dispatch(CounterEvent::Reset),
            "t" => disable_buttons.update(|v| *v = !*v),
            "q" => break,
            "" => {}
            other => println!("unknown command: {other}"),
        }
    }

    scope.dispose();
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let local = tokio::task::LocalSet::new();
    rt.block_on(local.run_until(run()))
}
