use std::fs;
use std::process;
use std::sync::{Condvar, Mutex};
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use log::{debug, error, info};
use signal_hook::consts::{SIGINT, SIGTERM, SIGUSR1};
use signal_hook::iterator::Signals;

use crate::addr::dump_addrs;
use crate::config::Config;
use crate::error::NetError;
use crate::handle::NetlinkHandle;
use crate::link::dump_links;
use crate::monitor::{EventSocket, SUBSCRIBED_GROUPS};
use crate::reconcile::reconcile;
use crate::route::dump_routes;
use crate::state::State;
use crate::tables::NetTables;

/// Every blocking wait observes shutdown within this window.
const WAIT_TICK: Duration = Duration::from_secs(1);

/// Coalescing wake-up. Releasing while already released is a no-op; an
/// acquire drains at most one release, so event bursts collapse into a
/// single reconciliation pass.
pub struct Trigger {
    released: Mutex<bool>,
    cv: Condvar,
}

impl Default for Trigger {
    fn default() -> Trigger {
        Trigger::new()
    }
}

impl Trigger {
    pub fn new() -> Trigger {
        Trigger {
            released: Mutex::new(false),
            cv: Condvar::new(),
        }
    }

    pub fn release(&self) {
        let mut released = self.released.lock().unwrap();
        if !*released {
            *released = true;
            self.cv.notify_one();
        }
    }

    /// Wait for a release; returns whether one happened in the window.
    pub fn acquire(&self, timeout: Duration) -> bool {
        let released = self.released.lock().unwrap();
        let (mut released, _) = self
            .cv
            .wait_timeout_while(released, timeout, |r| !*r)
            .unwrap();
        if *released {
            *released = false;
            true
        } else {
            false
        }
    }
}

/// One-shot latch; once set it stays set.
pub struct Finish {
    set: Mutex<bool>,
    cv: Condvar,
}

impl Default for Finish {
    fn default() -> Finish {
        Finish::new()
    }
}

impl Finish {
    pub fn new() -> Finish {
        Finish {
            set: Mutex::new(false),
            cv: Condvar::new(),
        }
    }

    pub fn set(&self) {
        let mut set = self.set.lock().unwrap();
        *set = true;
        self.cv.notify_all();
    }

    pub fn is_set(&self) -> bool {
        *self.set.lock().unwrap()
    }

    pub fn wait(&self) {
        let set = self.set.lock().unwrap();
        let _set = self.cv.wait_while(set, |s| !*s).unwrap();
    }

    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let set = self.set.lock().unwrap();
        let (set, _) = self.cv.wait_timeout_while(set, timeout, |s| !*s).unwrap();
        *set
    }
}

/// Run the supervisor until a terminating signal or a worker failure.
pub fn run(config: &Config) -> Result<()> {
    fs::write(&config.pid_path, process::id().to_string())
        .with_context(|| format!("writing pid file {}", config.pid_path.display()))?;
    info!("daemon starting, pid {}", process::id());

    let tables = NetTables::default();
    let state = Mutex::new(State::from_path(&config.state_path)?);
    let finish = Finish::new();
    let failed = Finish::new();
    let trigger = Trigger::new();
    let state_reload = Trigger::new();
    let subscribed = Finish::new();
    let baseline = Finish::new();

    let mut signals =
        Signals::new([SIGTERM, SIGINT, SIGUSR1]).context("installing signal handlers")?;
    let signals_handle = signals.handle();

    thread::scope(|s| {
        // shutdown waiter: terminating signals end the daemon, SIGUSR1
        // requests a state reload
        s.spawn(|| {
            for signal in signals.forever() {
                match signal {
                    SIGUSR1 => state_reload.release(),
                    _ => break,
                }
            }
            finish.set();
        });

        // event monitor
        s.spawn(|| {
            if let Err(e) = monitor_worker(config.fib, &tables, &trigger, &finish, &subscribed, &baseline)
            {
                error!("event monitor: {e}");
                failed.set();
            }
            finish.set();
        });

        // one-shot initial sync; only its failure ends the daemon
        s.spawn(|| match initial_sync(config.fib, &tables, &finish, &subscribed, &baseline) {
            Ok(()) => trigger.release(),
            Err(e) => {
                error!("initial sync: {e}");
                failed.set();
                finish.set();
            }
        });

        // state reload worker
        s.spawn(|| {
            while !finish.is_set() {
                if !state_reload.acquire(WAIT_TICK) {
                    continue;
                }
                match State::from_path(&config.state_path) {
                    Ok(reloaded) => {
                        *state.lock().unwrap() = reloaded;
                        info!("state reloaded");
                        trigger.release();
                    }
                    Err(e) => error!("state reload: {e:#}"),
                }
            }
            finish.set();
        });

        // reconciler
        s.spawn(|| {
            if let Err(e) = reconcile_worker(config, &tables, &state, &trigger, &finish) {
                error!("reconciler: {e}");
                failed.set();
            }
            finish.set();
        });

        finish.wait();
        signals_handle.close();
    });

    if failed.is_set() {
        bail!("daemon aborted on internal error");
    }
    info!("daemon stopped");
    Ok(())
}

fn monitor_worker(
    fib: u32,
    tables: &NetTables,
    trigger: &Trigger,
    finish: &Finish,
    subscribed: &Finish,
    baseline: &Finish,
) -> Result<(), NetError> {
    let mut events = EventSocket::subscribe(fib, &SUBSCRIBED_GROUPS)?;
    subscribed.set();

    // Notifications racing the baseline dump are buffered and replayed
    // once the dump has landed; the mirror mutations are idempotent, so a
    // double-applied event is harmless.
    let mut pending = Vec::new();
    while !baseline.is_set() && !finish.is_set() {
        match events.next_event(WAIT_TICK) {
            Ok(Some(event)) => pending.push(event),
            Ok(None) => {}
            Err(NetError::Io(e)) => {
                error!("event stream: {e}");
                thread::sleep(WAIT_TICK);
            }
            Err(e) => error!("event stream: {e}"),
        }
    }
    debug!("replaying {} buffered events", pending.len());
    for event in pending {
        tables.apply(event);
        trigger.release();
    }

    while !finish.is_set() {
        match events.next_event(WAIT_TICK) {
            Ok(Some(event)) => {
                debug!("event: {event:?}");
                tables.apply(event);
                trigger.release();
            }
            Ok(None) => {}
            Err(NetError::Io(e)) => {
                error!("event stream: {e}");
                thread::sleep(WAIT_TICK);
            }
            Err(e) => error!("event stream: {e}"),
        }
    }
    Ok(())
}

fn initial_sync(
    fib: u32,
    tables: &NetTables,
    finish: &Finish,
    subscribed: &Finish,
    baseline: &Finish,
) -> Result<(), NetError> {
    // subscribe-before-dump closes the gap between snapshot and stream
    while !subscribed.wait_timeout(WAIT_TICK) {
        if finish.is_set() {
            return Ok(());
        }
    }
    let mut handle = NetlinkHandle::new()?;
    for link in dump_links(&mut handle)? {
        tables.upsert_link(link);
    }
    for addr in dump_addrs(&mut handle)? {
        tables.upsert_addr(addr);
    }
    for route in dump_routes(&mut handle, fib)? {
        tables.upsert_route(route);
    }
    baseline.set();
    info!("initial sync complete");
    Ok(())
}

fn reconcile_worker(
    config: &Config,
    tables: &NetTables,
    state: &Mutex<State>,
    trigger: &Trigger,
    finish: &Finish,
) -> Result<(), NetError> {
    let mut handle = NetlinkHandle::new()?;
    while !finish.is_set() {
        if !trigger.acquire(WAIT_TICK) {
            continue;
        }
        let snapshot = state.lock().unwrap().clone();
        reconcile(&mut handle, tables, &snapshot, config);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    const SHORT: Duration = Duration::from_millis(20);

    #[test]
    fn test_trigger_starts_unreleased() {
        let trigger = Trigger::new();
        assert!(!trigger.acquire(SHORT));
    }

    #[test]
    fn test_trigger_coalesces_releases() {
        let trigger = Trigger::new();
        trigger.release();
        trigger.release();
        trigger.release();
        assert!(trigger.acquire(SHORT));
        assert!(!trigger.acquire(SHORT));
    }

    #[test]
    fn test_trigger_release_after_acquire() {
        let trigger = Trigger::new();
        trigger.release();
        assert!(trigger.acquire(SHORT));
        trigger.release();
        assert!(trigger.acquire(SHORT));
    }

    #[test]
    fn test_trigger_wakes_waiter() {
        let trigger = Arc::new(Trigger::new());
        let waiter = {
            let trigger = Arc::clone(&trigger);
            thread::spawn(move || trigger.acquire(Duration::from_secs(5)))
        };
        thread::sleep(SHORT);
        trigger.release();
        assert!(waiter.join().unwrap());
    }

    #[test]
    fn test_finish_latches() {
        let finish = Finish::new();
        assert!(!finish.is_set());
        assert!(!finish.wait_timeout(SHORT));
        finish.set();
        assert!(finish.is_set());
        assert!(finish.wait_timeout(SHORT));
        finish.wait();
    }

    #[test]
    fn test_finish_wakes_waiter() {
        let finish = Arc::new(Finish::new());
        let waiter = {
            let finish = Arc::clone(&finish);
            thread::spawn(move || finish.wait())
        };
        thread::sleep(SHORT);
        finish.set();
        waiter.join().unwrap();
    }
}
