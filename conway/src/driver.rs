// driver.rs - Fixed-interval simulation loop over a pluggable frontend

use std::thread;
use std::time::{Duration, Instant};

use crate::input::InputEvent;
use crate::simulation::Simulation;

/// Drawing surface and event source for the loop.
///
/// `poll_events` must not block for longer than a tick, and must surface a
/// window close promptly as [`InputEvent::CloseRequested`].
pub trait Frontend {
    fn render(&mut self, sim: &Simulation);
    fn poll_events(&mut self) -> Vec<InputEvent>;
    /// Release window or drawing resources. Called once, after the loop stops.
    fn shutdown(&mut self) {}
}

/// Tracks tick boundaries for frame pacing.
#[derive(Debug, Clone, Copy)]
pub struct Pacer {
    interval: Duration,
    tick_started: Instant,
}

impl Pacer {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self { interval, tick_started: now }
    }

    /// Time left in the current tick; zero once it is over.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.interval
            .saturating_sub(now.saturating_duration_since(self.tick_started))
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.remaining(now).is_zero()
    }

    /// Mark the start of a new tick.
    pub fn restart(&mut self, now: Instant) {
        self.tick_started = now;
    }
}

/// Run until the simulation stops: render, drain input, advance if
/// unpaused, then sleep out the rest of the tick.
pub fn run<F: Frontend>(sim: &mut Simulation, frontend: &mut F, tick_interval: Duration) {
    let mut pacer = Pacer::new(tick_interval, Instant::now());
    log::info!("Loop started, tick every {:?}", tick_interval);

    while sim.is_running() {
        pacer.restart(Instant::now());

        frontend.render(sim);
        sim.iterate(frontend.poll_events());

        if sim.is_running() {
            let wait = pacer.remaining(Instant::now());
            if !wait.is_zero() {
                thread::sleep(wait);
            }
        }
    }

    frontend.shutdown();
    log::info!("Loop finished at generation {}", sim.generation());
}

/// One non-blocking pass, for hosts that own the event loop and call back
/// once per repaint.
///
/// Input is applied as soon as it arrives; the automatic advance only
/// happens once a tick boundary has passed. Returns the time until the next
/// boundary, or `None` once the simulation has stopped (`shutdown` is called
/// on the pass that stops it).
pub fn frame<F: Frontend>(
    sim: &mut Simulation,
    frontend: &mut F,
    pacer: &mut Pacer,
    now: Instant,
) -> Option<Duration> {
    if !sim.is_running() {
        return None;
    }

    let events = frontend.poll_events();
    if pacer.is_due(now) {
        pacer.restart(now);
        sim.iterate(events);
    } else {
        for event in &events {
            sim.handle_event(event);
        }
    }

    if !sim.is_running() {
        frontend.shutdown();
        log::info!("Loop finished at generation {}", sim.generation());
        return None;
    }

    frontend.render(sim);
    Some(pacer.remaining(now))
}
