//! Event loop for surface applications
//!
//! Everything happens on the thread that calls [`EventLoop::run`]: timer
//! callbacks and input handlers take turns mutating the one surface, and
//! each runs to completion before the next starts. Handlers should return
//! quickly; nothing preempts them.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};
use std::io;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::core::Surface;
use crate::input::{InputBinder, InputEvent};
use crate::renderer::{RenderError, RenderResult, RenderSink};

/// Longest wait for input when no timer is pending
pub const IDLE_POLL: Duration = Duration::from_millis(100);

/// Error type for the event loop
#[derive(Debug, thiserror::Error)]
pub enum EventLoopError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Failed to read input: {0}")]
    Input(#[from] io::Error),
}

/// Outcome of waiting for input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Polled {
    Event(InputEvent),
    /// Nothing arrived before the timeout
    Timeout,
    /// The display was resized and needs a fresh present
    Resize,
    /// The source will never produce another event
    Closed,
}

/// A producer of input events
pub trait EventSource {
    /// Wait up to `timeout` for the next event
    fn poll_event(&mut self, timeout: Duration) -> io::Result<Polled>;
}

/// A fixed sequence of poll results, for tests and headless runs.
///
/// Never waits; reports `Closed` once drained.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvents {
    queue: VecDeque<Polled>,
}

impl ScriptedEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_event(&mut self, event: InputEvent) -> &mut Self {
        self.queue.push_back(Polled::Event(event));
        self
    }

    pub fn push_timeout(&mut self) -> &mut Self {
        self.queue.push_back(Polled::Timeout);
        self
    }

    pub fn push_resize(&mut self) -> &mut Self {
        self.queue.push_back(Polled::Resize);
        self
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl FromIterator<InputEvent> for ScriptedEvents {
    fn from_iter<I: IntoIterator<Item = InputEvent>>(iter: I) -> Self {
        Self {
            queue: iter.into_iter().map(Polled::Event).collect(),
        }
    }
}

impl EventSource for ScriptedEvents {
    fn poll_event(&mut self, _timeout: Duration) -> io::Result<Polled> {
        Ok(self.queue.pop_front().unwrap_or(Polled::Closed))
    }
}

type TimerFn<S> = Box<dyn FnOnce(&mut Controller<S>) -> RenderResult<()>>;

struct Timer<S: RenderSink> {
    deadline: Instant,
    seq: u64,
    callback: TimerFn<S>,
}

impl<S: RenderSink> PartialEq for Timer<S> {
    fn eq(&self, other: &Self) -> bool {
        self.deadline == other.deadline && self.seq == other.seq
    }
}

impl<S: RenderSink> Eq for Timer<S> {}

impl<S: RenderSink> PartialOrd for Timer<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: RenderSink> Ord for Timer<S> {
    // Reversed: BinaryHeap pops the greatest, we want the earliest
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .deadline
            .cmp(&self.deadline)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// The state handlers and timers act on: the surface, pending timers and
/// the quit flag
pub struct Controller<S: RenderSink> {
    surface: Surface<S>,
    timers: BinaryHeap<Timer<S>>,
    next_seq: u64,
    quit: bool,
}

impl<S: RenderSink> Controller<S> {
    pub fn new(surface: Surface<S>) -> Self {
        Self {
            surface,
            timers: BinaryHeap::new(),
            next_seq: 0,
            quit: false,
        }
    }

    pub fn surface(&self) -> &Surface<S> {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut Surface<S> {
        &mut self.surface
    }

    pub fn into_surface(self) -> Surface<S> {
        self.surface
    }

    /// Run `callback` once, no earlier than `delay` from now.
    ///
    /// Timers with equal deadlines fire in the order they were scheduled.
    /// A delay too long to represent as a deadline never fires.
    pub fn after<F>(&mut self, delay: Duration, callback: F)
    where
        F: FnOnce(&mut Controller<S>) -> RenderResult<()> + 'static,
    {
        let Some(deadline) = Instant::now().checked_add(delay) else {
            debug!(?delay, "timer delay out of range, dropping timer");
            return;
        };
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.push(Timer {
            deadline,
            seq,
            callback: Box::new(callback),
        });
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Ask the loop to stop after the current handler returns
    pub fn quit(&mut self) {
        self.quit = true;
    }

    pub fn is_quitting(&self) -> bool {
        self.quit
    }

    fn next_deadline(&self) -> Option<Instant> {
        self.timers.peek().map(|t| t.deadline)
    }

    /// Fire every timer due at `now`. Timers scheduled by these callbacks
    /// wait for a later pass.
    fn run_due_timers(&mut self, now: Instant) -> RenderResult<usize> {
        let mut fired = 0;
        let limit = self.next_seq;
        while self
            .timers
            .peek()
            .map_or(false, |t| t.deadline <= now && t.seq < limit)
        {
            let Some(timer) = self.timers.pop() else {
                break;
            };
            (timer.callback)(self)?;
            fired += 1;
        }
        Ok(fired)
    }
}

/// Pairs a [`Controller`] with its input handlers and drives both
pub struct EventLoop<S: RenderSink> {
    controller: Controller<S>,
    binder: InputBinder<Controller<S>>,
}

impl<S: RenderSink> EventLoop<S> {
    pub fn new(surface: Surface<S>) -> Self {
        Self {
            controller: Controller::new(surface),
            binder: InputBinder::new(),
        }
    }

    pub fn controller(&self) -> &Controller<S> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut Controller<S> {
        &mut self.controller
    }

    pub fn binder_mut(&mut self) -> &mut InputBinder<Controller<S>> {
        &mut self.binder
    }

    pub fn into_surface(self) -> Surface<S> {
        self.controller.into_surface()
    }

    pub fn on_key_press<F>(&mut self, handler: F) -> bool
    where
        F: FnMut(&mut Controller<S>, &InputEvent) -> RenderResult<()> + 'static,
    {
        self.binder.on_key_press(handler)
    }

    pub fn on_key_release<F>(&mut self, handler: F) -> bool
    where
        F: FnMut(&mut Controller<S>, &InputEvent) -> RenderResult<()> + 'static,
    {
        self.binder.on_key_release(handler)
    }

    pub fn on_click<F>(&mut self, handler: F) -> bool
    where
        F: FnMut(&mut Controller<S>, &InputEvent) -> RenderResult<()> + 'static,
    {
        self.binder.on_click(handler)
    }

    /// Process timers and input until a handler calls
    /// [`Controller::quit`] or the source closes
    pub fn run<E: EventSource + ?Sized>(&mut self, source: &mut E) -> Result<(), EventLoopError> {
        loop {
            let fired = self.controller.run_due_timers(Instant::now())?;
            if fired > 0 {
                trace!(fired, "timers fired");
            }
            if self.controller.is_quitting() {
                break;
            }

            let timeout = self
                .controller
                .next_deadline()
                .map_or(IDLE_POLL, |d| d.saturating_duration_since(Instant::now()).min(IDLE_POLL));

            match source.poll_event(timeout)? {
                Polled::Event(event) => {
                    if !self.binder.dispatch(&mut self.controller, &event)? {
                        trace!(kind = ?event.kind, "no handler bound");
                    }
                }
                Polled::Timeout => {}
                Polled::Resize => {
                    debug!("display resized, presenting again");
                    self.controller.surface_mut().refresh()?;
                }
                Polled::Closed => {
                    debug!("event source closed");
                    break;
                }
            }

            if self.controller.is_quitting() {
                break;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rect;
    use crate::input::{KeySymbol, MouseButton};
    use crate::renderer::MemorySink;

    fn event_loop(w: usize, h: usize) -> EventLoop<MemorySink> {
        EventLoop::new(Surface::new(w, h, '.', "loop", MemorySink::new()).unwrap())
    }

    #[test]
    fn test_key_handler_mutates_surface() {
        let mut ev = event_loop(3, 1);
        ev.on_key_press(|ctl, e| {
            if e.key == Some(KeySymbol::Right) {
                ctl.surface_mut().swap_area(Rect::new((0, 0), (0, 0)), (1, 0))?;
            }
            Ok(())
        });
        ev.controller_mut().surface_mut().set((0, 0), '@').unwrap();

        let mut source: ScriptedEvents = [
            InputEvent::key_press(KeySymbol::Right),
            InputEvent::key_press(KeySymbol::Up),
        ]
        .into_iter()
        .collect();
        ev.run(&mut source).unwrap();

        assert_eq!(ev.controller().surface().lines(), vec![".@."]);
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn test_quit_stops_before_remaining_events() {
        let mut ev = event_loop(2, 2);
        ev.on_click(|ctl, e| {
            if let Some(p) = e.position {
                ctl.surface_mut().set(p, 'x')?;
            }
            Ok(())
        });
        ev.on_key_press(|ctl, e| {
            if e.key == Some(KeySymbol::Escape) {
                ctl.quit();
            }
            Ok(())
        });

        let mut source = ScriptedEvents::new();
        source
            .push_event(InputEvent::click(MouseButton::Left, (1, 1)))
            .push_event(InputEvent::key_press(KeySymbol::Escape))
            .push_event(InputEvent::click(MouseButton::Left, (0, 0)));
        ev.run(&mut source).unwrap();

        assert!(ev.controller().is_quitting());
        assert_eq!(source.remaining(), 1);
        assert_eq!(ev.controller().surface().lines(), vec!["..", ".x"]);
    }

    #[test]
    fn test_timers_fire_in_order_and_can_reschedule() {
        let mut ev = event_loop(4, 1);

        fn step(ctl: &mut Controller<MemorySink>, x: i32) -> RenderResult<()> {
            ctl.surface_mut().set((x, 0), '*')?;
            if x + 1 < 4 {
                ctl.after(Duration::ZERO, move |c| step(c, x + 1));
            }
            Ok(())
        }
        ev.controller_mut().after(Duration::ZERO, |c| step(c, 0));

        let mut source = ScriptedEvents::new();
        for _ in 0..5 {
            source.push_timeout();
        }
        ev.run(&mut source).unwrap();

        assert_eq!(ev.controller().surface().lines(), vec!["****"]);
        assert_eq!(ev.controller().pending_timers(), 0);
    }

    #[test]
    fn test_equal_deadlines_keep_schedule_order() {
        let mut ctl = Controller::new(Surface::new(1, 1, '.', "", MemorySink::new()).unwrap());
        ctl.after(Duration::ZERO, |c| c.surface_mut().set((0, 0), 'a'));
        ctl.after(Duration::ZERO, |c| c.surface_mut().set((0, 0), 'b'));

        let fired = ctl.run_due_timers(Instant::now() + Duration::from_millis(1)).unwrap();
        assert_eq!(fired, 2);
        assert_eq!(ctl.surface().get((0, 0)), Some('b'));
    }

    #[test]
    fn test_future_timer_not_fired_early() {
        let mut ctl = Controller::new(Surface::new(1, 1, '.', "", MemorySink::new()).unwrap());
        ctl.after(Duration::from_secs(3600), |c| c.surface_mut().set((0, 0), 'x'));

        assert_eq!(ctl.run_due_timers(Instant::now()).unwrap(), 0);
        assert_eq!(ctl.pending_timers(), 1);
        assert_eq!(ctl.surface().get((0, 0)), Some('.'));
    }

    #[test]
    fn test_unrepresentable_delay_is_dropped() {
        let mut ctl = Controller::new(Surface::new(1, 1, '.', "", MemorySink::new()).unwrap());
        ctl.after(Duration::MAX, |c| c.surface_mut().set((0, 0), 'x'));

        assert_eq!(ctl.pending_timers(), 0);
        assert_eq!(ctl.run_due_timers(Instant::now()).unwrap(), 0);
        assert_eq!(ctl.surface().get((0, 0)), Some('.'));

        // Later timers still schedule normally
        ctl.after(Duration::ZERO, |c| c.surface_mut().set((0, 0), 'y'));
        assert_eq!(ctl.run_due_timers(Instant::now() + Duration::from_millis(1)).unwrap(), 1);
        assert_eq!(ctl.surface().get((0, 0)), Some('y'));
    }

    #[test]
    fn test_resize_presents_once() {
        let mut ev = event_loop(2, 1);
        let frames = ev.controller().surface().sink().frames();

        let mut source = ScriptedEvents::new();
        source.push_resize().push_timeout();
        ev.run(&mut source).unwrap();

        assert_eq!(ev.controller().surface().sink().frames(), frames + 1);
        assert_eq!(ev.controller().surface().sink().rows(), ["..".to_string()]);
    }

    #[test]
    fn test_unhandled_events_are_ignored() {
        let mut ev = event_loop(1, 1);
        let mut source: ScriptedEvents = [InputEvent::key_release(KeySymbol::Char('a'))]
            .into_iter()
            .collect();
        ev.run(&mut source).unwrap();
        assert!(!ev.controller().is_quitting());
    }

    struct FailingSource;

    impl EventSource for FailingSource {
        fn poll_event(&mut self, _timeout: Duration) -> io::Result<Polled> {
            Err(io::Error::new(io::ErrorKind::Other, "tty gone"))
        }
    }

    #[test]
    fn test_input_errors_propagate() {
        let mut ev = event_loop(1, 1);
        assert!(matches!(ev.run(&mut FailingSource), Err(EventLoopError::Input(_))));
    }
}
