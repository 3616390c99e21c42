//! Viewport scroll tracking for the scroll-aware navbar.
//!
//! A [`ScrollSource`] is anything that can report the vertical offset and
//! call back on change. [`ScrollSubscription`] holds one registration and
//! removes it when dropped, so a listener never outlives the component that
//! owns the guard.

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

/// Offsets strictly above this mark the bar as scrolled.
pub const SCROLL_THRESHOLD_PX: f64 = 10.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollState {
    scrolled: bool,
}

impl ScrollState {
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Record an offset; returns `true` if `scrolled` flipped.
    pub fn observe(&mut self, offset: f64) -> bool {
        let scrolled = offset > SCROLL_THRESHOLD_PX;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }
}

#[derive(Debug, Error)]
pub enum ScrollError {
    #[error("no window available to observe")]
    NoWindow,
    #[error("failed to register scroll listener: {0}")]
    Listener(String),
    #[error("scroll bridge closed: {0}")]
    Bridge(String),
}

pub type ScrollCallback = Box<dyn FnMut(f64)>;

pub trait ScrollSource {
    type Handle;

    fn subscribe(&self, on_scroll: ScrollCallback) -> Result<Self::Handle, ScrollError>;

    fn unsubscribe(&self, handle: Self::Handle);

    /// Current vertical offset, `0.0` when unknown.
    fn offset(&self) -> f64;
}

/// A live listener registration; dropping it unsubscribes.
pub struct ScrollSubscription<S: ScrollSource> {
    source: S,
    handle: Option<S::Handle>,
}

impl<S: ScrollSource> ScrollSubscription<S> {
    /// Subscribe and immediately report the current offset, so state is
    /// correct even when the page was restored mid-scroll.
    pub fn acquire(source: S, mut on_scroll: impl FnMut(f64) + 'static) -> Result<Self, ScrollError> {
        on_scroll(source.offset());
        let handle = source.subscribe(Box::new(on_scroll))?;
        Ok(Self {
            source,
            handle: Some(handle),
        })
    }
}

impl<S: ScrollSource> Drop for ScrollSubscription<S> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.source.unsubscribe(handle);
        }
    }
}

/// In-memory scroll source driven by [`ManualScroll::scroll_to`].
///
/// Used for headless renders and in tests. Clones share listeners.
#[derive(Clone, Default)]
pub struct ManualScroll {
    inner: Rc<RefCell<ManualInner>>,
}

#[derive(Default)]
struct ManualInner {
    offset: f64,
    next_id: u64,
    listeners: Vec<(u64, ScrollCallback)>,
    dispatching: bool,
    // Ids released while their callbacks were taken out for dispatch.
    released: Vec<u64>,
}

impl ManualScroll {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_to(&self, offset: f64) {
        // Callbacks run without the borrow held, so they may subscribe or
        // drop subscriptions of their own.
        let mut listeners = {
            let mut inner = self.inner.borrow_mut();
            inner.offset = offset;
            inner.dispatching = true;
            std::mem::take(&mut inner.listeners)
        };
        for (id, callback) in listeners.iter_mut() {
            if self.inner.borrow().released.contains(id) {
                continue;
            }
            callback(offset);
        }
        let mut inner = self.inner.borrow_mut();
        inner.dispatching = false;
        let released = std::mem::take(&mut inner.released);
        listeners.retain(|(id, _)| !released.contains(id));
        listeners.append(&mut inner.listeners);
        inner.listeners = listeners;
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl ScrollSource for ManualScroll {
    type Handle = u64;

    fn subscribe(&self, on_scroll: ScrollCallback) -> Result<u64, ScrollError> {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.listeners.push((id, on_scroll));
        Ok(id)
    }

    fn unsubscribe(&self, handle: u64) {
        let mut inner = self.inner.borrow_mut();
        inner.listeners.retain(|(id, _)| *id != handle);
        if inner.dispatching {
            inner.released.push(handle);
        }
    }

    fn offset(&self) -> f64 {
        self.inner.borrow().offset
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::core::menu::MenuState;
    use crate::core::nav::TabItem;
    use crate::core::tabs::TabState;

    fn tracked(source: &ManualScroll) -> (Rc<Cell<ScrollState>>, ScrollSubscription<ManualScroll>) {
        let state = Rc::new(Cell::new(ScrollState::default()));
        let sink = state.clone();
        let sub = ScrollSubscription::acquire(source.clone(), move |offset| {
            let mut next = sink.get();
            next.observe(offset);
            sink.set(next);
        })
        .unwrap();
        (state, sub)
    }

    #[test]
    fn threshold_is_strict() {
        let mut state = ScrollState::default();
        state.observe(10.0);
        assert!(!state.is_scrolled());
        state.observe(10.5);
        assert!(state.is_scrolled());
        state.observe(0.0);
        assert!(!state.is_scrolled());
    }

    #[test]
    fn scrolled_tracks_latest_offset_only() {
        let mut state = ScrollState::default();
        for offset in [0.0, 50.0, 5.0, 11.0, 400.0, 3.0] {
            state.observe(offset);
            assert_eq!(state.is_scrolled(), offset > SCROLL_THRESHOLD_PX);
        }
    }

    #[test]
    fn observe_reports_flips_only() {
        let mut state = ScrollState::default();
        assert!(!state.observe(2.0));
        assert!(state.observe(20.0));
        assert!(!state.observe(30.0));
        assert!(state.observe(0.0));
    }

    #[test]
    fn acquire_seeds_current_offset() {
        let source = ManualScroll::new();
        source.scroll_to(120.0);
        let (state, _sub) = tracked(&source);
        assert!(state.get().is_scrolled());
    }

    #[test]
    fn dropping_the_guard_stops_updates() {
        let source = ManualScroll::new();
        let (state, sub) = tracked(&source);
        assert_eq!(source.listener_count(), 1);

        source.scroll_to(50.0);
        assert!(state.get().is_scrolled());

        drop(sub);
        assert_eq!(source.listener_count(), 0);

        source.scroll_to(0.0);
        assert!(state.get().is_scrolled(), "update leaked past unsubscribe");
    }

    #[test]
    fn independent_subscriptions_release_independently() {
        let source = ManualScroll::new();
        let (first, first_sub) = tracked(&source);
        let (second, _second_sub) = tracked(&source);
        assert_eq!(source.listener_count(), 2);

        drop(first_sub);
        source.scroll_to(40.0);
        assert!(!first.get().is_scrolled());
        assert!(second.get().is_scrolled());
        assert_eq!(source.listener_count(), 1);
    }

    #[test]
    fn listener_can_release_another_subscription_mid_dispatch() {
        let source = ManualScroll::new();
        let watcher_hits = Rc::new(Cell::new(0u32));
        let watcher_slot: Rc<RefCell<Option<ScrollSubscription<ManualScroll>>>> =
            Rc::new(RefCell::new(None));

        let slot = watcher_slot.clone();
        let _releaser = ScrollSubscription::acquire(source.clone(), move |offset| {
            if offset > SCROLL_THRESHOLD_PX {
                slot.borrow_mut().take();
            }
        })
        .unwrap();

        let hits = watcher_hits.clone();
        let watcher = ScrollSubscription::acquire(source.clone(), move |_| {
            hits.set(hits.get() + 1);
        })
        .unwrap();
        *watcher_slot.borrow_mut() = Some(watcher);
        assert_eq!(watcher_hits.get(), 1);
        assert_eq!(source.listener_count(), 2);

        source.scroll_to(50.0);
        assert!(watcher_slot.borrow().is_none());
        assert_eq!(source.listener_count(), 1, "released listener was restored");
        assert_eq!(watcher_hits.get(), 1, "released listener ran in the same dispatch");

        source.scroll_to(60.0);
        assert_eq!(watcher_hits.get(), 1);
    }

    #[test]
    fn listener_added_mid_dispatch_is_kept() {
        let source = ManualScroll::new();
        let late: Rc<RefCell<Option<ScrollSubscription<ManualScroll>>>> = Rc::new(RefCell::new(None));

        let slot = late.clone();
        let inner_source = source.clone();
        let _first = ScrollSubscription::acquire(source.clone(), move |offset| {
            if offset > SCROLL_THRESHOLD_PX && slot.borrow().is_none() {
                let sub = ScrollSubscription::acquire(inner_source.clone(), |_| {}).unwrap();
                *slot.borrow_mut() = Some(sub);
            }
        })
        .unwrap();

        source.scroll_to(30.0);
        assert_eq!(source.listener_count(), 2);

        late.borrow_mut().take();
        assert_eq!(source.listener_count(), 1);
    }

    #[test]
    fn initial_render_through_scroll_and_tab_press() {
        let menu = MenuState::new();
        let mut tabs = TabState::new();
        let source = ManualScroll::new();
        let (state, _sub) = tracked(&source);

        assert!(!menu.is_open());
        assert_eq!(tabs.active().name(), "Home");
        assert!(!state.get().is_scrolled());

        source.scroll_to(50.0);
        assert!(state.get().is_scrolled());

        tabs.press(TabItem::Playground);
        assert_eq!(tabs.active().name(), "Playground");

        source.scroll_to(0.0);
        assert!(!state.get().is_scrolled());
        assert_eq!(tabs.active(), TabItem::Playground);
    }
}
