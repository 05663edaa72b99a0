//! Sliding-window cache controller for an infinite, cyclic photo carousel.
//!
//! A [`Carousel`] owns a fixed collection of pages and keeps a small window of
//! them (behind, current, ahead) ready for rendering. Navigation shifts the
//! window by one slot and re-anchors the neighbor iterators; the presentation
//! layer re-reads the window afterwards and rebinds its reusable views.

use std::collections::VecDeque;
use std::ops::Range;
use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender, TryRecvError, unbounded};
use tokio::sync::watch;
use tracing::{debug, trace, warn};

use crate::error::Error;
use crate::events::{PageSelected, SlotTapped};
use crate::mode::CarouselMode;
use crate::sequence::CyclicIndexSequence;

/// One reusable view's worth of data: which slot, what to show, and which
/// logical page it is.
#[derive(Debug)]
pub struct SlotBinding<'a, T> {
    pub slot: usize,
    pub item: &'a T,
    pub index: usize,
}

/// Cyclic pager over `items` rendering through a fixed number of slots.
///
/// Subscribers only ever hold receivers; dropping the carousel disconnects
/// them.
#[derive(Debug)]
pub struct Carousel<T> {
    items: Arc<[T]>,
    mode: CarouselMode,
    forward: CyclicIndexSequence,
    backward: CyclicIndexSequence,
    window: VecDeque<T>,
    current: watch::Sender<Option<usize>>,
    selections: Vec<Sender<PageSelected<T>>>,
    taps: Vec<Receiver<SlotTapped>>,
}

impl<T: Clone> Carousel<T> {
    /// Build a carousel over `items`, showing the first page.
    ///
    /// # Errors
    /// Returns [`Error::EmptyCollection`] if `items` is empty.
    pub fn new(items: impl Into<Arc<[T]>>) -> Result<Self, Error> {
        let items: Arc<[T]> = items.into();
        if items.is_empty() {
            return Err(Error::EmptyCollection);
        }
        let mode = CarouselMode::for_len(items.len());
        let (current, _) = watch::channel(None);
        let mut carousel = Self {
            items,
            mode,
            forward: CyclicIndexSequence::zero(),
            backward: CyclicIndexSequence::zero(),
            window: VecDeque::with_capacity(mode.window_size()),
            current,
            selections: Vec::new(),
            taps: Vec::new(),
        };
        carousel.load_page_at(0);
        Ok(carousel)
    }

    /// Jump straight to page `index`. Indices outside the collection are
    /// ignored.
    pub fn load_page_at(&mut self, index: usize) {
        if index >= self.items.len() {
            debug!(index, len = self.items.len(), "ignoring jump outside collection");
            return;
        }

        // Both iterators start on their neighbor, not on `index` itself.
        let mut forward = CyclicIndexSequence::forward(index, self.indices());
        forward.next();
        let mut backward = CyclicIndexSequence::backward(index, self.indices());
        backward.next();

        let items = &self.items;
        self.window.clear();
        match self.mode {
            CarouselMode::Single => self.window.push_back(items[index].clone()),
            CarouselMode::Cyclic => self.window.extend(
                [backward.peek(), index, forward.peek()].map(|i| items[i].clone()),
            ),
        }

        self.forward = forward;
        self.backward = backward;
        self.set_current(index);
        debug!(index, "loaded page");
    }

    /// Advance one page forward, wrapping past the last page.
    pub fn move_to_next_page(&mut self) {
        if !self.mode.has_multiple_pages() {
            return;
        }
        let Some(previous) = self.current_index() else {
            return;
        };

        self.preload_forward();
        let next = self.forward.next().unwrap_or(0);
        self.set_current(next);
        self.backward = CyclicIndexSequence::backward(previous, self.indices());
        debug!(from = previous, to = next, "moved to next page");
    }

    /// Step one page back, wrapping past the first page.
    pub fn move_to_previous_page(&mut self) {
        if !self.mode.has_multiple_pages() {
            return;
        }
        let Some(previous) = self.current_index() else {
            return;
        };

        self.preload_backward();
        let next = self.backward.next().unwrap_or(0);
        self.set_current(next);
        self.forward = CyclicIndexSequence::forward(previous, self.indices());
        debug!(from = previous, to = next, "moved to previous page");
    }

    /// Item cached in window slot `slot`.
    ///
    /// # Panics
    /// If `slot` is not below [`window_size`](Self::window_size).
    #[must_use]
    pub fn cached_item_at(&self, slot: usize) -> &T {
        self.assert_slot(slot);
        &self.window[slot]
    }

    /// Logical page shown by window slot `slot`, or `None` before the first
    /// page is loaded. Never mutates the neighbor iterators.
    ///
    /// # Panics
    /// If `slot` is not below [`window_size`](Self::window_size).
    #[must_use]
    pub fn convert_slot_to_logical_index(&self, slot: usize) -> Option<usize> {
        self.assert_slot(slot);
        let current = self.current_index()?;
        let index = match slot {
            0 => self.backward.peek(),
            1 => current,
            _ => self.forward.peek(),
        };
        Some(index)
    }

    /// Create one placeholder per slot using `build(slot)`.
    pub fn make_render_slots<V>(&self, build: impl FnMut(usize) -> V) -> Vec<V> {
        (0..self.window_size()).map(build).collect()
    }

    /// Slot-by-slot bind data for the current window.
    pub fn bindings(&self) -> impl Iterator<Item = SlotBinding<'_, T>> {
        self.window.iter().enumerate().filter_map(|(slot, item)| {
            let index = self.convert_slot_to_logical_index(slot)?;
            Some(SlotBinding { slot, item, index })
        })
    }

    /// Resolve a tap on `slot` and notify every selection subscriber.
    ///
    /// Returns the selected logical index.
    ///
    /// # Panics
    /// If `slot` is not below [`window_size`](Self::window_size).
    pub fn tap_slot(&mut self, slot: usize) -> Option<usize> {
        let index = self.convert_slot_to_logical_index(slot)?;
        let selected = PageSelected {
            index,
            items: Arc::clone(&self.items),
        };
        self.selections.retain(|tx| tx.send(selected.clone()).is_ok());
        debug!(slot, index, subscribers = self.selections.len(), "page selected");
        Some(index)
    }

    /// Receive a [`PageSelected`] for every resolved tap.
    pub fn subscribe_selections(&mut self) -> Receiver<PageSelected<T>> {
        let (tx, rx) = unbounded();
        self.selections.push(tx);
        rx
    }

    /// Register a view's tap stream; drained by
    /// [`dispatch_pending_taps`](Self::dispatch_pending_taps).
    pub fn bind_slot_taps(&mut self, taps: Receiver<SlotTapped>) {
        self.taps.push(taps);
    }

    /// Resolve every queued tap from bound views. Returns how many were
    /// dispatched.
    pub fn dispatch_pending_taps(&mut self) -> usize {
        let mut pending = Vec::new();
        self.taps.retain(|rx| {
            loop {
                match rx.try_recv() {
                    Ok(SlotTapped(slot)) => pending.push(slot),
                    Err(TryRecvError::Empty) => break true,
                    Err(TryRecvError::Disconnected) => break false,
                }
            }
        });

        let mut dispatched = 0;
        for slot in pending {
            if slot >= self.window_size() {
                warn!(slot, window = self.window_size(), "dropping tap outside window");
                continue;
            }
            if self.tap_slot(slot).is_some() {
                dispatched += 1;
            }
        }
        dispatched
    }
}

impl<T> Carousel<T> {
    /// Watch the page currently showing. Unchanged indices are not re-sent.
    #[must_use]
    pub fn subscribe_current_index(&self) -> watch::Receiver<Option<usize>> {
        self.current.subscribe()
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        *self.current.borrow()
    }

    #[must_use]
    pub const fn mode(&self) -> CarouselMode {
        self.mode
    }

    #[must_use]
    pub const fn window_size(&self) -> usize {
        self.mode.window_size()
    }

    /// Whether there is anywhere to navigate to.
    #[must_use]
    pub fn scroll_enabled(&self) -> bool {
        self.items.len() > 1
    }

    /// Number of pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The full page collection.
    #[must_use]
    pub const fn items(&self) -> &Arc<[T]> {
        &self.items
    }

    /// Cached items in slot order.
    pub fn window(&self) -> impl ExactSizeIterator<Item = &T> {
        self.window.iter()
    }

    fn indices(&self) -> Range<usize> {
        0..self.items.len()
    }

    fn set_current(&self, index: usize) {
        self.current.send_if_modified(|current| {
            if *current == Some(index) {
                false
            } else {
                *current = Some(index);
                true
            }
        });
    }

    fn assert_slot(&self, slot: usize) {
        assert!(
            slot < self.window_size(),
            "slot {slot} outside window of {}",
            self.window_size()
        );
    }
}

impl<T: Clone> Carousel<T> {
    fn preload_forward(&mut self) {
        let Some(index) = self.forward.lookahead(self.window_size() - 1) else {
            return;
        };
        trace!(index, "preloading ahead");
        self.window.pop_front();
        self.window.push_back(self.items[index].clone());
    }

    fn preload_backward(&mut self) {
        let Some(index) = self.backward.lookahead(self.window_size() - 1) else {
            return;
        };
        trace!(index, "preloading behind");
        self.window.pop_back();
        self.window.push_front(self.items[index].clone());
    }
}
