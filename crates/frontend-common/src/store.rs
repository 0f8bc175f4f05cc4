//! Observable single-value stores
//!
//! A [`Writable`] holds one value and notifies its subscribers, in
//! registration order, every time the value is replaced. A [`Readable`] is
//! the same cell without the ability to set it.
//!
//! Stores are single-threaded (`Rc`), matching the browser event loop.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::rc::{Rc, Weak};

type Callback<T> = Rc<dyn Fn(&T)>;

struct Subscriber<T> {
    id: u64,
    /// Version of the value current when it subscribed
    since: u64,
    active: Rc<Cell<bool>>,
    callback: Callback<T>,
}

impl<T> Clone for Subscriber<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            since: self.since,
            active: self.active.clone(),
            callback: self.callback.clone(),
        }
    }
}

struct Inner<T> {
    value: T,
    next_id: u64,
    /// Bumped on every `set`
    version: u64,
    subscribers: Vec<Subscriber<T>>,
    /// Values set while a notification pass was running, with their version
    pending: VecDeque<(u64, T)>,
    notifying: bool,
}

/// Handle returned by `subscribe`.
///
/// Calling [`unsubscribe`](Self::unsubscribe) or dropping the handle stops
/// delivery, including for a notification pass already under way.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        self.cancel();
    }

    fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// Observable cell that can be replaced from anywhere holding a clone
pub struct Writable<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Writable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// Two handles are equal when they point at the same cell
impl<T> PartialEq for Writable<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: fmt::Debug> fmt::Debug for Writable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Writable")
            .field("value", &inner.value)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl<T: Default + Clone + 'static> Default for Writable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + 'static> Writable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                next_id: 0,
                version: 0,
                subscribers: Vec::new(),
                pending: VecDeque::new(),
                notifying: false,
            })),
        }
    }

    /// Current value
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Register `callback` and call it once right away with the current value
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let active = Rc::new(Cell::new(true));
        let callback: Callback<T> = Rc::new(callback);

        let (id, current) = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            let since = inner.version;
            inner.subscribers.push(Subscriber {
                id,
                since,
                active: active.clone(),
                callback: callback.clone(),
            });
            (id, inner.value.clone())
        };

        let weak: Weak<RefCell<Inner<T>>> = Rc::downgrade(&self.inner);
        let subscription = Subscription {
            cancel: Some(Box::new({
                let active = active.clone();
                move || {
                    active.set(false);
                    if let Some(inner) = weak.upgrade() {
                        inner.borrow_mut().subscribers.retain(|s| s.id != id);
                    }
                }
            })),
        };

        invoke(id, &callback, &current);
        subscription
    }

    /// Replace the value and notify every subscriber
    pub fn set(&self, value: T) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.version += 1;
            let version = inner.version;
            inner.value = value.clone();
            inner.pending.push_back((version, value));
            if inner.notifying {
                // The running pass picks this value up after the current one
                return;
            }
            inner.notifying = true;
        }
        self.drain();
    }

    /// Replace the value with `f(current)`
    pub fn update(&self, f: impl FnOnce(T) -> T) {
        let next = f(self.get());
        self.set(next);
    }

    /// Read-only view of the same cell
    pub fn readonly(&self) -> Readable<T> {
        Readable {
            cell: self.clone(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    fn drain(&self) {
        loop {
            let next = {
                let mut inner = self.inner.borrow_mut();
                match inner.pending.pop_front() {
                    Some((version, value)) => Some((version, value, inner.subscribers.clone())),
                    None => {
                        inner.notifying = false;
                        None
                    }
                }
            };
            let Some((version, value, subscribers)) = next else {
                break;
            };

            // Late subscribers already got this value (or a newer one) on subscribe
            for subscriber in &subscribers {
                if subscriber.active.get() && subscriber.since < version {
                    invoke(subscriber.id, &subscriber.callback, &value);
                }
            }
        }
    }
}

fn invoke<T>(id: u64, callback: &Callback<T>, value: &T) {
    if let Err(panic) = catch_unwind(AssertUnwindSafe(|| callback(value))) {
        let message = panic
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| panic.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        tracing::error!(subscriber = id, "Store subscriber panicked: {message}");
    }
}

/// Observable cell without a setter
pub struct Readable<T> {
    cell: Writable<T>,
}

impl<T> Clone for Readable<T> {
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.clone(),
        }
    }
}

impl<T> PartialEq for Readable<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cell == other.cell
    }
}

impl<T: fmt::Debug> fmt::Debug for Readable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Readable").field(&self.cell).finish()
    }
}

impl<T: Clone + 'static> Readable<T> {
    /// Cell fixed at `value` for its whole lifetime
    pub fn new(value: T) -> Self {
        Self {
            cell: Writable::new(value),
        }
    }

    pub fn get(&self) -> T {
        self.cell.get()
    }

    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        self.cell.subscribe(callback)
    }

    pub fn subscriber_count(&self) -> usize {
        self.cell.subscriber_count()
    }
}

impl<T: Clone + 'static> From<Writable<T>> for Readable<T> {
    fn from(cell: Writable<T>) -> Self {
        Self { cell }
    }
}
