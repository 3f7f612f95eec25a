//! Listener registries for geometry lifecycle events.
//!
//! Dispatch is synchronous: listeners run in registration order, on the
//! caller's thread, before the triggering operation returns. Listeners receive
//! a shared reference to the owner, so registering or removing listeners from
//! inside a firing listener cannot compile.

use std::fmt;

use crate::geometry::Geometry;

pub type Listener<C> = Box<dyn Fn(&C, &Geometry)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Which registry a listener belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryEvent {
    Create,
    Edit,
    Delete,
}

pub struct Dispatcher<C> {
    listeners: Vec<(ListenerId, Listener<C>)>,
}

impl<C> Default for Dispatcher<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for Dispatcher<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<C> Dispatcher<C> {
    pub fn new() -> Self {
        Dispatcher {
            listeners: Vec::new(),
        }
    }

    fn add(&mut self, id: ListenerId, listener: Listener<C>) {
        self.listeners.push((id, listener));
    }

    fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn fire(&self, owner: &C, geometry: &Geometry) {
        for (_, listener) in &self.listeners {
            listener(owner, geometry);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

/// The create, edit and delete registries of one owner.
pub struct DrawEvents<C> {
    created: Dispatcher<C>,
    edited: Dispatcher<C>,
    deleted: Dispatcher<C>,
    next_id: u64,
}

impl<C> Default for DrawEvents<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for DrawEvents<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawEvents")
            .field("created", &self.created)
            .field("edited", &self.edited)
            .field("deleted", &self.deleted)
            .finish()
    }
}

impl<C> DrawEvents<C> {
    pub fn new() -> Self {
        DrawEvents {
            created: Dispatcher::new(),
            edited: Dispatcher::new(),
            deleted: Dispatcher::new(),
            next_id: 1,
        }
    }

    pub fn on<F>(&mut self, event: GeometryEvent, listener: F) -> ListenerId
    where
        F: Fn(&C, &Geometry) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.dispatcher_mut(event).add(id, Box::new(listener));
        id
    }

    /// Remove a listener from whichever registry holds it.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        self.created.remove(id) || self.edited.remove(id) || self.deleted.remove(id)
    }

    pub fn fire(&self, event: GeometryEvent, owner: &C, geometry: &Geometry) {
        self.dispatcher(event).fire(owner, geometry);
    }

    pub fn dispatcher(&self, event: GeometryEvent) -> &Dispatcher<C> {
        match event {
            GeometryEvent::Create => &self.created,
            GeometryEvent::Edit => &self.edited,
            GeometryEvent::Delete => &self.deleted,
        }
    }

    fn dispatcher_mut(&mut self, event: GeometryEvent) -> &mut Dispatcher<C> {
        match event {
            GeometryEvent::Create => &mut self.created,
            GeometryEvent::Edit => &mut self.edited,
            GeometryEvent::Delete => &mut self.deleted,
        }
    }
}
