//! # Microstore Runtime
//!
//! Runtime implementation for the microstore architecture.
//!
//! This crate provides the Store: a synchronous runtime that owns the
//! current state, runs actions through a reducer, and re-renders every
//! attached view on each dispatch.
//!
//! ## Core Components
//!
//! - **Store**: owns state, reducer, environment, and render targets
//! - **`RenderRoot`**: an opaque target whose content is fully replaced
//! - **`connect`**: binds a component to the store's state via a selector
//!
//! ## Execution model
//!
//! Everything is single-threaded and synchronous. A call to
//! [`Store::dispatch`] runs the reducer, swaps in the new state, and
//! re-renders every root to completion before returning. The store has only
//! two observable states - idle and rendering - and `dispatch(&mut self)`
//! makes interleaved dispatches unrepresentable.
//!
//! ## Example
//!
//! ```ignore
//! let mut store = Store::new(initial_state, reducer, environment);
//! store.attach(connect(Clone::clone, |s| app(&s)), Box::new(root.clone()));
//!
//! store.dispatch(Action::DoSomething)?;
//! let count = store.state(|s| s.items.len());
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use microstore_core::reducer::Reducer;
use microstore_core::template::Node;

/// An opaque render target.
///
/// The only supported operation is replacing the target's entire content
/// with a freshly rendered HTML string. Partial updates do not exist in
/// this architecture.
pub trait RenderRoot {
    /// Replaces all content with `html`.
    fn replace_content(&mut self, html: &str);
}

/// A component bound to the store's state type.
///
/// Bound views are invoked with the current state on every dispatch and
/// return the node to render - there is no partial subscription.
pub type View<S> = Box<dyn Fn(&S) -> Node>;

/// Binds a component to store state through a selector.
///
/// The selector derives the component's props from the current state,
/// capturing any explicit props in its closure. Because state-derived
/// fields are computed by the selector at render time, state wins over
/// anything captured earlier - and the view re-reads the state on every
/// dispatch instead of holding a reference across dispatch boundaries.
pub fn connect<S, P, Sel, C>(selector: Sel, component: C) -> View<S>
where
    Sel: Fn(&S) -> P + 'static,
    C: Fn(P) -> Node + 'static,
{
    Box::new(move |state| component(selector(state)))
}

/// The Store - synchronous runtime coordinator for a reducer.
///
/// The Store manages:
/// 1. State (owned, replaced wholesale on each dispatch)
/// 2. Reducer (business logic, usually wrapped in the logging middleware)
/// 3. Environment (injected dependencies)
/// 4. Render targets (every attached root is re-rendered on every dispatch)
pub struct Store<R: Reducer> {
    state: R::State,
    reducer: R,
    environment: R::Environment,
    roots: Vec<(Box<dyn RenderRoot>, View<R::State>)>,
}

impl<R: Reducer> Store<R> {
    /// Creates a store with initial state, reducer, and environment.
    #[must_use]
    pub fn new(initial_state: R::State, reducer: R, environment: R::Environment) -> Self {
        Self {
            state: initial_state,
            reducer,
            environment,
            roots: Vec::new(),
        }
    }

    /// Registers a (root, view) pair and immediately renders all roots.
    pub fn attach(&mut self, view: View<R::State>, root: Box<dyn RenderRoot>) {
        self.roots.push((root, view));
        self.render_all();
    }

    /// Applies an action to the store and re-renders every attached root.
    ///
    /// The reducer runs against the current state; on success the stored
    /// state is replaced with the result and every root's content is
    /// overwritten with its view's rendered output. The whole pipeline runs
    /// to completion before this method returns.
    ///
    /// # Errors
    ///
    /// Propagates the reducer's error. The state is left unchanged and no
    /// render happens.
    pub fn dispatch(&mut self, action: R::Action) -> Result<(), R::Error> {
        let next = self.reducer.reduce(&self.state, action, &self.environment)?;
        self.state = next;
        self.render_all();
        Ok(())
    }

    /// Reads the current state through a closure.
    ///
    /// Callers get a value out rather than a reference, so nothing is held
    /// across a dispatch boundary.
    pub fn state<T>(&self, read: impl FnOnce(&R::State) -> T) -> T {
        read(&self.state)
    }

    /// Number of attached render roots.
    #[must_use]
    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    fn render_all(&mut self) {
        tracing::trace!(roots = self.roots.len(), "rendering");
        for (root, view) in &mut self.roots {
            let html = view(&self.state).render();
            root.replace_content(&html);
        }
    }
}

/// Shared in-memory render root.
///
/// Clones share one buffer, so a test or binary can keep a handle while the
/// store owns the boxed root. Stands in for a DOM subtree.
#[derive(Clone, Debug, Default)]
pub struct StringRoot {
    content: Rc<RefCell<String>>,
}

impl StringRoot {
    /// Creates an empty root.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current content of the root.
    #[must_use]
    pub fn content(&self) -> String {
        self.content.borrow().clone()
    }
}

impl RenderRoot for StringRoot {
    fn replace_content(&mut self, html: &str) {
        *self.content.borrow_mut() = html.to_string();
    }
}
