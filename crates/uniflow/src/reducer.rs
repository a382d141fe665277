// ── Reducer contract ──
//
// The typed-message half of the write path: named values carrying a pure
// state transition. Stores accept writes only through these.

/// A pure, typed state transition.
///
/// A reducer is an immutable value carrying a `State -> State` function plus
/// whatever parameters it closed over (an amount to add, a new field value).
/// Defining transitions as a closed enum implementing this trait gives
/// calling code an enumerable, testable vocabulary of allowed mutations:
///
/// ```
/// use uniflow::Reducer;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Counter { total: i64 }
///
/// enum Updates {
///     Add(i64),
///     Reset,
/// }
///
/// impl Reducer<Counter> for Updates {
///     fn reduce(&self, state: Counter) -> Counter {
///         match self {
///             Updates::Add(n) => Counter { total: state.total + n },
///             Updates::Reset => Counter { total: 0 },
///         }
///     }
/// }
///
/// assert_eq!(Updates::Add(2).reduce(Counter { total: 1 }), Counter { total: 3 });
/// ```
///
/// `reduce` must be a pure function of the input state and the reducer's own
/// fields: no I/O, no dependence on external mutable state. A `reduce` that
/// panics propagates to the caller of
/// [`ReducedStore::update`](crate::ReducedStore::update) before anything is
/// published, leaving the store's value unchanged.
pub trait Reducer<S> {
    /// Compute the next state from the current one.
    fn reduce(&self, state: S) -> S;
}

/// A one-off reducer built from a closure.
///
/// Convenience for transitions that do not warrant a named variant. Prefer a
/// closed enum of updates where the set of transitions matters for review or
/// testing.
pub struct FnReducer<S> {
    reduce: Box<dyn Fn(S) -> S + Send + Sync>,
}

impl<S> FnReducer<S> {
    pub fn new(f: impl Fn(S) -> S + Send + Sync + 'static) -> Self {
        Self {
            reduce: Box::new(f),
        }
    }
}

impl<S> Reducer<S> for FnReducer<S> {
    fn reduce(&self, state: S) -> S {
        (self.reduce)(state)
    }
}
