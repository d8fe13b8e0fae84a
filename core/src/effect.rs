//! Side effect descriptions.
//!
//! Effects describe side effects to be performed by the enclosing shell.
//! They are values, not execution: reducers return them, and the shell
//! interprets them, feeding any resulting actions back into the reducer.

use std::future::Future;
use std::pin::Pin;

/// A side effect to be executed by the shell.
///
/// Effects are NOT executed by the reducer. The reducer stays pure; the
/// shell awaits [`Effect::Future`] variants and dispatches the actions they
/// resolve to.
///
/// # Type Parameters
///
/// - `Action`: the action type effects can produce (feedback loop)
pub enum Effect<Action> {
    /// No-op effect.
    None,

    /// Run effects in parallel.
    Parallel(Vec<Effect<Action>>),

    /// Run effects sequentially.
    Sequential(Vec<Effect<Action>>),

    /// Arbitrary async computation, typically a collaborator call.
    ///
    /// Resolves to `Option<Action>`; if `Some`, the action is fed back into
    /// the reducer.
    Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),
}

// Manual Debug implementation since Future doesn't implement Debug
impl<Action> std::fmt::Debug for Effect<Action>
where
    Action: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::None => write!(f, "Effect::None"),
            Effect::Parallel(effects) => f.debug_tuple("Effect::Parallel").field(effects).finish(),
            Effect::Sequential(effects) => {
                f.debug_tuple("Effect::Sequential").field(effects).finish()
            },
            Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
        }
    }
}

impl<Action> Effect<Action> {
    /// Combine effects to run in parallel.
    #[must_use]
    pub const fn merge(effects: Vec<Effect<Action>>) -> Effect<Action> {
        Effect::Parallel(effects)
    }

    /// Chain effects to run sequentially.
    #[must_use]
    pub const fn chain(effects: Vec<Effect<Action>>) -> Effect<Action> {
        Effect::Sequential(effects)
    }

    /// Whether this effect does nothing.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Effect::None)
    }
}
