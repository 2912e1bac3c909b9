//! Registration descriptor for hook subscribers.

use crate::domain::DEFAULT_DOMAIN;
use crate::order::HookOrder;

/// Describes one subscriber registration: the hook name, the handler, and
/// the optional order, id, and domain.
///
/// ```rust,ignore
/// let id = engine.register(
///     HookBinding::new("routes-init", handler)
///         .order(HookOrder::HIGH)
///         .domain("admin-plugin"),
/// );
/// ```
#[derive(Debug)]
pub struct HookBinding<H> {
    pub(crate) name: String,
    pub(crate) handler: H,
    pub(crate) order: HookOrder,
    pub(crate) id: Option<String>,
    pub(crate) domain: String,
}

impl<H> HookBinding<H> {
    /// Creates a binding with neutral order, a generated id, and the
    /// `"default"` domain.
    pub fn new(name: impl Into<String>, handler: H) -> Self {
        Self {
            name: name.into(),
            handler,
            order: HookOrder::NEUTRAL,
            id: None,
            domain: DEFAULT_DOMAIN.to_string(),
        }
    }

    /// Sets the execution order.
    pub fn order(mut self, order: impl Into<HookOrder>) -> Self {
        self.order = order.into();
        self
    }

    /// Sets an explicit id. Registering a second binding with the same id
    /// in the same namespace overwrites the first (last-write-wins).
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Tags the registration with a domain for group-scoped teardown.
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }
}
