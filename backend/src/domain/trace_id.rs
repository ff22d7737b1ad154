//! Correlation identifier for a single HTTP request.
//!
//! The `Trace` middleware opens a scope per request; anything running inside
//! that future (handlers, services, [`crate::domain::Error`] constructors)
//! reads the identifier with [`TraceId::current`]. Work moved onto another
//! task leaves the scope unless it is wrapped in [`TraceId::scope`] again.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use tokio::task_local;
use uuid::Uuid;

task_local! {
    static CURRENT: TraceId;
}

/// UUID v4 echoed in the `trace-id` response header and attached to errors.
///
/// # Examples
/// ```
/// use membership_backend::TraceId;
///
/// async fn register_member() {
///     let trace = TraceId::current().map(|id| id.to_string());
///     tracing::debug!(trace_id = ?trace, "registering member");
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceId(Uuid);

impl TraceId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an identifier received from elsewhere.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Identifier of the enclosing request, or `None` outside any scope.
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT.try_with(|id| *id).ok()
    }

    /// Run `fut` with `trace_id` as the current identifier.
    ///
    /// ```
    /// use membership_backend::TraceId;
    /// use uuid::Uuid;
    ///
    /// # tokio::runtime::Builder::new_current_thread()
    /// #     .build()
    /// #     .expect("runtime")
    /// #     .block_on(async {
    /// let id = TraceId::from_uuid(Uuid::nil());
    /// assert_eq!(TraceId::scope(id, async { TraceId::current() }).await, Some(id));
    /// # });
    /// ```
    pub async fn scope<Fut: Future>(trace_id: Self, fut: Fut) -> Fut::Output {
        CURRENT.scope(trace_id, fut).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[tokio::test]
    async fn scope_exposes_identifier_to_nested_calls() {
        async fn nested() -> Option<TraceId> {
            TraceId::current()
        }

        let id = TraceId::generate();
        assert_eq!(TraceId::scope(id, nested()).await, Some(id));
    }

    #[tokio::test]
    async fn spawned_tasks_leave_the_scope() {
        let id = TraceId::generate();
        let observed = TraceId::scope(id, async {
            tokio::spawn(async { TraceId::current() })
                .await
                .expect("task joins")
        })
        .await;
        assert_eq!(observed, None);
    }

    #[tokio::test]
    async fn nothing_is_current_without_a_scope() {
        assert_eq!(TraceId::current(), None);
    }

    #[test]
    fn generated_identifiers_differ() {
        assert_ne!(TraceId::generate(), TraceId::generate());
    }

    #[rstest]
    #[case::nil("00000000-0000-0000-0000-000000000000", true)]
    #[case::v4("3fa85f64-5717-4562-b3fc-2c963f66afa6", true)]
    #[case::garbage("not-a-uuid", false)]
    #[case::empty("", false)]
    fn parses_only_uuids(#[case] raw: &str, #[case] valid: bool) {
        let parsed = raw.parse::<TraceId>();
        assert_eq!(parsed.is_ok(), valid);
        if let Ok(id) = parsed {
            assert_eq!(id.to_string(), raw);
        }
    }
}
