use std::fmt;

use crate::fetch::{FetchController, FetchLifecycle, Lookup, Presentable};

/// Result of rendering a lifecycle through the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundaryView {
    Content(String),
    /// The lifecycle escalated a failure; the only action is a reset.
    Fallback { message: String },
}

impl BoundaryView {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

impl fmt::Display for BoundaryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Content(text) => f.write_str(text),
            Self::Fallback { message } => {
                write!(f, "{}\n[ok] type :reset to try again", message)
            }
        }
    }
}

/// Supervisor for a fetch lifecycle.
///
/// Holds no state of its own: whether the fallback shows is decided by the
/// lifecycle, so a new query clears it as well as an explicit reset.
pub struct ErrorBoundary;

impl ErrorBoundary {
    pub fn render<T, E, F>(lifecycle: &FetchLifecycle<T, E>, render: F) -> BoundaryView
    where
        E: fmt::Display,
        F: FnOnce(Presentable<'_, T>) -> String,
    {
        match lifecycle.presentable() {
            Ok(view) => BoundaryView::Content(render(view)),
            Err(error) => BoundaryView::Fallback {
                message: format!("There was an error: {}", error),
            },
        }
    }

    /// The fallback's recovery action.
    pub fn reset<L: Lookup>(controller: &mut FetchController<L>) {
        tracing::debug!(query = %controller.lifecycle().query(), "Error boundary reset");
        controller.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::{FetchIntent, FetchReducer};
    use crate::mvi::Reducer;

    type Lifecycle = FetchLifecycle<u32, String>;

    fn render_count(view: Presentable<'_, u32>) -> String {
        match view {
            Presentable::Idle => "idle".into(),
            Presentable::Pending { query } => format!("loading {}", query),
            Presentable::Resolved(n) => n.to_string(),
        }
    }

    #[test]
    fn content_for_non_failed_states() {
        let lifecycle = Lifecycle::default();
        assert_eq!(
            ErrorBoundary::render(&lifecycle, render_count),
            BoundaryView::Content("idle".into())
        );

        let pending = FetchReducer::reduce(
            lifecycle,
            FetchIntent::QueryChanged {
                query: "ditto".into(),
            },
        );
        assert_eq!(
            ErrorBoundary::render(&pending, render_count),
            BoundaryView::Content("loading ditto".into())
        );
    }

    #[test]
    fn fallback_for_rejection() {
        let lifecycle = FetchReducer::reduce(
            Lifecycle::default(),
            FetchIntent::QueryChanged {
                query: "missingno".into(),
            },
        );
        let lifecycle = FetchReducer::reduce(
            lifecycle,
            FetchIntent::Settled {
                generation: 1,
                outcome: Err("not found".into()),
            },
        );

        let view = ErrorBoundary::render(&lifecycle, render_count);
        assert!(view.is_fallback());
        assert_eq!(
            view,
            BoundaryView::Fallback {
                message: "There was an error: not found".into()
            }
        );
        assert!(view.to_string().contains(":reset"));
    }
}
