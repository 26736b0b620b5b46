//! Tab drag and drop.
//!
//! A drag carries a typed payload naming the dragged tab. The payload is
//! checked against the current state when it is dropped, so a stale or
//! malformed drop becomes a `DropError` instead of a silent no-op intent.

use thiserror::Error;

use crate::browser::{Bucket, BrowserState, Intent, TabId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    tab: TabId,
}

impl DragPayload {
    pub fn begin(state: &BrowserState, tab: &TabId) -> Result<Self, DropError> {
        if state.tab(tab).is_none() {
            return Err(DropError::UnknownTab(tab.clone()));
        }
        Ok(Self { tab: tab.clone() })
    }

    pub fn tab(&self) -> &TabId {
        &self.tab
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    Bucket(Bucket),
    Tab(TabId),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DropError {
    #[error("dragged tab {0} no longer exists")]
    UnknownTab(TabId),
    #[error("drop target tab {0} no longer exists")]
    UnknownTarget(TabId),
    #[error("tab {0} was dropped onto itself")]
    SelfDrop(TabId),
}

/// Turn a drop into the intent it stands for.
pub fn resolve_drop(
    state: &BrowserState,
    payload: &DragPayload,
    target: DropTarget,
) -> Result<Intent, DropError> {
    let dragged = payload.tab.clone();
    if state.tab(&dragged).is_none() {
        return Err(DropError::UnknownTab(dragged));
    }
    match target {
        DropTarget::Bucket(bucket) => Ok(Intent::DropOnBucket { id: dragged, bucket }),
        DropTarget::Tab(target) if target == dragged => Err(DropError::SelfDrop(target)),
        DropTarget::Tab(target) => {
            if state.tab(&target).is_none() {
                return Err(DropError::UnknownTarget(target));
            }
            Ok(Intent::Reorder { dragged, target })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{resolve_drop, DragPayload, DropError, DropTarget};
    use crate::browser::{Bucket, BrowserState, Intent, TabId};

    #[test]
    fn drag_cannot_start_on_unknown_tab() {
        let state = BrowserState::seeded();
        let missing = TabId::new("missing");
        assert_eq!(
            DragPayload::begin(&state, &missing),
            Err(DropError::UnknownTab(missing))
        );
    }

    #[test]
    fn bucket_drop_becomes_drop_on_bucket() {
        let state = BrowserState::seeded();
        let payload = DragPayload::begin(&state, &TabId::new("3")).expect("payload");
        assert_eq!(
            resolve_drop(&state, &payload, DropTarget::Bucket(Bucket::Pinned)),
            Ok(Intent::DropOnBucket {
                id: TabId::new("3"),
                bucket: Bucket::Pinned,
            })
        );
    }

    #[test]
    fn tab_drop_becomes_reorder() {
        let state = BrowserState::seeded();
        let payload = DragPayload::begin(&state, &TabId::new("1")).expect("payload");
        assert_eq!(
            resolve_drop(&state, &payload, DropTarget::Tab(TabId::new("3"))),
            Ok(Intent::Reorder {
                dragged: TabId::new("1"),
                target: TabId::new("3"),
            })
        );
    }

    #[test]
    fn self_drop_is_rejected() {
        let state = BrowserState::seeded();
        let payload = DragPayload::begin(&state, &TabId::new("2")).expect("payload");
        assert_eq!(
            resolve_drop(&state, &payload, DropTarget::Tab(TabId::new("2"))),
            Err(DropError::SelfDrop(TabId::new("2")))
        );
    }

    #[test]
    fn stale_payload_and_unknown_target_are_rejected() {
        let mut state = BrowserState::seeded();
        let payload = DragPayload::begin(&state, &TabId::new("1")).expect("payload");
        assert_eq!(
            resolve_drop(&state, &payload, DropTarget::Tab(TabId::new("nope"))),
            Err(DropError::UnknownTarget(TabId::new("nope")))
        );

        state.apply(Intent::CloseTab(TabId::new("1")));
        assert_eq!(
            resolve_drop(&state, &payload, DropTarget::Bucket(Bucket::Today)),
            Err(DropError::UnknownTab(TabId::new("1")))
        );
    }
}
