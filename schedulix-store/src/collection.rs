//! Entity collection slices.
//!
//! Users, patients, roles and appointments all follow one pattern: an
//! ordered list, an optional current-entity pointer, loading/error flags,
//! a filter, and a pagination descriptor, driven by a pure reducer over a
//! tagged action enum. The reducer is generic; each slice instantiates it
//! with its record and filter types.
//!
//! List responses carry the sequence number their request was issued
//! with; a response that is not the latest issued for the slice is
//! discarded, so two racing list dispatches can never leave a stale
//! result installed.

use schedulix_core::models::Pagination;
use uuid::Uuid;

/// A record that can live in a collection slice.
pub trait EntityRecord: Clone {
    fn entity_id(&self) -> Uuid;
}

#[derive(Debug, Clone, PartialEq)]
pub struct CollectionState<T, F> {
    /// Insertion order, except that creation prepends (most-recent-first).
    pub items: Vec<T>,
    /// Selected/fetched single entity. Kept consistent with the list by
    /// the update/remove transitions.
    pub current: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub filter: F,
    pub pagination: Pagination,
    /// Latest list-request sequence issued for this slice.
    pub list_seq: u64,
}

impl<T, F: Default> Default for CollectionState<T, F> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current: None,
            loading: false,
            error: None,
            filter: F::default(),
            pagination: Pagination::default(),
            list_seq: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub enum CollectionAction<T, F> {
    /// A list request left with this sequence number.
    ListStarted { seq: u64 },
    /// List response; replaces the whole list when current, discarded
    /// when stale.
    ListLoaded {
        seq: u64,
        items: Vec<T>,
        pagination: Option<Pagination>,
    },
    /// List failure; the previous list is left untouched.
    ListFailed { seq: u64, message: String },
    /// A non-list operation left.
    OpStarted,
    /// Fetch-by-id response; sets the current pointer, never the list.
    CurrentLoaded(T),
    /// Create response; prepends.
    Created(T),
    /// Update response; replaces in place by id. Updating an id that is
    /// not in the list is a silent no-op on the list.
    Updated(T),
    /// Delete confirmation for an id.
    Removed(Uuid),
    /// Non-list failure.
    OpFailed { message: String },
    /// New filter installed (the caller re-lists separately).
    FilterChanged(F),
}

pub fn reduce<T, F>(state: &CollectionState<T, F>, action: &CollectionAction<T, F>) -> CollectionState<T, F>
where
    T: EntityRecord,
    F: Clone,
{
    match action {
        CollectionAction::ListStarted { seq } => CollectionState {
            loading: true,
            error: None,
            list_seq: (*seq).max(state.list_seq),
            ..state.clone()
        },
        CollectionAction::ListLoaded {
            seq,
            items,
            pagination,
        } => {
            if *seq != state.list_seq {
                return state.clone();
            }
            CollectionState {
                items: items.clone(),
                pagination: pagination.clone().unwrap_or_else(|| state.pagination.clone()),
                loading: false,
                error: None,
                ..state.clone()
            }
        }
        CollectionAction::ListFailed { seq, message } => {
            if *seq != state.list_seq {
                return state.clone();
            }
            CollectionState {
                loading: false,
                error: Some(message.clone()),
                ..state.clone()
            }
        }
        CollectionAction::OpStarted => CollectionState {
            loading: true,
            error: None,
            ..state.clone()
        },
        CollectionAction::CurrentLoaded(item) => CollectionState {
            current: Some(item.clone()),
            loading: false,
            ..state.clone()
        },
        CollectionAction::Created(item) => {
            let mut items = Vec::with_capacity(state.items.len() + 1);
            items.push(item.clone());
            items.extend(state.items.iter().cloned());
            CollectionState {
                items,
                loading: false,
                ..state.clone()
            }
        }
        CollectionAction::Updated(item) => {
            let id = item.entity_id();
            let mut items = state.items.clone();
            if let Some(slot) = items.iter_mut().find(|existing| existing.entity_id() == id) {
                *slot = item.clone();
            }
            let current = match &state.current {
                Some(current) if current.entity_id() == id => Some(item.clone()),
                other => other.clone(),
            };
            CollectionState {
                items,
                current,
                loading: false,
                ..state.clone()
            }
        }
        CollectionAction::Removed(id) => {
            let items = state
                .items
                .iter()
                .filter(|existing| existing.entity_id() != *id)
                .cloned()
                .collect();
            let current = match &state.current {
                Some(current) if current.entity_id() == *id => None,
                other => other.clone(),
            };
            CollectionState {
                items,
                current,
                loading: false,
                ..state.clone()
            }
        }
        CollectionAction::OpFailed { message } => CollectionState {
            loading: false,
            error: Some(message.clone()),
            ..state.clone()
        },
        CollectionAction::FilterChanged(filter) => CollectionState {
            filter: filter.clone(),
            ..state.clone()
        },
    }
}
