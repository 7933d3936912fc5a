//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::collections::HashSet;

use leptos::prelude::*;

use crate::models::SortOrder;
use crate::state::QueryState;

/// Comment being replied to while the reply modal is open
#[derive(Debug, Clone, PartialEq)]
pub struct ReplyTarget {
    pub id: i64,
    pub author: String,
    pub excerpt: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload comments from the backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload comments from the backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Pagination, sort, and search parameters
    pub query: RwSignal<QueryState>,
    /// Ids whose children are currently hidden
    pub collapsed: RwSignal<HashSet<i64>>,
    /// Comment currently being replied to (None = modal closed)
    pub reply_to: RwSignal<Option<ReplyTarget>>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        query: RwSignal<QueryState>,
        collapsed: RwSignal<HashSet<i64>>,
        reply_to: RwSignal<Option<ReplyTarget>>,
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            query,
            collapsed,
            reply_to,
        }
    }

    /// Trigger a reload of the current page
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Hide or show a comment's children; purely local, no network call
    pub fn toggle_collapsed(&self, id: i64) {
        self.collapsed.update(|set| {
            if !set.remove(&id) {
                set.insert(id);
            }
        });
    }

    /// Switch to search mode: page 1, collapse state cleared
    pub fn enter_search(&self, query: String) {
        self.query.update(|q| q.enter_search(query));
        self.collapsed.update(|set| set.clear());
        self.reload();
    }

    /// Leave search mode and return to the normal listing
    pub fn clear_search(&self) {
        self.query.update(|q| q.clear_search());
        self.collapsed.update(|set| set.clear());
        self.reload();
    }

    pub fn set_sort(&self, sort: SortOrder) {
        self.query.update(|q| q.set_sort(sort));
        self.reload();
    }

    pub fn next_page(&self) {
        let mut moved = false;
        self.query.update(|q| moved = q.next_page());
        if moved {
            self.reload();
        }
    }

    pub fn prev_page(&self) {
        let mut moved = false;
        self.query.update(|q| moved = q.prev_page());
        if moved {
            self.reload();
        }
    }

    pub fn open_reply(&self, target: ReplyTarget) {
        self.reply_to.set(Some(target));
    }

    pub fn close_reply(&self) {
        self.reply_to.set(None);
    }
}
