//! UI Components
//!
//! Reusable Leptos components.

mod comment_node;
mod comment_tree_view;
mod new_comment_form;
mod pagination_bar;
mod reply_modal;
mod search_bar;
mod sort_select;

pub use comment_node::CommentNode;
pub use comment_tree_view::CommentTreeView;
pub use new_comment_form::NewCommentForm;
pub use pagination_bar::PaginationBar;
pub use reply_modal::ReplyModal;
pub use search_bar::SearchBar;
pub use sort_select::SortSelect;
