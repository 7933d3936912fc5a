//! Tree Utilities
//!
//! Helper functions for tree rendering.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::models::Comment;

/// Content shown in place of a deleted comment's text
pub const DELETED_PLACEHOLDER: &str = "[Комментарий удален]";

/// One visible row of the comment tree in display order
#[derive(Debug, Clone, PartialEq)]
pub struct CommentRow {
    pub id: i64,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub deleted: bool,
    pub depth: usize,
    /// Total nested descendants, collapsed or not
    pub descendants: usize,
    /// Whether this row's children are currently hidden
    pub collapsed: bool,
}

impl CommentRow {
    /// Text for the content block; deleted comments render a placeholder
    pub fn display_content(&self) -> &str {
        if self.deleted {
            DELETED_PLACEHOLDER
        } else {
            &self.content
        }
    }

    /// Reply and delete actions are suppressed on deleted comments
    pub fn actions_enabled(&self) -> bool {
        !self.deleted
    }
}

/// Flatten comment trees into visible rows using recursive DFS.
///
/// Children of collapsed ids are skipped; the collapsed node itself stays
/// visible so it can be expanded again.
pub fn flatten_tree(comments: &[Comment], collapsed: &HashSet<i64>) -> Vec<CommentRow> {
    fn collect(
        comments: &[Comment],
        depth: usize,
        collapsed: &HashSet<i64>,
        result: &mut Vec<CommentRow>,
    ) {
        for comment in comments {
            let is_collapsed = collapsed.contains(&comment.id);
            result.push(CommentRow {
                id: comment.id,
                author: comment.author.clone(),
                content: comment.content.clone(),
                created_at: comment.created_at,
                deleted: comment.deleted,
                depth,
                descendants: count_descendants(comment),
                collapsed: is_collapsed,
            });
            if !is_collapsed {
                collect(&comment.children, depth + 1, collapsed, result);
            }
        }
    }

    let mut result = Vec::new();
    collect(comments, 0, collapsed, &mut result);
    result
}

/// Count all nested descendants of a comment
pub fn count_descendants(comment: &Comment) -> usize {
    comment.children.len()
        + comment
            .children
            .iter()
            .map(count_descendants)
            .sum::<usize>()
}

/// Russian plural form for a reply count: 1 ответ, 2 ответа, 5 ответов
pub fn reply_count_label(count: usize) -> &'static str {
    if count % 10 == 1 && count % 100 != 11 {
        return "ответ";
    }
    if (2..=4).contains(&(count % 10)) && !(12..=14).contains(&(count % 100)) {
        return "ответа";
    }
    "ответов"
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_comment(id: i64, children: Vec<Comment>) -> Comment {
        Comment {
            id,
            parent_id: None,
            author: format!("author {}", id),
            content: format!("comment {}", id),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            deleted: false,
            children,
        }
    }

    #[test]
    fn test_flatten_tree_depth_first() {
        let comments = vec![
            make_comment(1, vec![
                make_comment(3, vec![make_comment(5, vec![])]),
                make_comment(4, vec![]),
            ]),
            make_comment(2, vec![]),
        ];

        let rows = flatten_tree(&comments, &HashSet::new());

        // 1 (depth 0), 3 (depth 1), 5 (depth 2), 4 (depth 1), 2 (depth 0)
        let order: Vec<_> = rows.iter().map(|r| (r.id, r.depth)).collect();
        assert_eq!(order, vec![(1, 0), (3, 1), (5, 2), (4, 1), (2, 0)]);
    }

    #[test]
    fn test_collapse_hides_descendants_only() {
        let comments = vec![
            make_comment(1, vec![
                make_comment(3, vec![make_comment(5, vec![])]),
                make_comment(4, vec![]),
            ]),
            make_comment(2, vec![make_comment(6, vec![])]),
        ];

        let collapsed: HashSet<i64> = [3].into_iter().collect();
        let rows = flatten_tree(&comments, &collapsed);

        let ids: Vec<_> = rows.iter().map(|r| r.id).collect();
        // 5 is hidden under 3; sibling 4 and the other root's subtree are untouched
        assert_eq!(ids, vec![1, 3, 4, 2, 6]);
        assert!(rows.iter().find(|r| r.id == 3).unwrap().collapsed);
        assert!(!rows.iter().find(|r| r.id == 4).unwrap().collapsed);
    }

    #[test]
    fn test_collapsed_root_hides_whole_subtree() {
        let comments = vec![make_comment(1, vec![
            make_comment(2, vec![make_comment(3, vec![])]),
        ])];

        let collapsed: HashSet<i64> = [1].into_iter().collect();
        let rows = flatten_tree(&comments, &collapsed);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 1);
        // the hidden descendants still count
        assert_eq!(rows[0].descendants, 2);
    }

    #[test]
    fn test_count_descendants() {
        let comment = make_comment(1, vec![
            make_comment(2, vec![make_comment(4, vec![]), make_comment(5, vec![])]),
            make_comment(3, vec![]),
        ]);
        assert_eq!(count_descendants(&comment), 4);
        assert_eq!(count_descendants(&make_comment(9, vec![])), 0);
    }

    #[test]
    fn test_deleted_row_renders_placeholder_without_actions() {
        let mut deleted = make_comment(1, vec![]);
        deleted.deleted = true;
        let rows = flatten_tree(&[deleted, make_comment(2, vec![])], &HashSet::new());

        assert_eq!(rows[0].display_content(), DELETED_PLACEHOLDER);
        assert!(!rows[0].actions_enabled());

        // live comments keep their content and actions
        assert_eq!(rows[1].display_content(), "comment 2");
        assert!(rows[1].actions_enabled());
    }

    #[test]
    fn test_reply_count_label() {
        assert_eq!(reply_count_label(1), "ответ");
        assert_eq!(reply_count_label(2), "ответа");
        assert_eq!(reply_count_label(4), "ответа");
        assert_eq!(reply_count_label(5), "ответов");
        // teens are always "ответов"
        assert_eq!(reply_count_label(11), "ответов");
        assert_eq!(reply_count_label(12), "ответов");
        assert_eq!(reply_count_label(14), "ответов");
        assert_eq!(reply_count_label(21), "ответ");
        assert_eq!(reply_count_label(22), "ответа");
        assert_eq!(reply_count_label(25), "ответов");
        assert_eq!(reply_count_label(111), "ответов");
        assert_eq!(reply_count_label(121), "ответ");
    }
}
