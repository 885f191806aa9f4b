//! Read-only, search-filtered projection of a board for rendering.
//!
//! The view borrows the canonical board and never writes back into it. Drag
//! results reported against the filtered view are translated to canonical
//! indices with [`BoardView::resolve_move`] before they reach the reducer.

use crate::error::{BoardError, Result};
use crate::types::{BoardState, Column, MoveDescription, Task, TaskId};
use serde::Serialize;

/// One column as displayed: the column plus its tasks that match the query
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnView<'a> {
    pub column: &'a Column,
    pub tasks: Vec<&'a Task>,
}

/// A board filtered by a search query
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardView<'a> {
    #[serde(skip)]
    state: &'a BoardState,
    pub query: String,
    pub columns: Vec<ColumnView<'a>>,
}

/// Build the display projection of `state` for `query`.
///
/// Columns appear in `column_order`; inside each column, tasks keep their
/// `task_ids` order and only those whose content contains `query`
/// (case-insensitive) are kept. An empty query shows everything.
pub fn board_view<'a>(state: &'a BoardState, query: &str) -> BoardView<'a> {
    let columns = state
        .ordered_columns()
        .map(|column| ColumnView {
            column,
            tasks: visible_tasks(state, &column.task_ids, query),
        })
        .collect();

    BoardView {
        state,
        query: query.to_string(),
        columns,
    }
}

fn visible_tasks<'a>(state: &'a BoardState, ids: &[TaskId], query: &str) -> Vec<&'a Task> {
    ids.iter()
        .filter_map(|id| state.tasks.get(id))
        .filter(|task| task.matches(query))
        .collect()
}

impl<'a> BoardView<'a> {
    /// The displayed column with the given id
    pub fn column(&self, id: &str) -> Option<&ColumnView<'a>> {
        self.columns.iter().find(|c| c.column.id == id)
    }

    /// Total number of tasks shown
    pub fn visible_task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }

    /// Whether a search is narrowing the board
    pub fn is_filtered(&self) -> bool {
        !self.query.is_empty()
    }

    /// Translate a move whose indices refer to this filtered view into a move
    /// over the canonical `task_ids` order.
    ///
    /// The destination index is interpreted as "before the task currently shown
    /// at that slot"; dropping past the last shown task lands right after it.
    pub fn resolve_move(&self, raw: &MoveDescription) -> Result<MoveDescription> {
        if raw.is_cancelled() {
            return Ok(raw.clone());
        }

        let source = self.column(raw.source_column_id.as_str()).ok_or_else(|| {
            BoardError::invalid_move(format!(
                "unknown source column '{}'",
                raw.source_column_id
            ))
        })?;
        match source.tasks.get(raw.source_index) {
            Some(task) if task.id == raw.task_id => {}
            _ => {
                return Err(BoardError::invalid_move(format!(
                    "'{}' is not shown at index {} of column '{}'",
                    raw.task_id, raw.source_index, raw.source_column_id
                )))
            }
        }
        let source_index = source.column.position_of(&raw.task_id).ok_or_else(|| {
            BoardError::invalid_move(format!(
                "'{}' is not in column '{}'",
                raw.task_id, raw.source_column_id
            ))
        })?;

        let destination_id = raw.destination_column_id.clone();
        let destination = destination_id
            .as_ref()
            .and_then(|id| self.state.columns.get(id))
            .ok_or_else(|| {
                BoardError::invalid_move(format!(
                    "unknown destination column '{}'",
                    destination_id.as_ref().map(|id| id.as_str()).unwrap_or_default()
                ))
            })?;

        // Canonical destination order once the dragged task has been lifted out
        let remaining: Vec<&TaskId> = destination
            .task_ids
            .iter()
            .filter(|id| **id != raw.task_id)
            .collect();
        let shown: Vec<usize> = remaining
            .iter()
            .enumerate()
            .filter(|(_, id)| {
                self.state
                    .tasks
                    .get(**id)
                    .is_some_and(|task| task.matches(&self.query))
            })
            .map(|(index, _)| index)
            .collect();

        let destination_index = match raw.destination_index {
            None => None,
            Some(slot) => Some(match (shown.get(slot), shown.last()) {
                (Some(&index), _) => index,
                (None, Some(&last)) => last + 1,
                (None, None) => remaining.len(),
            }),
        };

        Ok(MoveDescription {
            task_id: raw.task_id.clone(),
            source_column_id: raw.source_column_id.clone(),
            source_index,
            destination_column_id: destination_id,
            destination_index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::apply_move;

    fn board() -> BoardState {
        BoardState::new(
            vec![
                Task::new("a", "Fix login bug"),
                Task::new("b", "Write docs"),
                Task::new("c", "Fix signup BUG"),
                Task::new("d", "Release"),
                Task::new("e", "Bug triage"),
            ],
            vec![
                Column::new("todo", "To Do").with_tasks(["a", "b", "c"]),
                Column::new("doing", "Doing").with_tasks(["d", "e"]),
            ],
        )
    }

    fn ids(view: &BoardView<'_>, column: &str) -> Vec<String> {
        view.column(column)
            .unwrap()
            .tasks
            .iter()
            .map(|t| t.id.to_string())
            .collect()
    }

    #[test]
    fn test_empty_query_shows_everything() {
        let state = board();
        let view = board_view(&state, "");
        assert!(!view.is_filtered());
        assert_eq!(view.visible_task_count(), 5);
        assert_eq!(ids(&view, "todo"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_filter_is_case_insensitive_and_ordered() {
        let state = board();
        let view = board_view(&state, "bug");
        assert_eq!(ids(&view, "todo"), vec!["a", "c"]);
        assert_eq!(ids(&view, "doing"), vec!["e"]);
        let titles: Vec<_> = view.columns.iter().map(|c| c.column.title.as_str()).collect();
        assert_eq!(titles, vec!["To Do", "Doing"]);
    }

    #[test]
    fn test_filter_does_not_touch_canonical_order() {
        let state = board();
        let before = state.clone();
        let view = board_view(&state, "docs");
        assert_eq!(view.visible_task_count(), 1);
        assert_eq!(state, before);
    }

    #[test]
    fn test_view_serializes_for_renderer() {
        let state = board();
        let view = board_view(&state, "release");
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["query"], "release");
        assert_eq!(json["columns"][1]["tasks"][0]["id"], "d");
        assert!(json.get("state").is_none());
    }

    #[test]
    fn test_resolve_unfiltered_is_identity() {
        let state = board();
        let view = board_view(&state, "");
        let raw = MoveDescription::new("b", "todo", 1, "doing", 1);
        assert_eq!(view.resolve_move(&raw).unwrap(), raw);
    }

    #[test]
    fn test_resolve_filtered_cross_column() {
        let state = board();
        let view = board_view(&state, "bug");
        // "c" is shown at index 1 of todo; drop before "e" (shown index 0 of doing)
        let raw = MoveDescription::new("c", "todo", 1, "doing", 0);
        let resolved = view.resolve_move(&raw).unwrap();
        assert_eq!(resolved.source_index, 2);
        assert_eq!(resolved.destination_index, Some(1));

        let next = apply_move(&state, &resolved).unwrap();
        assert_eq!(next.column("todo").unwrap().task_ids, vec!["a", "b"]);
        assert_eq!(next.column("doing").unwrap().task_ids, vec!["d", "c", "e"]);
        assert!(next.is_consistent());
    }

    #[test]
    fn test_resolve_filtered_reorder_past_end() {
        let state = board();
        let view = board_view(&state, "bug");
        // Drag "a" below "c" in the filtered todo column
        let raw = MoveDescription::new("a", "todo", 0, "todo", 1);
        let resolved = view.resolve_move(&raw).unwrap();
        let next = apply_move(&state, &resolved).unwrap();
        assert_eq!(next.column("todo").unwrap().task_ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_resolve_into_column_with_nothing_shown() {
        let state = board();
        let view = board_view(&state, "docs");
        let raw = MoveDescription::new("b", "todo", 0, "doing", 0);
        let resolved = view.resolve_move(&raw).unwrap();
        assert_eq!(resolved.destination_index, Some(2));
    }

    #[test]
    fn test_resolve_rejects_hidden_task() {
        let state = board();
        let view = board_view(&state, "bug");
        // "b" is hidden by the filter, so nothing is shown for it at index 0
        let raw = MoveDescription::new("b", "todo", 0, "doing", 0);
        assert!(matches!(
            view.resolve_move(&raw),
            Err(BoardError::InvalidMove { .. })
        ));
    }

    #[test]
    fn test_resolve_cancelled_passthrough() {
        let state = board();
        let view = board_view(&state, "bug");
        let raw = MoveDescription::cancelled("a", "todo", 0);
        assert_eq!(view.resolve_move(&raw).unwrap(), raw);
    }
}
