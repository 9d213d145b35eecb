//! Plain-text rendering of list snapshots and stats.

use todo_core::{Todo, TodoStats};

const PROGRESS_BAR_WIDTH: usize = 20;

/// One line per todo: `[x] <id> (<priority>) <title>`.
pub fn render_list(todos: &[Todo]) -> String {
    if todos.is_empty() {
        return "No todos yet. Add your first todo to get started!".to_string();
    }
    todos
        .iter()
        .map(render_todo)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_todo(todo: &Todo) -> String {
    let mark = if todo.completed { 'x' } else { ' ' };
    format!(
        "[{mark}] {} ({:<6}) {}",
        todo.id,
        todo.priority.as_str(),
        todo.title
    )
}

/// Totals line, plus a progress bar once the list is non-empty.
pub fn render_stats(stats: &TodoStats) -> String {
    let totals = format!(
        "Total: {}  Completed: {}  Pending: {}",
        stats.total, stats.completed, stats.pending
    );
    if stats.total == 0 {
        return totals;
    }

    let percent = stats.completion_percent();
    let filled = usize::from(percent) * PROGRESS_BAR_WIDTH / 100;
    format!(
        "{totals}\nProgress [{}{}] {percent}%",
        "#".repeat(filled),
        "-".repeat(PROGRESS_BAR_WIDTH - filled)
    )
}

#[cfg(test)]
mod tests {
    use super::{render_list, render_stats, render_todo};
    use todo_core::{Priority, Todo, TodoId, TodoStats};

    #[test]
    fn empty_list_shows_hint() {
        assert!(render_list(&[]).starts_with("No todos yet"));
    }

    #[test]
    fn todo_line_shows_mark_priority_and_title() {
        let id = TodoId::new("11111111-2222-4333-8444-555555555555");
        let mut todo = Todo::with_id(id, "Write spec", Priority::High, 0);
        assert_eq!(
            render_todo(&todo),
            "[ ] 11111111-2222-4333-8444-555555555555 (high  ) Write spec"
        );

        todo.completed = true;
        assert!(render_todo(&todo).starts_with("[x] "));
    }

    #[test]
    fn stats_include_progress_only_when_non_empty() {
        assert_eq!(
            render_stats(&TodoStats::default()),
            "Total: 0  Completed: 0  Pending: 0"
        );

        let stats = TodoStats {
            total: 4,
            completed: 1,
            pending: 3,
        };
        let rendered = render_stats(&stats);
        assert!(rendered.ends_with("[#####---------------] 25%"), "{rendered}");
    }
}
