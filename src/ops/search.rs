use std::ops::Range;

use regex::Regex;

use crate::model::task::Task;

/// Which field of a task matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchField {
    Id,
    Title,
}

/// A search hit over the scheduling queue, with byte spans for the host to
/// highlight.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub task_id: String,
    pub field: MatchField,
    pub spans: Vec<Range<usize>>,
}

/// Compile a picker-modal query into a case-insensitive literal matcher.
/// The query is escaped, so user input is never interpreted as a pattern.
pub fn literal_matcher(query: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("(?i){}", regex::escape(query)))
}

/// Collect all non-overlapping match byte-ranges for a regex in the given text.
fn find_matches(re: &Regex, text: &str) -> Vec<Range<usize>> {
    re.find_iter(text).map(|m| m.start()..m.end()).collect()
}

/// Search the tasks that can appear in the scheduling picker: unscheduled,
/// non-terminal. Ids and titles are searched; hits come back in task order.
pub fn search_unscheduled(tasks: &[Task], re: &Regex) -> Vec<SearchHit> {
    let mut hits = Vec::new();

    for task in tasks {
        if task.is_scheduled() || task.status.is_terminal() {
            continue;
        }

        let spans = find_matches(re, &task.id);
        if !spans.is_empty() {
            hits.push(SearchHit {
                task_id: task.id.clone(),
                field: MatchField::Id,
                spans,
            });
        }

        let spans = find_matches(re, &task.title);
        if !spans.is_empty() {
            hits.push(SearchHit {
                task_id: task.id.clone(),
                field: MatchField::Title,
                spans,
            });
        }
    }

    hits
}
