mod history_queries;
mod progress_queries;

#[cfg(test)]
mod queries_test;

pub use history_queries::HistoryQueries;
pub use progress_queries::ProgressQueries;
