pub mod list_query;
pub mod sync;
