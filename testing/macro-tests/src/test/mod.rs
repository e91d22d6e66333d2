mod query_string;
mod table;
