pub mod pagination_schema;
