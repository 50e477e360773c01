pub mod column_datum_repository;
