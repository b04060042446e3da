pub mod collection;
pub mod mock_store;
pub mod repository;
