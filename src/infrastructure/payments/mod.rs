pub mod dodo_client;
