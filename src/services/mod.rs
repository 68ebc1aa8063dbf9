pub mod arrivals_api;
