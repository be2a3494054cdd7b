pub mod cars;
