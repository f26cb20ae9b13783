pub mod yahoo;

pub use yahoo::ChartClient;
