// Price series analysis
pub mod min_loss;

pub use min_loss::{find_minimum_loss, find_minimum_loss_i64, find_minimum_loss_pair, LossPair};
