pub mod board_state;
pub mod engagement;
pub mod portfolio_state;
