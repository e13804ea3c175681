mod get_portfolio;

pub use get_portfolio::{get_portfolio_handler, PortfolioResponse};
pub use get_portfolio::__path_get_portfolio_handler;
