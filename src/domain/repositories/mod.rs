pub mod actors;
pub mod movies;
pub mod pricing_plans;
pub mod reviews;
pub mod tv_series;
pub mod users;
pub mod watchlist;
