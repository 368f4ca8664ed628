pub mod series_statuses;
pub mod user_roles;
