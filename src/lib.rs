pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
pub mod seed;
pub mod users;

pub mod util {
    pub mod env;
}
