pub mod app;
pub mod commands {
    pub mod register_account;
}
