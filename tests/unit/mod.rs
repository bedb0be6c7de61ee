mod session;
mod test_config;
