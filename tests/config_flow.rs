use shop_catalog::config::EnvConfig;

#[test]
fn test_env_config_reads_database_url() {
    // dotenv never overrides variables that are already set
    std::env::set_var("DATABASE_URL", "postgresql://localhost/shop_catalog");

    let config = EnvConfig::from_env();

    assert_eq!(config.db_url, "postgresql://localhost/shop_catalog");
}
