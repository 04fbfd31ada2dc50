//! Integration tests for market-cart

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::path::Path;
    use tempfile::TempDir;

    /// Command isolated to a temp config file and storage dir
    fn cart(temp: &TempDir) -> Command {
        let mut cmd = cargo_bin_cmd!("market-cart");
        cmd.env_remove("MARKET_CART_CONFIG")
            .env_remove("MARKET_CART_STORAGE_DIR")
            .arg("--config")
            .arg(temp.path().join("config.toml"))
            .arg("--storage-dir")
            .arg(temp.path().join("storage"));
        cmd
    }

    fn add(temp: &TempDir, id: &str, price: &str) {
        cart(temp)
            .args(["add", "--id", id, "--title", "Mug", "--image-url", "u", "--price", price])
            .assert()
            .success();
    }

    fn snapshot_path(temp: &TempDir) -> std::path::PathBuf {
        temp.path().join("storage").join("market%3Acartproducts.json")
    }

    fn snapshot(path: &Path) -> serde_json::Value {
        let content = std::fs::read_to_string(path).unwrap();
        serde_json::from_str(&content).unwrap()
    }

    #[test]
    fn help_displays() {
        cargo_bin_cmd!("market-cart")
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Shopping cart"));
    }

    #[test]
    fn version_displays() {
        cargo_bin_cmd!("market-cart")
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("market-cart"));
    }

    #[test]
    fn list_empty() {
        let temp = TempDir::new().unwrap();
        cart(&temp)
            .args(["list"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Cart is empty"));
    }

    #[test]
    fn add_then_list_json() {
        let temp = TempDir::new().unwrap();
        add(&temp, "A", "10");
        add(&temp, "A", "10");
        add(&temp, "B", "2.5");

        cart(&temp)
            .args(["list", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"image_url\": \"u\""))
            .stdout(predicate::str::contains("\"quantity\": 2"));
    }

    #[test]
    fn snapshot_holds_latest_state() {
        let temp = TempDir::new().unwrap();
        add(&temp, "A", "10");
        add(&temp, "A", "10");

        let saved = snapshot(&snapshot_path(&temp));
        assert_eq!(saved[0]["id"], "A");
        assert_eq!(saved[0]["quantity"], 2);
    }

    #[test]
    fn list_keeps_snapshot() {
        let temp = TempDir::new().unwrap();
        add(&temp, "A", "10");

        cart(&temp).args(["list", "--format", "plain"]).assert().success();
        cart(&temp)
            .args(["list", "--format", "plain"])
            .assert()
            .success()
            .stdout(predicate::str::contains("A\t1"));
    }

    #[test]
    fn decrement_to_zero_removes_item() {
        let temp = TempDir::new().unwrap();
        add(&temp, "A", "10");
        add(&temp, "A", "10");

        cart(&temp)
            .args(["dec", "A"])
            .assert()
            .success()
            .stdout(predicate::str::contains("quantity is now 1"));
        cart(&temp)
            .args(["dec", "A"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Removed A"));

        let saved = snapshot(&snapshot_path(&temp));
        assert_eq!(saved, serde_json::json!([]));
    }

    #[test]
    fn increment_unknown_id_keeps_cart() {
        let temp = TempDir::new().unwrap();
        add(&temp, "A", "10");

        cart(&temp)
            .args(["inc", "Z"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No item Z"));

        let saved = snapshot(&snapshot_path(&temp));
        assert_eq!(saved.as_array().unwrap().len(), 1);
        assert_eq!(saved[0]["quantity"], 1);
    }

    #[test]
    fn negative_price_rejected() {
        let temp = TempDir::new().unwrap();
        cart(&temp)
            .args(["add", "--id", "A", "--title", "T", "--price=-1"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid price"));
    }

    #[test]
    fn infinite_price_rejected_and_cart_kept() {
        let temp = TempDir::new().unwrap();
        add(&temp, "A", "10");

        cart(&temp)
            .args(["add", "--id", "B", "--title", "T", "--price", "inf"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid price for B"));

        cart(&temp)
            .args(["list", "--format", "plain"])
            .assert()
            .success()
            .stdout(predicate::str::contains("A\t1"))
            .stdout(predicate::str::contains("B").not());
    }

    #[test]
    fn clear_empties_cart() {
        let temp = TempDir::new().unwrap();
        add(&temp, "A", "10");
        add(&temp, "B", "10");

        cart(&temp)
            .args(["clear"])
            .assert()
            .success()
            .stdout(predicate::str::contains("2 item(s) removed"));
        cart(&temp)
            .args(["list"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Cart is empty"));
    }

    #[test]
    fn config_path() {
        let temp = TempDir::new().unwrap();
        cart(&temp)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show() {
        let temp = TempDir::new().unwrap();
        cart(&temp)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[storage]"));
    }

    #[test]
    fn config_set_key_moves_snapshot() {
        let temp = TempDir::new().unwrap();
        cart(&temp)
            .args(["config", "set", "storage.key", "shop:cart"])
            .assert()
            .success();
        add(&temp, "A", "10");

        assert!(temp.path().join("storage").join("shop%3Acart.json").exists());
        assert!(!snapshot_path(&temp).exists());
    }

    #[test]
    fn invalid_config_reports_hint() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("config.toml"), "[storage\n").unwrap();

        cart(&temp)
            .args(["list"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid configuration"))
            .stderr(predicate::str::contains("config init --force"));
    }
}
