use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;

const SAMPLE_LOG: &str = "\
2016-05-01 08:12:33,102 Allowed door1 jsmith
2016-05-01 08:13:01,045 Unauthorized door1 4111222233334444
2016-05-02 09:00:00,000 Allowed door1 agupta
";

const COMPLETE_MAIL: &str = r#"
[mail]
server = "smtp.invalid"
user = "scanner"
pass = "hunter2"
sender = "latchscan@example.org"
recipients = ["admin@example.org"]
"#;

/// Run latchscan inside `dir`, isolated from the caller's environment.
fn latchscan(dir: &assert_fs::TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("latchscan");
    cmd.current_dir(dir.path())
        .env_remove("LATCHSCAN_CONFIG")
        .env_remove("LATCHSCAN_LOG");
    cmd
}

/// Temp dir with an empty config and the given log contents.
fn workspace(log: &str) -> assert_fs::TempDir {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("latchscan.toml").write_str("").unwrap();
    dir.child("latchburg.log").write_str(log).unwrap();
    dir
}

// ─── Report contents ─────────────────────────────────────────────

#[test]
fn example_day_renders_csv() {
    let dir = workspace(SAMPLE_LOG);

    latchscan(&dir)
        .arg("2016-05-01")
        .assert()
        .success()
        .stdout(
            "Date,Time,User\n\
             2016-05-01,08:12:33,jsmith\n\
             2016-05-01,08:13:01,[unauthorized]\n",
        );
}

#[test]
fn card_number_never_printed() {
    let dir = workspace(SAMPLE_LOG);

    latchscan(&dir)
        .args(["2016-05-01", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4111222233334444").not())
        .stderr(predicate::str::contains("4111222233334444").not());
}

#[test]
fn no_matches_prints_header_only() {
    let dir = workspace(SAMPLE_LOG);

    latchscan(&dir)
        .arg("2001-01-01")
        .assert()
        .success()
        .stdout("Date,Time,User\n");
}

#[test]
fn noise_lines_are_ignored() {
    let dir = workspace(
        "Latchburg 2.1 starting\n\
         2016-05-01 08:00:00,000 Denied door1 mallory\n\
         \n\
         2016-05-01 08:00:01,000 Allowed door2 agupta\n",
    );

    latchscan(&dir)
        .arg("2016-05-01")
        .assert()
        .success()
        .stdout("Date,Time,User\n2016-05-01,08:00:01,agupta\n");
}

// ─── Date argument ───────────────────────────────────────────────

#[test]
fn missing_date_falls_back_to_today() {
    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
    let dir = workspace(&format!("{today} 07:30:00,000 Allowed door1 early\n"));

    latchscan(&dir)
        .assert()
        .success()
        .stderr(predicate::str::contains("No date found, using today's."))
        .stdout(predicate::str::contains(format!("{today},07:30:00,early")));
}

#[test]
fn unparsable_date_falls_back_to_today() {
    let dir = workspace(SAMPLE_LOG);

    latchscan(&dir)
        .arg("last-tuesday")
        .assert()
        .success()
        .stderr(predicate::str::contains("No date found, using today's."))
        .stdout(predicate::str::starts_with("Date,Time,User\n"));
}

#[test]
fn quiet_suppresses_fallback_warning() {
    let dir = workspace(SAMPLE_LOG);

    latchscan(&dir)
        .arg("--quiet")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn date_format_from_config() {
    let dir = workspace(SAMPLE_LOG);
    dir.child("latchscan.toml")
        .write_str("date_format = \"%d.%m.%Y\"\n")
        .unwrap();

    latchscan(&dir)
        .arg("01.05.2016")
        .assert()
        .success()
        .stdout(predicate::str::contains("2016-05-01,08:12:33,jsmith"));
}

// ─── Log file handling ───────────────────────────────────────────

#[test]
fn missing_log_reports_and_fails() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("latchscan.toml").write_str("").unwrap();

    latchscan(&dir)
        .arg("2016-05-01")
        .assert()
        .code(1)
        .stdout("Date,Time,User\n")
        .stderr(predicate::str::contains("Unable to find log file latchburg.log"));
}

#[test]
fn log_file_flag_overrides_config() {
    let dir = workspace("");
    dir.child("doors/east.log").write_str(SAMPLE_LOG).unwrap();

    latchscan(&dir)
        .args(["2016-05-01", "--log-file", "doors/east.log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("jsmith"));
}

#[test]
fn log_file_from_environment() {
    let dir = workspace("");
    dir.child("west.log").write_str(SAMPLE_LOG).unwrap();

    latchscan(&dir)
        .env("LATCHSCAN_LOG", "west.log")
        .arg("2016-05-01")
        .assert()
        .success()
        .stdout(predicate::str::contains("[unauthorized]"));
}

#[test]
fn verbose_summary_goes_to_stderr() {
    let dir = workspace(SAMPLE_LOG);

    latchscan(&dir)
        .args(["2016-05-01", "-v"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Scanned 3 lines, 2 records for 2016-05-01 (1 unauthorized)",
        ))
        .stdout(predicate::str::starts_with("Date,Time,User\n"));
}

// ─── Configuration and delivery ──────────────────────────────────

#[test]
fn invalid_config_fails() {
    let dir = workspace(SAMPLE_LOG);
    dir.child("latchscan.toml")
        .write_str("log_path = [not toml")
        .unwrap();

    latchscan(&dir)
        .arg("2016-05-01")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn explicit_config_must_exist() {
    let dir = workspace(SAMPLE_LOG);

    latchscan(&dir)
        .args(["2016-05-01", "--config", "missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.toml not found"));
}

#[test]
fn noemail_prints_despite_mail_config() {
    let dir = workspace(SAMPLE_LOG);
    dir.child("latchscan.toml").write_str(COMPLETE_MAIL).unwrap();

    latchscan(&dir)
        .args(["2016-05-01", "noemail"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2016-05-01,08:12:33,jsmith"));
}

#[test]
fn no_email_flag_prints_despite_mail_config() {
    let dir = workspace(SAMPLE_LOG);
    dir.child("latchscan.toml").write_str(COMPLETE_MAIL).unwrap();

    latchscan(&dir)
        .args(["--no-email", "2016-05-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[unauthorized]"));
}

#[test]
fn incomplete_mail_config_prints_to_console() {
    let dir = workspace(SAMPLE_LOG);
    dir.child("latchscan.toml")
        .write_str("[mail]\nserver = \"smtp.example.org\"\npass = \"\"\n")
        .unwrap();

    latchscan(&dir)
        .arg("2016-05-01")
        .assert()
        .success()
        .stderr(predicate::str::contains("Mail settings incomplete"))
        .stdout(predicate::str::contains("jsmith"));
}

#[test]
fn invalid_mail_address_fails_before_scanning() {
    let dir = workspace(SAMPLE_LOG);
    dir.child("latchscan.toml")
        .write_str(&COMPLETE_MAIL.replace("latchscan@example.org", "not an address"))
        .unwrap();

    latchscan(&dir)
        .arg("2016-05-01")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid mail sender"));
}

#[test]
fn mail_send_failure_exits_nonzero_without_fallback() {
    let dir = workspace(SAMPLE_LOG);
    dir.child("latchscan.toml")
        .write_str(
            &COMPLETE_MAIL
                .replace("\"smtp.invalid\"", "\"127.0.0.1\"\nport = 1"),
        )
        .unwrap();

    latchscan(&dir)
        .arg("2016-05-01")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Mail delivery failed"))
        .stderr(predicate::str::contains("4111222233334444").not());
}
