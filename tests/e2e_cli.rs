use tempfile::TempDir;

mod common;

#[test]
fn e2e_employee_lifecycle() {
    let data_dir = TempDir::new().expect("temp dir");

    let dept = common::run_json(
        common::base_cmd(&data_dir)
            .arg("department")
            .arg("create")
            .arg("--name")
            .arg("Engineering")
            .arg("--location")
            .arg("Floor 3"),
    );
    let dept_id = dept["id"].as_i64().expect("department id");

    let alice = common::run_json(
        common::base_cmd(&data_dir)
            .arg("employee")
            .arg("create")
            .arg("--name")
            .arg("Alice")
            .arg("--job-title")
            .arg("Engineer")
            .arg("--department-id")
            .arg(dept_id.to_string()),
    );
    let alice_id = alice["id"].as_i64().expect("employee id");
    assert_eq!(alice["jobTitle"], "Engineer");
    assert_eq!(alice["departmentId"], dept_id);

    let updated = common::run_json(
        common::base_cmd(&data_dir)
            .arg("employee")
            .arg("update")
            .arg("--id")
            .arg(alice_id.to_string())
            .arg("--job-title")
            .arg("Lead Engineer"),
    );
    assert_eq!(updated["id"], alice_id);
    assert_eq!(updated["jobTitle"], "Lead Engineer");

    let shown = common::run_json(
        common::base_cmd(&data_dir)
            .arg("employee")
            .arg("show")
            .arg("--id")
            .arg(alice_id.to_string()),
    );
    assert_eq!(shown["jobTitle"], "Lead Engineer");

    let resolved = common::run_json(
        common::base_cmd(&data_dir)
            .arg("employee")
            .arg("department")
            .arg("--id")
            .arg(alice_id.to_string()),
    );
    assert_eq!(resolved["name"], "Engineering");

    let members = common::run_json(
        common::base_cmd(&data_dir)
            .arg("department")
            .arg("employees")
            .arg("--id")
            .arg(dept_id.to_string()),
    );
    assert_eq!(members.as_array().map(Vec::len), Some(1));

    let deleted = common::run_json(
        common::base_cmd(&data_dir)
            .arg("employee")
            .arg("delete")
            .arg("--id")
            .arg(alice_id.to_string()),
    );
    assert!(deleted["id"].is_null());

    let output = common::base_cmd(&data_dir)
        .arg("employee")
        .arg("show")
        .arg("--id")
        .arg(alice_id.to_string())
        .output()
        .expect("run employee show");
    assert!(!output.status.success());

    let all = common::run_json(common::base_cmd(&data_dir).arg("employee").arg("list"));
    assert_eq!(all, serde_json::json!([]));
}

#[test]
fn e2e_find_by_name_returns_first_match() {
    let data_dir = TempDir::new().expect("temp dir");
    for title in ["Clerk", "Driver"] {
        common::run_json(
            common::base_cmd(&data_dir)
                .arg("employee")
                .arg("create")
                .arg("--name")
                .arg("Bob")
                .arg("--job-title")
                .arg(title),
        );
    }

    let found = common::run_json(
        common::base_cmd(&data_dir)
            .arg("employee")
            .arg("find")
            .arg("--name")
            .arg("Bob"),
    );
    assert_eq!(found["name"], "Bob");
    assert_eq!(found["jobTitle"], "Clerk");
}

#[test]
fn e2e_strict_flag_rejects_unknown_department() {
    let data_dir = TempDir::new().expect("temp dir");
    let output = common::base_cmd(&data_dir)
        .arg("--strict-foreign-keys")
        .arg("employee")
        .arg("create")
        .arg("--name")
        .arg("Alice")
        .arg("--job-title")
        .arg("Engineer")
        .arg("--department-id")
        .arg("99")
        .output()
        .expect("run employee create");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("department 99 does not exist"), "{stderr}");
}

#[test]
fn e2e_schema_drop_and_reset() {
    let data_dir = TempDir::new().expect("temp dir");
    common::run_json(
        common::base_cmd(&data_dir)
            .arg("employee")
            .arg("create")
            .arg("--name")
            .arg("Alice")
            .arg("--job-title")
            .arg("Engineer"),
    );

    let output = common::base_cmd(&data_dir)
        .arg("schema")
        .arg("drop")
        .output()
        .expect("run schema drop");
    assert!(output.status.success(), "{:?}", output);

    let all = common::run_json(common::base_cmd(&data_dir).arg("employee").arg("list"));
    assert_eq!(all, serde_json::json!([]));

    common::run_json(
        common::base_cmd(&data_dir)
            .arg("department")
            .arg("create")
            .arg("--name")
            .arg("Ops")
            .arg("--location")
            .arg("HQ"),
    );
    let all = common::run_json(
        common::base_cmd(&data_dir)
            .arg("--reset")
            .arg("department")
            .arg("list"),
    );
    assert_eq!(all, serde_json::json!([]));
}

#[test]
fn e2e_log_file_receives_output() {
    let data_dir = TempDir::new().expect("temp dir");
    let log_path = data_dir.path().join("logs").join("staffdb.log");
    common::run_json(
        common::base_cmd(&data_dir)
            .arg("--log-file")
            .arg(&log_path)
            .arg("department")
            .arg("list"),
    );
    let contents = std::fs::read_to_string(&log_path).expect("log file");
    assert!(contents.contains("Data dir"));
}
