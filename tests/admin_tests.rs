use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{clock_as, full_day, init_with_team, jornada, setup_test_db, temp_out};

#[test]
fn test_list_day_shows_worked_hours() {
    let db_path = setup_test_db("admin_list_day");
    init_with_team(&db_path);
    full_day(&db_path, "u-ana", "2025-09-01");

    jornada()
        .args(["--db", &db_path, "list", "--range", "day", "--date", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("1 de septiembre de 2025"))
        .stdout(contains("Ana Pérez"))
        .stdout(contains("8h 00m"))
        .stdout(contains("Finalizada"));
}

#[test]
fn test_list_week_is_newest_first_and_filters_colaborador() {
    let db_path = setup_test_db("admin_list_week");
    init_with_team(&db_path);
    full_day(&db_path, "u-ana", "2025-09-01");
    full_day(&db_path, "u-luis", "2025-09-01");
    full_day(&db_path, "u-ana", "2025-09-03");
    // next week, out of range
    full_day(&db_path, "u-ana", "2025-09-08");

    let out = jornada()
        .args(["--db", &db_path, "list", "--range", "week", "--date", "2025-09-03"])
        .assert()
        .success()
        .stdout(contains("Semana del 1 de sep al 7 de sep, 2025"))
        .stdout(contains("8 de septiembre").not())
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&out);

    let third = text.find("3 de septiembre").unwrap();
    let first_ana = text.find("1 de septiembre").unwrap();
    assert!(third < first_ana);
    assert!(text.find("Ana Pérez").unwrap() < text.rfind("Luis Gómez").unwrap());

    jornada()
        .args([
            "--db", &db_path, "list", "--range", "month", "--date", "2025-09-15", "--colaborador", "2",
        ])
        .assert()
        .success()
        .stdout(contains("Luis Gómez"))
        .stdout(contains("Ana Pérez").not());
}

#[test]
fn test_list_empty_range() {
    let db_path = setup_test_db("admin_list_empty");
    init_with_team(&db_path);

    jornada()
        .args(["--db", &db_path, "list", "--date", "2025-01-01"])
        .assert()
        .success()
        .stdout(contains("No se encontraron registros para los filtros seleccionados."));
}

#[test]
fn test_edit_sets_and_clears_fields() {
    let db_path = setup_test_db("admin_edit");
    init_with_team(&db_path);
    clock_as(&db_path, "u-ana", "in", "2025-09-01 09:40").success();
    clock_as(&db_path, "u-ana", "lunch", "2025-09-01 13:00").success();

    jornada()
        .args(["--db", &db_path, "edit", "1", "--in", "09:00", "--lunch-start", "-", "--out", "17:00"])
        .assert()
        .success()
        .stdout(contains("Registro actualizado correctamente."))
        .stdout(contains("09:00"))
        .stdout(contains("17:00"))
        .stdout(contains("8h 00m"));

    jornada()
        .args(["--db", &db_path, "edit", "99", "--in", "09:00"])
        .assert()
        .failure()
        .stderr(contains("Jornada record not found: 99"));

    jornada()
        .args(["--db", &db_path, "edit", "1", "--in", "9h"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));
}

#[test]
fn test_history_pages() {
    let db_path = setup_test_db("admin_history");
    init_with_team(&db_path);
    for day in ["2025-09-01", "2025-09-02", "2025-09-03"] {
        full_day(&db_path, "u-ana", day);
    }

    jornada()
        .args(["--db", &db_path, "--user", "u-ana", "history", "--page-size", "2"])
        .assert()
        .success()
        .stdout(contains("3 de septiembre de 2025"))
        .stdout(contains("2 de septiembre de 2025"))
        .stdout(contains("1 de septiembre de 2025").not())
        .stdout(contains("Total: 16h 00m"));

    jornada()
        .args(["--db", &db_path, "history", "--for", "1", "--page", "2", "--page-size", "2"])
        .assert()
        .success()
        .stdout(contains("1 de septiembre de 2025"));
}

#[test]
fn test_export_csv_and_json() {
    let db_path = setup_test_db("admin_export");
    init_with_team(&db_path);
    full_day(&db_path, "u-ana", "2025-09-01");

    let csv_out = temp_out("admin_export", "csv");
    jornada()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &csv_out, "--range", "month", "--date",
            "2025-09-01",
        ])
        .assert()
        .success();
    let csv = fs::read_to_string(&csv_out).unwrap();
    assert!(csv.starts_with("id,colaborador_id,colaborador,date,"));
    assert!(csv.contains("Ana Pérez,2025-09-01,09:30,13:00,14:00,18:30,480,8h 00m,finished"));

    let json_out = temp_out("admin_export", "json");
    jornada()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &json_out, "--date", "2025-09-01",
        ])
        .assert()
        .success();
    let rows: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json_out).unwrap()).unwrap();
    assert_eq!(rows[0]["status"], "finished");
    assert_eq!(rows[0]["worked_minutes"], 480);

    // existing file, no --force, no confirmation on stdin
    jornada()
        .args(["--db", &db_path, "export", "--file", &csv_out, "--date", "2025-09-01"])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("admin_export_relative");
    init_with_team(&db_path);

    jornada()
        .args(["--db", &db_path, "export", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_log_and_db_info() {
    let db_path = setup_test_db("admin_log_info");
    init_with_team(&db_path);
    clock_as(&db_path, "u-ana", "in", "2025-09-01 09:30").success();

    jornada()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("colaborador_add"))
        .stdout(contains("clock_in"));

    jornada()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Colaboradores:"))
        .stdout(contains("Integrity check passed."));

    jornada()
        .args(["--db", &db_path, "colaborador", "list"])
        .assert()
        .success()
        .stdout(contains("u-ana"))
        .stdout(contains("Luis Gómez"));
}
