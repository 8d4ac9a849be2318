#![allow(dead_code)]

use std::path::PathBuf;

use tinyframes::{DataFrame, Value};

pub const PRENOM: [&str; 6] = ["Léa", "Claude", "Régis", "Emma", "Ali", "Sarah"];
pub const NUM_ETUDIANT: [i64; 6] = [10, 11, 15, 9, 2, 6];
pub const ADMIS: [bool; 6] = [false, true, true, true, false, true];
pub const MOYENNE: [f64; 6] = [9.73, 13.28, 12.07, 14.90, 9.45, 15.15];

/// The student sample as a label → values mapping.
pub fn students_mapping() -> Vec<(&'static str, Vec<Value>)> {
    vec![
        ("prenom", PRENOM.iter().map(|&v| Value::from(v)).collect()),
        ("numEtudiant", NUM_ETUDIANT.iter().map(|&v| Value::from(v)).collect()),
        ("admis", ADMIS.iter().map(|&v| Value::from(v)).collect()),
        ("moyenne", MOYENNE.iter().map(|&v| Value::from(v)).collect()),
    ]
}

pub fn students() -> DataFrame {
    DataFrame::from_map(students_mapping()).expect("student sample is rectangular")
}

pub fn students_csv() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/students.csv")
}

/// Route `log` output through the test harness; repeated calls are fine.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
