#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().join("repo");
        fs::create_dir_all(&root).expect("create repo root");
        Self { _tmp: tmp, root }
    }

    pub fn write(&self, rel: &str, body: &str) -> PathBuf {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(&path, body).expect("write fixture");
        path
    }

    pub fn mkdir(&self, rel: &str) -> PathBuf {
        let path = self.root.join(rel);
        fs::create_dir_all(&path).expect("create dir");
        path
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("plsql-check");
        cmd.env_remove("PLSQL_CHECK_LOG").arg("--root").arg(&self.root);
        cmd
    }

    /// Runs with `--json` and parses stdout whatever the exit code.
    pub fn run_json(&self, args: &[&str]) -> (Value, i32) {
        let out = self.cmd().arg("--json").args(args).output().expect("run binary");
        let code = out.status.code().expect("exit code");
        let value = serde_json::from_slice(&out.stdout).expect("valid json output");
        (value, code)
    }
}

pub fn make_fixture_repo(env: &TestEnv) {
    env.write(
        "src/tables/customers.sql",
        "-- customers\nCREATE TABLE customers (\n  id NUMBER PRIMARY KEY,\n  name VARCHAR2(100)\n);\n",
    );
    env.write(
        "src/packages/billing.sql",
        "CREATE OR REPLACE PACKAGE BODY billing AS\n  PROCEDURE charge(p_id NUMBER) IS\n  BEGIN\n    IF p_id IS NULL THEN\n      RETURN;\n    END IF;\n  END charge;\nEND billing;\n/\n",
    );
    env.write("data/seed.sql", "INSERT INTO customers VALUES (1, 'a');\n");
}

pub fn rel(root: &Path, value: &Value) -> String {
    let p = PathBuf::from(value.as_str().expect("path string"));
    p.strip_prefix(root)
        .expect("path under root")
        .to_string_lossy()
        .replace('\\', "/")
}
