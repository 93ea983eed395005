use crate::api::{ClientApi, ClientbookPaths};
use crate::store::fs::FileStore;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // Held so the directory outlives the test
    pub _temp_dir: TempDir,
    pub root: PathBuf,
    pub data_file: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        let data_file = root.join("data").join("clients.json");
        Self {
            _temp_dir: temp_dir,
            root,
            data_file,
        }
    }

    pub fn paths(&self) -> ClientbookPaths {
        ClientbookPaths {
            config_dir: self.root.clone(),
            data_file: self.data_file.clone(),
        }
    }

    pub fn store(&self) -> FileStore {
        FileStore::new(self.data_file.clone())
    }

    pub fn api(&self) -> ClientApi<FileStore> {
        ClientApi::open(self.store(), self.paths()).expect("failed to open api")
    }
}
