// snapshot.rs - Save/load of grid state and pause flag

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PersistError;
use crate::grid::Grid;

/// Default file name for saved state, relative to the working directory.
pub const DEFAULT_STATE_PATH: &str = "game_state.json";

/// Everything needed to restore a session: the cells and whether it was paused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub game_state: Grid,
    pub paused: bool,
}

/// Write `snapshot` to `path`, replacing any existing file.
pub fn save(path: &Path, snapshot: &Snapshot) -> Result<(), PersistError> {
    let bytes = serde_json::to_vec(snapshot).map_err(PersistError::Serialize)?;
    fs::write(path, bytes).map_err(|source| PersistError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a snapshot back from `path`.
pub fn load(path: &Path) -> Result<Snapshot, PersistError> {
    let bytes = fs::read(path).map_err(|source| PersistError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| PersistError::Deserialize {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let snapshot = Snapshot {
            game_state: Grid::from_live_cells(4, 3, &[(0, 0), (3, 2), (1, 1)]),
            paused: true,
        };

        save(&path, &snapshot).unwrap();
        assert_eq!(load(&path).unwrap(), snapshot);
    }

    #[test]
    fn save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let first = Snapshot { game_state: Grid::new(2, 2), paused: false };
        let second = Snapshot {
            game_state: Grid::from_live_cells(2, 2, &[(1, 1)]),
            paused: true,
        };

        save(&path, &first).unwrap();
        save(&path, &second).unwrap();
        assert_eq!(load(&path).unwrap(), second);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, PersistError::Io { .. }), "{err}");
    }

    #[test]
    fn unwritable_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("state.json");
        let snapshot = Snapshot { game_state: Grid::new(1, 1), paused: false };
        let err = save(&path, &snapshot).unwrap_err();
        assert!(matches!(err, PersistError::Io { .. }), "{err}");
    }

    #[test]
    fn corrupt_content_is_deserialize_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let cases: [&[u8]; 4] = [
            b"\x80\x04\x95not json",
            br#"{"paused": true}"#,
            br#"{"game_state": [[0, 1], [1]], "paused": false}"#,
            br#"{"game_state": [[0, 3]], "paused": false}"#,
        ];
        for junk in cases {
            fs::write(&path, junk).unwrap();
            let err = load(&path).unwrap_err();
            assert!(matches!(err, PersistError::Deserialize { .. }), "{err}");
        }
    }

    #[test]
    fn file_layout_is_readable_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let snapshot = Snapshot {
            game_state: Grid::from_live_cells(2, 2, &[(1, 0)]),
            paused: false,
        };
        save(&path, &snapshot).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, r#"{"game_state":[[0,1],[0,0]],"paused":false}"#);
    }
}
