//! Output artifacts - fixed file names for every exported chart

use std::path::{Path, PathBuf};

use chainviz_core::Player;
use serde::Serialize;

use crate::error::{RenderError, Result};

/// Image format of every artifact
pub const EXTENSION: &str = "png";

/// One exported chart
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Artifact {
    RedGrid,
    BlueGrid,
    WinRate,
    Runtime,
}

impl Artifact {
    /// All artifacts in export order
    pub const ALL: [Artifact; 4] = [
        Artifact::RedGrid,
        Artifact::BlueGrid,
        Artifact::WinRate,
        Artifact::Runtime,
    ];

    /// Outcome grid artifact for a perspective
    pub fn grid_for(player: Player) -> Self {
        match player {
            Player::Red => Artifact::RedGrid,
            Player::Blue => Artifact::BlueGrid,
        }
    }

    /// File name without extension
    pub fn stem(self) -> &'static str {
        match self {
            Artifact::RedGrid => "tournament_grid_red_wins",
            Artifact::BlueGrid => "tournament_grid_blue_wins",
            Artifact::WinRate => "win_rate_chart",
            Artifact::Runtime => "runtime_charts",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.{}", self.stem(), EXTENSION)
    }

    /// Location of the artifact inside `dir`
    pub fn path_in(self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }
}

/// Create the output directory (and parents) if missing
pub fn prepare_output_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|source| RenderError::Io {
        path: dir.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_file_names() {
        let names: Vec<String> = Artifact::ALL.iter().map(|a| a.file_name()).collect();
        assert_eq!(
            names,
            vec![
                "tournament_grid_red_wins.png",
                "tournament_grid_blue_wins.png",
                "win_rate_chart.png",
                "runtime_charts.png",
            ]
        );
    }

    #[test]
    fn test_grid_for_perspective() {
        assert_eq!(Artifact::grid_for(Player::Red), Artifact::RedGrid);
        assert_eq!(Artifact::grid_for(Player::Blue), Artifact::BlueGrid);
    }

    #[test]
    fn test_path_in() {
        let path = Artifact::WinRate.path_in(Path::new("out"));
        assert_eq!(path, Path::new("out").join("win_rate_chart.png"));
    }

    #[test]
    fn test_prepare_output_dir_rejects_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("not-a-dir");
        std::fs::write(&file, b"x").unwrap();

        let err = prepare_output_dir(&file.join("charts")).unwrap_err();
        assert!(matches!(err, RenderError::Io { .. }));

        let nested = dir.path().join("nested").join("charts");
        prepare_output_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
