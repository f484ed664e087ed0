//! Runs the `create-tiles` binary the way a user would, from a fresh
//! working directory.

#[cfg(test)]
mod tests {
    use std::{fs, path::Path, process::Command};

    use pretty_assertions::assert_eq;

    const CREATE_TILES: &str = env!("CARGO_BIN_EXE_create-tiles");

    fn create_tiles_in(dir: &Path) -> std::io::Result<std::process::Output> {
        Command::new(CREATE_TILES)
            .current_dir(dir)
            .env("RUST_LOG", "off")
            .output()
    }

    #[test]
    fn writes_tiles_relative_to_the_working_directory() -> anyhow::Result<()> {
        let root = tempfile::tempdir()?;

        let output = create_tiles_in(root.path())?;

        assert!(output.status.success(), "exit status {:?}", output.status);
        let tiles = root.path().join("images").join("tiles");
        let mut names = fs::read_dir(&tiles)?
            .map(|entry| entry.map(|entry| entry.file_name().to_string_lossy().into_owned()))
            .collect::<Result<Vec<_>, _>>()?;
        names.sort();
        let mut expected = (0..12).map(|i| format!("tile-{i}.png")).collect::<Vec<_>>();
        expected.sort();
        assert_eq!(names, expected);

        let red = image::open(tiles.join("tile-2.png"))?.into_rgb8();
        assert_eq!(red.dimensions(), (250, 250));
        assert!(red.pixels().all(|pixel| pixel.0 == [208, 35, 35]));
        Ok(())
    }

    #[test]
    fn blocked_output_directory_exits_with_an_error() -> anyhow::Result<()> {
        let root = tempfile::tempdir()?;
        fs::write(root.path().join("images"), "not a directory")?;

        let output = create_tiles_in(root.path())?;

        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(
            stderr.contains("failed to create output directory images/tiles"),
            "stderr: {stderr}"
        );
        Ok(())
    }

    #[test]
    fn unexpected_argument_is_rejected() -> anyhow::Result<()> {
        let root = tempfile::tempdir()?;

        let output = Command::new(CREATE_TILES)
            .current_dir(root.path())
            .arg("--colours")
            .output()?;

        assert!(!output.status.success());
        assert!(!root.path().join("images").exists());
        Ok(())
    }
}
