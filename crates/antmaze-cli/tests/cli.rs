use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn demo(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../demos")
        .join(name)
}

fn ant_maze() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ant-maze"));
    cmd.env("RUST_LOG", "warn");
    cmd
}

#[test]
fn demo_route_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("route.txt");

    let status = ant_maze()
        .arg("--maze")
        .arg(demo("maze.txt"))
        .arg("--coords")
        .arg(demo("coords.txt"))
        .arg("--venues")
        .arg(demo("venues.txt"))
        .arg("--visits")
        .arg(demo("visits.txt"))
        .arg("--settings")
        .arg(demo("settings.json"))
        .args(["--iterations", "60", "--refresh-ms", "10", "--out"])
        .arg(&out)
        .status()
        .unwrap();
    assert!(status.success());

    let text = fs::read_to_string(&out).unwrap();
    let lines: Vec<_> = text.lines().collect();
    let count: usize = lines[0].trim_end_matches(';').parse().unwrap();
    assert_eq!(lines.len(), count + 1);
    assert_eq!(lines[1], "0, 0;");
    assert_eq!(lines[count], "9, 6;");
    assert!(lines.contains(&"5, 4;"));
}

#[test]
fn unreachable_end_reports_no_route() {
    let dir = tempfile::tempdir().unwrap();
    let maze = dir.path().join("maze.txt");
    let coords = dir.path().join("coords.txt");
    fs::write(&maze, "4 1\n1 1 0 1\n").unwrap();
    fs::write(&coords, "0, 0; 3, 0;").unwrap();

    let output = ant_maze()
        .arg("--maze")
        .arg(&maze)
        .arg("--coords")
        .arg(&coords)
        .arg("--settings")
        .arg(demo("settings.json"))
        .args(["--iterations", "5", "--refresh-ms", "10"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn bad_maze_file_exits_with_input_error() {
    let dir = tempfile::tempdir().unwrap();
    let maze = dir.path().join("maze.txt");
    fs::write(&maze, "2 2\n1 1\n").unwrap();

    let status = ant_maze()
        .arg("--maze")
        .arg(&maze)
        .arg("--coords")
        .arg(demo("coords.txt"))
        .arg("--settings")
        .arg(demo("settings.json"))
        .status()
        .unwrap();
    assert_eq!(status.code(), Some(3));
}
