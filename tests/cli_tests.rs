use assert_cmd::Command;

#[test]
fn check_cargo_test() {
    assert_eq!(2 + 2, 4);
}

#[test]
fn test_subcommand_options(){
    let mut cmd = Command::cargo_bin("placard").unwrap();

    let expected_stderr = concat!(
        "Plane-Locked Anchoring with Camera-Aided Registration for Displays tool\n",
        "\n",
        "Usage: placard <COMMAND>\n",
        "\n",
        "Commands:\n",
        "  run      Run placement stages from raycasting through anchor adjustment\n",
        "  example  Print an example config file for a placement stage\n",
        "  help     Print this message or the help of the given subcommand(s)\n",
        "\n",
        "Options:\n",
        "  -h, --help  Print help\n",
    );
    cmd.assert().failure().stderr(expected_stderr);
}

#[test]
fn example_lists_raycast_methods(){
    let mut cmd = Command::cargo_bin("placard").unwrap();

    let expected_stdout = concat!(
        "Available methods:\n",
        "    pinhole\n",
        "    orthographic\n",
    );
    cmd.arg("example")
        .arg("raycast")
        .assert()
        .success()
        .stdout(expected_stdout);
}

#[test]
fn example_prints_a_method_config(){
    let mut cmd = Command::cargo_bin("placard").unwrap();

    cmd.arg("example")
        .arg("adjust")
        .arg("script")
        .assert()
        .success();
}
