use assert_cmd::Command;

#[test]
fn raycast_stage_writes_a_hit_file() {
    let mut cmd = Command::cargo_bin("placard").unwrap();

    cmd.arg("run")
        .arg("raycast")
        .arg("--scene")
        .arg("tests/data/scene.yaml")
        .arg("--raycast")
        .arg("tests/data/raycast.yaml")
        .assert()
        .success();

    let hit_json = std::fs::read_to_string("tests/data/out_hit.json").unwrap();
    let hit: serde_json::Value = serde_json::from_str(&hit_json).unwrap();
    assert_eq!(hit["plane_id"], "floor");
    // The pick ray declines 30 degrees from 1.5 up, so it lands
    // 1.5 / tan(30) = 2.598 out along z
    let z = hit["point"]["z"].as_f64().unwrap();
    assert!((z - 2.598).abs() < 1e-3);
    assert!(hit["point"]["y"].as_f64().unwrap().abs() < 1e-3);
}

#[test]
fn full_pipeline_places_and_adjusts() {
    let mut cmd = Command::cargo_bin("placard").unwrap();

    cmd.arg("run")
        .arg("raycast")
        .arg("adjust")
        .arg("--scene")
        .arg("tests/data/scene.yaml")
        .arg("--raycast")
        .arg("tests/data/raycast.yaml")
        .arg("--register")
        .arg("tests/data/register.yaml")
        .arg("--adjust")
        .arg("tests/data/adjust.yaml")
        .assert()
        .success();

    let placed_json = std::fs::read_to_string("tests/data/out_adjusted.json").unwrap();
    let object: serde_json::Value = serde_json::from_str(&placed_json).unwrap();

    assert_eq!(object["name"], "lamp");
    assert_eq!(object["anchor"]["plane_id"], "floor");

    // The script doubles the scale and the anchor point stays put
    let scale_x = object["transform"]["scale"]["x"].as_f64().unwrap();
    assert!((scale_x - 2.0).abs() < 1e-4);
    let anchor_z = object["anchor"]["point"]["z"].as_f64().unwrap();
    assert!((anchor_z - 2.598).abs() < 1e-3);

    // Scaling around the anchor pushes the object pivot up off the floor
    let position_y = object["transform"]["position"]["y"].as_f64().unwrap();
    assert!((position_y - 1.0).abs() < 1e-3);
}
