//! End-to-end checks of the math module through its public API

use approx::{assert_abs_diff_eq, assert_relative_eq};
use holistic_math::prelude::*;

#[test]
fn look_at_then_drive_reaches_fuel_depot() {
    let tank = Vec3::new(-4.0, -3.0, 0.0);
    let depot = Vec3::new(8.0, 6.0, 0.0);

    let mut drive = Drive::new(DriveConfig::default(), tank, Vec3::y(), depot).unwrap();

    // Facing matches the unit direction to the depot.
    assert_relative_eq!(drive.up(), drive.direction(), epsilon = 1e-4);
    assert_relative_eq!(drive.direction(), Vec3::new(0.8, 0.6, 0.0), epsilon = 1e-5);

    let steps = drive.run_until_arrived(1.0 / 60.0, 10_000);
    assert!(drive.has_arrived());
    // 15 units at 5 per second, 60 frames per second.
    assert!((178..=181).contains(&steps), "took {} steps", steps);
}

#[test]
fn manual_steering_matches_look_at() {
    let up = Coords::new_3d(0.0, 1.0, 0.0);
    let position = Coords::new_3d(1.0, 1.0, 0.0);
    let target = Coords::new_3d(-2.0, 5.0, 0.0);

    let direction = holistic::get_normal(target - position).unwrap();
    let turn = holistic::angle(up, direction).unwrap();
    let clockwise = holistic::cross(up, direction).z < 0.0;
    let manual = holistic::rotate(up, turn, clockwise);

    let facing = holistic::look_at_2d(up, position, target).unwrap();
    assert_relative_eq!(manual, facing, epsilon = 1e-5);
    assert_relative_eq!(facing, direction, epsilon = 1e-5);
}

#[test]
fn worked_values() {
    let x = Coords::new_3d(1.0, 0.0, 0.0);
    let y = Coords::new_3d(0.0, 1.0, 0.0);

    assert_eq!(holistic::distance(Coords::zero(), Coords::new_3d(3.0, 4.0, 0.0)), 5.0);
    assert_eq!(holistic::dot(x, y), 0.0);
    assert_relative_eq!(holistic::angle(x, y).unwrap(), constants::HALF_PI, epsilon = 1e-6);
    assert_eq!(holistic::cross(x, y), Coords::new_3d(0.0, 0.0, 1.0));
    assert_abs_diff_eq!(holistic::rotate(x, constants::HALF_PI, false), y, epsilon = 1e-6);
    assert_abs_diff_eq!(holistic::rotate(x, constants::HALF_PI, true), -y, epsilon = 1e-6);
}

#[test]
fn degenerate_inputs_are_errors_not_nan() {
    assert!(matches!(
        holistic::get_normal(Coords::zero()),
        Err(MathError::DegenerateVector { .. })
    ));
    assert!(holistic::angle(Coords::zero(), Coords::new(1.0, 1.0)).is_err());

    let up = Coords::new_3d(0.0, 1.0, 0.0);
    let here = Coords::new_3d(2.0, 2.0, 0.0);
    assert!(holistic::look_at_2d(up, here, here).is_err());
}

#[test]
fn finite_vectors_of_any_scale_normalize() {
    for v in [Coords::new_3d(1e-8, 0.0, 0.0), Coords::new_3d(1e20, 0.0, 0.0)] {
        let n = holistic::get_normal(v).unwrap();
        assert_relative_eq!(n, Coords::new_3d(1.0, 0.0, 0.0), epsilon = 1e-6);
        assert!(holistic::angle(v, Coords::new_3d(0.0, 1.0, 0.0)).is_ok());
    }

    let tank = Vec3::zeros();
    let far_depot = Vec3::new(1e20, 0.0, 0.0);
    assert!(Drive::new(DriveConfig::default(), tank, Vec3::y(), far_depot).is_ok());
}

#[test]
fn scenes_render_into_one_draw_list() {
    let mut list = DrawList::new();
    let grid = draw_grid(&mut list, &GridConfig::default()).unwrap();
    let leo = draw_constellation(&mut list, &ConstellationConfig::default()).unwrap();

    assert_eq!(list.shape_count(), grid + leo);
    assert!(list
        .commands()
        .iter()
        .all(|c| { let (a, b) = c.segment(); a.z == -1.0 && b.z == -1.0 }));
}

#[test]
fn configs_survive_toml_and_ron() {
    let dir = std::env::temp_dir();
    let id = std::process::id();

    let leo = ConstellationConfig::leo();
    let ron_path = dir.join(format!("holistic_leo_{}.ron", id));
    leo.save_to_file(&ron_path).unwrap();
    let loaded = ConstellationConfig::load_from_file(&ron_path).unwrap();
    std::fs::remove_file(&ron_path).ok();
    assert_eq!(loaded, leo);

    let drive = DriveConfig { speed: 2.0, stopping_distance: 0.5 };
    let toml_path = dir.join(format!("holistic_drive_{}.toml", id));
    drive.save_to_file(&toml_path).unwrap();
    let loaded = DriveConfig::load_from_file(&toml_path).unwrap();
    std::fs::remove_file(&toml_path).ok();
    assert_eq!(loaded, drive);
}

#[test]
fn two_component_points_default_depth_in_toml() {
    let dir = std::env::temp_dir();
    let path = dir.join(format!("holistic_stars_{}.toml", std::process::id()));
    std::fs::write(
        &path,
        "points = [{ x = 1.0, y = 2.0 }, { x = 3.0, y = 4.0, z = 0.0 }]\nedges = [[0, 1]]\n",
    )
    .unwrap();
    let config = ConstellationConfig::load_from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.points, vec![Coords::new(1.0, 2.0), Coords::new_3d(3.0, 4.0, 0.0)]);
    assert_eq!(config.point_width, 2.0);
}
