//! End-to-end behaviour through the public API.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec2;
use gridcast::{
    Config, Engine,
    engine::{HitFamily, Projector, Ray, Shade},
    sim::{Turn, Walk},
    world::TileGrid,
};

const TILE: f32 = 32.0;

fn cell() -> TileGrid {
    TileGrid::new(&[[1, 1, 1], [1, 0, 1], [1, 1, 1]], TILE).unwrap()
}

fn corridor() -> TileGrid {
    TileGrid::new(&[[1, 1, 1, 1], [1, 0, 0, 1], [1, 1, 1, 1]], TILE).unwrap()
}

fn config(move_speed: f32) -> Config {
    Config {
        screen_width: 96,
        screen_height: 64,
        move_speed,
        turn_speed: FRAC_PI_2,
        ..Config::default()
    }
}

#[test]
fn single_open_cell_east_cast_hits_half_a_tile_away() {
    let grid = cell();
    let centre = Vec2::splat(1.5 * TILE);
    let ray = Ray::cast(&grid, centre, 0.0);
    let hit = ray.hit().expect("closed cell must be hit");
    assert_eq!(hit.family, HitFamily::Vertical);
    assert!((hit.distance - TILE / 2.0).abs() < 1e-4);
    assert!((hit.point - Vec2::new(2.0 * TILE, 1.5 * TILE)).length() < 1e-3);

    // every direction in the cell is bounded by the half-tile walls
    for k in 0..16 {
        let r = Ray::cast(&grid, centre, k as f32 * PI / 8.0);
        assert!(r.distance() >= TILE / 2.0 - 1e-3);
        assert!(r.distance() <= TILE / 2.0 * 2f32.sqrt() + 1e-3);
    }
}

#[test]
fn whole_step_into_wall_is_rejected() {
    let mut eng = Engine::new(config(60.0), corridor(), Vec2::new(40.0, 48.0), 0.0).unwrap();
    eng.set_move_intent(Walk::Forward);
    assert!(!eng.update(), "step into the wall must be reported as blocked");
    assert_eq!(eng.pose().pos(), Vec2::new(40.0, 48.0));
}

#[test]
fn walking_stops_short_of_the_wall() {
    let mut eng = Engine::new(config(20.0), corridor(), Vec2::new(40.0, 48.0), 0.0).unwrap();
    eng.set_move_intent(Walk::Forward);
    let moved = (0..10).filter(|_| eng.update()).count();
    assert_eq!(moved, 2);
    let x = eng.pose().pos().x;
    assert!((x - 80.0).abs() < 1e-3, "x = {x}");
    assert!(x < 3.0 * TILE);
}

#[test]
fn turning_then_casting_sees_consistent_pose() {
    let mut eng = Engine::new(config(0.0), cell(), Vec2::splat(1.5 * TILE), 0.0).unwrap();
    eng.set_turn_intent(Turn::Right);
    let frame = eng.tick();
    let facing = eng.pose().angle();
    assert!((facing - FRAC_PI_2).abs() < 1e-5);

    let n = frame.fan.len();
    assert_eq!(n, 96);
    let mid = &frame.fan.rays()[n / 2];
    assert_eq!(mid.family(), Some(HitFamily::Horizontal));
    assert_eq!(frame.strips[n / 2].shade, Shade::Far);

    // centre strip: no fisheye correction, so height = tile / d * plane
    let plane = Projector::plane_distance_for(96, eng.config().fov);
    let expected = TILE / mid.distance() * plane;
    assert!((frame.strips[n / 2].height - expected).abs() < 1e-2);
}

#[test]
fn fan_strips_are_symmetric_in_a_square_cell() {
    let eng = Engine::new(config(0.0), cell(), Vec2::splat(1.5 * TILE), 0.0).unwrap();
    let frame = eng.frame();
    let n = frame.strips.len();
    // ray i and ray n-i sit at equal offsets either side of the heading
    for i in 1..n / 2 {
        let a = frame.strips[n / 2 - i].height;
        let b = frame.strips[n / 2 + i].height;
        assert!((a - b).abs() < 1e-2, "i = {i}: {a} vs {b}");
    }
}
